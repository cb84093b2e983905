//! Deferred IO Example
//!
//! Builds a small program out of IO steps, then plays the role of the
//! external executor: it walks the final environment in unit order and
//! "performs" each unit's buffers by printing them.
//!
//! Run with `cargo run --example io_effects --features tracing`; binds and
//! merges are logged at trace level.

use millrace::prelude::*;

fn greet(name: String) -> IO<String> {
    IO::write(1, format!("Hello, {}!\n", name)).fmap(move |_| name)
}

fn audit(name: String) -> IO<String> {
    IO::write(2, format!("greeted {}\n", name)).fmap(move |_| name)
}

fn farewell(name: String) -> IO<String> {
    IO::write(1, format!("Goodbye, {}.\n", name)).fmap(move |_| name)
}

fn execute(environment: &Environment) {
    for diff in environment {
        if !diff.in_buffer().is_empty() {
            println!("[unit {}] read  {:?}", diff.unit(), diff.in_buffer());
        }
        if !diff.out_buffer().is_empty() {
            println!("[unit {}] write {:?}", diff.unit(), diff.out_buffer());
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let read_name = IO::effect("Clio".to_string(), EffectDiff::input(0, "Clio\n"));
    let program = sequence(read_name, [greet, audit, farewell]);

    println!("value: {}", program.value());
    execute(program.environment());
}
