//! End-to-end pipelines built from the public API

use millrace::prelude::*;
use millrace::{assert_just, assert_log, assert_nothing};
use std::cell::Cell;

// Example domain types
#[derive(Clone, Debug, PartialEq)]
struct Person {
    name: String,
    pet: Option<String>,
}

impl Person {
    fn new(name: &str) -> Self {
        Person {
            name: name.to_string(),
            pet: None,
        }
    }
}

fn square(x: f64) -> Record<f64> {
    let x2 = x * x;
    Record::logged(x2, format!("{} was squared to obtain {}", x, x2))
}

fn multiply(x: f64, y: f64) -> Record<f64> {
    let xy = x * y;
    Record::logged(xy, format!("{} and {} were multiplied to obtain {}", x, y, xy))
}

fn pet_get(person: Person) -> Record<Person> {
    let entry = match &person.pet {
        Some(pet) => format!("Pet named {} is owned by person {}", pet, person.name),
        None => format!("No pet was found to be owned by person {}", person.name),
    };
    Record::logged(person, entry)
}

fn pet_give(person: Person, pet: &str) -> Record<Person> {
    match person.pet {
        None => {
            let entry = format!("Pet named {} was given to {}", pet, person.name);
            let person = Person {
                pet: Some(pet.to_string()),
                ..person
            };
            Record::logged(person, entry)
        }
        Some(_) => Record::new(person),
    }
}

#[test]
fn test_square_then_multiply() {
    let record = Record::unit(5.0)
        .bind(square)
        .bind(|x| multiply(x, 12.0));

    assert_eq!(record.value(), &300.0);
    assert_log!(
        record,
        [
            "5 was squared to obtain 25",
            "25 and 12 were multiplied to obtain 300",
        ]
    );
}

#[test]
fn test_in_place_record_pipeline() {
    let mut record = Record::new(5.0);
    record.bind_in_place(square);
    record.bind_in_place(square);
    record.bind_in_place(|x| multiply(x, 12.0));

    assert_eq!(record.value(), &7500.0);
    assert_eq!(record.log().len(), 3);
    assert_eq!(record.log()[1], "25 was squared to obtain 625");
}

#[test]
fn test_person_gets_a_pet() {
    let record = sequence(
        Record::new(Person::new("Clio")),
        steps![pet_get, |p: Person| pet_give(p, "Vincent"), pet_get],
    );

    assert_eq!(record.value().pet.as_deref(), Some("Vincent"));
    assert_log!(
        record,
        [
            "No pet was found to be owned by person Clio",
            "Pet named Vincent was given to Clio",
            "Pet named Vincent is owned by person Clio",
        ]
    );
}

#[test]
fn test_giving_a_second_pet_logs_nothing() {
    let record = Record::new(Person::new("Ana"))
        .bind(|p| pet_give(p, "Rex"))
        .bind(|p| pet_give(p, "Tom"));

    assert_eq!(record.value().pet.as_deref(), Some("Rex"));
    assert_eq!(record.log().len(), 1);
}

#[test]
fn test_io_two_writes_same_unit() {
    let program = IO::unit(())
        .bind(|_| IO::effect((), EffectDiff::output(1, "A")))
        .bind(|_| IO::effect((), EffectDiff::output(1, "B")));

    let env = program.environment();
    assert_eq!(env.len(), 1);
    assert_eq!(env.get(EffectUnit(1)).map(EffectDiff::out_buffer), Some("AB"));
}

#[test]
fn test_io_executor_view_is_sorted() {
    let program = sequence(
        IO::new(String::new()),
        steps![
            |_: String| IO::effect("Clio".to_string(), EffectDiff::input(0, "Clio\n")),
            |name: String| IO::write(1, format!("hello {}\n", name)).fmap(move |_| name),
            |name: String| IO::write(2, "done\n").fmap(move |_| name),
            |name: String| IO::write(1, "bye\n").fmap(move |_| name),
        ],
    );

    let replay: Vec<(u32, String, String)> = program
        .environment()
        .iter()
        .map(|d| (d.unit().0, d.out_buffer().to_string(), d.in_buffer().to_string()))
        .collect();

    assert_eq!(
        replay,
        vec![
            (0, String::new(), "Clio\n".to_string()),
            (1, "hello Clio\nbye\n".to_string(), String::new()),
            (2, "done\n".to_string(), String::new()),
        ]
    );
}

#[test]
fn test_sequence_equals_nested_binds_for_maybe() {
    let f1 = |x: i32| Maybe::just(x + 3);
    let f2 = |x: i32| if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::nothing() };
    let f3 = |x: i32| Maybe::just(x * 10);

    for start in -4..4 {
        let m = Maybe::just(start);
        let nested = m.bind(f1).bind(f2).bind(f3);
        assert_eq!(sequence(m, steps![f1, f2, f3]), nested);
    }
}

#[test]
fn test_failed_step_skips_remaining() {
    let calls = Cell::new(0);
    let counted = |x: i32| {
        calls.set(calls.get() + 1);
        Maybe::just(x)
    };

    let result = sequence(
        Maybe::just(1),
        steps![counted, |_: i32| Maybe::nothing(), counted, counted],
    );

    assert_nothing!(result);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_successful_maybe_pipeline() {
    let discriminant = |(a, b, c): (f64, f64, f64)| b * b - 4.0 * a * c;
    let real_root = |(a, b, c): (f64, f64, f64)| {
        let d = discriminant((a, b, c));
        if d < 0.0 || a == 0.0 {
            Maybe::nothing()
        } else {
            Maybe::just((-b + d.sqrt()) / (2.0 * a))
        }
    };

    assert_just!(Maybe::just((1.0, -3.0, 2.0)).bind(real_root), 2.0);
    assert_nothing!(Maybe::just((4.0, 2.0, 1.0)).bind(real_root));
}

#[test]
fn test_maybe_state_from_text() {
    let state: MaybeState = "nothing".parse().expect("valid state");
    assert_nothing!(Maybe::from_state(state, 5));

    let err = "perhaps".parse::<MaybeState>().unwrap_err();
    assert_eq!(err, ContractViolation::UnknownMaybeState("perhaps".to_string()));
}
