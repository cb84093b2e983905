//! Record (Writer) Example
//!
//! Demonstrates logging alongside computation:
//! - Binding steps that each emit a log line
//! - Mutating a record in place
//! - Running a list of steps with `sequence`

use millrace::prelude::*;

#[derive(Clone, Debug)]
struct Person {
    name: String,
    pet: Option<String>,
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is a human", self.name)?;
        if let Some(pet) = &self.pet {
            write!(f, " who owns a pet called {}", pet)?;
        }
        Ok(())
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
    if person.pet.is_some() {
        return Record::new(person);
    }
    let entry = format!("Pet named {} was given to {}", pet, person.name);
    Record::logged(
        Person {
            pet: Some(pet.to_string()),
            ..person
        },
        entry,
    )
}

/// Example 1: bind step by step, printing the record after each one
fn example_numbers() {
    println!("\n=== Example 1: Numbers ===");

    let mut record = Record::new(5.0);
    println!("{}\n", record);

    record.bind_in_place(square);
    println!("{}\n", record);

    record.bind_in_place(square);
    println!("{}\n", record);

    record.bind_in_place(|x| multiply(x, 12.0));
    println!("{}\n", record);

    record.bind_in_place(|x| multiply(x, 0.01));
    println!("{}", record);
}

/// Example 2: the same idea over a domain type, using `sequence`
fn example_person() {
    println!("\n=== Example 2: Person and pet ===");

    let record = sequence(
        Record::new(Person {
            name: "Clio".to_string(),
            pet: None,
        }),
        steps![pet_get, |p: Person| pet_give(p, "Vincent"), pet_get],
    );
    println!("{}", record);
}

fn main() {
    println!("Record Pipeline Examples");
    println!("========================");

    example_numbers();
    example_person();

    println!("\n=== All examples completed successfully! ===");
}
