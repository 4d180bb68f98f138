//! Pattern 5: Closures and Function Wrapping
//! Example: Wrappers, Factories, Callable Objects, and a Custom Error
//!
//! Run with: cargo run --bin p5_closures

use language_mechanics::errors::validate_name;
use language_mechanics::wrap::{exploded, make_adder, speaker, traced, uppercased, Adder};

fn main() {
    println!("=== Tracing Wrapper ===\n");

    let say = traced("say", |name: &str| format!("{}: I love my wife", name));
    let line = say("husband");
    assert_eq!(line, "husband: I love my wife");

    println!("\n=== Composing Wrappers ===\n");

    // Innermost first: uppercase the greeting, then split it into chars.
    let greet = || "Hello".to_string();
    let decorated = exploded(uppercased(greet));
    println!("{:?}", decorated());
    assert_eq!(decorated(), vec!['H', 'E', 'L', 'L', 'O']);

    // The identity wrapper: passing a function through untouched.
    let null_decorated = greet;
    assert_eq!(null_decorated(), "Hello");

    println!("\n=== Closure Factories ===\n");

    let plus_3 = make_adder(3);
    let plus_5 = make_adder(5);
    println!("plus_3(4) = {}", plus_3(4));
    println!("plus_5(4) = {}", plus_5(4));
    assert_eq!(plus_3(4), 7);
    assert_eq!(plus_5(4), 9);

    println!("\n=== A Callable Object ===\n");

    let adder = Adder::new(3);
    println!("Adder{{n: 3}}.call(4) = {}", adder.call(4));
    assert_eq!(adder.call(4), 7);

    println!("\n=== Behavior Chosen at Runtime ===\n");

    let loud = speaker(0.7);
    let quiet = speaker(0.2);
    println!("{}", loud("hi"));
    println!("{}", quiet("Hey, THEre"));
    assert_eq!(loud("hi"), "HI!");
    assert_eq!(quiet("Hey, THEre"), "hey, there...");

    println!("\n=== Closures in Sorting ===\n");

    let mut tuples = [(1, 'g'), (2, 'f'), (3, 'a'), (4, 'b')];
    tuples.sort_by_key(|&(_, letter)| letter);
    println!("sorted by letter: {:?}", tuples);
    assert_eq!(tuples, [(3, 'a'), (4, 'b'), (2, 'f'), (1, 'g')]);

    let mut range: Vec<i32> = (-5..6).collect();
    range.sort_by_key(|x| x * x);
    println!("sorted by square: {:?}", range);
    assert_eq!(range[0], 0);

    println!("\n=== A Custom Failure Kind ===\n");

    match validate_name("love") {
        Ok(()) => unreachable!("four characters is too short"),
        Err(e) => println!("validation failed: {}", e),
    }
    assert!(validate_name("long enough name").is_ok());

    println!("\n=== Key Points ===");
    println!("1. A wrapper returns a new function around the original");
    println!("2. Wrappers compose; the innermost runs first");
    println!("3. Closures capture by value with move; each gets its own n");
    println!("4. A struct with a call method is a nameable closure");
    println!("5. Custom error types make failures precise and testable");
}
