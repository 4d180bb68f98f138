//! Pattern 1: Bounded and Unbounded Producers
//! Example: A Bounded Repeater, Built Two Ways
//!
//! Run with: cargo run --bin p1_bounded_repeater

use language_mechanics::repeat::{bounded, BoundedRepeater, Repeater};

fn main() {
    println!("=== Bounded Repeater: Explicit State Machine ===\n");

    let repeater = BoundedRepeater::new("Hello", 3);
    for item in repeater {
        println!("{}", item);
    }

    // Exhaustion is permanent: a drained repeater stays drained.
    let mut drained = BoundedRepeater::new("Hello", 1);
    assert_eq!(drained.next(), Some("Hello"));
    assert_eq!(drained.next(), None);
    assert_eq!(drained.next(), None);

    println!("\n=== The Adapter-Built Equivalent ===\n");

    // repeat(value).take(n) says the same thing in one line.
    for item in bounded("hi", 11) {
        print!("{} ", item);
    }
    println!();

    let explicit: Vec<_> = BoundedRepeater::new('x', 5).collect();
    let adapted: Vec<_> = bounded('x', 5).collect();
    assert_eq!(explicit, adapted);
    println!("Both constructions produce: {:?}", adapted);

    println!("\n=== The Zero Case ===\n");
    let nothing: Vec<&str> = bounded("never", 0).collect();
    assert!(nothing.is_empty());
    println!("limit 0 yields nothing: {:?}", nothing);

    println!("\n=== Unbounded Repeater (Handle With Care) ===\n");

    // WARNING: `for item in Repeater::new("Hi")` would loop forever.
    // The iterator never signals exhaustion, so a terminating adapter
    // such as take() is mandatory.
    let first_four: Vec<_> = Repeater::new("Hi").take(4).collect();
    println!("First four of an endless stream: {:?}", first_four);
    assert_eq!(first_four.len(), 4);

    println!("\n=== Key Points ===");
    println!("1. A hand-rolled Iterator makes the producer's state explicit");
    println!("2. repeat().take() expresses the same sequence with adapters");
    println!("3. A limit of 0 yields nothing at all");
    println!("4. An unbounded producer must be paired with take() or similar");
}
