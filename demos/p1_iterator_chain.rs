//! Pattern 1: Bounded and Unbounded Producers
//! Example: Lazy Adapter Chains
//!
//! Run with: cargo run --bin p1_iterator_chain

use itertools::Itertools;

fn main() {
    println!("=== Chaining Lazy Stages ===\n");

    // Each stage is lazy; nothing runs until collect() drives the chain.
    let integers = 1..9;
    let squared = integers.map(|i| i * i);
    let negated: Vec<i32> = squared.map(|i| -i).collect();
    println!("negated squares of 1..9: {:?}", negated);
    assert_eq!(negated, vec![-1, -4, -9, -16, -25, -36, -49, -64]);

    println!("\n=== A Lazy Sequence Is Consumed Once ===\n");

    let mut greetings = std::iter::repeat("Hello").take(3);
    for item in greetings.by_ref() {
        println!("{}", item);
    }
    // The same iterator again: already exhausted, yields nothing.
    assert_eq!(greetings.next(), None);
    println!("(second pass over the same iterator produced nothing)");

    println!("\n=== Filtered Chains ===\n");

    let even_squares: Vec<i32> = (0..10).filter(|x| x % 2 == 0).map(|x| x * x).collect();
    println!("even squares below 10²: {:?}", even_squares);
    assert_eq!(even_squares, vec![0, 4, 16, 36, 64]);

    println!("\n=== Inline Chains as Expressions ===\n");

    // No intermediate collections: the whole pipeline is one expression.
    let line = (0..3).map(|_| "Bom dia").join(" / ");
    println!("{}", line);
    assert_eq!(line, "Bom dia / Bom dia / Bom dia");

    let sum_of_negated: i32 = (1..9).map(|i| i * i).map(|i| -i).sum();
    println!("sum of negated squares: {}", sum_of_negated);
    assert_eq!(sum_of_negated, -204);

    println!("\n=== Key Points ===");
    println!("1. Adapter chains are lazy end to end");
    println!("2. Driving an iterator consumes it; there is no rewind");
    println!("3. filter + map compose without intermediate allocations");
    println!("4. itertools::join folds a chain straight into a string");
}
