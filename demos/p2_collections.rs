//! Pattern 2: Containers and Views
//! Example: Sets, Counters, Maps, and Sequence Types
//!
//! Run with: cargo run --bin p2_collections

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use language_mechanics::containers::{LayeredMap, Tally};

fn main() {
    println!("=== Sets ===\n");
    sets();

    println!("\n=== Frozen Set as a Map Key ===\n");
    frozen_key();

    println!("\n=== Counting with a Tally ===\n");
    tally();

    println!("\n=== Ordered and Defaulted Maps ===\n");
    maps();

    println!("\n=== Layered Lookup ===\n");
    layered();

    println!("\n=== Tuples, Arrays, and Bytes ===\n");
    sequences();

    println!("\n=== Key Points ===");
    println!("1. HashSet deduplicates on construction; union is an iterator");
    println!("2. BTreeSet implements Hash, so a set can key a map");
    println!("3. The entry API gives defaultdict-style counting in one line");
    println!("4. BTreeMap iterates in key order; HashMap does not");
    println!("5. Layered maps resolve lookups front to back");
}

fn sets() {
    let vowels: HashSet<char> = ['a', 'e', 'i'].into_iter().collect();

    // Building from repeated input deduplicates.
    let mut letters: HashSet<char> = "leeggoo".chars().collect();
    assert_eq!(letters.len(), 4);

    letters.insert('y');
    letters.remove(&'e');
    assert!(!letters.contains(&'e'));
    println!("letters after insert/remove: {:?}", letters);

    let both: HashSet<char> = letters.union(&vowels).copied().collect();
    println!("union with vowels: {:?}", both);
    assert!(both.contains(&'a') && both.contains(&'y'));

    // Set comprehension equivalent: collect a filtered/mapped range.
    let squares: HashSet<i32> = (0..10).map(|x| x * x).collect();
    assert!(squares.contains(&81));
}

fn frozen_key() {
    // An immutable, ordered set hashes by contents, so it can be a key.
    let key: BTreeSet<char> = ['y', 'w', 'h'].into_iter().collect();
    let mut by_set: HashMap<BTreeSet<char>, &str> = HashMap::new();
    by_set.insert(key.clone(), "lb");

    assert_eq!(by_set.get(&key), Some(&"lb"));
    println!("{:?} -> {:?}", key, by_set[&key]);
}

fn tally() {
    let mut inventory: Tally<&str> = Tally::new();
    inventory.add("book");
    inventory.add("book");
    inventory.add("pen");

    assert_eq!(inventory.count(&"book"), 2);
    assert_eq!(inventory.count(&"ink"), 0);
    println!("book count: {}", inventory.count(&"book"));
    println!("most common: {:?}", inventory.most_common(1));
}

fn maps() {
    // BTreeMap keeps keys sorted; insertion order is irrelevant.
    let mut ordered = BTreeMap::new();
    ordered.insert("one", 1);
    ordered.insert("three", 3);
    ordered.insert("two", 2);
    ordered.insert("four", 4);
    let keys: Vec<_> = ordered.keys().copied().collect();
    println!("BTreeMap key order: {:?}", keys);
    assert_eq!(keys, vec!["four", "one", "three", "two"]);

    // Entry API: the default appears on first touch.
    let mut by_owner: HashMap<&str, Vec<&str>> = HashMap::new();
    by_owner.entry("cat").or_default().extend(["a", "b", "c"]);
    by_owner.entry("dog").or_default().push("x");
    assert_eq!(by_owner["cat"].len(), 3);
    // A key never touched simply isn't there; no silent default is stored.
    assert!(by_owner.get("cats").is_none());
    println!("grouped: {:?}", by_owner);
}

fn layered() {
    let mut defaults = HashMap::new();
    defaults.insert("three", 3);
    defaults.insert("four", 4);
    let mut overrides = HashMap::new();
    overrides.insert("one", 11);
    overrides.insert("two", 2);

    let chain = LayeredMap::new(vec![&overrides, &defaults]);
    println!("one -> {:?} (override layer wins)", chain.get(&"one"));
    println!("four -> {:?} (falls through to defaults)", chain.get(&"four"));
    assert_eq!(chain.get(&"one"), Some(&11));
    assert_eq!(chain.get(&"four"), Some(&4));
}

fn sequences() {
    // Tuples are fixed arity; "appending" means building a new tuple.
    let arr = ("one", "two", "three");
    let extended = (arr.0, arr.1, arr.2, 22, "y");
    println!("extended tuple: {:?}", extended);

    // A growable buffer of floats.
    let mut floats: Vec<f32> = vec![2.0, 3.0, 4.0];
    floats.push(4.0);
    floats[2] = 19.0;
    assert_eq!(floats, vec![2.0, 3.0, 19.0, 4.0]);

    // Immutable bytes vs a mutable byte buffer.
    let frozen: &[u8] = &[12, 15, 4, 24];
    let mut buffer: Vec<u8> = frozen.to_vec();
    buffer.push(22);
    buffer.remove(0);
    println!("frozen: {:?}, buffer: {:?}", frozen, buffer);
    assert_eq!(buffer, vec![15, 4, 24, 22]);
}
