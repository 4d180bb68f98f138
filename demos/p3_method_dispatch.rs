//! Pattern 3: Records and Method Dispatch
//! Example: Instance Methods, Factory Constructors, and Shared Counters
//!
//! Run with: cargo run --bin p3_method_dispatch

use language_mechanics::dispatch::{Brewable, Counted, GreenTea, Menu};

fn main() {
    println!("=== Instance Method vs Factory Constructor ===\n");

    // Plain constructor takes the data; the factory encodes a known recipe.
    let custom = Menu::new(["rice", "fish"]);
    let house_special = Menu::jollof_rice();

    println!("{}", custom.describe());
    println!("{}", house_special.describe());
    assert_eq!(
        house_special.ingredients,
        vec!["rice", "tomato", "onion", "maggi"]
    );

    println!("\n=== A Helper with No Receiver ===\n");

    // Namespaced on the type, but touches neither an instance nor the type's
    // state.
    println!(
        "is [rice, pepper] spicy? {}",
        Menu::is_spicy(&["rice", "pepper"])
    );
    assert!(Menu::is_spicy(&["rice", "pepper"]));
    assert!(!Menu::is_spicy(&["rice", "tomato"]));

    println!("\n=== A Counter Shared by Every Instance ===\n");

    let before = Counted::instances();
    let first = Counted::new();
    let second = Counted::new();

    println!("instances created: {}", Counted::instances() - before);
    assert_eq!(Counted::instances() - before, 2);

    // Both instances observe the same number; neither has its own copy.
    assert_eq!(first.instances_seen(), second.instances_seen());
    assert_eq!(first.instances_seen(), Counted::instances());
    println!("both instances report: {}", first.instances_seen());

    println!("\n=== A Trait as a Compile-Time Contract ===\n");

    // GreenTea implements every required method; leaving one out would be
    // a compile error, not a runtime surprise.
    let tea: &dyn Brewable = &GreenTea;
    println!("{} (serve at {}°C)", tea.brew(), tea.serving_temp_c());
    assert_eq!(tea.serving_temp_c(), 70);

    println!("\n=== Key Points ===");
    println!("1. &self methods read instance state; associated fns do not");
    println!("2. Factory constructors name a configuration of the type");
    println!("3. A static counter is type state: one value, all instances");
    println!("4. Trait contracts are checked before the program runs");
}
