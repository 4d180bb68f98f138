//! Pattern 3: Records and Method Dispatch
//! Example: Record Types and Their Formatting
//!
//! Run with: cargo run --bin p3_records

use language_mechanics::records::{Car, ColorPoint, HexColor, Vehicle};

fn main() {
    println!("=== Named-Field Records ===\n");

    let bike = Vehicle::new("honda", 2012, "motorcycle");
    println!("{:?}", bike);
    println!("make: {}", bike.make);

    // Field equality and nothing more.
    assert_eq!(bike, Vehicle::new("honda", 2012, "motorcycle"));
    assert_ne!(bike, Vehicle::new("toyota", 2012, "motorcycle"));

    // bike.make = "toyota"  // would not compile: `bike` is not `mut`

    println!("\n=== Positional Records ===\n");

    let p = ColorPoint(12.0, 31);
    println!("{:?} -> .0 = {}, .1 = {}", p, p.0, p.1);

    println!("\n=== Serializing a Record ===\n");

    let json = serde_json::to_string(&bike).expect("vehicle serializes");
    println!("{}", json);
    assert_eq!(json, r#"{"make":"honda","year":2012,"kind":"motorcycle"}"#);

    println!("\n=== Extending a Record with a Trait ===\n");

    let red = Vehicle::new("red", 2020, "car");
    println!("hex color of {:?}: {}", red.make, red.hex_color());
    assert_eq!(red.hex_color(), "#ff0000");
    assert_eq!(bike.hex_color(), "#000000");

    println!("\n=== Display vs Debug ===\n");

    let a_car = Car::new("green", 90);
    println!("Display: {}", a_car);
    println!("Debug:   {:?}", a_car);
    assert_eq!(a_car.to_string(), "{'color':'green'}");
    assert_eq!(format!("{:?}", a_car), r#"Car("green", 90)"#);

    println!("\n=== Key Points ===");
    println!("1. Derived PartialEq compares records field by field");
    println!("2. Tuple structs trade names for positions");
    println!("3. serde derive turns a record into JSON with no glue code");
    println!("4. An extension trait adds methods without editing the type");
    println!("5. Display is for users, Debug is for developers");
}
