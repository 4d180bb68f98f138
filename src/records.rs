//! Record types: named fields, positional fields, and the two faces of
//! formatting.

use std::fmt;

use serde::Serialize;

/// A named-field record. Equality is plain field equality; nothing else is
/// promised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub make: String,
    pub year: u16,
    pub kind: String,
}

impl Vehicle {
    pub fn new(make: &str, year: u16, kind: &str) -> Self {
        Vehicle {
            make: make.to_string(),
            year,
            kind: kind.to_string(),
        }
    }
}

/// Positional record: fields are accessed by index, not name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPoint(pub f64, pub i64);

/// Adds behavior to [`Vehicle`] without touching its definition.
pub trait HexColor {
    fn hex_color(&self) -> &'static str;
}

impl HexColor for Vehicle {
    fn hex_color(&self) -> &'static str {
        if self.make == "red" {
            "#ff0000"
        } else {
            "#000000"
        }
    }
}

/// Demonstrates the user-facing vs developer-facing formatting split:
/// `Display` prints a compact summary, `Debug` prints a constructor-call
/// form that round-trips in the reader's head.
pub struct Car {
    pub color: String,
    pub mileage: u32,
}

impl Car {
    pub fn new(color: &str, mileage: u32) -> Self {
        Car { color: color.to_string(), mileage }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{'color':'{}'}}", self.color)
    }
}

impl fmt::Debug for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car({:?}, {})", self.color, self.mileage)
    }
}
