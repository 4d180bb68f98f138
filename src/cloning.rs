//! Shallow vs deep copies of nested structures.
//!
//! The nested members are `Rc<RefCell<_>>` handles so the difference is
//! observable: `Clone` duplicates the handles (shallow, shared interior),
//! while `deep_clone` re-allocates everything (no sharing).

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// A rectangle whose corners are shared handles.
///
/// `#[derive(Clone)]` is the shallow copy: both rectangles end up holding
/// the same two corner cells.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub topleft: Rc<RefCell<Point>>,
    pub bottomright: Rc<RefCell<Point>>,
}

impl Rectangle {
    pub fn new(topleft: Point, bottomright: Point) -> Self {
        Rectangle {
            topleft: Rc::new(RefCell::new(topleft)),
            bottomright: Rc::new(RefCell::new(bottomright)),
        }
    }

    /// Recursive duplicate: fresh cells holding copies of the corner values.
    pub fn deep_clone(&self) -> Self {
        Rectangle {
            topleft: Rc::new(RefCell::new(*self.topleft.borrow())),
            bottomright: Rc::new(RefCell::new(*self.bottomright.borrow())),
        }
    }

    /// Whether `other` shares this rectangle's corner cells.
    pub fn shares_corners_with(&self, other: &Rectangle) -> bool {
        Rc::ptr_eq(&self.topleft, &other.topleft)
            && Rc::ptr_eq(&self.bottomright, &other.bottomright)
    }
}

/// Rows of integers behind shared handles, the nested-list case.
#[derive(Debug, Clone, Default)]
pub struct SharedGrid {
    rows: Vec<Rc<RefCell<Vec<i32>>>>,
}

impl SharedGrid {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<i32>>,
    {
        SharedGrid {
            rows: rows
                .into_iter()
                .map(|row| Rc::new(RefCell::new(row)))
                .collect(),
        }
    }

    /// New outer vector, same inner row cells.
    pub fn shallow(&self) -> Self {
        self.clone()
    }

    /// New outer vector and new inner row cells; nothing is shared.
    pub fn deep(&self) -> Self {
        SharedGrid {
            rows: self
                .rows
                .iter()
                .map(|row| Rc::new(RefCell::new(row.borrow().clone())))
                .collect(),
        }
    }

    pub fn push_into_row(&self, row: usize, value: i32) {
        self.rows[row].borrow_mut().push(value);
    }

    pub fn row(&self, row: usize) -> Vec<i32> {
        self.rows[row].borrow().clone()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
