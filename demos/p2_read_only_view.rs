//! Pattern 2: Containers and Views
//! Example: A Live Read-Only View over a Mutable Map
//!
//! Run with: cargo run --bin p2_read_only_view

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use language_mechanics::view::ReadOnlyView;

fn main() {
    println!("=== Creating the View ===\n");

    let writable = Rc::new(RefCell::new(HashMap::new()));
    writable.borrow_mut().insert("one".to_string(), 1);
    writable.borrow_mut().insert("two".to_string(), 2);

    let read_only = ReadOnlyView::new(Rc::clone(&writable));
    println!("view sees {} entries", read_only.len());
    assert_eq!(read_only.get(&"one".to_string()), Some(1));

    println!("\n=== The View Is Live ===\n");

    // Mutate through the writable handle, after the view was created.
    writable.borrow_mut().insert("three".to_string(), 3);

    assert_eq!(read_only.get(&"three".to_string()), Some(3));
    println!("after inserting 'three' via the writable handle:");
    println!("  view['three'] = {:?}", read_only.get(&"three".to_string()));
    println!("  view.len() = {}", read_only.len());

    println!("\n=== Writes Through the View Fail ===\n");

    match read_only.try_insert("four".to_string(), 4) {
        Ok(()) => unreachable!("the view never accepts writes"),
        Err(e) => println!("rejected: {}", e),
    }
    assert!(!read_only.contains(&"four".to_string()));

    println!("\n=== Key Points ===");
    println!("1. The view and the writable handle share one backing map");
    println!("2. Reads through the view always see the current contents");
    println!("3. Every write attempt through the view fails; the map is");
    println!("   only writable through the original handle");
}
