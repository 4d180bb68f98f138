//! Pattern 4: Shallow and Deep Copies
//! Example: Sharing vs Isolation in Nested Structures
//!
//! Run with: cargo run --bin p4_copying

use language_mechanics::cloning::{Point, Rectangle, SharedGrid};

fn main() {
    println!("=== Nested Rows: Shallow Copy Shares ===\n");

    let xs = SharedGrid::from_rows([vec![1, 2, 3], vec![4, 5, 6]]);
    let ys = xs.shallow();

    xs.push_into_row(0, 7);

    println!("original row 0: {:?}", xs.row(0));
    println!("shallow  row 0: {:?}  <- mutation visible", ys.row(0));
    assert_eq!(ys.row(0), vec![1, 2, 3, 7]);

    println!("\n=== Nested Rows: Deep Copy Isolates ===\n");

    let zs = xs.deep();
    xs.push_into_row(0, 8);

    println!("original row 0: {:?}", xs.row(0));
    println!("deep     row 0: {:?}  <- unchanged", zs.row(0));
    assert_eq!(xs.row(0), vec![1, 2, 3, 7, 8]);
    assert_eq!(zs.row(0), vec![1, 2, 3, 7]);

    println!("\n=== Rectangles ===\n");

    let rect = Rectangle::new(Point::new(0, 1), Point::new(5, 6));
    let srect = rect.clone(); // shallow: corner cells shared
    let drect = srect.deep_clone(); // deep: fresh corner cells

    rect.topleft.borrow_mut().x = 34;

    println!("rect.topleft:  {:?}", rect.topleft.borrow());
    println!("srect.topleft: {:?}  <- follows the original", srect.topleft.borrow());
    println!("drect.topleft: {:?}  <- kept its own value", drect.topleft.borrow());

    assert_eq!(srect.topleft.borrow().x, 34);
    assert_eq!(drect.topleft.borrow().x, 0);
    assert!(rect.shares_corners_with(&srect));
    assert!(!rect.shares_corners_with(&drect));

    println!("\n=== Plain Values Just Copy ===\n");

    // Point is Copy: assignment duplicates the value, nothing is shared.
    let a = Point::new(23, 54);
    let mut b = a;
    b.x = 0;
    println!("a = {:?}, b = {:?}", a, b);
    assert_eq!(a, Point::new(23, 54));

    println!("\n=== Key Points ===");
    println!("1. Cloning an Rc handle shares the cell it points at");
    println!("2. A deep clone re-allocates every nested cell");
    println!("3. The sharing is observable: mutate one side, read the other");
    println!("4. Copy types have no sharing to worry about");
}
