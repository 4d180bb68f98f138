//! # Language Mechanics
//!
//! A catalogue of worked examples for core language mechanics. Each module
//! illustrates one mechanic in isolation; the modules do not depend on each
//! other.
//!
//! ## Patterns Covered
//!
//! 1. **Bounded and Unbounded Producers**
//!    - Explicit iterator state machine ([`repeat::BoundedRepeater`])
//!    - Adapter-built equivalent ([`repeat::bounded`])
//!    - Unbounded producer with a documented hazard ([`repeat::Repeater`])
//!
//! 2. **Containers and Views**
//!    - Multiset counting ([`containers::Tally`])
//!    - Layered first-hit lookup ([`containers::LayeredMap`])
//!    - Live read-only mapping view ([`view::ReadOnlyView`])
//!
//! 3. **Records and Method Dispatch**
//!    - Named-field and tuple-struct records ([`records`])
//!    - Factory constructors, no-receiver helpers, and a type-level shared
//!      instance counter ([`dispatch`])
//!
//! 4. **Shallow and Deep Copies**
//!    - Handle-sharing clones vs recursive duplication ([`cloning`])
//!
//! 5. **Closures and Function Wrapping**
//!    - Tracing wrappers, composable transformers, closure factories, and
//!      callable objects ([`wrap`])
//!    - A custom failure kind surfaced through `Result` ([`errors`])
//!
//! 6. **Scoped Resources**
//!    - RAII file handle and closure-scoped equivalent ([`scoped`])
//!
//! ## Running Demos
//!
//! ```bash
//! # Pattern 1: Bounded and Unbounded Producers
//! cargo run --bin p1_bounded_repeater
//! cargo run --bin p1_iterator_chain
//!
//! # Pattern 2: Containers and Views
//! cargo run --bin p2_collections
//! cargo run --bin p2_read_only_view
//!
//! # Pattern 3: Records and Method Dispatch
//! cargo run --bin p3_records
//! cargo run --bin p3_method_dispatch
//!
//! # Pattern 4: Shallow and Deep Copies
//! cargo run --bin p4_copying
//!
//! # Pattern 5: Closures and Function Wrapping
//! cargo run --bin p5_closures
//!
//! # Pattern 6: Scoped Resources
//! cargo run --bin p6_scoped_file
//! ```

pub mod cloning;
pub mod containers;
pub mod dispatch;
pub mod errors;
pub mod records;
pub mod repeat;
pub mod scoped;
pub mod view;
pub mod wrap;
