//! Method dispatch variants: instance methods, type-level factory
//! constructors, no-receiver helpers, and a counter shared by every instance
//! of a type.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A dish described by its ingredient list.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub ingredients: Vec<String>,
}

impl Menu {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Menu {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    /// Factory constructor: builds a well-known configuration of the type.
    /// Called on the type, not an instance.
    pub fn jollof_rice() -> Self {
        Menu::new(["rice", "tomato", "onion", "maggi"])
    }

    /// Instance method: needs `&self` to read the instance's state.
    pub fn describe(&self) -> String {
        format!("Menu({:?})", self.ingredients)
    }

    /// No receiver at all: a plain function namespaced on the type.
    pub fn is_spicy(ingredients: &[&str]) -> bool {
        ingredients.contains(&"pepper")
    }
}

// One counter for the whole type. Instances read it but never own a copy.
static COUNTED_INSTANCES: AtomicUsize = AtomicUsize::new(0);

/// Every construction bumps a counter shared across all instances.
#[derive(Debug)]
pub struct Counted {
    _private: (),
}

impl Counted {
    pub fn new() -> Self {
        Self::register();
        Counted { _private: () }
    }

    /// Type-level operation: bumps the shared count.
    fn register() {
        COUNTED_INSTANCES.fetch_add(1, Ordering::Relaxed);
    }

    /// How many instances have ever been created. The same number is
    /// observable from the type and from any instance.
    pub fn instances() -> usize {
        COUNTED_INSTANCES.load(Ordering::Relaxed)
    }

    /// Instance-side accessor for the same shared count.
    pub fn instances_seen(&self) -> usize {
        Self::instances()
    }
}

impl Default for Counted {
    fn default() -> Self {
        Self::new()
    }
}

/// Contract with required methods and no default bodies. A type that
/// implements only part of it does not compile, so the contract is enforced
/// before anything runs.
pub trait Brewable {
    fn brew(&self) -> String;
    fn serving_temp_c(&self) -> u8;
}

/// A complete implementor of [`Brewable`].
pub struct GreenTea;

impl Brewable for GreenTea {
    fn brew(&self) -> String {
        "steeping green tea".to_string()
    }

    fn serving_temp_c(&self) -> u8 {
        70
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_constructor_builds_known_config() {
        let dish = Menu::jollof_rice();
        assert_eq!(dish.ingredients, vec!["rice", "tomato", "onion", "maggi"]);
        assert_eq!(dish, Menu::new(["rice", "tomato", "onion", "maggi"]));
    }

    #[test]
    fn instance_method_reads_instance_state() {
        let dish = Menu::new(["rice", "fish"]);
        assert_eq!(dish.describe(), r#"Menu(["rice", "fish"])"#);
    }

    #[test]
    fn no_receiver_helper_is_a_plain_function() {
        assert!(Menu::is_spicy(&["rice", "pepper"]));
        assert!(!Menu::is_spicy(&["rice", "tomato"]));
    }

    #[test]
    fn counter_is_shared_across_instances() {
        let before = Counted::instances();

        let a = Counted::new();
        let b = Counted::new();
        let c = Counted::new();

        // Measured as a delta: the counter is global to the type.
        assert_eq!(Counted::instances() - before, 3);

        // Every instance sees the same shared number; none carries its own.
        assert_eq!(a.instances_seen(), b.instances_seen());
        assert_eq!(b.instances_seen(), c.instances_seen());
        assert_eq!(a.instances_seen(), Counted::instances());
    }

    #[test]
    fn trait_contract_is_satisfiable() {
        let tea: &dyn Brewable = &GreenTea;
        assert_eq!(tea.brew(), "steeping green tea");
        assert_eq!(tea.serving_temp_c(), 70);
    }
}
