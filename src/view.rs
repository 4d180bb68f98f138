//! A read-only view over a shared mutable map.
//!
//! The view holds the same `Rc<RefCell<HashMap>>` as the writable handle, so
//! reads always see the current contents. Every write attempt through the
//! view fails.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("the view is read-only; write through the backing map instead")]
pub struct ReadOnlyError;

/// Read-only window onto a live `HashMap`.
///
/// Keys inserted through the backing handle after the view is created are
/// visible through the view. The view itself exposes no mutation path;
/// [`ReadOnlyView::try_insert`] exists only to demonstrate the rejection.
#[derive(Debug, Clone)]
pub struct ReadOnlyView<K: Eq + Hash, V> {
    backing: Rc<RefCell<HashMap<K, V>>>,
}

impl<K: Eq + Hash, V: Clone> ReadOnlyView<K, V> {
    pub fn new(backing: Rc<RefCell<HashMap<K, V>>>) -> Self {
        ReadOnlyView { backing }
    }

    /// Current value for `key`, cloned out of the backing map.
    pub fn get(&self, key: &K) -> Option<V> {
        self.backing.borrow().get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.backing.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.backing.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.backing.borrow().is_empty()
    }

    /// Always fails. The backing map never changes through the view.
    pub fn try_insert(&self, _key: K, _value: V) -> Result<(), ReadOnlyError> {
        Err(ReadOnlyError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_map() -> Rc<RefCell<HashMap<String, i32>>> {
        let mut map = HashMap::new();
        map.insert("one".to_string(), 1);
        map.insert("two".to_string(), 2);
        Rc::new(RefCell::new(map))
    }

    #[test]
    fn reads_forward_to_the_backing_map() {
        let backing = shared_map();
        let view = ReadOnlyView::new(Rc::clone(&backing));

        assert_eq!(view.get(&"one".to_string()), Some(1));
        assert_eq!(view.get(&"missing".to_string()), None);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn view_stays_live_to_backing_mutations() {
        let backing = shared_map();
        let view = ReadOnlyView::new(Rc::clone(&backing));
        assert!(!view.contains(&"three".to_string()));

        // Mutate through the original handle after the view exists.
        backing.borrow_mut().insert("three".to_string(), 3);

        assert_eq!(view.get(&"three".to_string()), Some(3));
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn writes_through_the_view_are_rejected() {
        let backing = shared_map();
        let view = ReadOnlyView::new(Rc::clone(&backing));

        let err = view.try_insert("four".to_string(), 4).unwrap_err();
        assert_eq!(err, ReadOnlyError);

        // The rejected write left the backing map untouched.
        assert!(!backing.borrow().contains_key("four"));
        assert_eq!(view.len(), 2);
    }
}
