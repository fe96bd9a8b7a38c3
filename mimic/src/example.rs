//! Contains a generated example for the mocked types.

#![allow(unused)]

use crate::mock;

/// Simple list trait to generate a mocked version for.
pub trait List {
    /// Add a new item to the list.
    fn add(&self, item: &str) -> bool;

    /// Get the item at `index`.
    fn get(&self, index: usize) -> Option<String>;

    /// Remove all items from the list.
    fn clear(&self);
}

mock! {
    /// Type that implements the [`List`] trait.
    pub struct MockList;

    impl List for MockList {
        fn add(&self, item: &str) -> bool;
        fn get(&self, index: usize) -> Option<String>;
        fn clear(&self);
    }
}
