use serde::{Deserialize, Serialize};

use crate::Fish;

/// An ordered list of fish observations, in insertion order.
///
/// Grows only by appending. Sorting and bulk loading from tabular files were
/// never specified for the original list and are intentionally absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FishList {
    entries: Vec<Fish>,
}

impl FishList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an observation at the end of the list.
    pub fn push(&mut self, fish: Fish) {
        self.entries.push(fish);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fish> {
        self.entries.iter()
    }
}

impl IntoIterator for FishList {
    type Item = Fish;
    type IntoIter = std::vec::IntoIter<Fish>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FishList {
    type Item = &'a Fish;
    type IntoIter = std::slice::Iter<'a, Fish>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_new_list_is_empty() {
        let list = FishList::new();

        assert!(list.is_empty());
        assert_eq!(0, list.len());
        assert_eq!(None, list.iter().next());
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut list = FishList::new();
        list.push(Fish::new(3, 2, 150).unwrap());
        list.push(Fish::new(1, 0, 10).unwrap());
        list.push(Fish::new(4, 1, 300).unwrap());

        let frames: Vec<i64> = list.iter().map(|f| f.frame_counted()).collect();
        assert_eq!(vec![150, 10, 300], frames);
    }
}
