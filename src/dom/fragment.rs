//! Document fragments
//!
//! A fragment stages sibling elements off-tree so they can be inserted into a
//! parent with a single mutation (see [`Element::append_fragment`]).

use std::cell::RefCell;

use super::element::Element;

/// Off-tree staging container
#[derive(Default)]
pub struct DocumentFragment {
    children: RefCell<Vec<Element>>,
}

impl DocumentFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an element, detaching it from any current parent.
    /// Staging the same element twice moves it to the end.
    pub fn append_child(&self, child: &Element) {
        child.remove();
        let mut children = self.children.borrow_mut();
        children.retain(|staged| !staged.ptr_eq(child));
        children.push(child.clone());
    }

    pub fn children(&self) -> Vec<Element> {
        self.children.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }

    pub(crate) fn take(&self) -> Vec<Element> {
        std::mem::take(&mut *self.children.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_batches_into_one_mutation() {
        let parent = Element::new("ul");
        let fragment = DocumentFragment::new();
        for _ in 0..3 {
            fragment.append_child(&Element::new("li"));
        }

        parent.append_fragment(&fragment).unwrap();

        assert_eq!(parent.children().len(), 3);
        assert_eq!(parent.mutation_count(), 1);
        assert!(fragment.is_empty(), "fragment is drained after insertion");
    }

    #[test]
    fn test_empty_fragment_does_not_mutate() {
        let parent = Element::new("div");
        parent.append_fragment(&DocumentFragment::new()).unwrap();
        assert_eq!(parent.mutation_count(), 0);
    }

    #[test]
    fn test_staging_detaches_from_previous_parent() {
        let old = Element::new("div");
        let child = Element::new("span");
        old.append_child(&child).unwrap();

        let fragment = DocumentFragment::new();
        fragment.append_child(&child);
        fragment.append_child(&child);

        assert!(old.children().is_empty());
        assert_eq!(fragment.len(), 1);
    }
}
