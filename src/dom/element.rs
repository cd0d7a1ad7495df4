//! Element nodes
//!
//! `Element` is a cheap, clonable handle. Clones refer to the same node and
//! compare equal with [`Element::ptr_eq`]. Parents own their children; a child
//! only keeps a weak link back to its parent.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;

use super::fragment::DocumentFragment;
use super::html;
use super::DomError;

/// Namespace an element was created in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Html,
    Svg,
}

/// A child of an element: either another element or a run of text
#[derive(Clone)]
pub enum DomChild {
    Element(Element),
    Text(String),
}

impl fmt::Debug for DomChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomChild::Element(el) => write!(f, "{:?}", el),
            DomChild::Text(text) => write!(f, "{:?}", text),
        }
    }
}

pub(crate) struct ElementData {
    tag: String,
    namespace: Namespace,
    attributes: RefCell<IndexMap<String, String>>,
    children: RefCell<Vec<DomChild>>,
    parent: RefCell<Weak<ElementData>>,
    mutations: Cell<usize>,
}

/// Handle to an element node
#[derive(Clone)]
pub struct Element(Rc<ElementData>);

impl Element {
    /// Create a detached HTML element
    pub fn new(tag: &str) -> Self {
        Self::with_namespace(&tag.to_ascii_lowercase(), Namespace::Html)
    }

    /// Create a detached element in the SVG namespace (tag kept verbatim)
    pub fn new_svg(tag: &str) -> Self {
        Self::with_namespace(tag, Namespace::Svg)
    }

    fn with_namespace(tag: &str, namespace: Namespace) -> Self {
        Element(Rc::new(ElementData {
            tag: tag.to_string(),
            namespace,
            attributes: RefCell::new(IndexMap::new()),
            children: RefCell::new(Vec::new()),
            parent: RefCell::new(Weak::new()),
            mutations: Cell::new(0),
        }))
    }

    /// Tag name as a browser reports it: upper-cased for HTML, verbatim for SVG
    pub fn tag_name(&self) -> String {
        match self.0.namespace {
            Namespace::Html => self.0.tag.to_ascii_uppercase(),
            Namespace::Svg => self.0.tag.clone(),
        }
    }

    /// Tag name as written in markup
    pub fn local_name(&self) -> &str {
        &self.0.tag
    }

    pub fn namespace(&self) -> Namespace {
        self.0.namespace
    }

    pub fn is_svg(&self) -> bool {
        self.0.namespace == Namespace::Svg
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.0.attributes.borrow().contains_key(name)
    }

    pub fn remove_attribute(&self, name: &str) {
        self.0.attributes.borrow_mut().shift_remove(name);
    }

    /// All attributes in insertion order
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.0
            .attributes
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn id(&self) -> Option<String> {
        self.get_attribute("id")
    }

    // ------------------------------------------------------------------
    // Classes
    // ------------------------------------------------------------------

    /// The raw `class` attribute, or an empty string
    pub fn class_name(&self) -> String {
        self.get_attribute("class").unwrap_or_default()
    }

    pub fn class_list(&self) -> Vec<String> {
        self.class_name()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_name().split_whitespace().any(|c| c == class)
    }

    /// Add a class token unless it is already present
    pub fn add_class(&self, class: &str) {
        if class.is_empty() || self.has_class(class) {
            return;
        }
        let mut classes = self.class_list();
        classes.push(class.to_string());
        self.set_attribute("class", &classes.join(" "));
    }

    pub fn remove_class(&self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let classes: Vec<String> = self
            .class_list()
            .into_iter()
            .filter(|c| c != class)
            .collect();
        self.set_attribute("class", &classes.join(" "));
    }

    // ------------------------------------------------------------------
    // Tree structure
    // ------------------------------------------------------------------

    pub fn parent(&self) -> Option<Element> {
        self.0.parent.borrow().upgrade().map(Element)
    }

    /// Element children in document order
    pub fn children(&self) -> Vec<Element> {
        self.0
            .children
            .borrow()
            .iter()
            .filter_map(|child| match child {
                DomChild::Element(el) => Some(el.clone()),
                DomChild::Text(_) => None,
            })
            .collect()
    }

    /// All children, text included
    pub fn child_nodes(&self) -> Vec<DomChild> {
        self.0.children.borrow().clone()
    }

    pub fn first_element_child(&self) -> Option<Element> {
        self.children().into_iter().next()
    }

    /// Number of child-list mutations applied to this element so far
    pub fn mutation_count(&self) -> usize {
        self.0.mutations.get()
    }

    /// True when `other` is this element or one of its descendants
    pub fn contains(&self, other: &Element) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node.ptr_eq(self) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Append a child, moving it out of its previous parent
    pub fn append_child(&self, child: &Element) -> Result<(), DomError> {
        self.check_hierarchy(child)?;
        child.remove();
        self.adopt(child);
        self.touch();
        Ok(())
    }

    pub fn append_text(&self, text: &str) {
        self.0
            .children
            .borrow_mut()
            .push(DomChild::Text(text.to_string()));
        self.touch();
    }

    /// Move every staged node of `fragment` into this element as one mutation.
    /// The fragment is left empty.
    pub fn append_fragment(&self, fragment: &DocumentFragment) -> Result<(), DomError> {
        let staged = fragment.children();
        for child in &staged {
            self.check_hierarchy(child)?;
        }
        let staged = fragment.take();
        if staged.is_empty() {
            return Ok(());
        }
        for child in &staged {
            child.remove();
            self.adopt(child);
        }
        self.touch();
        Ok(())
    }

    /// Detach from the parent. A no-op for detached elements.
    pub fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .0
            .children
            .borrow_mut()
            .retain(|child| !matches!(child, DomChild::Element(el) if el.ptr_eq(self)));
        parent.touch();
        *self.0.parent.borrow_mut() = Weak::new();
    }

    /// Attach without bookkeeping; callers check hierarchy and detach first
    pub(crate) fn adopt(&self, child: &Element) {
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0
            .children
            .borrow_mut()
            .push(DomChild::Element(child.clone()));
    }

    fn touch(&self) {
        self.0.mutations.set(self.0.mutations.get() + 1);
    }

    fn check_hierarchy(&self, child: &Element) -> Result<(), DomError> {
        if child.contains(self) {
            return Err(DomError::HierarchyRequest {
                parent: self.0.tag.clone(),
                child: child.0.tag.clone(),
            });
        }
        Ok(())
    }

    fn clear_children(&self) {
        let old = std::mem::take(&mut *self.0.children.borrow_mut());
        for child in old {
            if let DomChild::Element(el) = child {
                *el.0.parent.borrow_mut() = Weak::new();
            }
        }
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in self.0.children.borrow().iter() {
            match child {
                DomChild::Text(text) => out.push_str(text),
                DomChild::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Replace all children with a single text node
    pub fn set_text_content(&self, text: &str) {
        self.clear_children();
        if !text.is_empty() {
            self.0
                .children
                .borrow_mut()
                .push(DomChild::Text(text.to_string()));
        }
        self.touch();
    }

    /// Replace all children with the parsed fragment
    pub fn set_inner_html(&self, markup: &str) {
        let nodes = html::parse_fragment_in(markup, self.is_svg());
        self.clear_children();
        for node in nodes {
            match node {
                DomChild::Element(el) => self.adopt(&el),
                DomChild::Text(text) => self.0.children.borrow_mut().push(DomChild::Text(text)),
            }
        }
        self.touch();
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in self.0.children.borrow().iter() {
            html::write_child(child, &mut out);
        }
        out
    }

    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        html::write_element(self, &mut out);
        out
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All descendant elements, depth first, excluding `self`
    pub fn descendants(&self) -> Vec<Element> {
        let mut out = Vec::new();
        for child in self.children() {
            out.push(child.clone());
            out.extend(child.descendants());
        }
        out
    }

    pub fn find_by_class(&self, class: &str) -> Vec<Element> {
        self.descendants()
            .into_iter()
            .filter(|el| el.has_class(class))
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Element> {
        self.descendants()
            .into_iter()
            .find(|el| el.get_attribute("id").as_deref() == Some(id))
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.0.tag)?;
        if let Some(id) = self.id() {
            write!(f, " id={:?}", id)?;
        }
        let class = self.class_name();
        if !class.is_empty() {
            write!(f, " class={:?}", class)?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_name_casing() {
        assert_eq!(Element::new("div").tag_name(), "DIV");
        assert_eq!(Element::new("DIV").local_name(), "div");
        assert_eq!(Element::new_svg("linearGradient").tag_name(), "linearGradient");
    }

    #[test]
    fn test_append_moves_child() {
        let a = Element::new("div");
        let b = Element::new("div");
        let child = Element::new("span");

        a.append_child(&child).unwrap();
        b.append_child(&child).unwrap();

        assert!(a.children().is_empty(), "child should have left its first parent");
        assert_eq!(b.children().len(), 1);
        assert!(child.parent().unwrap().ptr_eq(&b));
    }

    #[test]
    fn test_append_rejects_ancestor() {
        let outer = Element::new("div");
        let inner = Element::new("div");
        outer.append_child(&inner).unwrap();

        let err = inner.append_child(&outer).unwrap_err();
        assert!(matches!(err, DomError::HierarchyRequest { .. }));
        assert!(outer.append_child(&outer).is_err());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let parent = Element::new("div");
        let child = Element::new("p");
        parent.append_child(&child).unwrap();

        child.remove();
        child.remove();

        assert!(child.parent().is_none());
        assert!(parent.children().is_empty());
    }

    #[test]
    fn test_class_list_operations() {
        let el = Element::new("div");
        el.add_class("a");
        el.add_class("b");
        el.add_class("a");
        assert_eq!(el.class_name(), "a b");

        el.remove_class("a");
        assert_eq!(el.class_list(), vec!["b".to_string()]);
        assert!(!el.has_class("a"));
    }

    #[test]
    fn test_text_content_is_recursive() {
        let div = Element::new("div");
        let span = Element::new("span");
        span.set_text_content("world");
        div.append_text("hello ");
        div.append_child(&span).unwrap();

        assert_eq!(div.text_content(), "hello world");

        div.set_text_content("replaced");
        assert_eq!(div.text_content(), "replaced");
        assert!(span.parent().is_none(), "replaced children are detached");
    }

    #[test]
    fn test_find_by_class() {
        let root = Element::new("div");
        let a = Element::new("span");
        a.add_class("hit");
        let b = Element::new("span");
        let c = Element::new("em");
        c.add_class("hit");
        b.append_child(&c).unwrap();
        root.append_child(&a).unwrap();
        root.append_child(&b).unwrap();

        let found = root.find_by_class("hit");
        assert_eq!(found.len(), 2);
        assert!(found[0].ptr_eq(&a));
        assert!(found[1].ptr_eq(&c));
    }
}
