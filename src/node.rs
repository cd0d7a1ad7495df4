//! Created nodes and the factories that build them
//!
//! A schema entry produces either a bare DOM element or a component that owns
//! one. Both are carried by [`Node`]; factories declare which one they build
//! through the [`Factory`] variant instead of being inspected at runtime.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::create::{create_element, create_svg_element};
use crate::dom::{DomError, Element};
use crate::options::Options;

/// Errors raised by factories and component teardown
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComponentError {
    /// The factory could not build its node
    #[error("build failed: {0}")]
    Build(String),

    /// The component failed to tear itself down
    #[error("destroy failed: {0}")]
    Destroy(String),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// A component owns exactly one root element
pub trait Component {
    fn element(&self) -> &Element;

    /// Short name used in diagnostics
    fn kind(&self) -> &str {
        "component"
    }

    /// Tear the component down. The default detaches its element.
    fn destroy(&self) -> Result<(), ComponentError> {
        self.element().remove();
        Ok(())
    }
}

/// A node created from a schema entry
#[derive(Clone)]
pub enum Node {
    Element(Element),
    Component(Rc<dyn Component>),
}

impl Node {
    /// The DOM element this node contributes to the tree
    pub fn element(&self) -> &Element {
        match self {
            Node::Element(el) => el,
            Node::Component(component) => component.element(),
        }
    }

    pub fn as_component(&self) -> Option<&Rc<dyn Component>> {
        match self {
            Node::Component(component) => Some(component),
            Node::Element(_) => None,
        }
    }

    pub fn is_component(&self) -> bool {
        matches!(self, Node::Component(_))
    }

    pub fn is_svg(&self) -> bool {
        self.element().is_svg()
    }

    /// Identity comparison
    pub fn same(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Element(a), Node::Element(b)) => a.ptr_eq(b),
            (Node::Component(a), Node::Component(b)) => {
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
            }
            _ => false,
        }
    }

    /// Components run their own teardown; bare elements are detached
    pub fn destroy(&self) -> Result<(), ComponentError> {
        match self {
            Node::Element(el) => {
                el.remove();
                Ok(())
            }
            Node::Component(component) => component.destroy(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => write!(f, "Element({:?})", el),
            Node::Component(c) => write!(f, "Component({}, {:?})", c.kind(), c.element()),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

type ElementFn = dyn Fn(&Options) -> Result<Element, ComponentError>;
type ComponentFn = dyn Fn(&Options) -> Result<Rc<dyn Component>, ComponentError>;

/// A node builder, tagged with the kind of node it produces
#[derive(Clone)]
pub enum Factory {
    Element(Rc<ElementFn>),
    Component(Rc<ComponentFn>),
}

impl Factory {
    /// Generic element factory; the tag comes from the `tag` option
    pub fn element() -> Self {
        Factory::Element(Rc::new(create_element))
    }

    /// Element factory with a fixed HTML tag
    pub fn tag(tag: &str) -> Self {
        let tag = tag.to_string();
        Factory::Element(Rc::new(move |options: &Options| {
            create_element(&options.clone().with("tag", tag.as_str()))
        }))
    }

    /// Element factory creating in the SVG namespace
    pub fn svg(tag: &str) -> Self {
        let tag = tag.to_string();
        Factory::Element(Rc::new(move |options: &Options| {
            create_svg_element(&tag, options)
        }))
    }

    /// Wrap a function that builds bare elements
    pub fn from_fn<F>(build: F) -> Self
    where
        F: Fn(&Options) -> Result<Element, ComponentError> + 'static,
    {
        Factory::Element(Rc::new(build))
    }

    /// Wrap a function that builds a component
    pub fn component<C, F>(build: F) -> Self
    where
        C: Component + 'static,
        F: Fn(&Options) -> Result<C, ComponentError> + 'static,
    {
        Factory::Component(Rc::new(move |options: &Options| {
            let component: Rc<dyn Component> = Rc::new(build(options)?);
            Ok(component)
        }))
    }

    pub fn create(&self, options: &Options) -> Result<Node, ComponentError> {
        match self {
            Factory::Element(build) => build(options).map(Node::Element),
            Factory::Component(build) => build(options).map(Node::Component),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Factory::Element(_) => "element",
            Factory::Component(_) => "component",
        }
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Factory::{}", self.kind())
    }
}
