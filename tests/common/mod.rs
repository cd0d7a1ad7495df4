// Small components used to exercise the layout engine

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use mtrl_layout::{Component, ComponentError, Element, Factory, Options};

/// Records teardown calls across components
#[derive(Clone, Default)]
pub struct Tracker {
    destroyed: Rc<RefCell<Vec<String>>>,
    built: Rc<Cell<usize>>,
}

impl Tracker {
    pub fn destroyed(&self) -> Vec<String> {
        self.destroyed.borrow().clone()
    }

    pub fn built(&self) -> usize {
        self.built.get()
    }
}

pub struct Button {
    element: Element,
    label: String,
    tracker: Tracker,
    fail_on_destroy: bool,
}

impl Component for Button {
    fn element(&self) -> &Element {
        &self.element
    }

    fn kind(&self) -> &str {
        "button"
    }

    fn destroy(&self) -> Result<(), ComponentError> {
        self.tracker.destroyed.borrow_mut().push(self.label.clone());
        if self.fail_on_destroy {
            return Err(ComponentError::Destroy(format!("{} refused", self.label)));
        }
        self.element.remove();
        Ok(())
    }
}

/// Button component: `text` becomes the label, `fail` makes destroy fail
pub fn button(tracker: &Tracker) -> Factory {
    let tracker = tracker.clone();
    Factory::component(move |options: &Options| {
        tracker.built.set(tracker.built.get() + 1);
        let element = Element::new("button");
        element.add_class("mtrl-button");
        let label = options.text().unwrap_or("button").to_string();
        element.set_text_content(&label);
        Ok(Button {
            element,
            label,
            tracker: tracker.clone(),
            fail_on_destroy: options.get_bool("fail"),
        })
    })
}

/// Factory that always fails
pub fn broken() -> Factory {
    Factory::from_fn(|_: &Options| Err(ComponentError::Build("broken on purpose".to_string())))
}
