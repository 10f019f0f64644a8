//! In-memory rendering sink.

use super::{ElementHandle, RenderSink};
use std::collections::{BTreeMap, BTreeSet};

/// A single call made against a sink, in the order it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    CreateElement {
        element: ElementHandle,
        name: String,
    },
    AppendChild {
        parent: ElementHandle,
        child: ElementHandle,
    },
    SetAttribute {
        element: ElementHandle,
        name: String,
        value: String,
    },
    RemoveAttribute {
        element: ElementHandle,
        name: String,
    },
    AddClass {
        element: ElementHandle,
        name: String,
    },
    RemoveClass {
        element: ElementHandle,
        name: String,
    },
}

/// State of one element held by a [`MemorySink`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryElement {
    /// Tag name.
    pub name: String,
    /// Current attributes.
    pub attributes: BTreeMap<String, String>,
    /// Current classes.
    pub classes: BTreeSet<String>,
    /// Children in append order.
    pub children: Vec<ElementHandle>,
    /// Parent element, if appended.
    pub parent: Option<ElementHandle>,
}

/// In-memory sink for testing and headless use.
///
/// Keeps both the resulting element tree and the raw call log.
#[derive(Debug, Clone)]
pub struct MemorySink {
    elements: Vec<MemoryElement>,
    calls: Vec<SinkCall>,
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    /// Create a sink holding a single root `svg` element.
    pub fn new() -> Self {
        Self {
            elements: vec![MemoryElement {
                name: "svg".to_string(),
                ..MemoryElement::default()
            }],
            calls: Vec::new(),
        }
    }

    /// Get an element by handle.
    pub fn element(&self, handle: ElementHandle) -> Option<&MemoryElement> {
        self.elements.get(handle.0 as usize)
    }

    /// Get an attribute value.
    pub fn attribute(&self, handle: ElementHandle, name: &str) -> Option<&str> {
        self.element(handle)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }

    /// Check whether an element carries a class.
    pub fn has_class(&self, handle: ElementHandle, name: &str) -> bool {
        self.element(handle)
            .map(|el| el.classes.contains(name))
            .unwrap_or(false)
    }

    /// Number of elements created, including the root.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Calls recorded since creation or the last [`MemorySink::take_calls`].
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Drain the call log.
    pub fn take_calls(&mut self) -> Vec<SinkCall> {
        std::mem::take(&mut self.calls)
    }

    fn element_mut(&mut self, handle: ElementHandle) -> Option<&mut MemoryElement> {
        let element = self.elements.get_mut(handle.0 as usize);
        if element.is_none() {
            log::warn!("MemorySink: unknown element {:?}", handle);
        }
        element
    }
}

impl RenderSink for MemorySink {
    fn root(&self) -> ElementHandle {
        ElementHandle(0)
    }

    fn create_element(&mut self, name: &str) -> ElementHandle {
        let handle = ElementHandle(self.elements.len() as u32);
        self.elements.push(MemoryElement {
            name: name.to_string(),
            ..MemoryElement::default()
        });
        self.calls.push(SinkCall::CreateElement {
            element: handle,
            name: name.to_string(),
        });
        handle
    }

    fn append_child(&mut self, parent: ElementHandle, child: ElementHandle) {
        self.calls.push(SinkCall::AppendChild { parent, child });
        // Re-appending moves the child, as in the DOM.
        let old_parent = self.element(child).and_then(|el| el.parent);
        if let Some(old) = old_parent {
            if let Some(el) = self.element_mut(old) {
                el.children.retain(|&c| c != child);
            }
        }
        if let Some(el) = self.element_mut(parent) {
            el.children.push(child);
        }
        if let Some(el) = self.element_mut(child) {
            el.parent = Some(parent);
        }
    }

    fn set_attribute(&mut self, element: ElementHandle, name: &str, value: &str) {
        self.calls.push(SinkCall::SetAttribute {
            element,
            name: name.to_string(),
            value: value.to_string(),
        });
        if let Some(el) = self.element_mut(element) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, element: ElementHandle, name: &str) {
        self.calls.push(SinkCall::RemoveAttribute {
            element,
            name: name.to_string(),
        });
        if let Some(el) = self.element_mut(element) {
            el.attributes.remove(name);
        }
    }

    fn add_class(&mut self, element: ElementHandle, name: &str) {
        self.calls.push(SinkCall::AddClass {
            element,
            name: name.to_string(),
        });
        if let Some(el) = self.element_mut(element) {
            el.classes.insert(name.to_string());
        }
    }

    fn remove_class(&mut self, element: ElementHandle, name: &str) {
        self.calls.push(SinkCall::RemoveClass {
            element,
            name: name.to_string(),
        });
        if let Some(el) = self.element_mut(element) {
            el.classes.remove(name);
        }
    }
}
