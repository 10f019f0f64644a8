//! DOM-backed rendering sink.

use graphx_core::{ElementHandle, RenderSink};
use web_sys::{Document, Element};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Renders into a live `<svg>` element.
///
/// Handles index into a table of created elements; slot 0 is the root. A slot
/// whose element could not be created stays empty and every call against it
/// is logged and dropped.
pub struct DomSink {
    document: Document,
    elements: Vec<Option<Element>>,
}

impl DomSink {
    /// Wrap an `<svg>` element. Fails if it is not attached to a document.
    pub fn new(svg: Element) -> Option<Self> {
        let document = svg.owner_document()?;
        Some(Self {
            document,
            elements: vec![Some(svg)],
        })
    }

    /// The DOM element behind a handle.
    pub fn element(&self, handle: ElementHandle) -> Option<&Element> {
        let element = self.elements.get(handle.0 as usize).and_then(Option::as_ref);
        if element.is_none() {
            log::warn!("DomSink: unknown element {:?}", handle);
        }
        element
    }
}

impl RenderSink for DomSink {
    fn root(&self) -> ElementHandle {
        ElementHandle(0)
    }

    fn create_element(&mut self, name: &str) -> ElementHandle {
        let handle = ElementHandle(self.elements.len() as u32);
        match self.document.create_element_ns(Some(SVG_NS), name) {
            Ok(element) => self.elements.push(Some(element)),
            Err(e) => {
                log::error!("Failed to create <{}>: {:?}", name, e);
                self.elements.push(None);
            }
        }
        handle
    }

    fn append_child(&mut self, parent: ElementHandle, child: ElementHandle) {
        let (Some(parent), Some(child)) = (self.element(parent), self.element(child)) else {
            return;
        };
        if let Err(e) = parent.append_child(child) {
            log::warn!("append_child failed: {:?}", e);
        }
    }

    fn set_attribute(&mut self, element: ElementHandle, name: &str, value: &str) {
        if let Some(el) = self.element(element) {
            if let Err(e) = el.set_attribute(name, value) {
                log::warn!("set_attribute {}={} failed: {:?}", name, value, e);
            }
        }
    }

    fn remove_attribute(&mut self, element: ElementHandle, name: &str) {
        if let Some(el) = self.element(element) {
            if let Err(e) = el.remove_attribute(name) {
                log::warn!("remove_attribute {} failed: {:?}", name, e);
            }
        }
    }

    fn add_class(&mut self, element: ElementHandle, name: &str) {
        if let Some(el) = self.element(element) {
            if let Err(e) = el.class_list().add_1(name) {
                log::warn!("add class {} failed: {:?}", name, e);
            }
        }
    }

    fn remove_class(&mut self, element: ElementHandle, name: &str) {
        if let Some(el) = self.element(element) {
            if let Err(e) = el.class_list().remove_1(name) {
                log::warn!("remove class {} failed: {:?}", name, e);
            }
        }
    }
}
