//! Rendering sink abstraction.
//!
//! The core never touches a drawing tree directly. Shapes, the selection box
//! and the canvas describe themselves through this small element/attribute/class
//! contract, which a host implements on top of the DOM (or anything else).

mod memory;

pub use memory::{MemoryElement, MemorySink, SinkCall};

use serde::{Deserialize, Serialize};

/// Class that hides an element without removing it.
pub const HIDDEN_CLASS: &str = "hidden";

/// Opaque handle to an element owned by a [`RenderSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementHandle(pub u32);

/// Trait for rendering backends.
///
/// All calls are fire-and-forget: a sink that cannot honour a call is expected
/// to log it rather than fail the gesture that issued it.
pub trait RenderSink {
    /// The root drawing element (the `<svg>` itself).
    fn root(&self) -> ElementHandle;

    /// Create a detached element with the given tag name.
    fn create_element(&mut self, name: &str) -> ElementHandle;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: ElementHandle, child: ElementHandle);

    /// Set (or overwrite) an attribute.
    fn set_attribute(&mut self, element: ElementHandle, name: &str, value: &str);

    /// Remove an attribute if present.
    fn remove_attribute(&mut self, element: ElementHandle, name: &str);

    /// Add a class to the element's class list.
    fn add_class(&mut self, element: ElementHandle, name: &str);

    /// Remove a class from the element's class list.
    fn remove_class(&mut self, element: ElementHandle, name: &str);
}
