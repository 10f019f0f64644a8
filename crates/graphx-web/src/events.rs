//! Translation from DOM events and layout to core input types.

use graphx_core::shapes::ID_ATTRIBUTE;
use graphx_core::{CanvasLayout, Modifiers, MouseButton, PointerInput, ShapeId};
use kurbo::{Point, Size};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Page position of a mouse event.
pub fn pointer_position(event: &MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

/// Build a press/release input, including the shape id stamped on the target element.
pub fn pointer_input(event: &MouseEvent) -> PointerInput {
    let input = PointerInput::new(pointer_position(event))
        .with_button(MouseButton::from_dom(event.button()))
        .with_modifiers(Modifiers {
            shift: event.shift_key(),
            ctrl: event.ctrl_key(),
            alt: event.alt_key(),
            meta: event.meta_key(),
        });
    match target_shape(event) {
        Some(id) => input.with_target(id),
        None => input,
    }
}

fn target_shape(event: &MouseEvent) -> Option<ShapeId> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    let raw = element.get_attribute(ID_ATTRIBUTE)?;
    ShapeId::parse_str(&raw).ok()
}

/// Layout from the container's size and the svg's page position.
pub fn canvas_layout(container: &Element, svg: &Element) -> CanvasLayout {
    let size = container.get_bounding_client_rect();
    let origin = svg.get_bounding_client_rect();
    CanvasLayout::new(
        Point::new(origin.x(), origin.y()),
        Size::new(size.width(), size.height()),
    )
}
