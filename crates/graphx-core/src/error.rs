//! Error types for canvas operations.

use crate::selection::Gesture;
use crate::shapes::{ShapeId, ShapeKind};
use thiserror::Error;

/// Errors raised by the registry, the selection service and shapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    #[error("Shape not found: {0}")]
    NotFound(ShapeId),
    #[error("Invalid geometry: {kind} does not support {operation}")]
    InvalidGeometry {
        kind: ShapeKind,
        operation: &'static str,
    },
    #[error("Duplicate shape id: {0}")]
    DuplicateId(ShapeId),
    #[error("Cannot start {requested} while {active} is in progress")]
    GestureInProgress { active: Gesture, requested: Gesture },
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_messages() {
        let err = CanvasError::InvalidGeometry {
            kind: ShapeKind::Line,
            operation: "push_vertex",
        };
        assert_eq!(
            err.to_string(),
            "Invalid geometry: line does not support push_vertex"
        );

        let err = CanvasError::GestureInProgress {
            active: Gesture::SelectionBox,
            requested: Gesture::Drag,
        };
        assert_eq!(
            err.to_string(),
            "Cannot start drag while selection box is in progress"
        );

        let id = Uuid::nil();
        assert!(CanvasError::NotFound(id).to_string().contains(&id.to_string()));
    }
}
