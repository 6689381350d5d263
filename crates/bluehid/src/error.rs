//! Error types for the bluehid library
//!
//! Peer-visible read/write outcomes are not errors; they are reported as
//! [`AttStatus`](crate::att::AttStatus). The types here cover failures of the
//! device itself: stack primitives that could not be executed and GATT tables
//! whose registered shape does not match their description.

use crate::device::DeviceState;
use crate::gatt::Uuid;
use crate::stack::StackError;
use thiserror::Error;

/// Errors raised by the HID device core
#[derive(Error, Debug)]
pub enum HidError {
    #[error("Stack error: {0}")]
    Stack(#[from] StackError),

    #[error("Registration returned {actual} services, expected {expected}")]
    ServiceCountMismatch { expected: usize, actual: usize },

    #[error("Service {uuid} registered {actual} handles, expected {expected}")]
    HandleCountMismatch {
        uuid: Uuid,
        expected: usize,
        actual: usize,
    },

    #[error("Service {uuid} has no slot named {slot}")]
    MissingSlot { uuid: Uuid, slot: &'static str },

    #[error("Operation not allowed in state {0}")]
    InvalidState(DeviceState),
}

impl HidError {
    /// Whether this error indicates a malformed GATT configuration.
    ///
    /// These abort startup; the device never runs with misaligned handles.
    pub fn is_layout_error(&self) -> bool {
        matches!(
            self,
            HidError::ServiceCountMismatch { .. }
                | HidError::HandleCountMismatch { .. }
                | HidError::MissingSlot { .. }
        )
    }
}

/// Result type for device operations
pub type HidResult<T> = Result<T, HidError>;
