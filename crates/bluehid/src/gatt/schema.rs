//! Typed service schema and handle binding
//!
//! Registration hands back one flat handle list per service: each
//! characteristic value handle followed by the handles of its descriptors,
//! in declaration order. Binding checks that shape against the descriptor
//! tree and names every handle, so profiles look handles up by slot instead
//! of by tuple position.

use super::types::{CharacteristicFlags, Uuid};
use crate::error::{HidError, HidResult};

/// A descriptor attached to a characteristic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorSlot {
    /// Slot name the registered handle is bound to
    pub slot: &'static str,
    /// Descriptor UUID
    pub uuid: Uuid,
    /// Descriptor access flags
    pub flags: CharacteristicFlags,
}

impl DescriptorSlot {
    pub fn new(slot: &'static str, uuid: impl Into<Uuid>, flags: CharacteristicFlags) -> Self {
        Self {
            slot,
            uuid: uuid.into(),
            flags,
        }
    }
}

/// A characteristic and its descriptors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacteristicSlot {
    /// Slot name the value handle is bound to
    pub slot: &'static str,
    /// Characteristic UUID
    pub uuid: Uuid,
    /// Characteristic access flags
    pub flags: CharacteristicFlags,
    /// Descriptors, in registration order
    pub descriptors: Vec<DescriptorSlot>,
}

/// Static description of one GATT service.
///
/// Order is significant: it is the order in which the stack assigns handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Service UUID
    pub uuid: Uuid,
    /// Characteristics, in registration order
    pub characteristics: Vec<CharacteristicSlot>,
}

impl ServiceDescriptor {
    /// Start an empty service description
    pub fn new(uuid: impl Into<Uuid>) -> Self {
        Self {
            uuid: uuid.into(),
            characteristics: Vec::new(),
        }
    }

    /// Append a characteristic without descriptors
    pub fn characteristic(
        self,
        slot: &'static str,
        uuid: impl Into<Uuid>,
        flags: CharacteristicFlags,
    ) -> Self {
        self.characteristic_with(slot, uuid, flags, Vec::new())
    }

    /// Append a characteristic with descriptors
    pub fn characteristic_with(
        mut self,
        slot: &'static str,
        uuid: impl Into<Uuid>,
        flags: CharacteristicFlags,
        descriptors: Vec<DescriptorSlot>,
    ) -> Self {
        self.characteristics.push(CharacteristicSlot {
            slot,
            uuid: uuid.into(),
            flags,
            descriptors,
        });
        self
    }

    /// Number of handles registration must return for this service
    pub fn handle_count(&self) -> usize {
        self.characteristics
            .iter()
            .map(|c| 1 + c.descriptors.len())
            .sum()
    }

    /// Slot names in registration order
    pub fn slots(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.characteristics.iter().flat_map(|c| {
            std::iter::once(c.slot).chain(c.descriptors.iter().map(|d| d.slot))
        })
    }

    /// Bind a registered handle list to this description's slots
    pub fn bind(&self, handles: &[u16]) -> HidResult<ServiceHandles> {
        let expected = self.handle_count();
        if handles.len() != expected {
            return Err(HidError::HandleCountMismatch {
                uuid: self.uuid,
                expected,
                actual: handles.len(),
            });
        }

        Ok(ServiceHandles {
            uuid: self.uuid,
            slots: self.slots().zip(handles.iter().copied()).collect(),
        })
    }
}

/// Registered handles of one service, keyed by slot name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceHandles {
    uuid: Uuid,
    slots: Vec<(&'static str, u16)>,
}

impl ServiceHandles {
    /// UUID of the bound service
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Handle bound to `slot`
    pub fn handle(&self, slot: &'static str) -> HidResult<u16> {
        self.slots
            .iter()
            .find(|(name, _)| *name == slot)
            .map(|(_, handle)| *handle)
            .ok_or(HidError::MissingSlot {
                uuid: self.uuid,
                slot,
            })
    }

    /// All (slot, handle) pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u16)> + '_ {
        self.slots.iter().copied()
    }
}

/// Bind the stack's registration result to the full service list.
///
/// Any difference in service count or per-service arity is a configuration
/// defect and is returned as a layout error.
pub fn bind_services(
    services: &[ServiceDescriptor],
    registered: &[Vec<u16>],
) -> HidResult<Vec<ServiceHandles>> {
    if services.len() != registered.len() {
        return Err(HidError::ServiceCountMismatch {
            expected: services.len(),
            actual: registered.len(),
        });
    }

    services
        .iter()
        .zip(registered)
        .map(|(service, handles)| service.bind(handles))
        .collect()
}
