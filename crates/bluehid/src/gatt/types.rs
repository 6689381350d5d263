//! Common types for GATT descriptions
//!
//! This module defines the UUID and characteristic flag types used when
//! describing services to the stack.

use bitflags::bitflags;
use std::fmt;

/// 16-bit SIG-assigned UUID of a service, characteristic or descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid(pub u16);

impl From<u16> for Uuid {
    fn from(uuid: u16) -> Self {
        Uuid(uuid)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

bitflags! {
    /// Access flags of a characteristic or descriptor as passed to the stack
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharacteristicFlags: u16 {
        const BROADCAST = 0x0001;
        const READ = 0x0002;
        const WRITE_NO_RESPONSE = 0x0004;
        const WRITE = 0x0008;
        const NOTIFY = 0x0010;
        const INDICATE = 0x0020;
    }
}

impl CharacteristicFlags {
    pub const READ_WRITE: Self = Self::READ.union(Self::WRITE);
    pub const READ_NOTIFY: Self = Self::READ.union(Self::NOTIFY);
    pub const READ_WRITE_NO_RESPONSE: Self = Self::READ
        .union(Self::WRITE)
        .union(Self::WRITE_NO_RESPONSE);

    pub fn can_write(&self) -> bool {
        self.intersects(Self::WRITE | Self::WRITE_NO_RESPONSE)
    }

    pub fn can_notify(&self) -> bool {
        self.contains(Self::NOTIFY)
    }
}
