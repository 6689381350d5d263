//! bluehid - Bluetooth LE HID peripherals
//!
//! This library implements the logical core of a BLE Human Interface Device:
//! the device lifecycle, the GATT characteristic table and the security gate
//! guarding it, stack event dispatch, bonding secret storage, and keyboard,
//! mouse, joystick and combined keyboard+mouse report encoding.
//! Radio control and ATT/SMP execution are left to a [`BleStack`]
//! implementation.

pub mod att;
pub mod device;
pub mod error;
pub mod gatt;
pub mod hid;
pub mod secrets;
pub mod smp;
pub mod stack;

// Re-export common types for convenience
pub use att::AttStatus;
pub use device::{DeviceConfig, DeviceState, EventResponse, HidDevice, StackEvent};
pub use error::{HidError, HidResult};
pub use gatt::{CharacteristicTable, ServiceDescriptor, Uuid};
pub use hid::{GenericDevice, HidProfile, Joystick, Keyboard, KeyboardLeds, KeyboardModifiers, Mouse};
pub use secrets::{JsonFileSecretStore, MemorySecretStore, SecretStore, Secrets};
pub use smp::{ConnectionSecurityStatus, IoCapability, PasskeyAction};
pub use stack::{BleStack, SimulatedStack, StackError};
