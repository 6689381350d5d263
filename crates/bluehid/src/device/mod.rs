//! The HID device: lifecycle, event dispatch and notifications

pub mod advertiser;
pub mod config;
mod dispatcher;
pub mod events;
mod peripheral;
pub mod state;

#[cfg(test)]
mod tests;

pub use self::advertiser::Advertiser;
pub use self::config::{DeviceConfig, PnpInfo};
pub use self::events::{EventResponse, StackEvent};
pub use self::peripheral::{ComparisonCallback, HidDevice, PasskeyCallback};
pub use self::state::{DeviceState, StateChangeCallback};
