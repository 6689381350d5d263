//! Device configuration

use crate::gatt::constants::DEFAULT_MTU;
use crate::hid::HidProfile;
use crate::smp::{IoCapability, SecurityPolicy, DEFAULT_PASSKEY};
use crate::stack::StackConfig;

/// Vendor source: Bluetooth SIG assigned company identifier
pub const VENDOR_SOURCE_BLUETOOTH: u8 = 0x01;
/// Vendor source: USB Implementer's Forum assigned vendor id
pub const VENDOR_SOURCE_USB: u8 = 0x02;

/// Plug-and-play identity published by DIS and DID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnpInfo {
    /// Where `vendor_id` was assigned
    pub vendor_source: u8,
    pub vendor_id: u16,
    pub product_id: u16,
    pub product_version: u16,
}

impl Default for PnpInfo {
    fn default() -> Self {
        Self {
            vendor_source: VENDOR_SOURCE_BLUETOOTH,
            vendor_id: 0xFFFF,
            product_id: 0x0001,
            product_version: 0x0123,
        }
    }
}

/// Identity, security and radio settings of one device.
///
/// Read once by [`HidDevice::start`](crate::device::HidDevice::start);
/// changing it afterwards takes effect on the next start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// GAP and advertised name
    pub device_name: String,
    /// GAP appearance value
    pub appearance: u16,
    pub model_number: String,
    pub serial_number: String,
    pub firmware_revision: String,
    pub hardware_revision: String,
    pub software_revision: String,
    pub manufacturer_name: String,
    pub pnp: PnpInfo,
    /// Initial battery level, percent
    pub battery_level: u8,
    /// Allow bonding
    pub bond: bool,
    /// Require LE secure connections
    pub le_secure: bool,
    /// Local I/O capability
    pub io_capability: IoCapability,
    /// Passkey shown when the stack asks the device to display one
    pub passkey: u32,
    /// ATT MTU requested at start
    pub mtu: u16,
}

impl DeviceConfig {
    /// Defaults for a device with the given name and appearance
    pub fn new(device_name: impl Into<String>, appearance: u16) -> Self {
        Self {
            device_name: device_name.into(),
            appearance,
            model_number: "1".to_string(),
            serial_number: "1".to_string(),
            firmware_revision: "1".to_string(),
            hardware_revision: "1".to_string(),
            software_revision: "2".to_string(),
            manufacturer_name: "Homebrew".to_string(),
            pnp: PnpInfo::default(),
            battery_level: 100,
            bond: true,
            le_secure: true,
            io_capability: IoCapability::NoInputOutput,
            passkey: DEFAULT_PASSKEY,
            mtu: DEFAULT_MTU,
        }
    }

    /// Defaults named after a profile
    pub fn for_profile<P: HidProfile + ?Sized>(profile: &P) -> Self {
        Self::new(profile.default_name(), profile.appearance())
    }

    /// Stack configuration derived from these settings.
    ///
    /// MITM protection follows `le_secure`.
    pub fn stack_config(&self) -> StackConfig {
        StackConfig {
            gap_name: self.device_name.clone(),
            mtu: self.mtu,
            bond: self.bond,
            le_secure: self.le_secure,
            mitm: self.le_secure,
            io_capability: self.io_capability,
        }
    }

    /// Read policy enforced by the security gate
    pub fn security_policy(&self) -> SecurityPolicy {
        SecurityPolicy {
            bond: self.bond,
            io_capability: self.io_capability,
            le_secure: self.le_secure,
        }
    }
}
