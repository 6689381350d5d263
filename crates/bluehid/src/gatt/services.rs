//! Standard services every HID peripheral exposes
//!
//! Device Information, Battery and Device Identification, registered in that
//! order ahead of the profile's HID service.

use super::constants::*;
use super::schema::{DescriptorSlot, ServiceDescriptor, ServiceHandles};
use super::table::CharacteristicTable;
use super::types::CharacteristicFlags;
use crate::device::DeviceConfig;
use crate::error::HidResult;
use byteorder::{BigEndian, ByteOrder};

// Fixed widths of the Device Information strings
const MODEL_NUMBER_LEN: usize = 24;
const SERIAL_NUMBER_LEN: usize = 16;
const FIRMWARE_REVISION_LEN: usize = 8;
const HARDWARE_REVISION_LEN: usize = 16;
const SOFTWARE_REVISION_LEN: usize = 8;
const MANUFACTURER_NAME_LEN: usize = 36;

/// Handles of standard characteristics the device updates at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardHandles {
    pub battery_level: u16,
}

pub fn device_information_service() -> ServiceDescriptor {
    let read = CharacteristicFlags::READ;
    ServiceDescriptor::new(DEVICE_INFORMATION_SERVICE_UUID)
        .characteristic("model_number", MODEL_NUMBER_UUID, read)
        .characteristic("serial_number", SERIAL_NUMBER_UUID, read)
        .characteristic("firmware_revision", FIRMWARE_REVISION_UUID, read)
        .characteristic("hardware_revision", HARDWARE_REVISION_UUID, read)
        .characteristic("software_revision", SOFTWARE_REVISION_UUID, read)
        .characteristic("manufacturer_name", MANUFACTURER_NAME_UUID, read)
        .characteristic("pnp_id", PNP_ID_UUID, read)
}

pub fn battery_service() -> ServiceDescriptor {
    ServiceDescriptor::new(BATTERY_SERVICE_UUID).characteristic_with(
        "battery_level",
        BATTERY_LEVEL_UUID,
        CharacteristicFlags::READ_NOTIFY,
        vec![DescriptorSlot::new(
            "battery_level.format",
            PRESENTATION_FORMAT_UUID,
            CharacteristicFlags::READ,
        )],
    )
}

pub fn device_identification_service() -> ServiceDescriptor {
    let read = CharacteristicFlags::READ;
    ServiceDescriptor::new(DEVICE_IDENTIFICATION_SERVICE_UUID)
        .characteristic("specification_id", SPECIFICATION_ID_UUID, read)
        .characteristic("vendor_id", VENDOR_ID_UUID, read)
        .characteristic("product_id", PRODUCT_ID_UUID, read)
        .characteristic("version", VERSION_UUID, read)
        .characteristic("primary_record", PRIMARY_RECORD_UUID, read)
        .characteristic("vendor_id_source", VENDOR_ID_SOURCE_UUID, read)
}

/// DIS, BAS and DID, in registration order
pub fn standard_services() -> Vec<ServiceDescriptor> {
    vec![
        device_information_service(),
        battery_service(),
        device_identification_service(),
    ]
}

/// NUL-pad or truncate a string to a fixed width
pub fn pack_string(value: &str, width: usize) -> Vec<u8> {
    let mut bytes = value.as_bytes().to_vec();
    bytes.resize(width, 0);
    bytes
}

/// PnP ID value: `source:u8, vendor:u16, product:u16, version:u16`, big-endian
pub fn pnp_id(config: &DeviceConfig) -> [u8; 7] {
    let mut value = [0u8; 7];
    value[0] = config.pnp.vendor_source;
    BigEndian::write_u16(&mut value[1..3], config.pnp.vendor_id);
    BigEndian::write_u16(&mut value[3..5], config.pnp.product_id);
    BigEndian::write_u16(&mut value[5..7], config.pnp.product_version);
    value
}

fn be_u16(value: u16) -> [u8; 2] {
    let mut buf = [0u8; 2];
    BigEndian::write_u16(&mut buf, value);
    buf
}

/// Seed the table with the standard services' values
pub fn seed_standard_services(
    dis: &ServiceHandles,
    bas: &ServiceHandles,
    did: &ServiceHandles,
    config: &DeviceConfig,
    table: &mut CharacteristicTable,
) -> HidResult<StandardHandles> {
    table.insert(
        dis.handle("model_number")?,
        "Model number",
        pack_string(&config.model_number, MODEL_NUMBER_LEN),
    );
    table.insert(
        dis.handle("serial_number")?,
        "Serial number",
        pack_string(&config.serial_number, SERIAL_NUMBER_LEN),
    );
    table.insert(
        dis.handle("firmware_revision")?,
        "Firmware revision",
        pack_string(&config.firmware_revision, FIRMWARE_REVISION_LEN),
    );
    table.insert(
        dis.handle("hardware_revision")?,
        "Hardware revision",
        pack_string(&config.hardware_revision, HARDWARE_REVISION_LEN),
    );
    table.insert(
        dis.handle("software_revision")?,
        "Software revision",
        pack_string(&config.software_revision, SOFTWARE_REVISION_LEN),
    );
    table.insert(
        dis.handle("manufacturer_name")?,
        "Manufacturer name",
        pack_string(&config.manufacturer_name, MANUFACTURER_NAME_LEN),
    );
    table.insert(dis.handle("pnp_id")?, "PnP information", pnp_id(config));

    let battery_level = bas.handle("battery_level")?;
    table.insert(battery_level, "Battery level", [config.battery_level.min(100)]);
    table.insert(
        bas.handle("battery_level.format")?,
        "Battery format",
        BATTERY_PRESENTATION_FORMAT,
    );

    table.insert(
        did.handle("specification_id")?,
        "Specification ID",
        be_u16(DID_SPECIFICATION_ID),
    );
    table.insert(did.handle("vendor_id")?, "Vendor ID", be_u16(config.pnp.vendor_id));
    table.insert(did.handle("product_id")?, "Product ID", be_u16(config.pnp.product_id));
    table.insert(did.handle("version")?, "Version", be_u16(config.pnp.product_version));
    table.insert(did.handle("primary_record")?, "Primary record", [0x01]);
    table.insert(
        did.handle("vendor_id_source")?,
        "Vendor source",
        be_u16(u16::from(config.pnp.vendor_source)),
    );

    Ok(StandardHandles { battery_level })
}
