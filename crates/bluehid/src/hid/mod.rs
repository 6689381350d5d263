//! HID profiles
//!
//! A profile owns its input state and report descriptor, describes its HID
//! service, and packs its state into reports. The device core drives
//! everything else through [`HidProfile`].

pub mod constants;
pub mod descriptors;
pub mod generic;
pub mod joystick;
pub mod keyboard;
pub mod mouse;


pub use constants::*;
pub use generic::GenericDevice;
pub use joystick::{Joystick, JoystickState};
pub use keyboard::{Keyboard, KeyboardLeds, KeyboardModifiers, KeyboardOutputCallback, KeyboardState};
pub use mouse::{Mouse, MouseState};

use crate::att::AttStatus;
use crate::error::HidResult;
use crate::gatt::constants::*;
use crate::gatt::{CharacteristicFlags, CharacteristicTable, DescriptorSlot, ServiceDescriptor, ServiceHandles};

/// A packed input report ready to be notified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputReport {
    /// Value handle of the report characteristic
    pub handle: u16,
    /// Table label of the report characteristic
    pub description: &'static str,
    pub data: Vec<u8>,
}

/// What a profile did with a peer write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteDisposition {
    /// Let the device store the value as usual
    Delegate,
    /// Answer the write with this status without storing it
    Handled(AttStatus),
}

/// Contract between the device core and a concrete HID profile
pub trait HidProfile {
    /// Name used when the configuration does not override it
    fn default_name(&self) -> &'static str;

    /// GAP appearance value
    fn appearance(&self) -> u16;

    /// HID service layout, registered after the standard services
    fn hid_service(&self) -> ServiceDescriptor;

    /// HID report descriptor bytes
    fn report_map(&self) -> &'static [u8];

    /// Capture registered HID handles and seed the table
    fn assign_handles(&mut self, handles: &ServiceHandles, table: &mut CharacteristicTable) -> HidResult<()>;

    /// Forget registered handles after the device stops
    fn release_handles(&mut self);

    /// Pack the current input state; `None` before handles are assigned
    fn encode_report(&self) -> Option<InputReport>;

    /// Look at a peer write before the device stores it
    fn intercept_write(&mut self, _handle: u16, _value: &[u8]) -> WriteDisposition {
        WriteDisposition::Delegate
    }
}

/// Clamp to the symmetric signed-byte range used by HID axes
pub fn clamp_axis(value: i32) -> i8 {
    value.clamp(AXIS_MIN, AXIS_MAX) as i8
}

/// Report reference descriptor value: report id, report type
pub fn report_reference(report_id: u8, report_type: u8) -> [u8; 2] {
    [report_id, report_type]
}

/// Slot names of one output report and its reference descriptor
#[derive(Debug, Clone, Copy)]
pub(crate) struct OutputSlots {
    pub report: &'static str,
    pub reference: &'static str,
}

/// Slot names of one complete set of HID characteristics
#[derive(Debug, Clone, Copy)]
pub(crate) struct HidSlots {
    pub information: &'static str,
    pub report_map: &'static str,
    pub control_point: &'static str,
    pub input_report: &'static str,
    pub input_reference: &'static str,
    pub output: Option<OutputSlots>,
    pub protocol_mode: &'static str,
}

/// Handles captured from one set of HID characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HidReportHandles {
    pub input_report: u16,
    pub output_report: Option<u16>,
}

impl HidSlots {
    /// Append this set's characteristics to `service`.
    ///
    /// Order: information, report map, control point, input report,
    /// optional output report, protocol mode.
    pub(crate) fn append_to(&self, service: ServiceDescriptor) -> ServiceDescriptor {
        let service = service
            .characteristic(self.information, HID_INFORMATION_UUID, CharacteristicFlags::READ)
            .characteristic(self.report_map, HID_REPORT_MAP_UUID, CharacteristicFlags::READ)
            .characteristic(
                self.control_point,
                HID_CONTROL_POINT_UUID,
                CharacteristicFlags::READ_WRITE_NO_RESPONSE,
            )
            .characteristic_with(
                self.input_report,
                HID_REPORT_UUID,
                CharacteristicFlags::READ_NOTIFY,
                vec![DescriptorSlot::new(
                    self.input_reference,
                    HID_REPORT_REFERENCE_UUID,
                    CharacteristicFlags::READ,
                )],
            );

        let service = match self.output {
            Some(output) => service.characteristic_with(
                output.report,
                HID_REPORT_UUID,
                CharacteristicFlags::READ_WRITE,
                vec![DescriptorSlot::new(
                    output.reference,
                    HID_REPORT_REFERENCE_UUID,
                    CharacteristicFlags::READ,
                )],
            ),
            None => service,
        };

        service.characteristic(
            self.protocol_mode,
            HID_PROTOCOL_MODE_UUID,
            CharacteristicFlags::READ_WRITE_NO_RESPONSE,
        )
    }

    /// Seed this set's entries and return the report handles.
    ///
    /// The output report starts with the same bytes as the input report.
    pub(crate) fn seed(
        &self,
        handles: &ServiceHandles,
        table: &mut CharacteristicTable,
        report_map: &'static [u8],
        report_id: u8,
        initial_report: &[u8],
    ) -> HidResult<HidReportHandles> {
        table.insert(handles.handle(self.information)?, "HID information", HID_INFORMATION);
        table.insert(handles.handle(self.report_map)?, "HID input report map", report_map);
        table.insert(
            handles.handle(self.control_point)?,
            "HID control point",
            [CONTROL_POINT_INITIAL],
        );

        let input_report = handles.handle(self.input_report)?;
        table.insert(input_report, "HID input report", initial_report);
        table.insert(
            handles.handle(self.input_reference)?,
            "HID input reference",
            report_reference(report_id, REPORT_TYPE_INPUT),
        );

        let output_report = match self.output {
            Some(output) => {
                let handle = handles.handle(output.report)?;
                table.insert(handle, "HID output report", initial_report);
                table.insert(
                    handles.handle(output.reference)?,
                    "HID output reference",
                    report_reference(report_id, REPORT_TYPE_OUTPUT),
                );
                Some(handle)
            }
            None => None,
        };

        table.insert(
            handles.handle(self.protocol_mode)?,
            "HID protocol mode",
            [PROTOCOL_MODE_REPORT],
        );

        Ok(HidReportHandles {
            input_report,
            output_report,
        })
    }
}

/// Slots of a single-report profile without an output report
pub(crate) const INPUT_ONLY_SLOTS: HidSlots = HidSlots {
    information: "hid_information",
    report_map: "report_map",
    control_point: "control_point",
    input_report: "input_report",
    input_reference: "input_report.reference",
    output: None,
    protocol_mode: "protocol_mode",
};
