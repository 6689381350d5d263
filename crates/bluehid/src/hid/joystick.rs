//! Joystick profile

use super::constants::*;
use super::descriptors::JOYSTICK_REPORT_MAP;
use super::{clamp_axis, HidProfile, InputReport, INPUT_ONLY_SLOTS};
use crate::error::HidResult;
use crate::gatt::constants::{APPEARANCE_JOYSTICK, HID_SERVICE_UUID};
use crate::gatt::{CharacteristicTable, ServiceDescriptor, ServiceHandles};

/// Two absolute axes and eight buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoystickState {
    x: i8,
    y: i8,
    buttons: u8,
}

impl JoystickState {
    /// Set X and Y, clamped to [-127, 127]
    pub fn set_axes(&mut self, x: i32, y: i32) {
        self.x = clamp_axis(x);
        self.y = clamp_axis(y);
    }

    /// Button `i` (0-based) maps to bit `i`
    pub fn set_buttons(&mut self, buttons: [bool; 8]) {
        self.buttons = buttons
            .iter()
            .enumerate()
            .fold(0u8, |bits, (i, pressed)| bits | u8::from(*pressed) << i);
    }

    pub fn buttons(&self) -> u8 {
        self.buttons
    }

    pub fn axes(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// `[x, y, buttons]`
    pub fn encode(&self) -> [u8; JOYSTICK_REPORT_LEN] {
        [self.x as u8, self.y as u8, self.buttons]
    }
}

#[derive(Debug, Default)]
pub struct Joystick {
    state: JoystickState,
    report_handle: Option<u16>,
}

impl Joystick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_axes(&mut self, x: i32, y: i32) {
        self.state.set_axes(x, y);
    }

    pub fn set_buttons(&mut self, buttons: [bool; 8]) {
        self.state.set_buttons(buttons);
    }

    pub fn state(&self) -> &JoystickState {
        &self.state
    }

    pub fn report_handle(&self) -> Option<u16> {
        self.report_handle
    }
}

impl HidProfile for Joystick {
    fn default_name(&self) -> &'static str {
        "Bluetooth Joystick"
    }

    fn appearance(&self) -> u16 {
        APPEARANCE_JOYSTICK
    }

    fn hid_service(&self) -> ServiceDescriptor {
        INPUT_ONLY_SLOTS.append_to(ServiceDescriptor::new(HID_SERVICE_UUID))
    }

    fn report_map(&self) -> &'static [u8] {
        JOYSTICK_REPORT_MAP
    }

    fn assign_handles(&mut self, handles: &ServiceHandles, table: &mut CharacteristicTable) -> HidResult<()> {
        let assigned = INPUT_ONLY_SLOTS.seed(
            handles,
            table,
            JOYSTICK_REPORT_MAP,
            JOYSTICK_REPORT_ID,
            &self.state.encode(),
        )?;
        self.report_handle = Some(assigned.input_report);
        Ok(())
    }

    fn release_handles(&mut self) {
        self.report_handle = None;
    }

    fn encode_report(&self) -> Option<InputReport> {
        self.report_handle.map(|handle| InputReport {
            handle,
            description: "HID input report",
            data: self.state.encode().to_vec(),
        })
    }
}
