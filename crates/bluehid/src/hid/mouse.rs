//! Mouse profile

use super::constants::*;
use super::descriptors::MOUSE_REPORT_MAP;
use super::{clamp_axis, HidProfile, InputReport, INPUT_ONLY_SLOTS};
use crate::error::HidResult;
use crate::gatt::constants::{APPEARANCE_MOUSE, HID_SERVICE_UUID};
use crate::gatt::{CharacteristicTable, ServiceDescriptor, ServiceHandles};

/// Relative pointer state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseState {
    buttons: u8,
    x: i8,
    y: i8,
    wheel: i8,
}

impl MouseState {
    /// Set X and Y, clamped to [-127, 127]
    pub fn set_axes(&mut self, x: i32, y: i32) {
        self.x = clamp_axis(x);
        self.y = clamp_axis(y);
    }

    /// Set the wheel, clamped to [-127, 127]
    pub fn set_wheel(&mut self, wheel: i32) {
        self.wheel = clamp_axis(wheel);
    }

    pub fn set_buttons(&mut self, left: bool, right: bool, middle: bool) {
        self.buttons = u8::from(left) | u8::from(right) << 1 | u8::from(middle) << 2;
    }

    pub fn buttons(&self) -> u8 {
        self.buttons
    }

    pub fn axes(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn wheel(&self) -> i8 {
        self.wheel
    }

    /// `[buttons, x, y, wheel]`
    pub fn encode(&self) -> [u8; MOUSE_REPORT_LEN] {
        [self.buttons, self.x as u8, self.y as u8, self.wheel as u8]
    }
}

/// Three-button mouse with a wheel
#[derive(Debug, Default)]
pub struct Mouse {
    state: MouseState,
    report_handle: Option<u16>,
}

impl Mouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_axes(&mut self, x: i32, y: i32) {
        self.state.set_axes(x, y);
    }

    pub fn set_wheel(&mut self, wheel: i32) {
        self.state.set_wheel(wheel);
    }

    pub fn set_buttons(&mut self, left: bool, right: bool, middle: bool) {
        self.state.set_buttons(left, right, middle);
    }

    pub fn state(&self) -> &MouseState {
        &self.state
    }

    pub fn report_handle(&self) -> Option<u16> {
        self.report_handle
    }
}

impl HidProfile for Mouse {
    fn default_name(&self) -> &'static str {
        "Bluetooth Mouse"
    }

    fn appearance(&self) -> u16 {
        APPEARANCE_MOUSE
    }

    fn hid_service(&self) -> ServiceDescriptor {
        INPUT_ONLY_SLOTS.append_to(ServiceDescriptor::new(HID_SERVICE_UUID))
    }

    fn report_map(&self) -> &'static [u8] {
        MOUSE_REPORT_MAP
    }

    fn assign_handles(&mut self, handles: &ServiceHandles, table: &mut CharacteristicTable) -> HidResult<()> {
        let assigned = INPUT_ONLY_SLOTS.seed(
            handles,
            table,
            MOUSE_REPORT_MAP,
            MOUSE_REPORT_ID,
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
