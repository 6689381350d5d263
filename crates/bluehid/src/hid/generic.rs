//! Combined keyboard and mouse
//!
//! Both devices share one HID service and one report map holding two
//! top-level collections. The keyboard reports with id 1 and the mouse with
//! id 2.

use super::constants::*;
use super::descriptors::GENERIC_REPORT_MAP;
use super::keyboard::dispatch_leds;
use super::{
    HidProfile, HidReportHandles, HidSlots, InputReport, KeyboardLeds, KeyboardModifiers,
    KeyboardOutputCallback, KeyboardState, MouseState, OutputSlots, WriteDisposition,
};
use crate::device::HidDevice;
use crate::error::HidResult;
use crate::gatt::constants::{APPEARANCE_KEYBOARD, HID_SERVICE_UUID};
use crate::gatt::{CharacteristicTable, ServiceDescriptor, ServiceHandles};
use crate::stack::BleStack;
use std::fmt;

const KEYBOARD_SLOTS: HidSlots = HidSlots {
    information: "keyboard.hid_information",
    report_map: "keyboard.report_map",
    control_point: "keyboard.control_point",
    input_report: "keyboard.input_report",
    input_reference: "keyboard.input_report.reference",
    output: Some(OutputSlots {
        report: "keyboard.output_report",
        reference: "keyboard.output_report.reference",
    }),
    protocol_mode: "keyboard.protocol_mode",
};

const MOUSE_SLOTS: HidSlots = HidSlots {
    information: "mouse.hid_information",
    report_map: "mouse.report_map",
    control_point: "mouse.control_point",
    input_report: "mouse.input_report",
    input_reference: "mouse.input_report.reference",
    output: None,
    protocol_mode: "mouse.protocol_mode",
};

/// Keyboard and mouse behind one connection
#[derive(Default)]
pub struct GenericDevice {
    keyboard: KeyboardState,
    mouse: MouseState,
    keyboard_handles: Option<HidReportHandles>,
    mouse_report_handle: Option<u16>,
    output_callback: Option<KeyboardOutputCallback>,
}

impl GenericDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_modifiers(&mut self, modifiers: KeyboardModifiers) {
        self.keyboard.set_modifiers(modifiers);
    }

    pub fn set_keys(&mut self, keys: &[u8]) {
        self.keyboard.set_keys(keys);
    }

    pub fn set_axes(&mut self, x: i32, y: i32) {
        self.mouse.set_axes(x, y);
    }

    pub fn set_wheel(&mut self, wheel: i32) {
        self.mouse.set_wheel(wheel);
    }

    pub fn set_buttons(&mut self, left: bool, right: bool, middle: bool) {
        self.mouse.set_buttons(left, right, middle);
    }

    pub fn set_output_callback<F>(&mut self, callback: F)
    where
        F: FnMut(KeyboardLeds) + Send + 'static,
    {
        self.output_callback = Some(Box::new(callback));
    }

    pub fn keyboard_state(&self) -> &KeyboardState {
        &self.keyboard
    }

    pub fn mouse_state(&self) -> &MouseState {
        &self.mouse
    }

    pub fn keyboard_report_handle(&self) -> Option<u16> {
        self.keyboard_handles.map(|h| h.input_report)
    }

    pub fn output_report_handle(&self) -> Option<u16> {
        self.keyboard_handles.and_then(|h| h.output_report)
    }

    pub fn mouse_report_handle(&self) -> Option<u16> {
        self.mouse_report_handle
    }

    /// Pack the mouse state; `None` before handles are assigned
    pub fn encode_mouse_report(&self) -> Option<InputReport> {
        self.mouse_report_handle.map(|handle| InputReport {
            handle,
            description: "HID input report",
            data: self.mouse.encode().to_vec(),
        })
    }
}

impl fmt::Debug for GenericDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericDevice")
            .field("keyboard", &self.keyboard)
            .field("mouse", &self.mouse)
            .field("keyboard_handles", &self.keyboard_handles)
            .field("mouse_report_handle", &self.mouse_report_handle)
            .field("output_callback", &self.output_callback.is_some())
            .finish()
    }
}

impl HidProfile for GenericDevice {
    fn default_name(&self) -> &'static str {
        "Bluetooth GenericDevice"
    }

    /// Advertises with the keyboard appearance
    fn appearance(&self) -> u16 {
        APPEARANCE_KEYBOARD
    }

    fn hid_service(&self) -> ServiceDescriptor {
        let service = KEYBOARD_SLOTS.append_to(ServiceDescriptor::new(HID_SERVICE_UUID));
        MOUSE_SLOTS.append_to(service)
    }

    fn report_map(&self) -> &'static [u8] {
        GENERIC_REPORT_MAP
    }

    fn assign_handles(&mut self, handles: &ServiceHandles, table: &mut CharacteristicTable) -> HidResult<()> {
        let keyboard = KEYBOARD_SLOTS.seed(
            handles,
            table,
            GENERIC_REPORT_MAP,
            GENERIC_KEYBOARD_REPORT_ID,
            &self.keyboard.encode(),
        )?;
        let mouse = MOUSE_SLOTS.seed(
            handles,
            table,
            GENERIC_REPORT_MAP,
            GENERIC_MOUSE_REPORT_ID,
            &self.mouse.encode(),
        )?;

        self.keyboard_handles = Some(keyboard);
        self.mouse_report_handle = Some(mouse.input_report);
        Ok(())
    }

    fn release_handles(&mut self) {
        self.keyboard_handles = None;
        self.mouse_report_handle = None;
    }

    /// The keyboard report; see [`HidDevice::notify_mouse_report`] for the mouse
    fn encode_report(&self) -> Option<InputReport> {
        self.keyboard_report_handle().map(|handle| InputReport {
            handle,
            description: "HID input report",
            data: self.keyboard.encode().to_vec(),
        })
    }

    fn intercept_write(&mut self, handle: u16, value: &[u8]) -> WriteDisposition {
        if self.output_report_handle() == Some(handle) {
            dispatch_leds(&mut self.output_callback, value);
        }
        WriteDisposition::Delegate
    }
}

impl<S: BleStack> HidDevice<S, GenericDevice> {
    /// Notify the mouse report. No-op unless connected.
    pub fn notify_mouse_report(&mut self) -> HidResult<()> {
        match self.profile().encode_mouse_report() {
            Some(report) => self.send_report(report),
            None => Ok(()),
        }
    }
}
