//! Keyboard profile

use super::constants::*;
use super::descriptors::KEYBOARD_REPORT_MAP;
use super::{HidProfile, HidReportHandles, HidSlots, InputReport, OutputSlots, WriteDisposition};
use crate::error::HidResult;
use crate::gatt::constants::{APPEARANCE_KEYBOARD, HID_SERVICE_UUID};
use crate::gatt::{CharacteristicTable, ServiceDescriptor, ServiceHandles};
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Modifier byte of a keyboard report
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyboardModifiers: u8 {
        const LEFT_CONTROL = 0x01;
        const LEFT_SHIFT = 0x02;
        const LEFT_ALT = 0x04;
        const LEFT_GUI = 0x08;
        const RIGHT_CONTROL = 0x10;
        const RIGHT_SHIFT = 0x20;
        const RIGHT_ALT = 0x40;
        const RIGHT_GUI = 0x80;
    }
}

bitflags! {
    /// LED state written by the host to the output report
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyboardLeds: u8 {
        const NUM_LOCK = 0x01;
        const CAPS_LOCK = 0x02;
        const SCROLL_LOCK = 0x04;
        const COMPOSE = 0x08;
        const KANA = 0x10;
    }
}

/// Called when the host writes the keyboard output report
pub type KeyboardOutputCallback = Box<dyn FnMut(KeyboardLeds) + Send + 'static>;

/// Modifiers and up to six pressed keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    modifiers: KeyboardModifiers,
    keys: [u8; KEYBOARD_KEY_SLOTS],
}

impl KeyboardState {
    pub fn set_modifiers(&mut self, modifiers: KeyboardModifiers) {
        self.modifiers = modifiers;
    }

    /// Hold down up to six keys; unused slots are released.
    ///
    /// Keys past the sixth are dropped.
    pub fn set_keys(&mut self, keys: &[u8]) {
        if keys.len() > KEYBOARD_KEY_SLOTS {
            log::warn!("Dropping {} keys past the sixth", keys.len() - KEYBOARD_KEY_SLOTS);
        }
        self.keys = [0; KEYBOARD_KEY_SLOTS];
        for (slot, key) in self.keys.iter_mut().zip(keys) {
            *slot = *key;
        }
    }

    pub fn modifiers(&self) -> KeyboardModifiers {
        self.modifiers
    }

    pub fn keys(&self) -> &[u8; KEYBOARD_KEY_SLOTS] {
        &self.keys
    }

    /// `[modifiers, 0, key0..key5]`
    pub fn encode(&self) -> [u8; KEYBOARD_REPORT_LEN] {
        let mut report = [0u8; KEYBOARD_REPORT_LEN];
        report[0] = self.modifiers.bits();
        report[2..].copy_from_slice(&self.keys);
        report
    }
}

/// Deliver an output report write to the callback, if one is registered
pub(crate) fn dispatch_leds(callback: &mut Option<KeyboardOutputCallback>, value: &[u8]) {
    let leds = KeyboardLeds::from_bits_truncate(value.first().copied().unwrap_or(0));
    log::debug!("Keyboard output report from central: {:?}", leds);
    if let Some(callback) = callback.as_mut() {
        callback(leds);
    }
}

const KEYBOARD_SLOTS: HidSlots = HidSlots {
    information: "hid_information",
    report_map: "report_map",
    control_point: "control_point",
    input_report: "input_report",
    input_reference: "input_report.reference",
    output: Some(OutputSlots {
        report: "output_report",
        reference: "output_report.reference",
    }),
    protocol_mode: "protocol_mode",
};

/// Boot-style keyboard with an LED output report
#[derive(Default)]
pub struct Keyboard {
    state: KeyboardState,
    handles: Option<HidReportHandles>,
    output_callback: Option<KeyboardOutputCallback>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_modifiers(&mut self, modifiers: KeyboardModifiers) {
        self.state.set_modifiers(modifiers);
    }

    pub fn set_keys(&mut self, keys: &[u8]) {
        self.state.set_keys(keys);
    }

    /// Register the LED callback
    pub fn set_output_callback<F>(&mut self, callback: F)
    where
        F: FnMut(KeyboardLeds) + Send + 'static,
    {
        self.output_callback = Some(Box::new(callback));
    }

    pub fn clear_output_callback(&mut self) {
        self.output_callback = None;
    }

    pub fn state(&self) -> &KeyboardState {
        &self.state
    }

    pub fn input_report_handle(&self) -> Option<u16> {
        self.handles.map(|h| h.input_report)
    }

    pub fn output_report_handle(&self) -> Option<u16> {
        self.handles.and_then(|h| h.output_report)
    }
}

impl fmt::Debug for Keyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyboard")
            .field("state", &self.state)
            .field("handles", &self.handles)
            .field("output_callback", &self.output_callback.is_some())
            .finish()
    }
}

impl HidProfile for Keyboard {
    fn default_name(&self) -> &'static str {
        "Bluetooth Keyboard"
    }

    fn appearance(&self) -> u16 {
        APPEARANCE_KEYBOARD
    }

    fn hid_service(&self) -> ServiceDescriptor {
        KEYBOARD_SLOTS.append_to(ServiceDescriptor::new(HID_SERVICE_UUID))
    }

    fn report_map(&self) -> &'static [u8] {
        KEYBOARD_REPORT_MAP
    }

    fn assign_handles(&mut self, handles: &ServiceHandles, table: &mut CharacteristicTable) -> HidResult<()> {
        self.handles = Some(KEYBOARD_SLOTS.seed(
            handles,
            table,
            KEYBOARD_REPORT_MAP,
            KEYBOARD_REPORT_ID,
            &self.state.encode(),
        )?);
        Ok(())
    }

    fn release_handles(&mut self) {
        self.handles = None;
    }

    fn encode_report(&self) -> Option<InputReport> {
        self.input_report_handle().map(|handle| InputReport {
            handle,
            description: "HID input report",
            data: self.state.encode().to_vec(),
        })
    }

    fn intercept_write(&mut self, handle: u16, value: &[u8]) -> WriteDisposition {
        if self.output_report_handle() == Some(handle) {
            dispatch_leds(&mut self.output_callback, value);
        }
        WriteDisposition::Delegate
    }
}
