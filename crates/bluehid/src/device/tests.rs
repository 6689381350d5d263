//! Unit tests for the device lifecycle and event dispatch

use super::*;
use crate::att::AttStatus;
use crate::hid::{GenericDevice, HidProfile, Joystick, Keyboard, KeyboardLeds, Mouse};
use crate::secrets::{MemorySecretStore, Secrets};
use crate::smp::{ConnectionSecurityStatus, IoCapability, PasskeyAction, PasskeyResponse};
use crate::stack::{BleStack, SimulatedStack};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const CONN: u16 = 64;
const ADDR: [u8; 6] = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55];

fn device<P: HidProfile>(profile: P) -> (HidDevice<SimulatedStack, P>, MemorySecretStore) {
    let store = MemorySecretStore::new();
    let config = DeviceConfig::for_profile(&profile);
    let device = HidDevice::with_config(SimulatedStack::new(), profile, config, store.clone());
    (device, store)
}

fn connect<P: HidProfile>(device: &mut HidDevice<SimulatedStack, P>) {
    device.handle_event(StackEvent::CentralConnect {
        conn_handle: CONN,
        addr_type: 0,
        addr: ADDR,
    });
}

fn disconnect<P: HidProfile>(device: &mut HidDevice<SimulatedStack, P>) {
    device.handle_event(StackEvent::CentralDisconnect {
        conn_handle: CONN,
        addr_type: 0,
        addr: ADDR,
    });
}

fn secure() -> ConnectionSecurityStatus {
    ConnectionSecurityStatus {
        encrypted: true,
        authenticated: true,
        bonded: true,
        key_size: 16,
    }
}

fn read<P: HidProfile>(device: &mut HidDevice<SimulatedStack, P>, conn_handle: u16, attr_handle: u16) -> EventResponse {
    device.handle_event(StackEvent::GattsReadRequest {
        conn_handle,
        attr_handle,
    })
}

#[test]
fn test_start_registers_and_goes_idle() {
    let (mut device, _) = device(Mouse::new());
    assert_eq!(device.state(), DeviceState::Stopped);

    device.start().unwrap();
    assert_eq!(device.state(), DeviceState::Idle);
    assert!(device.is_running());
    assert!(device.stack().is_active());

    // 7 DIS + 2 battery + 6 DID + 6 HID
    assert_eq!(device.table().len(), 21);

    let config = device.stack().config().unwrap();
    assert_eq!(config.gap_name, "Bluetooth Mouse");
    assert!(config.mitm);
    assert_eq!(config.io_capability, IoCapability::NoInputOutput);
}

#[test]
fn test_start_writes_table_through_to_stack() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();

    for (handle, entry) in device.table().iter() {
        assert_eq!(device.stack().attribute(handle), Some(entry.value.as_slice()));
    }
    let battery = device.battery_handle().unwrap();
    assert_eq!(device.stack().attribute(battery), Some(&[100u8][..]));
}

#[test]
fn test_start_twice_is_noop() {
    let (mut device, _) = device(Mouse::new());
    let transitions = Arc::new(AtomicUsize::new(0));
    let counter = transitions.clone();
    device.set_state_change_callback(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    device.start().unwrap();
    device.start().unwrap();
    assert_eq!(transitions.load(Ordering::SeqCst), 1);
}

#[test]
fn test_registration_mismatch_is_fatal() {
    let (mut device, _) = device(Mouse::new());
    device.stack_mut().override_registration(vec![vec![1, 2, 3]]);

    let err = device.start().unwrap_err();
    assert!(err.is_layout_error());
    assert_eq!(device.state(), DeviceState::Stopped);
    assert!(device.table().is_empty());
    assert!(!device.stack().is_active());
    assert!(device.battery_handle().is_none());
}

#[test]
fn test_handle_arity_mismatch_is_fatal() {
    let (mut device, _) = device(Keyboard::new());
    // Four services, but the HID service is one handle short
    let mut handles: Vec<Vec<u16>> = device
        .services()
        .iter()
        .map(|s| (0..s.handle_count() as u16).collect())
        .collect();
    handles[3].pop();
    device.stack_mut().override_registration(handles);

    assert!(device.start().unwrap_err().is_layout_error());
    assert_eq!(device.state(), DeviceState::Stopped);
    assert!(device.profile().input_report_handle().is_none());
}

#[test]
fn test_advertising_lifecycle() {
    let (mut device, _) = device(Mouse::new());

    // No-op while stopped
    device.start_advertising().unwrap();
    assert_eq!(device.state(), DeviceState::Stopped);
    assert!(device.stack().advertising().is_none());

    device.start().unwrap();
    device.start_advertising().unwrap();
    assert!(device.is_advertising());
    let params = device.stack().advertising().unwrap();
    assert_eq!(params.name, "Bluetooth Mouse");
    assert_eq!(params.appearance, 962);
    assert_eq!(params.services, vec![crate::gatt::Uuid(0x1812)]);

    device.stop_advertising().unwrap();
    assert_eq!(device.state(), DeviceState::Idle);
    assert!(device.stack().advertising().is_none());
}

#[test]
fn test_connect_and_disconnect() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    device.start_advertising().unwrap();

    connect(&mut device);
    assert!(device.is_connected());
    assert_eq!(device.connection_handle(), Some(CONN));

    device.handle_event(StackEvent::EncryptionUpdate {
        conn_handle: CONN,
        status: secure(),
    });
    assert_eq!(device.security_status(), secure());

    disconnect(&mut device);
    assert_eq!(device.state(), DeviceState::Idle);
    assert_eq!(device.connection_handle(), None);
    assert_eq!(device.security_status(), ConnectionSecurityStatus::default());
}

#[test]
fn test_connect_ignored_while_stopped() {
    let (mut device, _) = device(Mouse::new());
    connect(&mut device);
    assert_eq!(device.state(), DeviceState::Stopped);
    assert_eq!(device.connection_handle(), None);
}

#[test]
fn test_start_advertising_refused_while_connected() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    connect(&mut device);

    let err = device.start_advertising().unwrap_err();
    assert!(matches!(err, crate::error::HidError::InvalidState(DeviceState::Connected)));
    assert!(device.is_connected());

    // Stopping advertising keeps the connection
    device.stop_advertising().unwrap();
    assert!(device.is_connected());
}

#[test]
fn test_stop_from_connected_disconnects() {
    let (mut device, _) = device(Mouse::new());
    let states = Arc::new(Mutex::new(Vec::new()));
    device.start().unwrap();
    device.start_advertising().unwrap();
    connect(&mut device);

    device.stop();
    assert_eq!(device.state(), DeviceState::Stopped);
    assert_eq!(device.stack().disconnects(), &[CONN]);
    assert!(!device.stack().is_active());
    assert!(device.table().is_empty());
    assert_eq!(device.connection_handle(), None);

    // A late disconnect event does not revive the device
    let sink = states.clone();
    device.set_state_change_callback(move || sink.lock().unwrap().push(()));
    disconnect(&mut device);
    assert_eq!(device.state(), DeviceState::Stopped);
    assert!(states.lock().unwrap().is_empty());
}

#[test]
fn test_stop_from_advertising_stops_advertising() {
    let (mut device, _) = device(Joystick::new());
    device.start().unwrap();
    device.start_advertising().unwrap();

    device.stop();
    assert_eq!(device.state(), DeviceState::Stopped);
    assert!(device.stack().advertising().is_none());
    assert!(device.stack().disconnects().is_empty());
}

#[test]
fn test_stop_survives_failing_stack() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    connect(&mut device);
    device.stack_mut().set_failing(true);

    device.stop();
    assert_eq!(device.state(), DeviceState::Stopped);
    assert_eq!(device.connection_handle(), None);
    assert!(device.table().is_empty());
}

#[test]
fn test_stop_when_stopped_is_noop() {
    let (mut device, _) = device(Mouse::new());
    device.stop();
    assert_eq!(device.state(), DeviceState::Stopped);
}

#[test]
fn test_restart_after_stop() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    device.stop();
    device.start().unwrap();
    assert_eq!(device.state(), DeviceState::Idle);
    assert_eq!(device.table().len(), 21);
}

#[test]
fn test_state_callback_sees_new_state() {
    let (mut device, _) = device(Mouse::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    device.set_state_change_callback(move || sink.lock().unwrap().push(()));

    device.start().unwrap();
    device.start_advertising().unwrap();
    connect(&mut device);
    disconnect(&mut device);
    device.stop();

    // Idle, Advertising, Connected, Idle, Stopped
    assert_eq!(seen.lock().unwrap().len(), 5);
}

#[test]
fn test_state_callback_skips_unchanged_state() {
    let (mut device, _) = device(Mouse::new());
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = seen.clone();
    device.set_state_change_callback(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    device.start().unwrap();
    device.stop_advertising().unwrap();
    assert_eq!(device.state(), DeviceState::Idle);
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn test_notify_requires_connection() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    device.profile_mut().set_axes(10, -20);

    device.notify_hid_report().unwrap();
    assert!(device.stack().notifications().is_empty());

    connect(&mut device);
    device.profile_mut().set_buttons(true, false, true);
    device.profile_mut().set_wheel(5);
    device.notify_hid_report().unwrap();

    let handle = device.profile().report_handle().unwrap();
    let notification = device.stack().last_notification().unwrap();
    assert_eq!(notification.conn_handle, CONN);
    assert_eq!(notification.attr_handle, handle);
    assert_eq!(notification.value, vec![0x05, 0x0A, 0xEC, 0x05]);
    assert_eq!(device.table().value(handle), Some(&[0x05, 0x0A, 0xEC, 0x05][..]));
}

#[test]
fn test_generic_notifies_both_reports() {
    let (mut device, _) = device(GenericDevice::new());
    device.start().unwrap();
    connect(&mut device);

    device.profile_mut().set_keys(&[0x04]);
    device.profile_mut().set_axes(3, 4);
    device.notify_hid_report().unwrap();
    device.notify_mouse_report().unwrap();

    let notifications = device.stack().notifications();
    assert_eq!(notifications.len(), 2);
    assert_eq!(Some(notifications[0].attr_handle), device.profile().keyboard_report_handle());
    assert_eq!(notifications[0].value, vec![0, 0, 0x04, 0, 0, 0, 0, 0]);
    assert_eq!(Some(notifications[1].attr_handle), device.profile().mouse_report_handle());
    assert_eq!(notifications[1].value, vec![0, 3, 4, 0]);
}

#[test]
fn test_notify_keeps_stack_attribute_in_sync() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    connect(&mut device);

    device.profile_mut().set_axes(10, -20);
    device.notify_hid_report().unwrap();

    let handle = device.profile().report_handle().unwrap();
    assert_eq!(device.table().value(handle), Some(&[0, 10, 236, 0][..]));
    assert_eq!(device.stack().attribute(handle), device.table().value(handle));

    device.set_battery_level(42);
    let battery = device.battery_handle().unwrap();
    assert_eq!(device.stack().attribute(battery), Some(&[42u8][..]));
    assert_eq!(device.stack().attribute(battery), device.table().value(battery));
}

#[test]
fn test_battery_level() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    let handle = device.battery_handle().unwrap();

    device.set_battery_level(150);
    assert_eq!(device.battery_level(), 100);
    device.set_battery_level(-5);
    assert_eq!(device.battery_level(), 0);
    device.set_battery_level(42);
    assert_eq!(device.table().value(handle), Some(&[42u8][..]));

    device.notify_battery_level().unwrap();
    assert!(device.stack().notifications().is_empty());

    connect(&mut device);
    device.notify_battery_level().unwrap();
    let notification = device.stack().last_notification().unwrap();
    assert_eq!(notification.attr_handle, handle);
    assert_eq!(notification.value, vec![42]);
}

#[test]
fn test_read_gate_through_dispatcher() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    connect(&mut device);
    let handle = device.profile().report_handle().unwrap();

    assert_eq!(
        read(&mut device, CONN, 9999),
        EventResponse::Status(AttStatus::InvalidHandle)
    );
    assert_eq!(
        read(&mut device, CONN + 1, handle),
        EventResponse::Status(AttStatus::ReadNotPermitted)
    );
    assert_eq!(
        read(&mut device, CONN, handle),
        EventResponse::Status(AttStatus::InsufficientAuthorization)
    );

    device.handle_event(StackEvent::EncryptionUpdate {
        conn_handle: CONN,
        status: ConnectionSecurityStatus {
            key_size: 7,
            ..secure()
        },
    });
    assert_eq!(
        read(&mut device, CONN, handle),
        EventResponse::Status(AttStatus::InsufficientEncryption)
    );

    device.handle_event(StackEvent::EncryptionUpdate {
        conn_handle: CONN,
        status: secure(),
    });
    assert_eq!(read(&mut device, CONN, handle), EventResponse::Status(AttStatus::NoError));
}

#[test]
fn test_read_refused_after_disconnect() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    connect(&mut device);
    device.handle_event(StackEvent::EncryptionUpdate {
        conn_handle: CONN,
        status: secure(),
    });
    let handle = device.profile().report_handle().unwrap();
    disconnect(&mut device);

    assert_eq!(
        read(&mut device, CONN, handle),
        EventResponse::Status(AttStatus::ReadNotPermitted)
    );
}

#[test]
fn test_write_updates_table() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    connect(&mut device);
    let battery = device.battery_handle().unwrap();

    device.stack_mut().peer_write(battery, &[77]);
    let response = device.handle_event(StackEvent::GattsWrite {
        conn_handle: CONN,
        attr_handle: battery,
    });
    assert_eq!(response, EventResponse::Status(AttStatus::NoError));
    assert_eq!(device.table().value(battery), Some(&[77u8][..]));
}

#[test]
fn test_write_to_unknown_handle() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    let before = device.table().len();

    let response = device.handle_event(StackEvent::GattsWrite {
        conn_handle: CONN,
        attr_handle: 9999,
    });
    assert_eq!(response, EventResponse::Status(AttStatus::AttributeNotFound));
    assert_eq!(device.table().len(), before);
}

#[test]
fn test_write_rejected_when_value_unreadable() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    let battery = device.battery_handle().unwrap();
    device.stack_mut().set_failing(true);

    let response = device.handle_event(StackEvent::GattsWrite {
        conn_handle: CONN,
        attr_handle: battery,
    });
    assert_eq!(response, EventResponse::Status(AttStatus::WriteRequestRejected));
    assert_eq!(device.table().value(battery), Some(&[100u8][..]));
}

#[test]
fn test_keyboard_output_report_write() {
    let leds = Arc::new(Mutex::new(Vec::new()));
    let sink = leds.clone();
    let mut keyboard = Keyboard::new();
    keyboard.set_output_callback(move |state| sink.lock().unwrap().push(state));

    let (mut device, _) = device(keyboard);
    device.start().unwrap();
    connect(&mut device);
    let output = device.profile().output_report_handle().unwrap();

    device.stack_mut().peer_write(output, &[0x02]);
    let response = device.handle_event(StackEvent::GattsWrite {
        conn_handle: CONN,
        attr_handle: output,
    });

    assert_eq!(response, EventResponse::Status(AttStatus::NoError));
    assert_eq!(*leds.lock().unwrap(), vec![KeyboardLeds::CAPS_LOCK]);
    assert_eq!(device.table().value(output), Some(&[0x02u8][..]));
}

#[test]
fn test_mtu_exchange() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    assert_eq!(device.mtu(), 23);

    device.handle_event(StackEvent::MtuExchanged { conn_handle: CONN, mtu: 185 });
    assert_eq!(device.mtu(), 185);
    assert_eq!(device.stack().mtu(), Some(185));
}

#[test]
fn test_connection_update_records_handle() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    connect(&mut device);
    device.handle_event(StackEvent::ConnectionUpdate {
        conn_handle: CONN + 1,
        interval: 6,
        latency: 0,
        supervision_timeout: 200,
        status: 0,
    });
    assert_eq!(device.connection_handle(), Some(CONN + 1));
}

#[test]
fn test_indicate_done_changes_nothing() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    connect(&mut device);
    device.handle_event(StackEvent::EncryptionUpdate {
        conn_handle: CONN,
        status: secure(),
    });
    let before = device.security_status();

    let response = device.handle_event(StackEvent::IndicateDone {
        conn_handle: CONN,
        value_handle: device.battery_handle().unwrap(),
        status: 0,
    });
    assert_eq!(response, EventResponse::None);
    assert_eq!(device.state(), DeviceState::Connected);
    assert_eq!(device.connection_handle(), Some(CONN));
    assert_eq!(device.security_status(), before);
    assert_eq!(before, secure());
}

#[test]
fn test_unknown_event_is_ignored() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    let response = device.handle_event(StackEvent::Unknown(200));
    assert_eq!(response, EventResponse::None);
    assert_eq!(device.state(), DeviceState::Idle);
}

#[test]
fn test_passkey_defaults_reject() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    connect(&mut device);

    for action in [PasskeyAction::NumericComparison, PasskeyAction::Input, PasskeyAction::Display] {
        device.handle_event(StackEvent::PasskeyAction {
            conn_handle: CONN,
            action,
            passkey: 123456,
        });
    }

    let replies = device.stack().passkey_replies();
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0].response, PasskeyResponse::Confirm(false));
    assert_eq!(replies[1].response, PasskeyResponse::Passkey(None));
    assert_eq!(replies[2].response, PasskeyResponse::Passkey(Some(1234)));
}

#[test]
fn test_passkey_callbacks() {
    let (mut device, _) = device(Mouse::new());
    device.set_comparison_callback(|number| number == 123456);
    device.set_passkey_callback(|| Some(999999));
    device.config_mut().passkey = 4321;
    device.start().unwrap();
    connect(&mut device);

    for action in [PasskeyAction::NumericComparison, PasskeyAction::Input, PasskeyAction::Display] {
        device.handle_event(StackEvent::PasskeyAction {
            conn_handle: CONN,
            action,
            passkey: 123456,
        });
    }

    let replies = device.stack().passkey_replies();
    assert_eq!(replies[0].response, PasskeyResponse::Confirm(true));
    assert_eq!(replies[1].response, PasskeyResponse::Passkey(Some(999999)));
    assert_eq!(replies[2].response, PasskeyResponse::Passkey(Some(4321)));
}

#[test]
fn test_unknown_passkey_action_not_answered() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    connect(&mut device);
    device.handle_event(StackEvent::PasskeyAction {
        conn_handle: CONN,
        action: PasskeyAction::Unknown(9),
        passkey: 0,
    });
    assert!(device.stack().passkey_replies().is_empty());
}

#[test]
fn test_set_and_get_secret() {
    let (mut device, store) = device(Mouse::new());

    let response = device.handle_event(StackEvent::SetSecret {
        sec_type: 1,
        key: vec![0xAA],
        value: Some(vec![0x01, 0x02]),
    });
    assert_eq!(response, EventResponse::SecretStored(true));
    assert_eq!(store.save_count(), 1);
    assert_eq!(store.saved().unwrap().get(1, &[0xAA]), Some(&[0x01, 0x02][..]));

    let by_key = device.handle_event(StackEvent::GetSecret {
        sec_type: 1,
        index: 0,
        key: Some(vec![0xAA]),
    });
    assert_eq!(by_key, EventResponse::Secret(Some(vec![0x01, 0x02])));

    let missing = device.handle_event(StackEvent::GetSecret {
        sec_type: 2,
        index: 0,
        key: Some(vec![0xAA]),
    });
    assert_eq!(missing, EventResponse::Secret(None));
}

#[test]
fn test_get_secret_by_index() {
    let (mut device, _) = device(Mouse::new());
    for (sec_type, key, value) in [(1u8, 0x10u8, 0xA0u8), (2, 0x20, 0xB0), (1, 0x30, 0xC0)] {
        device.handle_event(StackEvent::SetSecret {
            sec_type,
            key: vec![key],
            value: Some(vec![value]),
        });
    }

    let second = device.handle_event(StackEvent::GetSecret {
        sec_type: 1,
        index: 1,
        key: None,
    });
    assert_eq!(second, EventResponse::Secret(Some(vec![0xC0])));

    let past_end = device.handle_event(StackEvent::GetSecret {
        sec_type: 1,
        index: 2,
        key: None,
    });
    assert_eq!(past_end, EventResponse::Secret(None));
}

#[test]
fn test_delete_secret() {
    let (mut device, store) = device(Mouse::new());
    device.handle_event(StackEvent::SetSecret {
        sec_type: 1,
        key: vec![0xAA],
        value: Some(vec![0x01]),
    });

    let deleted = device.handle_event(StackEvent::SetSecret {
        sec_type: 1,
        key: vec![0xAA],
        value: None,
    });
    assert_eq!(deleted, EventResponse::SecretStored(true));
    assert!(device.secrets().is_empty());

    // Deleting again reports the key was absent but still persists
    let absent = device.handle_event(StackEvent::SetSecret {
        sec_type: 1,
        key: vec![0xAA],
        value: Some(Vec::new()),
    });
    assert_eq!(absent, EventResponse::SecretStored(false));
    assert_eq!(store.save_count(), 3);
    assert!(store.saved().unwrap().is_empty());
}

#[test]
fn test_failed_save_keeps_memory_state() {
    let (mut device, store) = device(Mouse::new());
    store.set_fail_saves(true);

    let response = device.handle_event(StackEvent::SetSecret {
        sec_type: 1,
        key: vec![0xAA],
        value: Some(vec![0x01]),
    });
    assert_eq!(response, EventResponse::SecretStored(true));
    assert_eq!(device.secrets().get(1, &[0xAA]), Some(&[0x01][..]));
    assert!(store.saved().is_none());

    // Dispatch carries on with the in-memory copy
    let response = device.handle_event(StackEvent::GetSecret {
        sec_type: 1,
        index: 0,
        key: Some(vec![0xAA]),
    });
    assert_eq!(response, EventResponse::Secret(Some(vec![0x01])));
}

#[test]
fn test_secrets_loaded_at_construction() {
    let mut secrets = Secrets::new();
    secrets.insert(3, &[0x01], &[0x02]);
    let store = MemorySecretStore::with_secrets(secrets);

    let profile = Mouse::new();
    let config = DeviceConfig::for_profile(&profile);
    let mut device = HidDevice::with_config(SimulatedStack::new(), profile, config, store);

    assert_eq!(device.secrets().len(), 1);
    let response = device.handle_event(StackEvent::GetSecret {
        sec_type: 3,
        index: 0,
        key: None,
    });
    assert_eq!(response, EventResponse::Secret(Some(vec![0x02])));
}

#[test]
fn test_unreadable_store_starts_empty() {
    // Nothing saved yet, so the memory store fails to load
    let (device, _) = device(Mouse::new());
    assert!(device.secrets().is_empty());
}

#[test]
fn test_config_defaults() {
    let config = DeviceConfig::for_profile(&GenericDevice::new());
    assert_eq!(config.device_name, "Bluetooth GenericDevice");
    assert_eq!(config.appearance, 961);
    assert_eq!(config.battery_level, 100);
    assert!(config.bond);
    assert!(config.le_secure);
    assert_eq!(config.passkey, 1234);
    assert_eq!(config.pnp.vendor_id, 0xFFFF);

    let policy = config.security_policy();
    assert!(policy.bond && policy.le_secure);

    let mut insecure = config.clone();
    insecure.le_secure = false;
    assert!(!insecure.stack_config().mitm);
}

#[test]
fn test_query_helpers() {
    let (mut device, _) = device(Keyboard::new());
    device.start().unwrap();
    assert_eq!(device.device_name(), "Bluetooth Keyboard");
    assert_eq!(device.appearance(), 961);
    assert_eq!(device.service_uuids().len(), 4);
    assert_eq!(device.services().len(), 4);
}

#[test]
fn test_device_state_display() {
    assert_eq!(DeviceState::Advertising.to_string(), "ADVERTISING");
    assert_eq!(DeviceState::default(), DeviceState::Stopped);
}

#[test]
fn test_event_codes() {
    assert_eq!(StackEvent::Unknown(77).code(), 77);
    assert_eq!(
        StackEvent::GattsWrite { conn_handle: 0, attr_handle: 0 }.code(),
        events::EVENT_GATTS_WRITE
    );
}

#[test]
fn test_notify_propagates_stack_error() {
    let (mut device, _) = device(Mouse::new());
    device.start().unwrap();
    connect(&mut device);
    device.stack_mut().set_active(false).unwrap();

    assert!(device.notify_hid_report().is_err());
}
