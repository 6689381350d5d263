/// Example driving a mouse through a full session on the simulated stack
use bluehid::smp::ConnectionSecurityStatus;
use bluehid::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("HID Mouse Example");
    println!("-----------------");

    let profile = Mouse::new();
    let config = DeviceConfig::for_profile(&profile);
    let mut device = HidDevice::with_config(SimulatedStack::new(), profile, config, MemorySecretStore::new());

    device.set_state_change_callback(|| println!("State changed"));

    device.start()?;
    println!("Started {} ({} services)", device.device_name(), device.service_uuids().len());
    for (handle, entry) in device.table().iter() {
        println!("  {:3}  {:<22} {}", handle, entry.description, hex::encode(&entry.value));
    }

    device.start_advertising()?;
    println!("Advertising: {}", device.is_advertising());

    // The stack reports a central connecting and pairing
    device.handle_event(StackEvent::CentralConnect {
        conn_handle: 1,
        addr_type: 0,
        addr: [0xC0, 0xFF, 0xEE, 0x00, 0x00, 0x01],
    });
    device.handle_event(StackEvent::EncryptionUpdate {
        conn_handle: 1,
        status: ConnectionSecurityStatus {
            encrypted: true,
            authenticated: false,
            bonded: true,
            key_size: 16,
        },
    });
    println!("Connected: {}", device.is_connected());

    // Move in a square, then click
    for (x, y) in [(20, 0), (0, 20), (-20, 0), (0, -20)] {
        device.profile_mut().set_axes(x, y);
        device.notify_hid_report()?;
    }
    device.profile_mut().set_axes(0, 0);
    device.profile_mut().set_buttons(true, false, false);
    device.notify_hid_report()?;
    device.profile_mut().set_buttons(false, false, false);
    device.notify_hid_report()?;

    device.set_battery_level(87);
    device.notify_battery_level()?;

    for notification in device.stack().notifications() {
        println!(
            "Notified handle {}: {}",
            notification.attr_handle,
            hex::encode(&notification.value)
        );
    }

    let report = device.profile().report_handle().unwrap_or_default();
    let status = device.handle_event(StackEvent::GattsReadRequest {
        conn_handle: 1,
        attr_handle: report,
    });
    println!("Read of report handle {}: {:?}", report, status);

    device.stop();
    println!("Stopped: {}", device.state());
    Ok(())
}
