/// Example showing key reports and host LED updates on a keyboard
use bluehid::stack::BleStack;
use bluehid::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("HID Keyboard Example");
    println!("--------------------");

    let mut keyboard = Keyboard::new();
    keyboard.set_output_callback(|leds: KeyboardLeds| {
        println!("Host set LEDs: {:?}", leds);
    });

    let config = DeviceConfig::for_profile(&keyboard);
    let mut device = HidDevice::with_config(SimulatedStack::new(), keyboard, config, MemorySecretStore::new());
    device.set_passkey_callback(|| Some(123456));

    device.start()?;
    device.start_advertising()?;
    device.handle_event(StackEvent::CentralConnect {
        conn_handle: 7,
        addr_type: 1,
        addr: [0x10, 0x20, 0x30, 0x40, 0x50, 0x60],
    });

    // Shift + 'h', release, 'i', release
    device.profile_mut().set_modifiers(KeyboardModifiers::LEFT_SHIFT);
    device.profile_mut().set_keys(&[0x0B]);
    device.notify_hid_report()?;
    device.profile_mut().set_modifiers(KeyboardModifiers::empty());
    device.profile_mut().set_keys(&[]);
    device.notify_hid_report()?;
    device.profile_mut().set_keys(&[0x0C]);
    device.notify_hid_report()?;
    device.profile_mut().set_keys(&[]);
    device.notify_hid_report()?;

    // The host turns caps lock on
    if let Some(output) = device.profile().output_report_handle() {
        device.stack_mut().gatts_write(output, &[KeyboardLeds::CAPS_LOCK.bits()])?;
        let status = device.handle_event(StackEvent::GattsWrite {
            conn_handle: 7,
            attr_handle: output,
        });
        println!("Output report write: {:?}", status);
    }

    for notification in device.stack().notifications() {
        println!("Report: {}", hex::encode(&notification.value));
    }

    device.stop();
    Ok(())
}
