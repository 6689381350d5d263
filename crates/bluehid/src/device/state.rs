//! Device lifecycle state

use std::fmt;

/// Callback fired after every state change
pub type StateChangeCallback = Box<dyn FnMut() + Send + 'static>;

/// Lifecycle state of a HID device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceState {
    /// Radio off, no services registered
    #[default]
    Stopped,
    /// Services registered, not advertising
    Idle,
    Advertising,
    /// A central is connected
    Connected,
}

impl DeviceState {
    /// Whether services are registered
    pub fn is_running(&self) -> bool {
        !matches!(self, Self::Stopped)
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "STOPPED"),
            Self::Idle => write!(f, "IDLE"),
            Self::Advertising => write!(f, "ADVERTISING"),
            Self::Connected => write!(f, "CONNECTED"),
        }
    }
}

/// Current state plus the observer notified on every transition
#[derive(Default)]
pub struct StateMachine {
    state: DeviceState,
    on_change: Option<StateChangeCallback>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Replace the observer
    pub fn set_callback(&mut self, callback: Option<StateChangeCallback>) {
        self.on_change = callback;
    }

    /// Move to `state`, notifying the observer only if the state changed
    pub fn transition(&mut self, state: DeviceState) {
        if self.state == state {
            return;
        }
        log::info!("Device state {} -> {}", self.state, state);
        self.state = state;
        if let Some(callback) = self.on_change.as_mut() {
            callback();
        }
    }
}

impl fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("state", &self.state)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
