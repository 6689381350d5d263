//! GATT service description and characteristic storage
//!
//! A profile describes its services as [`ServiceDescriptor`] trees. The stack
//! registers them and hands back raw handles, which are bound to the named
//! slots of each descriptor before anything is written to the
//! [`CharacteristicTable`].

pub mod constants;
pub mod schema;
pub mod services;
pub mod table;
pub mod types;


pub use schema::{bind_services, CharacteristicSlot, DescriptorSlot, ServiceDescriptor, ServiceHandles};
pub use services::StandardHandles;
pub use table::{CharacteristicEntry, CharacteristicTable};
pub use types::{CharacteristicFlags, Uuid};
