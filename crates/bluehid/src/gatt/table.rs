//! Characteristic table
//!
//! Maps attribute handles to a human-readable label and the current value.
//! Entries are created when registered handles are seeded and are only ever
//! updated afterwards, never removed while the server is active.

use std::collections::BTreeMap;

/// Label and current value of one attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacteristicEntry {
    /// Label used in logs
    pub description: &'static str,
    /// Current raw value
    pub value: Vec<u8>,
}

/// Handle-keyed table of the attributes this device serves
#[derive(Debug, Default, Clone)]
pub struct CharacteristicTable {
    entries: BTreeMap<u16, CharacteristicEntry>,
}

impl CharacteristicTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace the entry for `handle`
    pub fn insert(&mut self, handle: u16, description: &'static str, value: impl Into<Vec<u8>>) {
        self.entries.insert(
            handle,
            CharacteristicEntry {
                description,
                value: value.into(),
            },
        );
    }

    /// Replace the value of a known handle.
    ///
    /// Returns false, leaving the table untouched, if the handle is unknown.
    pub fn update(&mut self, handle: u16, value: &[u8]) -> bool {
        match self.entries.get_mut(&handle) {
            Some(entry) => {
                entry.value = value.to_vec();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, handle: u16) -> Option<&CharacteristicEntry> {
        self.entries.get(&handle)
    }

    pub fn value(&self, handle: u16) -> Option<&[u8]> {
        self.entries.get(&handle).map(|e| e.value.as_slice())
    }

    pub fn description(&self, handle: u16) -> Option<&'static str> {
        self.entries.get(&handle).map(|e| e.description)
    }

    pub fn contains(&self, handle: u16) -> bool {
        self.entries.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in handle order
    pub fn iter(&self) -> impl Iterator<Item = (u16, &CharacteristicEntry)> {
        self.entries.iter().map(|(h, e)| (*h, e))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
