use crate::domain::entities::Device;
use crate::domain::errors::StorageError;
use crate::ports::outbound::DeviceStorage;
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Volatile in-memory device storage.
///
/// Readers share a `parking_lot::RwLock`; writers are exclusive. The lock is
/// eventually fair, so a steady stream of readers cannot starve a writer.
/// Records are replaced whole, never mutated in place.
#[derive(Default)]
pub struct InMemoryDeviceStorage {
    devices: RwLock<HashMap<String, Device>>,
}

impl InMemoryDeviceStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored devices.
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }
}

impl DeviceStorage for InMemoryDeviceStorage {
    fn save(&self, device: Device) -> Result<(), StorageError> {
        match self.devices.write().entry(device.id.clone()) {
            Entry::Occupied(_) => Err(StorageError::AlreadyExists { id: device.id }),
            Entry::Vacant(slot) => {
                slot.insert(device);
                Ok(())
            }
        }
    }

    fn update(&self, device: Device) -> Result<(), StorageError> {
        self.devices.write().insert(device.id.clone(), device);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Device, StorageError> {
        self.devices
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound { id: id.to_string() })
    }

    fn list_all(&self) -> Result<Vec<Device>, StorageError> {
        Ok(self.devices.read().values().cloned().collect())
    }
}
