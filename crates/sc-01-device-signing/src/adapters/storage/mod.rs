//! Storage Adapters
//!
//! Implementations of the `DeviceStorage` trait.

mod memory;

pub use memory::InMemoryDeviceStorage;
