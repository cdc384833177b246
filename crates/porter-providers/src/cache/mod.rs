//! Cache region providers

pub mod memory;
pub mod null;

pub use memory::InMemoryRegionManager;
pub use null::NullRegionManager;
