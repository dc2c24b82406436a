//! RFID 读写器适配器
//!
//! 默认构建仅含 Mock；hardware feature 启用真实 MFRC522 后端

#[cfg(feature = "hardware")]
mod mfrc522_device;
mod mock_rfid_device;

#[cfg(feature = "hardware")]
pub use mfrc522_device::{Mfrc522Device, Mfrc522DeviceConfig};
pub use mock_rfid_device::MockRfidDevice;
