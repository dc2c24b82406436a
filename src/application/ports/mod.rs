//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod repositories;
mod rfid_device;
mod servo_driver;

pub use repositories::{RepositoryError, TagRecord, TagRepositoryPort};
pub use rfid_device::{HardwareError, RfidDevicePort, TagScan};
pub use servo_driver::{ServoDriverPort, ServoError};
