//! 硬件适配器层
//!
//! - rfid: MFRC522 读写器 / Mock
//! - servo: PWM 舵机 / Mock

pub mod rfid;
pub mod servo;
