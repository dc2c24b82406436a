//! 舵机驱动适配器
//!
//! 默认构建仅含 Mock；hardware feature 启用真实 PWM 后端

mod mock_servo;
#[cfg(feature = "hardware")]
mod pwm_servo;

pub use mock_servo::MockServoDriver;
#[cfg(feature = "hardware")]
pub use pwm_servo::{PwmServoDriver, PwmServoDriverConfig};
