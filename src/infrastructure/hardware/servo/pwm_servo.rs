//! PWM Servo Driver - 树莓派硬件 PWM 舵机
//!
//! 指令值线性映射为标准 50Hz 舵机脉宽（500-2500us），
//! 输出保持 hold_ms 后停止。PWM 句柄按作用域持有，退出即释放。

use async_trait::async_trait;
use rppal::pwm::{Channel, Polarity, Pwm};
use std::time::Duration;
use tokio::sync::Mutex;

use crate::application::ports::{ServoDriverPort, ServoError};

/// 50Hz 舵机周期
const PERIOD: Duration = Duration::from_millis(20);

/// 脉宽区间（微秒）
const PULSE_MIN_US: u64 = 500;
const PULSE_MAX_US: u64 = 2500;

/// 指令值上界，对应舵机满行程
const VALUE_MAX: u8 = 180;

/// PWM 舵机配置
#[derive(Debug, Clone)]
pub struct PwmServoDriverConfig {
    /// 硬件 PWM 通道（0 或 1）
    pub channel: u8,
    /// 脉冲保持时长（毫秒）
    pub hold_ms: u64,
}

impl Default for PwmServoDriverConfig {
    fn default() -> Self {
        Self {
            channel: 0,
            hold_ms: 500,
        }
    }
}

/// PWM Servo Driver
pub struct PwmServoDriver {
    config: PwmServoDriverConfig,
    /// 串行化物理访问
    hw_lock: Mutex<()>,
}

impl PwmServoDriver {
    pub fn new(config: PwmServoDriverConfig) -> Self {
        tracing::info!(
            channel = config.channel,
            hold_ms = config.hold_ms,
            "PwmServoDriver initialized"
        );
        Self {
            config,
            hw_lock: Mutex::new(()),
        }
    }
}

/// 指令值映射到脉宽，超出上界截断
fn pulse_width(value: u8) -> Duration {
    let value = value.min(VALUE_MAX) as u64;
    Duration::from_micros(PULSE_MIN_US + value * (PULSE_MAX_US - PULSE_MIN_US) / VALUE_MAX as u64)
}

fn pulse_blocking(config: &PwmServoDriverConfig, value: u8) -> Result<(), ServoError> {
    let channel = match config.channel {
        0 => Channel::Pwm0,
        1 => Channel::Pwm1,
        other => {
            return Err(ServoError::DriverUnavailable(format!(
                "Unknown PWM channel: {}",
                other
            )))
        }
    };

    let pwm = Pwm::with_period(channel, PERIOD, pulse_width(value), Polarity::Normal, true)
        .map_err(|e| ServoError::DriverUnavailable(e.to_string()))?;

    std::thread::sleep(Duration::from_millis(config.hold_ms));

    pwm.disable()
        .map_err(|e| ServoError::CommandFailed(e.to_string()))?;

    Ok(())
}

#[async_trait]
impl ServoDriverPort for PwmServoDriver {
    async fn pulse(&self, value: u8) -> Result<(), ServoError> {
        let _guard = self.hw_lock.lock().await;
        let config = self.config.clone();

        tokio::task::spawn_blocking(move || pulse_blocking(&config, value))
            .await
            .map_err(|e| ServoError::DriverUnavailable(e.to_string()))??;

        tracing::debug!(value, "Servo pulse applied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_width_mapping() {
        assert_eq!(pulse_width(0), Duration::from_micros(500));
        assert_eq!(pulse_width(90), Duration::from_micros(1500));
        assert_eq!(pulse_width(180), Duration::from_micros(2500));
        // 超出上界截断
        assert_eq!(pulse_width(255), Duration::from_micros(2500));
    }
}
