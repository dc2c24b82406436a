//! Mock Servo Driver - 测试与无硬件环境下的舵机
//!
//! 记录收到的所有脉冲指令值，可供断言

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::application::ports::{ServoDriverPort, ServoError};

/// Mock Servo Driver
#[derive(Default)]
pub struct MockServoDriver {
    pulses: Mutex<Vec<u8>>,
    fail: AtomicBool,
}

impl MockServoDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已收到的全部指令值
    pub fn pulses(&self) -> Vec<u8> {
        self.pulses.lock().unwrap().clone()
    }

    /// 让后续指令返回驱动错误
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ServoDriverPort for MockServoDriver {
    async fn pulse(&self, value: u8) -> Result<(), ServoError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ServoError::CommandFailed("mock driver failure".to_string()));
        }

        tracing::debug!(value, "MockServoDriver: recording pulse");
        self.pulses.lock().unwrap().push(value);
        Ok(())
    }
}
