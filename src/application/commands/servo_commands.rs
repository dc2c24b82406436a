//! Servo Commands

/// 触发一次舵机脉冲
#[derive(Debug, Clone, Copy)]
pub struct PulseServo {
    /// 下发给驱动的指令值
    pub value: u8,
}
