//! Application State
//!
//! 持有端口实例与所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Handlers
    CreateTagHandler,
    GetScannedTagHandler,
    PulseServoHandler,
    // Ports
    RfidDevicePort,
    ServoDriverPort,
    TagRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub tag_repo: Arc<dyn TagRepositoryPort>,
    pub rfid: Arc<dyn RfidDevicePort>,
    pub servo: Arc<dyn ServoDriverPort>,

    /// /servo/ 端点下发的固定脉冲指令值
    pub servo_pulse_value: u8,

    // ========== Command Handlers ==========
    pub create_tag_handler: CreateTagHandler,
    pub pulse_servo_handler: PulseServoHandler,

    // ========== Query Handlers ==========
    pub get_scanned_tag_handler: GetScannedTagHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        tag_repo: Arc<dyn TagRepositoryPort>,
        rfid: Arc<dyn RfidDevicePort>,
        servo: Arc<dyn ServoDriverPort>,
        servo_pulse_value: u8,
    ) -> Self {
        Self {
            // Ports
            tag_repo: tag_repo.clone(),
            rfid: rfid.clone(),
            servo: servo.clone(),
            servo_pulse_value,

            // Command handlers
            create_tag_handler: CreateTagHandler::new(tag_repo.clone(), rfid.clone()),
            pulse_servo_handler: PulseServoHandler::new(servo.clone()),

            // Query handlers
            get_scanned_tag_handler: GetScannedTagHandler::new(tag_repo, rfid),
        }
    }
}
