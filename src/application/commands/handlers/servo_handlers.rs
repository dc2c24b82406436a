//! Servo Command Handlers

use std::sync::Arc;

use crate::application::commands::PulseServo;
use crate::application::error::ApplicationError;
use crate::application::ports::ServoDriverPort;

/// PulseServo Handler
pub struct PulseServoHandler {
    servo: Arc<dyn ServoDriverPort>,
}

impl PulseServoHandler {
    pub fn new(servo: Arc<dyn ServoDriverPort>) -> Self {
        Self { servo }
    }

    pub async fn handle(&self, command: PulseServo) -> Result<(), ApplicationError> {
        self.servo.pulse(command.value).await?;

        tracing::info!(value = command.value, "Servo pulsed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infrastructure::hardware::servo::MockServoDriver;

    #[tokio::test]
    async fn test_pulse_forwards_command_value() {
        let servo = Arc::new(MockServoDriver::new());
        let handler = PulseServoHandler::new(servo.clone());

        handler.handle(PulseServo { value: 10 }).await.unwrap();

        assert_eq!(servo.pulses(), vec![10]);
    }

    #[tokio::test]
    async fn test_pulse_surfaces_driver_failure() {
        let servo = Arc::new(MockServoDriver::new());
        servo.set_fail(true);
        let handler = PulseServoHandler::new(servo);

        let err = handler.handle(PulseServo { value: 10 }).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Servo(_)));
    }
}
