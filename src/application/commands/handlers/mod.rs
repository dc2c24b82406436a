//! Command Handlers

mod servo_handlers;
mod tag_handlers;

pub use servo_handlers::PulseServoHandler;
pub use tag_handlers::CreateTagHandler;
