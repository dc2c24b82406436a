//! CQRS Commands

pub mod handlers;
mod servo_commands;
mod tag_commands;

pub use servo_commands::PulseServo;
pub use tag_commands::CreateTag;
