//! 领域层
//!
//! Tag Context: RFID 标签领域模型

pub mod tag;
