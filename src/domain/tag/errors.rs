//! Tag Context - 领域错误

use thiserror::Error;

/// Tag key 校验错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagKeyError {
    #[error("Tag key must be 8 characters, got {0}")]
    InvalidLength(usize),

    #[error("Tag key contains invalid character: {0:?}")]
    InvalidCharacter(char),
}
