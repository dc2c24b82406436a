//! Tag Context - RFID 标签上下文

mod errors;
mod value_objects;

pub use errors::TagKeyError;
pub use value_objects::{BlockPayload, TagKey, BLOCK_LEN, KEY_ALPHABET, TAG_KEY_LEN};
