//! Tag Context - Value Objects

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::errors::TagKeyError;

/// Tag key 长度
pub const TAG_KEY_LEN: usize = 8;

/// Tag key 字符表 (A-Z, 0-9, 共 36 个符号)
pub const KEY_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// 标签唯一标识
///
/// 写入物理标签的 8 位随机 key。均匀采样不保证唯一，
/// 唯一性在持久化时由 Tag Store 的唯一索引保证。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagKey(String);

impl TagKey {
    /// 随机生成 key（从字符表均匀采样，有放回）
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let key = (0..TAG_KEY_LEN)
            .map(|_| KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())] as char)
            .collect();
        Self(key)
    }

    /// 校验并构造 key
    pub fn parse(key: impl Into<String>) -> Result<Self, TagKeyError> {
        let key = key.into();
        if key.chars().count() != TAG_KEY_LEN {
            return Err(TagKeyError::InvalidLength(key.chars().count()));
        }
        if let Some(c) = key
            .chars()
            .find(|c| !c.is_ascii_uppercase() && !c.is_ascii_digit())
        {
            return Err(TagKeyError::InvalidCharacter(c));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TagKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// MIFARE 数据块长度（单块 16 字节）
pub const BLOCK_LEN: usize = 16;

/// 物理标签数据块
///
/// 不变量: 恒为 16 字节。不足右侧补 ASCII 空格，超出截断。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPayload([u8; BLOCK_LEN]);

impl BlockPayload {
    /// 归一化文本为 16 字节块（总函数，确定性）
    pub fn from_text(text: &str) -> Self {
        let mut block = [b' '; BLOCK_LEN];
        let bytes = text.as_bytes();
        let n = bytes.len().min(BLOCK_LEN);
        block[..n].copy_from_slice(&bytes[..n]);
        Self(block)
    }

    pub fn from_bytes(bytes: [u8; BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }

    /// 解码为文本并去除补位空格
    pub fn to_trimmed_string(&self) -> String {
        String::from_utf8_lossy(&self.0).trim().to_string()
    }
}

impl From<&TagKey> for BlockPayload {
    fn from(key: &TagKey) -> Self {
        Self::from_text(key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_key_length_and_alphabet() {
        for _ in 0..100 {
            let key = TagKey::random();
            assert_eq!(key.as_str().len(), TAG_KEY_LEN);
            assert!(key
                .as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_parse_valid_key() {
        let key = TagKey::parse("XJ29KQ7T").unwrap();
        assert_eq!(key.as_str(), "XJ29KQ7T");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            TagKey::parse("ABC"),
            Err(TagKeyError::InvalidLength(3))
        );
        assert_eq!(
            TagKey::parse("ABCDEFGH1"),
            Err(TagKeyError::InvalidLength(9))
        );
    }

    #[test]
    fn test_parse_rejects_invalid_characters() {
        assert_eq!(
            TagKey::parse("abcdefgh"),
            Err(TagKeyError::InvalidCharacter('a'))
        );
        assert_eq!(
            TagKey::parse("AB-29KQ7"),
            Err(TagKeyError::InvalidCharacter('-'))
        );
    }

    #[test]
    fn test_payload_pads_short_text() {
        let payload = BlockPayload::from_text("XJ29KQ7T");
        assert_eq!(payload.as_bytes().len(), BLOCK_LEN);
        assert_eq!(payload.as_bytes(), b"XJ29KQ7T        ");
    }

    #[test]
    fn test_payload_truncates_long_text() {
        let payload = BlockPayload::from_text("0123456789ABCDEFGHIJ");
        assert_eq!(payload.as_bytes(), b"0123456789ABCDEF");
    }

    #[test]
    fn test_payload_exact_length_unchanged() {
        let payload = BlockPayload::from_text("0123456789ABCDEF");
        assert_eq!(payload.as_bytes(), b"0123456789ABCDEF");
    }

    #[test]
    fn test_payload_trim_roundtrip() {
        let key = TagKey::parse("XJ29KQ7T").unwrap();
        let payload = BlockPayload::from(&key);
        assert_eq!(payload.to_trimmed_string(), "XJ29KQ7T");
    }
}
