//! Tag Queries

/// 读取在场标签并按其数据块内容查找记录
///
/// 无参数：要匹配的 key 来自物理标签本身
#[derive(Debug, Clone, Copy)]
pub struct GetScannedTag;
