//! # URL slug 生成
//!
//! 把任意标题转换为 URL 安全的短串。
//!
//! ## 依赖关系
//! - 被 `commands/slug.rs` 使用
//! - 无外部模块依赖

/// slug 最大长度
pub const MAX_SLUG_LEN: usize = 128;

/// URL 中允许的字符；空白映射为 `-`，其他字符丢弃
fn url_char(c: char) -> Option<char> {
    match c {
        'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => Some(c),
        c if c.is_whitespace() => Some('-'),
        _ => None,
    }
}

/// 生成 slug：去掉首尾空白，非字母数字的字符不连续重复，截断到 128 字符
pub fn urlify(title: &str) -> String {
    let mut res = String::with_capacity(title.len().min(MAX_SLUG_LEN));
    for c in title.trim().chars().filter_map(url_char) {
        if res.ends_with(c) && !c.is_ascii_alphanumeric() {
            continue;
        }
        res.push(c);
    }
    // 只包含 ASCII，按字节截断安全
    res.truncate(MAX_SLUG_LEN);
    res
}
