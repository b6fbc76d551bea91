//! # 带校验的下载
//!
//! 下载文件并校验 SHA-1。目标已存在时只校验不重新下载，
//! 校验失败一律报错（已存在的文件不会被覆盖，下载的内容不会落盘）。
//!
//! ## 依赖关系
//! - 被 `commands/download.rs`, `commands/website.rs` 使用
//! - 使用 `reqwest`（blocking）, `sha1`, `hex`

use crate::error::{DevdoError, Result};

use sha1::{Digest, Sha1};
use std::fs;
use std::path::Path;

/// 下载结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStatus {
    /// 目标已存在（有期望哈希时已校验通过）
    Existing,
    /// 新下载并写入
    Downloaded { bytes: usize },
}

/// 计算数据的 SHA-1（小写十六进制）
pub fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// 计算文件的 SHA-1
pub fn file_sha1_hex(path: &Path) -> Result<String> {
    let data = fs::read(path).map_err(|e| DevdoError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(sha1_hex(&data))
}

fn check(subject: String, expected: &str, actual: String) -> Result<()> {
    if actual.eq_ignore_ascii_case(expected.trim()) {
        Ok(())
    } else {
        Err(DevdoError::ChecksumMismatch {
            subject,
            expected: expected.trim().to_lowercase(),
            actual,
        })
    }
}

/// 确保 `dest` 存在且内容符合期望哈希；需要时调用 `fetch` 获取内容
pub fn ensure_verified<F>(
    uri: &str,
    dest: &Path,
    expected: Option<&str>,
    fetch: F,
) -> Result<DownloadStatus>
where
    F: FnOnce(&str) -> Result<Vec<u8>>,
{
    if dest.exists() {
        if let Some(expected) = expected {
            let actual = file_sha1_hex(dest)?;
            check(
                format!("file '{}' exists but", dest.display()),
                expected,
                actual,
            )?;
        }
        return Ok(DownloadStatus::Existing);
    }

    let data = fetch(uri)?;
    if let Some(expected) = expected {
        check(
            format!("downloaded '{}' but it", uri),
            expected,
            sha1_hex(&data),
        )?;
    }

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DevdoError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    fs::write(dest, &data).map_err(|e| DevdoError::FileWriteError {
        path: dest.display().to_string(),
        source: e,
    })?;

    Ok(DownloadStatus::Downloaded { bytes: data.len() })
}

/// 阻塞式 HTTP 客户端
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("devdo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DevdoError::Http {
                uri: String::new(),
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// GET 并返回完整响应体；非 2xx 视为失败
    pub fn get(&self, uri: &str) -> Result<Vec<u8>> {
        let http_err = |reason: String| DevdoError::Http {
            uri: uri.to_string(),
            reason,
        };
        let resp = self
            .client
            .get(uri)
            .send()
            .map_err(|e| http_err(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(http_err(format!("status {}", resp.status())));
        }
        let bytes = resp.bytes().map_err(|e| http_err(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// 下载并校验
    pub fn download(&self, uri: &str, dest: &Path, expected: Option<&str>) -> Result<DownloadStatus> {
        ensure_verified(uri, dest, expected, |u| self.get(u))
    }
}
