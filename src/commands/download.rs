//! # download 命令实现
//!
//! 按 CSV 清单逐个下载并校验 SHA-1，首个失败即中止。
//!
//! ## 功能
//! - 读取 `name,url,sha1` 清单
//! - 已存在的文件只校验不重下
//! - 校验失败不写入
//!
//! ## 依赖关系
//! - 使用 `cli/download.rs` 定义的参数
//! - 使用 `utils/download.rs`, `utils/output.rs`, `utils/progress.rs`

use crate::cli::download::DownloadArgs;
use crate::error::{DevdoError, Result};
use crate::utils::download::{DownloadStatus, HttpFetcher};
use crate::utils::{output, progress};

use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;

/// 清单中的一行
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    /// 目标文件名，空则取 URL 最后一段
    #[serde(default)]
    pub name: String,
    pub url: String,
    pub sha1: String,
}

impl ManifestEntry {
    pub fn file_name(&self) -> Result<String> {
        let name = self.name.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        self.url
            .split(['?', '#'])
            .next()
            .and_then(|u| u.rsplit('/').next())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                DevdoError::InvalidArgument(format!("Can't derive a file name from '{}'", self.url))
            })
    }
}

/// 执行 download 命令
pub fn execute(args: DownloadArgs) -> Result<()> {
    output::print_header("Verified Downloads");

    let file = fs::File::open(&args.manifest).map_err(|e| DevdoError::FileReadError {
        path: args.manifest.display().to_string(),
        source: e,
    })?;
    let entries = read_manifest(file)?;
    output::print_info(&format!(
        "Loaded {} entries from '{}'",
        entries.len(),
        args.manifest.display()
    ));

    let fetcher = HttpFetcher::new()?;
    let mut downloaded = 0;
    for entry in &entries {
        if download_entry(&fetcher, entry, &args.dest)? != DownloadStatus::Existing {
            downloaded += 1;
        }
    }

    output::print_separator();
    output::print_done(&format!(
        "{} files verified, {} downloaded",
        entries.len(),
        downloaded
    ));
    Ok(())
}

/// 解析清单（首行为表头）
pub fn read_manifest<R: Read>(reader: R) -> Result<Vec<ManifestEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);
    let mut entries = Vec::new();
    for row in rdr.deserialize() {
        let entry: ManifestEntry = row?;
        if entry.sha1.is_empty() {
            return Err(DevdoError::InvalidArgument(format!(
                "Missing sha1 for '{}'",
                entry.url
            )));
        }
        entries.push(entry);
    }
    Ok(entries)
}

fn download_entry(fetcher: &HttpFetcher, entry: &ManifestEntry, dest_dir: &Path) -> Result<DownloadStatus> {
    let dest = dest_dir.join(entry.file_name()?);
    let pb = progress::create_spinner(&format!("Downloading {}", entry.url));
    let status = fetcher.download(&entry.url, &dest, Some(entry.sha1.as_str()));
    pb.finish_and_clear();

    match status? {
        DownloadStatus::Existing => {
            output::print_skip(&format!("{} already exists, sha1 ok", dest.display()));
            Ok(DownloadStatus::Existing)
        }
        DownloadStatus::Downloaded { bytes } => {
            output::print_success(&format!("{} ({} bytes)", dest.display(), bytes));
            Ok(DownloadStatus::Downloaded { bytes })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_manifest() {
        let csv = "\
name,url,sha1
# release artifacts
SumatraPDF.zip, https://example.com/rel/SumatraPDF-3.2.zip, ABCDEF
,https://example.com/rel/tool.exe?x=1,123456
";
        let entries = read_manifest(csv.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].file_name().unwrap(), "SumatraPDF.zip");
        assert_eq!(entries[0].url, "https://example.com/rel/SumatraPDF-3.2.zip");
        assert_eq!(entries[0].sha1, "ABCDEF");
        assert_eq!(entries[1].file_name().unwrap(), "tool.exe");
    }

    #[test]
    fn test_missing_hash_is_error() {
        let csv = "name,url,sha1\na.zip,https://example.com/a.zip,\n";
        assert!(read_manifest(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_unusable_url_name() {
        let entry = ManifestEntry {
            name: String::new(),
            url: "https://example.com/".to_string(),
            sha1: "00".to_string(),
        };
        assert!(entry.file_name().is_err());
    }
}
