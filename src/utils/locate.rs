//! # 外部工具定位
//!
//! 按顺序查找可执行文件：搜索路径（默认 `PATH`）→ 固定安装位置 → 失败。
//! 结果缓存在 `ToolLocator` 内，之后的 `resolve` 不再重新查找。
//!
//! ## 依赖关系
//! - 被 `commands/format.rs` 使用
//! - 使用 `which` crate

use crate::error::{DevdoError, Result};

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// 外部工具定位器
#[derive(Debug)]
pub struct ToolLocator {
    /// 工具名
    name: String,
    /// 找不到时检查的固定路径
    fallback: PathBuf,
    /// 自定义搜索路径，`None` 表示使用 `PATH`
    search_path: Option<OsString>,
    resolved: OnceLock<PathBuf>,
}

impl ToolLocator {
    pub fn new(name: impl Into<String>, fallback: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            fallback: fallback.into(),
            search_path: None,
            resolved: OnceLock::new(),
        }
    }

    /// 已知路径，跳过查找
    pub fn preset(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let locator = Self::new(name, path.clone());
        let _ = locator.resolved.set(path);
        locator
    }

    /// 使用自定义搜索路径（格式同 `PATH`）
    #[cfg(test)]
    pub fn with_search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    /// 返回工具路径，首次调用时查找并缓存
    pub fn resolve(&self) -> Result<&Path> {
        if let Some(path) = self.resolved.get() {
            return Ok(path);
        }
        let found = self.search()?;
        Ok(self.resolved.get_or_init(|| found))
    }

    fn search(&self) -> Result<PathBuf> {
        let in_path = match &self.search_path {
            Some(paths) => std::env::current_dir()
                .ok()
                .and_then(|cwd| which::which_in(&self.name, Some(paths), cwd).ok()),
            None => which::which(&self.name).ok(),
        };
        if let Some(path) = in_path {
            return Ok(path);
        }

        if self.fallback.is_file() {
            return Ok(self.fallback.clone());
        }

        Err(DevdoError::ToolNotFound {
            tool: self.name.clone(),
            fallback: self.fallback.clone(),
        })
    }
}
