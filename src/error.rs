//! # 统一错误处理模块
//!
//! 定义 devdo 的所有错误类型，使用 `thiserror` 派生。
//! 所有错误都是致命的：一路 `?` 传播到 `main`，打印后以状态码 1 退出。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::path::PathBuf;
use thiserror::Error;

/// devdo 统一错误类型
#[derive(Error, Debug)]
pub enum DevdoError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 模式展开错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to expand pattern '{pattern}' at {path}")]
    PatternExpansion {
        pattern: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("Didn't find {tool} in PATH or at {fallback}")]
    ToolNotFound { tool: String, fallback: PathBuf },

    #[error("External command '{command}' not found")]
    CommandNotFound { command: String },

    #[error("Failed to start '{command}'")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("External command failed ({status}): {command}\n{output}")]
    CommandFailed {
        command: String,
        status: String,
        output: String,
    },

    #[error("Git working tree in '{path}' is not clean:\n{status}")]
    DirtyWorkingTree { path: String, status: String },

    // ─────────────────────────────────────────────────────────────
    // 下载错误
    // ─────────────────────────────────────────────────────────────
    #[error("HTTP request for '{uri}' failed: {reason}")]
    Http { uri: String, reason: String },

    #[error("{subject} has sha1 of {actual} and we expected {expected}")]
    ChecksumMismatch {
        subject: String,
        expected: String,
        actual: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数 / 清单错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DevdoError>;
