//! # devdo - 项目开发辅助工具
//!
//! 把零散的开发脚本统一成单一可执行文件。
//!
//! ## 子命令
//! - `format`    - 用 clang-format 有界并发地原地格式化源码
//! - `download`  - 按清单下载文件并校验 SHA-1
//! - `slug`      - 生成 URL slug
//! - `website`   - 网站部署（Netlify / Cloudflare）
//! - `list-exes` - 列出目录下的可执行文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/     (模式展开、许可池、并行执行)
//!   ├── utils/      (输出、进程、下载、git 等工具)
//!   ├── config.rs   (默认配置)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    // 所有错误都是致命的：打印后以非零状态退出
    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
