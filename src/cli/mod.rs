//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `format`: clang-format 批量格式化
//! - `download`: 按清单下载并校验
//! - `slug`: 生成 URL slug
//! - `website`: 网站部署
//! - `list-exes`: 列出可执行文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: format, download, slug, website, exes

pub mod download;
pub mod exes;
pub mod format;
pub mod slug;
pub mod website;

use clap::{Parser, Subcommand};

/// devdo - 项目开发辅助工具
#[derive(Parser)]
#[command(name = "devdo")]
#[command(version)]
#[command(about = "Developer automation: source formatting, verified downloads, website deployment", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Reformat C/C++ sources in place with clang-format
    Format(format::FormatArgs),

    /// Download files listed in a CSV manifest and verify their sha1
    Download(download::DownloadArgs),

    /// Turn a title into a URL-safe slug
    Slug(slug::SlugArgs),

    /// Deploy or build the website
    Website(website::WebsiteArgs),

    /// List .exe/.bat/.cmd files under a directory
    ListExes(exes::ExesArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_website_action() {
        let cli = Cli::try_parse_from(["devdo", "website", "deploy-cloudflare", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Website(args) => {
                assert_eq!(args.action, website::WebsiteAction::DeployCloudflare);
                assert!(args.dry_run);
            }
            _ => panic!("expected website"),
        }
    }

    #[test]
    fn test_slug_requires_text() {
        assert!(Cli::try_parse_from(["devdo", "slug"]).is_err());
    }
}
