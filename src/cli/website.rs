//! # website 子命令 CLI 定义
//!
//! 网站部署：Netlify 与 Cloudflare（git 分支）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/website.rs`

use crate::config;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 网站操作
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum WebsiteAction {
    /// Deploy to Netlify production
    DeployProd,
    /// Deploy a Netlify draft
    DeployDev,
    /// Serve the website locally with netlify dev
    RunLocal,
    /// Rebase the Cloudflare branch on the main branch and force-push it
    DeployCloudflare,
    /// Cloudflare build step: fetch release files into website/dl2
    BuildCloudflare,
}

impl std::fmt::Display for WebsiteAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebsiteAction::DeployProd => write!(f, "deploy-prod"),
            WebsiteAction::DeployDev => write!(f, "deploy-dev"),
            WebsiteAction::RunLocal => write!(f, "run-local"),
            WebsiteAction::DeployCloudflare => write!(f, "deploy-cloudflare"),
            WebsiteAction::BuildCloudflare => write!(f, "build-cloudflare"),
        }
    }
}

/// website 子命令参数
#[derive(Args, Debug)]
pub struct WebsiteArgs {
    /// What to do
    #[arg(value_enum)]
    pub action: WebsiteAction,

    /// Repository root
    #[arg(long, env = "DEVDO_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Netlify site id
    #[arg(long, env = "NETLIFY_SITE_ID", default_value = config::NETLIFY_SITE_ID)]
    pub site: String,

    /// Release version whose files build-cloudflare fetches
    #[arg(long, default_value = config::RELEASE_VERSION)]
    pub release: String,

    /// Print the commands without running them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
