//! # website 命令实现
//!
//! 网站部署与 Cloudflare 构建步骤。
//!
//! ## 功能
//! - Netlify 部署 / 本地预览
//! - Cloudflare：要求工作区干净，把部署分支 rebase 到主分支后强推
//! - Cloudflare 构建：在部署分支上把发布文件下载到 `website/dl2`
//!
//! ## 依赖关系
//! - 使用 `cli/website.rs` 定义的参数
//! - 使用 `utils/sequence.rs`, `utils/git.rs`, `utils/download.rs`

use crate::cli::website::{WebsiteAction, WebsiteArgs};
use crate::config;
use crate::error::Result;
use crate::utils::download::{DownloadStatus, HttpFetcher};
use crate::utils::sequence::CommandSequence;
use crate::utils::{git, output};

use std::path::Path;
use std::time::Instant;

/// 执行 website 命令
pub fn execute(args: WebsiteArgs) -> Result<()> {
    output::print_header(&format!("Website: {}", args.action));

    match args.action {
        WebsiteAction::BuildCloudflare => build_cloudflare(&args),
        WebsiteAction::DeployCloudflare if !args.dry_run => {
            git::ensure_clean(&args.root)?;
            run_sequence(&args, plan(args.action, &args.site))
        }
        action => run_sequence(&args, plan(action, &args.site)),
    }
}

fn run_sequence(args: &WebsiteArgs, seq: CommandSequence) -> Result<()> {
    let seq = seq.in_dir(&args.root);
    if args.dry_run {
        seq.print();
        return Ok(());
    }
    let done = seq.run()?;
    output::print_done(&format!("{} finished ({} commands)", args.action, done));
    Ok(())
}

/// 各操作对应的命令序列（构建步骤除外）
pub fn plan(action: WebsiteAction, site: &str) -> CommandSequence {
    let dir = config::WEBSITE_DIR;
    match action {
        WebsiteAction::DeployProd => CommandSequence::new().step(
            "netlify",
            ["deploy", "--prod", "--open", "--dir", dir, "--site", site],
        ),
        WebsiteAction::DeployDev => CommandSequence::new()
            .step("netlify", ["deploy", "--open", "--dir", dir, "--site", site]),
        WebsiteAction::RunLocal => CommandSequence::new().step("netlify", ["dev", "--dir", dir]),
        WebsiteAction::DeployCloudflare => CommandSequence::new()
            .step("git", ["checkout", config::CLOUDFLARE_BRANCH])
            .step("git", ["rebase", config::MAIN_BRANCH])
            .step("git", ["push", "--force"])
            .step("git", ["checkout", config::MAIN_BRANCH]),
        WebsiteAction::BuildCloudflare => CommandSequence::new(),
    }
}

/// Cloudflare 构建：只在部署分支上下载发布文件
fn build_cloudflare(args: &WebsiteArgs) -> Result<()> {
    let branch = git::current_branch(&args.root)?;
    output::print_info(&format!("Current branch '{}'", branch));
    if branch != config::CLOUDFLARE_BRANCH {
        output::print_skip(&format!(
            "Not downloading release files because not on '{}' branch",
            config::CLOUDFLARE_BRANCH
        ));
        return Ok(());
    }

    let dl_dir = args.root.join(config::WEBSITE_DIR).join("dl2");
    let files = config::release_file_names(&args.release);
    if args.dry_run {
        for name in &files {
            output::print_info(&format!(
                "[DRY] {}{} -> {}",
                config::RELEASE_BASE_URI,
                name,
                dl_dir.join(name).display()
            ));
        }
        return Ok(());
    }

    let fetcher = HttpFetcher::new()?;
    for name in &files {
        fetch_release_file(&fetcher, name, &dl_dir)?;
    }
    output::print_done(&format!("Release files ready in '{}'", dl_dir.display()));
    Ok(())
}

fn fetch_release_file(fetcher: &HttpFetcher, name: &str, dl_dir: &Path) -> Result<()> {
    let uri = format!("{}{}", config::RELEASE_BASE_URI, name);
    let dest = dl_dir.join(name);
    let started = Instant::now();
    match fetcher.download(&uri, &dest, None)? {
        DownloadStatus::Existing => {
            output::print_skip(&format!("{} already exists", dest.display()));
        }
        DownloadStatus::Downloaded { bytes } => {
            output::print_success(&format!(
                "Downloaded {} ({} bytes) in {:.1}s",
                uri,
                bytes,
                started.elapsed().as_secs_f64()
            ));
        }
    }
    Ok(())
}
