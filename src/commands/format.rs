//! # format 命令实现
//!
//! 用 clang-format 原地格式化项目源码。
//!
//! ## 功能
//! - 定位 clang-format（只查找一次）
//! - 展开所有模式、按排除列表过滤（派发前完成，任何错误都中止整批）
//! - 有界并发执行 `clang-format -i -style=file <path>`
//! - 任一文件失败即整批失败
//!
//! ## 依赖关系
//! - 使用 `cli/format.rs` 定义的参数
//! - 使用 `batch/`, `utils/locate.rs`, `utils/process.rs`, `utils/output.rs`

use crate::batch::{
    relative_display, BatchResult, BatchRunner, Denylist, FileCollector, FormatPlan, ProcessLog,
};
use crate::cli::format::FormatArgs;
use crate::config;
use crate::error::{DevdoError, Result};
use crate::utils::locate::ToolLocator;
use crate::utils::{output, process};

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::Command;
use tabled::{Table, Tabled};

/// 计划汇总行
#[derive(Debug, Clone, Tabled)]
struct PlanRow {
    #[tabled(rename = "Pattern")]
    pattern: String,
    #[tabled(rename = "Format")]
    scheduled: usize,
    #[tabled(rename = "Skipped")]
    skipped: usize,
}

/// 执行 format 命令
pub fn execute(args: FormatArgs) -> Result<()> {
    output::print_header("Formatting Sources");

    if !args.root.is_dir() {
        return Err(DevdoError::DirectoryNotFound {
            path: args.root.display().to_string(),
        });
    }

    let locator = match &args.tool {
        Some(path) => ToolLocator::preset(config::CLANG_FORMAT, path),
        None => ToolLocator::new(config::CLANG_FORMAT, config::CLANG_FORMAT_FALLBACK),
    };
    let collector = FileCollector::new(args.root.clone())
        .with_patterns(args.effective_patterns())
        .with_denylist(Denylist::new(args.effective_denylist()));
    let runner = BatchRunner::new(args.jobs).with_progress(std::io::stderr().is_terminal());

    if args.dry_run {
        let plan = collector.collect()?;
        report_plan(&args.root, &plan);
        for file in plan.scheduled() {
            output::print_info(&format!("[DRY] {}", relative_display(&args.root, &file)));
        }
        return Ok(());
    }

    let (plan, result) = format_project(&locator, &collector, &runner, &args.root)?;

    output::print_separator();
    output::print_done(&format!(
        "Formatted {}/{} files ({} skipped) with {} jobs in {:.1}s",
        result.succeeded,
        result.submitted,
        plan.skipped_count(),
        runner.jobs(),
        result.elapsed.as_secs_f64()
    ));

    Ok(())
}

/// 定位工具、生成计划并执行；返回计划与执行统计
pub fn format_project(
    locator: &ToolLocator,
    collector: &FileCollector,
    runner: &BatchRunner,
    root: &Path,
) -> Result<(FormatPlan, BatchResult)> {
    let tool = locator.resolve()?;
    output::print_info(&format!("Using {}", tool.display()));

    let plan = collector.collect()?;
    report_plan(root, &plan);

    let files: Vec<PathBuf> = plan.scheduled();
    if files.is_empty() {
        output::print_warning("No files to format.");
        return Ok((plan, BatchResult::default()));
    }

    let result = runner.run(&files, |path| format_file(tool, path))?;
    Ok((plan, result))
}

/// 原地格式化单个文件，样式取自文件所在项目的 .clang-format
pub fn format_file(tool: &Path, path: &Path) -> Result<ProcessLog> {
    let mut cmd = Command::new(tool);
    cmd.args(["-i", "-style=file"]).arg(path);
    let output = process::run_combined(&mut cmd)?;
    Ok(ProcessLog {
        command: process::command_line(&cmd),
        output,
    })
}

/// 被排除文件的跳过通知
fn skip_notices(root: &Path, plan: &FormatPlan) -> Vec<String> {
    plan.skipped()
        .map(|skipped| {
            format!(
                "{} (matches '{}')",
                relative_display(root, &skipped.path),
                skipped.entry
            )
        })
        .collect()
}

/// 打印跳过通知与计划汇总
fn report_plan(root: &Path, plan: &FormatPlan) {
    for notice in skip_notices(root, plan) {
        output::print_skip(&notice);
    }

    let rows: Vec<PlanRow> = plan
        .groups
        .iter()
        .filter(|g| !g.scheduled.is_empty() || !g.skipped.is_empty())
        .map(|g| PlanRow {
            pattern: g.pattern.clone(),
            scheduled: g.scheduled.len(),
            skipped: g.skipped.len(),
        })
        .collect();
    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }

    output::print_info(&format!(
        "{} files to format, {} skipped",
        plan.scheduled_count(),
        plan.skipped_count()
    ));
}
