//! # list-exes 命令实现
//!
//! 递归列出目录下的 .exe / .bat / .cmd，用于查找 signtool 等工具的位置。
//!
//! ## 依赖关系
//! - 使用 `cli/exes.rs` 定义的参数
//! - 使用 `walkdir`, `utils/output.rs`

use crate::cli::exes::ExesArgs;
use crate::error::Result;
use crate::utils::output;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 执行 list-exes 命令
pub fn execute(args: ExesArgs) -> Result<()> {
    if !args.dir.is_dir() {
        output::print_warning(&format!("Directory '{}' doesn't exist", args.dir.display()));
        return Ok(());
    }

    output::print_header(&format!("Exe files in '{}'", args.dir.display()));
    let files = list_exes(&args.dir);
    for f in &files {
        println!("{}", f.display());
    }

    let remembered = remembered(&files, &args.effective_remember());
    if !remembered.is_empty() {
        output::print_separator();
        for f in remembered {
            output::print_success(&f.display().to_string());
        }
    }
    Ok(())
}

fn is_exe(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_lowercase().as_str(), "exe" | "bat" | "cmd"))
        .unwrap_or(false)
}

/// 递归收集可执行文件，返回相对 `dir` 的路径（排序）
pub fn list_exes(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_exe(e.path()))
        .map(|e| e.path().strip_prefix(dir).unwrap_or(e.path()).to_path_buf())
        .collect();
    files.sort();
    files
}

/// 名字包含任一子串（不区分大小写）的文件
pub fn remembered<'a>(files: &'a [PathBuf], needles: &[String]) -> Vec<&'a PathBuf> {
    let needles: Vec<String> = needles.iter().map(|n| n.to_lowercase()).collect();
    files
        .iter()
        .filter(|f| {
            let s = f.to_string_lossy().to_lowercase();
            needles.iter().any(|n| s.contains(n.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_and_remember() {
        let dir = TempDir::new().unwrap();
        let sdk = dir.path().join("Windows Kits/10/bin/x64");
        fs::create_dir_all(&sdk).unwrap();
        for name in ["SignTool.exe", "makecert.EXE", "readme.txt", "vcvars.bat", "env.cmd"] {
            fs::write(sdk.join(name), "").unwrap();
        }

        let files = list_exes(dir.path());
        let names: Vec<String> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 4);
        assert!(!names.contains(&"readme.txt".to_string()));
        assert!(files.iter().all(|f| f.is_relative()));

        let hits = remembered(&files, &["signtool.exe".to_string()]);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].ends_with("SignTool.exe"));
    }
}
