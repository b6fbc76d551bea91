//! # 文件收集器
//!
//! 在项目根目录下展开 glob 模式，并按排除列表过滤，得到格式化计划。
//!
//! ## 功能
//! - 按顺序逐个展开模式，结果按模式顺序拼接，不做跨模式去重
//! - 排除列表按子串匹配（不区分大小写，匹配路径任意位置）
//! - 所有模式在派发之前全部展开；任何展开错误都使整批中止
//!
//! ## 依赖关系
//! - 被 `commands/format.rs` 调用
//! - 使用 `glob` 展开模式

use crate::error::{DevdoError, Result};

use std::path::{Path, PathBuf};

/// 排除列表（条目已转为小写）
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    entries: Vec<String>,
}

impl Denylist {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// 返回命中的条目；路径中任意位置包含条目即视为命中
    pub fn matched(&self, path: &str) -> Option<&str> {
        let path = path.to_lowercase();
        self.entries
            .iter()
            .find(|entry| path.contains(entry.as_str()))
            .map(|s| s.as_str())
    }
}

/// 被排除的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    /// 命中的排除条目
    pub entry: String,
}

/// 单个模式的展开结果
#[derive(Debug, Clone)]
pub struct PatternMatches {
    pub pattern: String,
    pub scheduled: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

/// 格式化计划：按模式顺序排列
#[derive(Debug, Clone, Default)]
pub struct FormatPlan {
    pub groups: Vec<PatternMatches>,
}

impl FormatPlan {
    /// 所有待格式化文件，按模式顺序
    pub fn scheduled(&self) -> Vec<PathBuf> {
        self.groups
            .iter()
            .flat_map(|g| g.scheduled.iter().cloned())
            .collect()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SkippedFile> {
        self.groups.iter().flat_map(|g| g.skipped.iter())
    }

    pub fn scheduled_count(&self) -> usize {
        self.groups.iter().map(|g| g.scheduled.len()).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.groups.iter().map(|g| g.skipped.len()).sum()
    }
}

/// 文件收集器
pub struct FileCollector {
    /// 项目根目录
    root: PathBuf,
    /// 匹配模式列表（相对根目录）
    patterns: Vec<String>,
    /// 排除列表
    denylist: Denylist,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            patterns: Vec::new(),
            denylist: Denylist::default(),
        }
    }

    /// 设置匹配模式
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// 设置排除列表
    pub fn with_denylist(mut self, denylist: Denylist) -> Self {
        self.denylist = denylist;
        self
    }

    /// 展开所有模式并生成计划
    pub fn collect(&self) -> Result<FormatPlan> {
        let mut plan = FormatPlan::default();

        for pattern in &self.patterns {
            let mut group = PatternMatches {
                pattern: pattern.clone(),
                scheduled: Vec::new(),
                skipped: Vec::new(),
            };

            for path in self.expand(pattern)? {
                let rel = relative_display(&self.root, &path);
                match self.denylist.matched(&rel) {
                    Some(entry) => group.skipped.push(SkippedFile {
                        path,
                        entry: entry.to_string(),
                    }),
                    None => group.scheduled.push(path),
                }
            }

            plan.groups.push(group);
        }

        Ok(plan)
    }

    /// 展开单个模式，只保留普通文件
    fn expand(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        // 先单独校验模式本身，错误信息里的位置才对应用户写的模式
        glob::Pattern::new(pattern).map_err(|e| DevdoError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let full = if Path::new(pattern).is_absolute() {
            pattern.to_string()
        } else {
            let root = glob::Pattern::escape(&self.root.to_string_lossy());
            format!("{}/{}", root.trim_end_matches(['/', '\\']), pattern)
        };

        let entries = glob::glob(&full).map_err(|e| DevdoError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| {
                let path = e.path().display().to_string();
                DevdoError::PatternExpansion {
                    pattern: pattern.to_string(),
                    path,
                    source: e.into(),
                }
            })?;
            if path.is_file() {
                files.push(path);
            }
        }

        Ok(files)
    }
}

/// 相对根目录的显示路径（不在根目录下时原样返回）
pub fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "int x;\n").unwrap();
    }

    fn names(root: &Path, paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| relative_display(root, p).replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_denylist_case_insensitive_substring() {
        let deny = Denylist::new(["resource.h"]);
        assert_eq!(deny.matched("src/Resource.H"), Some("resource.h"));
        // 匹配路径任意位置，不要求文件名相等
        assert_eq!(deny.matched("src/MyResource.h"), Some("resource.h"));
        assert_eq!(deny.matched("src/resource.h/Menu.cpp"), Some("resource.h"));
        // "resource" 之后不是 ".h"，不包含该子串
        assert_eq!(deny.matched("src/MyResourceHandler.h"), None);
        assert_eq!(deny.matched("src/main.cpp"), None);

        let deny = Denylist::new(["Version.h"]);
        assert_eq!(deny.matched("src/VERSION.h"), Some("version.h"));
        assert_eq!(deny.matched("src/PdfVersion.h.in"), Some("version.h"));
    }

    #[test]
    fn test_denylist_ignores_empty_entries() {
        let deny = Denylist::new(["", "resource.h"]);
        assert_eq!(deny.matched("src/main.cpp"), None);
    }

    #[test]
    fn test_collect_filters_denylisted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "x/a.cpp");
        touch(dir.path(), "x/b.cpp");
        touch(dir.path(), "x/resource.h.cpp");

        let plan = FileCollector::new(dir.path().to_path_buf())
            .with_patterns(["x/*.cpp"])
            .with_denylist(Denylist::new(["resource.h"]))
            .collect()
            .unwrap();

        assert_eq!(names(dir.path(), &plan.scheduled()), vec!["x/a.cpp", "x/b.cpp"]);
        let skipped: Vec<_> = plan.skipped().collect();
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].path.ends_with("resource.h.cpp"));
        assert_eq!(skipped[0].entry, "resource.h");
    }

    #[test]
    fn test_collect_keeps_pattern_order_without_dedup() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/b.h");
        touch(dir.path(), "src/a.cpp");

        let plan = FileCollector::new(dir.path().to_path_buf())
            .with_patterns(["src/*.h", "src/*.cpp", "src/*"])
            .collect()
            .unwrap();

        assert_eq!(
            names(dir.path(), &plan.scheduled()),
            vec!["src/b.h", "src/a.cpp", "src/a.cpp", "src/b.h"]
        );
        assert_eq!(plan.groups.len(), 3);
    }

    #[test]
    fn test_collect_skips_directories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/wingui/Layout.cpp");
        fs::create_dir_all(dir.path().join("src/wingui/nested")).unwrap();

        let plan = FileCollector::new(dir.path().to_path_buf())
            .with_patterns(["src/wingui/*"])
            .collect()
            .unwrap();

        assert_eq!(
            names(dir.path(), &plan.scheduled()),
            vec!["src/wingui/Layout.cpp"]
        );
    }

    #[test]
    fn test_collect_no_matches() {
        let dir = TempDir::new().unwrap();
        let plan = FileCollector::new(dir.path().to_path_buf())
            .with_patterns(["missing/*.cpp"])
            .collect()
            .unwrap();
        assert_eq!(plan.scheduled_count(), 0);
        assert_eq!(plan.skipped_count(), 0);
    }

    #[test]
    fn test_collect_invalid_pattern_is_fatal() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/one.x");

        let err = FileCollector::new(dir.path().to_path_buf())
            .with_patterns(["a/*.x", "b/***.y"])
            .collect()
            .unwrap_err();

        match err {
            DevdoError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "b/***.y"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_root_with_glob_metacharacters() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("proj[1]");
        touch(&root, "src/a.cpp");

        let plan = FileCollector::new(root.clone())
            .with_patterns(["src/*.cpp"])
            .collect()
            .unwrap();
        assert_eq!(names(&root, &plan.scheduled()), vec!["src/a.cpp"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_expansion_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        touch(dir.path(), "locked/a.cpp");
        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // root 不受目录权限限制
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = FileCollector::new(dir.path().to_path_buf())
            .with_patterns(["locked/*.cpp"])
            .collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result.unwrap_err() {
            DevdoError::PatternExpansion { pattern, path, source } => {
                assert_eq!(pattern, "locked/*.cpp");
                assert!(path.ends_with("locked"));
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
