//! # 默认配置
//!
//! 项目相关的常量：格式化模式、排除列表、工具路径、发布文件与站点 ID。
//! 命令行参数可以覆盖其中的大部分值。
//!
//! ## 依赖关系
//! - 被 `cli/` 作为默认值使用
//! - 被 `commands/` 使用

/// 格式化工具名（`which` 会在 Windows 上自动补全 `.exe`）
pub const CLANG_FORMAT: &str = "clang-format";

/// PATH 中找不到时检查的固定安装位置
#[cfg(windows)]
pub const CLANG_FORMAT_FALLBACK: &str =
    r"c:\Program Files (x86)\Microsoft Visual Studio\2019\Community\VC\Tools\Llvm\bin\clang-format.exe";
#[cfg(not(windows))]
pub const CLANG_FORMAT_FALLBACK: &str = "/usr/local/opt/llvm/bin/clang-format";

/// 需要格式化的文件（相对项目根目录，按顺序展开）
pub const FORMAT_PATTERNS: &[&str] = &[
    "src/*.cpp",
    "src/*.h",
    "src/mui/*.cpp",
    "src/mui/*.h",
    "src/utils/*.cpp",
    "src/utils/*.h",
    "src/utils/tests/*.cpp",
    "src/utils/tests/*.h",
    "src/wingui/*",
    "src/uia/*",
    "src/tools/*",
    "src/ifilter/*.cpp",
    "src/ifilter/*.h",
    "src/previewer/*.cpp",
    "src/previewer/*.h",
    "ext/mupdf_load_system_font.c",
];

/// 生成的或手工排版的文件，路径中包含任一子串即跳过（不区分大小写）
pub const FORMAT_DENYLIST: &[&str] = &[
    "resource.h",
    "Version.h",
    "Trans_sumatra_txt.cpp",
    "Trans_installer_txt.cpp",
];

/// 网站目录
pub const WEBSITE_DIR: &str = "website";

/// Netlify 站点 ID
pub const NETLIFY_SITE_ID: &str = "2963982f-7d39-439c-a7eb-0eb118efbd02";

/// Cloudflare 部署所用分支
pub const CLOUDFLARE_BRANCH: &str = "website-cf";

/// 主分支
pub const MAIN_BRANCH: &str = "master";

/// 发布文件所在的存储桶
pub const RELEASE_BASE_URI: &str =
    "https://kjkpubsf.sfo2.digitaloceanspaces.com/software/sumatrapdf/rel/";

/// 当前发布版本
pub const RELEASE_VERSION: &str = "3.2";

/// 发布文件名模板，`%VER%` 替换为版本号
pub const RELEASE_FILES: &[&str] = &[
    "SumatraPDF-%VER%-64-install.exe",
    "SumatraPDF-%VER%-64.zip",
    "SumatraPDF-%VER%-install.exe",
    "SumatraPDF-%VER%.zip",
];

/// `list-exes` 默认重点标记的文件
pub const REMEMBER_EXES: &[&str] = &["signtool.exe"];

/// 转为 `Vec<String>`，供 clap 默认值与覆盖使用
pub fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// 用版本号展开发布文件名
pub fn release_file_names(version: &str) -> Vec<String> {
    RELEASE_FILES
        .iter()
        .map(|f| f.replace("%VER%", version))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_file_names() {
        let names = release_file_names("3.2");
        assert_eq!(names.len(), 4);
        assert_eq!(names[0], "SumatraPDF-3.2-64-install.exe");
        assert_eq!(names[3], "SumatraPDF-3.2.zip");
    }

    #[test]
    fn test_default_patterns_are_valid_globs() {
        for p in FORMAT_PATTERNS {
            assert!(glob::Pattern::new(p).is_ok(), "bad pattern {}", p);
        }
    }
}
