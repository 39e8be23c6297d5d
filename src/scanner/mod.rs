//! アートディレクトリの走査モジュール

use crate::error::{FinderError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 走査で見つかった1ファイル
#[derive(Debug, Clone)]
pub struct ArtFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// 既定で対象にする拡張子
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif"];

/// 特殊レイアウトカードのアートが置かれるサブディレクトリ名
pub const SPECIAL_LAYOUT_DIRS: &[&str] = &["Land", "Planeswalker", "Saga", "TF Front", "TF Back"];

/// ルート直下（と設定次第で特殊レイアウトのサブディレクトリ）を走査する
///
/// 拡張子は大文字小文字を区別せずに照合する。結果はファイル名で
/// ソートして返す。
pub fn scan_root(
    root: &Path,
    extensions: &[String],
    scan_special_layouts: bool,
) -> Result<Vec<ArtFile>> {
    if !root.exists() {
        return Err(FinderError::FolderNotFound(root.display().to_string()));
    }

    let mut files = Vec::new();
    collect_dir(root, extensions, &mut files);

    if scan_special_layouts {
        for sub in SPECIAL_LAYOUT_DIRS {
            let dir = root.join(sub);
            if dir.is_dir() {
                collect_dir(&dir, extensions, &mut files);
            }
        }
    }

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

fn collect_dir(dir: &Path, extensions: &[String], files: &mut Vec<ArtFile>) {
    for entry in WalkDir::new(dir)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy().to_lowercase();
            if extensions.iter().any(|e| *e == ext_str) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                files.push(ArtFile {
                    path: path.to_path_buf(),
                    file_name,
                });
            }
        }
    }
}
