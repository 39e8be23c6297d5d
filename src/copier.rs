//! コピーとログ出力のモジュール
//!
//! 照合結果のうち matched / ambiguous の候補ファイルをコピー先へ
//! 複製し、missing を1行1件のテキストログに書き出す。

use crate::error::{FinderError, Result};
use crate::matcher::MatchPair;
use deunicode::deunicode;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// コピー先ディレクトリ名（参照ルート直下に作られる）
pub const DESTINATION_DIR: &str = "UpscaledArt";

/// アーティスト不明の照合結果の隔離先（コピー先の下）
pub const AMBIGUOUS_DIR: &str = "AmbiguousArtist";

/// 未発見リストのファイル名
pub const MISSING_LOG: &str = "#MissingFiles.txt";

/// コピー処理の集計
#[derive(Debug, Clone, Copy, Default)]
pub struct CopySummary {
    pub copied: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// 対のリストをコピー先へ複製する
///
/// コピー先に同名ファイルがあれば上書きする（候補列に重複があれば
/// 後の1件が残る）。1件のコピー失敗は警告として報告し、残りの
/// ファイルの処理は続行する。ドライラン時はコピーだけを省略し、
/// 省略した旨を1件ずつ報告する。
pub fn copy_pairs(pairs: &[MatchPair], destination: &Path, dry_run: bool) -> Result<CopySummary> {
    fs::create_dir_all(destination)?;

    let mut summary = CopySummary::default();

    for pair in pairs {
        let dest = destination.join(&pair.candidate.file_name);
        print!("{} --- コピー中...", pair.candidate.path.display());

        if dry_run {
            println!(" スキップ（ドライラン）");
            summary.skipped += 1;
            continue;
        }

        match fs::copy(&pair.candidate.path, &dest) {
            Ok(_) => {
                println!(" 完了");
                summary.copied += 1;
            }
            Err(e) => {
                let err = FinderError::CopyFailed {
                    source_path: pair.candidate.path.display().to_string(),
                    reason: e.to_string(),
                };
                println!(" 警告: {}", err);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// 未発見リストを書き出し、ログのパスを返す
///
/// 1行書けなかった場合はその行だけASCII転写で代替し、ログ全体の
/// 書き出しは失敗させない。
pub fn write_missing_log(missing: &[String], destination: &Path) -> Result<PathBuf> {
    fs::create_dir_all(destination)?;

    let log_path = destination.join(MISSING_LOG);
    let mut file = fs::File::create(&log_path)?;

    for name in missing {
        if writeln!(file, "{}", name).is_err() {
            writeln!(file, "{}", deunicode(name))?;
        }
    }

    Ok(log_path)
}
