//! コピーとログ出力の結合テスト
//!
//! 照合結果がコピー先ツリーと未発見リストにどう反映されるかを検証

use std::fs;
use tempfile::tempdir;
use upscale_finder::copier::{self, AMBIGUOUS_DIR, DESTINATION_DIR, MISSING_LOG};
use upscale_finder::matcher;
use upscale_finder::scanner::{self, DEFAULT_EXTENSIONS};

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

/// 完全一致はコピー先直下、アーティスト不明は隔離ディレクトリへ
#[test]
fn test_matched_and_ambiguous_are_segregated() {
    let reference_dir = tempdir().expect("Failed to create temp dir");
    let candidate_dir = tempdir().expect("Failed to create temp dir");

    fs::write(reference_dir.path().join("Counterspell (Mark Poole).png"), b"ref").unwrap();
    fs::write(reference_dir.path().join("Island (John Avon).png"), b"ref").unwrap();
    fs::write(candidate_dir.path().join("counterspell (mark poole).jpg"), b"up1").unwrap();
    fs::write(candidate_dir.path().join("island (unknown artist).jpg"), b"up2").unwrap();

    let references = scanner::scan_root(reference_dir.path(), &default_extensions(), false).unwrap();
    let candidates = scanner::scan_root(candidate_dir.path(), &default_extensions(), false).unwrap();
    let report = matcher::reconcile(&references, &candidates);

    let destination = reference_dir.path().join(DESTINATION_DIR);
    copier::copy_pairs(&report.matched, &destination, false).unwrap();
    copier::copy_pairs(&report.ambiguous, &destination.join(AMBIGUOUS_DIR), false).unwrap();

    assert!(destination.join("counterspell (mark poole).jpg").exists());
    assert!(destination.join(AMBIGUOUS_DIR).join("island (unknown artist).jpg").exists());
    // 隔離先のファイルがコピー先直下に漏れていない
    assert!(!destination.join("island (unknown artist).jpg").exists());
}

/// ドライランではディレクトリだけ作られ、ファイルはコピーされない
#[test]
fn test_dry_run_copies_nothing() {
    let reference_dir = tempdir().expect("Failed to create temp dir");
    let candidate_dir = tempdir().expect("Failed to create temp dir");

    fs::write(reference_dir.path().join("Counterspell (Mark Poole).png"), b"ref").unwrap();
    fs::write(candidate_dir.path().join("counterspell (mark poole).jpg"), b"up").unwrap();

    let references = scanner::scan_root(reference_dir.path(), &default_extensions(), false).unwrap();
    let candidates = scanner::scan_root(candidate_dir.path(), &default_extensions(), false).unwrap();
    let report = matcher::reconcile(&references, &candidates);

    let destination = reference_dir.path().join(DESTINATION_DIR);
    let summary = copier::copy_pairs(&report.matched, &destination, true).unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.copied, 0);
    assert!(destination.is_dir());
    assert!(!destination.join("counterspell (mark poole).jpg").exists());
}

/// 未発見リストは1行1件で書き出される
#[test]
fn test_missing_log_contents() {
    let reference_dir = tempdir().expect("Failed to create temp dir");
    let candidate_dir = tempdir().expect("Failed to create temp dir");

    fs::write(reference_dir.path().join("Black Lotus.png"), b"ref").unwrap();
    fs::write(reference_dir.path().join("Time Walk.png"), b"ref").unwrap();
    fs::write(candidate_dir.path().join("shivan dragon.jpg"), b"up").unwrap();

    let references = scanner::scan_root(reference_dir.path(), &default_extensions(), false).unwrap();
    let candidates = scanner::scan_root(candidate_dir.path(), &default_extensions(), false).unwrap();
    let report = matcher::reconcile(&references, &candidates);

    let destination = reference_dir.path().join(DESTINATION_DIR);
    let log_path = copier::write_missing_log(&report.missing, &destination).unwrap();

    assert_eq!(log_path, destination.join(MISSING_LOG));
    let content = fs::read_to_string(&log_path).unwrap();
    assert_eq!(content, "Black Lotus.png\nTime Walk.png\n");
}

/// 再実行しても結果は変わらない（冪等性）
#[test]
fn test_rerun_is_idempotent() {
    let reference_dir = tempdir().expect("Failed to create temp dir");
    let candidate_dir = tempdir().expect("Failed to create temp dir");

    fs::write(reference_dir.path().join("Counterspell (Mark Poole).png"), b"ref").unwrap();
    fs::write(candidate_dir.path().join("counterspell (mark poole).jpg"), b"up").unwrap();

    let references = scanner::scan_root(reference_dir.path(), &default_extensions(), false).unwrap();
    let candidates = scanner::scan_root(candidate_dir.path(), &default_extensions(), false).unwrap();
    let report = matcher::reconcile(&references, &candidates);

    let destination = reference_dir.path().join(DESTINATION_DIR);
    copier::copy_pairs(&report.matched, &destination, false).unwrap();

    // 2回目: コピー先は参照ルートのサブディレクトリだが、走査は直下のみ
    // なので再走査しても参照側の件数は変わらない
    let references_again = scanner::scan_root(reference_dir.path(), &default_extensions(), false).unwrap();
    assert_eq!(references_again.len(), references.len());

    let report_again = matcher::reconcile(&references_again, &candidates);
    assert_eq!(report_again.matched.len(), report.matched.len());

    let summary = copier::copy_pairs(&report_again.matched, &destination, false).unwrap();
    assert_eq!(summary.copied, 1);
    assert_eq!(summary.failed, 0);
}
