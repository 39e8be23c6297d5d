//! 照合モジュール
//!
//! 正規化済みのファイル名キーを使い、参照側（ダウンロード済みアート）と
//! 候補側（アップスケール済みアート）を2段階で照合する。
//!
//! 1. カード名＋アーティスト名の完全一致
//! 2. カード名のみの一致（アーティスト名で確定できない場合）
//!
//! 各参照ファイルは必ず matched / ambiguous / missing のいずれか
//! 1つだけに落ちる。段は優先順に評価され、同じ参照ファイルを
//! 二度評価することはない。

mod types;

pub use types::{MatchPair, ReconcileReport};

use crate::normalizer;
use crate::scanner::ArtFile;
use std::collections::HashMap;

/// 1ファイル分の射影（name+artist と name-only）を計算する
fn projections(file: &ArtFile) -> (Option<String>, Option<String>) {
    let normalized = normalizer::fold_apostrophes(&normalizer::normalize_stem(&file.file_name));
    let with_artist = normalizer::card_key(&normalized, true, false);
    let name_only = normalizer::card_key(&normalized, false, false);
    (with_artist, name_only)
}

/// 参照側と候補側を照合し、3分割した結果を返す
///
/// 同じ入力に対しては常に同じ結果を返す純粋な関数。候補の射影は
/// 事前に一括計算し、段ごとにハッシュマップへ載せる（完全一致の
/// 照合なので全走査と観測結果は変わらない）。段の中での対の並びは
/// 候補列の元の順序を保つ。
///
/// 射影を作れない候補（`card_key` が `None`）は索引から除外し、
/// 射影を作れない参照ファイルはそのまま missing に落とす。
/// 候補列に同名ファイルが重複していても除去はしない。重複分の対は
/// すべて出力され、コピー時には後の1件が先の1件を上書きする。
pub fn reconcile(references: &[ArtFile], candidates: &[ArtFile]) -> ReconcileReport {
    let mut artist_index: HashMap<String, Vec<usize>> = HashMap::new();
    let mut name_index: HashMap<String, Vec<usize>> = HashMap::new();

    for (i, candidate) in candidates.iter().enumerate() {
        let (with_artist, name_only) = projections(candidate);
        if let Some(key) = with_artist {
            artist_index.entry(key).or_default().push(i);
        }
        if let Some(key) = name_only {
            name_index.entry(key).or_default().push(i);
        }
    }

    let mut report = ReconcileReport {
        total_refs: references.len(),
        ..Default::default()
    };

    for reference in references {
        let (with_artist, name_only) = projections(reference);

        // 第1段: カード名＋アーティスト名の完全一致
        if let Some(key) = &with_artist {
            if let Some(idxs) = artist_index.get(key) {
                for &i in idxs {
                    report.matched.push(MatchPair {
                        reference: reference.clone(),
                        candidate: candidates[i].clone(),
                    });
                }
                report.matched_refs += 1;
                continue;
            }
        }

        // 第2段: カード名のみの一致
        if let Some(key) = &name_only {
            if let Some(idxs) = name_index.get(key) {
                for &i in idxs {
                    report.ambiguous.push(MatchPair {
                        reference: reference.clone(),
                        candidate: candidates[i].clone(),
                    });
                }
                report.ambiguous_refs += 1;
                continue;
            }
        }

        // 射影を作れなかった参照ファイルもここに落ちる
        report.missing.push(reference.file_name.clone());
    }

    report
}
