use crate::scanner::ArtFile;

/// 参照ファイルと、それに対応すると判定された候補ファイルの対
#[derive(Debug, Clone)]
pub struct MatchPair {
    pub reference: ArtFile,
    pub candidate: ArtFile,
}

/// 照合結果の3分割
///
/// `matched` / `ambiguous` は対のリストで、1つの参照ファイルが複数の
/// 候補に一致した場合は対が複数並ぶ。`*_refs` は参照ファイル単位の
/// 件数で、`matched_refs + ambiguous_refs + missing.len() == total_refs`
/// が常に成り立つ。
#[derive(Debug, Clone, Default)]
pub struct ReconcileReport {
    /// カード名＋アーティスト名が一致した対
    pub matched: Vec<MatchPair>,
    /// カード名のみ一致した対（人の確認が必要）
    pub ambiguous: Vec<MatchPair>,
    /// 候補が1つも見つからなかった参照ファイル名
    pub missing: Vec<String>,
    /// 参照ファイルの総数
    pub total_refs: usize,
    /// 完全一致した参照ファイル数
    pub matched_refs: usize,
    /// カード名のみ一致した参照ファイル数
    pub ambiguous_refs: usize,
}

impl ReconcileReport {
    pub fn missing_refs(&self) -> usize {
        self.missing.len()
    }
}
