//! ファイル名の正規化モジュール
//!
//! 配布元ごとの表記揺れ（句読点・大文字小文字・アクセント文字）で
//! 照合が漏れないよう、ファイル名を比較可能な正規形に変換する。
//!
//! ## 処理フロー
//! 1. ステム抽出（ディレクトリ部と拡張子を除去）
//! 2. 句読点除去（ハイフンのみ空白に置換）
//! 3. 小文字化
//! 4. アクセント文字を最も近いa-zに転写
//! 5. アポストロフィを `_` に置換（必ず正規化の後段で適用）

use deunicode::deunicode;
use regex::Regex;
use std::path::Path;

/// 除去対象の句読点。
///
/// アポストロフィは意図的に含めない。配布元によってアポストロフィを
/// そのまま残すものと `_` に置き換えるものがあり、削除してしまうと
/// 両者を突き合わせられなくなる。[`fold_apostrophes`] が後段で統一する。
const PUNCTUATION_TO_REMOVE: &[char] = &['.', ',', '—', '!', '"', '/'];

/// ファイルパスから比較用の正規化キーを作る
///
/// どんな入力も受け付ける（空文字列は空文字列に正規化される）。
pub fn normalize_stem(path: &str) -> String {
    let stem = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut cleaned = String::with_capacity(stem.len());
    for c in stem.chars() {
        if c == '-' {
            // ハイフン区切りの複数語名が1語に潰れないよう空白へ
            cleaned.push(' ');
        } else if !PUNCTUATION_TO_REMOVE.contains(&c) {
            cleaned.push(c);
        }
    }

    deunicode(&cleaned.to_lowercase())
}

/// アポストロフィ（シングルクォート）をすべて `_` に置換する
pub fn fold_apostrophes(s: &str) -> String {
    s.replace('\'', "_")
}

lazy_static::lazy_static! {
    static ref CARD_KEY_RE: Regex =
        Regex::new(r"^([\w\s]+)\s?(?:\(([\w ]*)\))?(?:\s\[(\w{3})\])?").unwrap();
}

/// 正規化済み文字列からカード名キー（射影）を作る
///
/// 正規化済みファイル名を3つの部分に分解する:
/// 1. カード名（常に存在する前提）
/// 2. アーティスト名（丸括弧 `()` 内、存在しない場合もある）
/// 3. セットコード（角括弧 `[]` 内の3文字、存在しない場合もある）
///
/// `include_artist` / `include_set_code` で返すキーに含める部分を制御する。
/// 照合では name+artist 射影を `(true, false)`、name-only 射影を
/// `(false, false)` として用いる。セットコードは抽出されるが比較には
/// 使っていない。
///
/// カード名部分が1文字も取れない退行入力（空文字列など）のみ `None`。
///
/// 既知の脆い挙動: 括弧内に単語文字以外が混ざった不正なアーティスト部
/// （例 `(john#avon)`）はアーティストとして捕捉されず、単語文字の分だけ
/// カード名に吸収されるか、マッチがそこで打ち切られる。参照実装の
/// 挙動をそのまま保っている。
pub fn card_key(normalized: &str, include_artist: bool, include_set_code: bool) -> Option<String> {
    let caps = CARD_KEY_RE.captures(normalized)?;

    let card_name = caps.get(1)?.as_str().trim();
    let mut output = card_name.to_string();

    if include_artist {
        if let Some(artist) = caps.get(2) {
            let artist = artist.as_str().trim();
            if !artist.is_empty() {
                output.push_str(&format!(" ({})", artist));
            }
        }
    }

    if include_set_code {
        if let Some(set_code) = caps.get(3) {
            output.push_str(&format!(" [{}]", set_code.as_str().trim()));
        }
    }

    Some(output)
}
