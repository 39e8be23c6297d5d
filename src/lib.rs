//! upscale-finder - アップスケール済みカードアートの照合・コピーツール
//!
//! ダウンロード済みのカードアート（参照側）と外部から集めた
//! アップスケール済みアート（候補側）を、正規化したファイル名で
//! 照合し、一致した候補ファイルをコピーする。

pub mod cli;
pub mod config;
pub mod copier;
pub mod error;
pub mod matcher;
pub mod normalizer;
pub mod scanner;
