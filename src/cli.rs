use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "upscale-finder")]
#[command(about = "アップスケール済みカードアートの照合・コピーツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 参照アートと候補アートを照合し、一致分をコピー
    Run {
        /// 参照アート（ダウンロード済みカタログ）のルート
        #[arg(short = 'r', long)]
        reference_root: Option<PathBuf>,

        /// 候補アート（アップスケール済み）のルート
        #[arg(short = 'c', long)]
        candidate_root: Option<PathBuf>,

        /// コピーを実行しない（それ以外の処理はすべて行う）
        #[arg(long)]
        dry_run: bool,

        /// 特殊レイアウト（Land/Planeswalker/Saga/TF）のサブフォルダも走査
        #[arg(long)]
        special_layouts: bool,

        /// 対象拡張子（カンマ区切り、省略時は png,jpg,jpeg,tif）
        #[arg(long, value_delimiter = ',')]
        extensions: Option<Vec<String>>,
    },

    /// 設定を表示/編集
    Config {
        /// 参照ルートの既定値を設定
        #[arg(long)]
        set_reference_root: Option<PathBuf>,

        /// 候補ルートの既定値を設定
        #[arg(long)]
        set_candidate_root: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
