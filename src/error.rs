use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("コピー失敗: {source_path}: {reason}")]
    CopyFailed { source_path: String, reason: String },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FinderError>;
