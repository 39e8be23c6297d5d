use crate::error::{FinderError, Result};
use crate::scanner::DEFAULT_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 参照アート（ダウンロード済みカタログ）のルート
    pub reference_root: PathBuf,
    /// 候補アート（アップスケール済み）のルート
    pub candidate_root: PathBuf,
    /// コピーを実行せず、それ以外の処理だけ行う
    pub dry_run: bool,
    /// 対象拡張子（小文字、ドットなし）
    pub extensions: Vec<String>,
    /// 特殊レイアウトのサブディレクトリも走査する
    pub scan_special_layouts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_root: PathBuf::new(),
            candidate_root: PathBuf::new(),
            dry_run: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            scan_special_layouts: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FinderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("upscale-finder").join("config.json"))
    }

    /// 走査を始める前に両ルートの存在を確認する
    pub fn validate(&self) -> Result<()> {
        if self.reference_root.as_os_str().is_empty() {
            return Err(FinderError::Config(
                "参照ルートが未設定です。--reference-root か `upscale-finder config` で設定してください".into(),
            ));
        }
        if self.candidate_root.as_os_str().is_empty() {
            return Err(FinderError::Config(
                "候補ルートが未設定です。--candidate-root か `upscale-finder config` で設定してください".into(),
            ));
        }
        if !self.reference_root.exists() {
            return Err(FinderError::FolderNotFound(
                self.reference_root.display().to_string(),
            ));
        }
        if !self.candidate_root.exists() {
            return Err(FinderError::FolderNotFound(
                self.candidate_root.display().to_string(),
            ));
        }
        Ok(())
    }
}
