use crate::error::{EcoQnetError, Result};
use eco_qnet_common::{BackendContract, FallbackPolicy, DEFAULT_API_URL, DEFAULT_ESCALATION_FIELD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIのベースURLを上書きする環境変数
pub const API_URL_ENV: &str = "ECOQNET_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub timeout_seconds: u64,
    /// 失敗時にシミュレーション結果を返す
    pub simulate_on_failure: bool,
    /// エスカレーションフラグのキー（バックエンド仕様）
    pub escalation_field: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            timeout_seconds: 30,
            simulate_on_failure: true,
            escalation_field: DEFAULT_ESCALATION_FIELD.into(),
        }
    }
}

impl Config {
    /// 設定ファイルのみ（環境変数は解析時に `with_env_override` で適用）
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 検証は使用時（`RemoteAnalyzer::new`）と保存時に行う
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// `ECOQNET_API_URL` を優先した設定（保存しないこと）
    pub fn with_env_override(self) -> Self {
        self.with_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    pub fn with_api_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| EcoQnetError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("eco-qnet").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(EcoQnetError::Config(format!(
                "api_url は http:// または https:// で始まる必要があります: {}",
                self.api_url
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(EcoQnetError::Config("timeout_seconds は1以上にしてください".into()));
        }
        self.contract()?;
        Ok(())
    }

    pub fn contract(&self) -> Result<BackendContract> {
        Ok(BackendContract::new(self.escalation_field.clone())?)
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        FallbackPolicy::from_flag(self.simulate_on_failure)
    }
}
