//! 分類バックエンド連携

mod backend;

pub use backend::analyze_image;

use eco_qnet_common::{BackendContract, FallbackPolicy, DEFAULT_API_URL};

/// fetchのタイムアウト（ミリ秒）
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// ブラウザ版の接続設定（ビルド時に固定）
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub api_url: String,
    pub timeout_ms: u32,
    pub contract: BackendContract,
    pub policy: FallbackPolicy,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self::from_values(None)
    }
}

impl ApiSettings {
    /// `ECOQNET_API_URL` をビルド時に読み込む
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("ECOQNET_API_URL"))
    }

    pub fn from_values(api_url: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        Self {
            api_url,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            contract: BackendContract::default(),
            policy: FallbackPolicy::Simulate,
        }
    }
}
