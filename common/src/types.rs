//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Category: 動物カテゴリ（閉じた4値）
//! - Priority: 優先度（閉じた3値）
//! - ResultSource: バックエンド由来かシミュレーションか
//! - AnalysisResult: 1回の解析結果

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 動物カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Deer,
    Predator,
    Other,
    Unknown,
}

impl Category {
    /// カテゴリ文字列を閉じた集合へ写像する
    ///
    /// 集合外の値（"bird" など）は `Other` に落とす
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "deer" => Category::Deer,
            "predator" => Category::Predator,
            "unknown" => Category::Unknown,
            _ => Category::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Deer => "deer",
            Category::Predator => "predator",
            Category::Other => "other",
            Category::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deer" => Ok(Category::Deer),
            "predator" => Ok(Category::Predator),
            "other" => Ok(Category::Other),
            "unknown" => Ok(Category::Unknown),
            _ => Err(format!(
                "Unknown category: {}. Use deer, predator, other, or unknown",
                s
            )),
        }
    }
}

/// 優先度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// バックエンドの優先度文字列（大文字、大小区別あり）を変換
    ///
    /// 不明な値は `Low`
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "HIGH" => Priority::High,
            "MEDIUM" => Priority::Medium,
            "LOW" => Priority::Low,
            _ => Priority::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// 解析結果の出所
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    #[default]
    Backend,
    /// バックエンド失敗時のデモ用データ
    Simulated,
}

/// 解析結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub category: Category,
    pub category_label: String,
    pub confidence: f64,
    pub priority: Priority,
    pub requires_escalation: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,

    /// 受信時刻（クライアント側）
    pub timestamp: DateTime<Utc>,

    pub recommendations: Vec<String>,

    #[serde(default)]
    pub source: ResultSource,
}

impl AnalysisResult {
    pub fn is_simulated(&self) -> bool {
        self.source == ResultSource::Simulated
    }
}
