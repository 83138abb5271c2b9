//! 分類バックエンドとの通信契約
//!
//! `POST {base_url}/predict` のレスポンス(JSON)を AnalysisResult に変換する。
//!
//! レスポンス例:
//! ```json
//! {
//!   "prediction": "predator",
//!   "confidence": 0.91,
//!   "priority": "HIGH",
//!   "risk_score": 1.3,
//!   "Conditional Quantumn Usage": true
//! }
//! ```
//!
//! エスカレーションフラグのキー名はバックエンド側の仕様で決まっており、
//! 名前の変換はこのモジュールだけで行う。

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::recommendations::generate_recommendations;
use crate::types::{AnalysisResult, Category, Priority, ResultSource};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const PREDICT_PATH: &str = "/predict";

/// multipartで画像を載せるフィールド名
pub const FILE_FIELD: &str = "file";

/// エスカレーションフラグのキー（バックエンド仕様のまま）
pub const DEFAULT_ESCALATION_FIELD: &str = "Conditional Quantumn Usage";

/// レスポンスの可変部分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendContract {
    pub escalation_field: String,
}

impl Default for BackendContract {
    fn default() -> Self {
        Self {
            escalation_field: DEFAULT_ESCALATION_FIELD.to_string(),
        }
    }
}

impl BackendContract {
    pub fn new(escalation_field: impl Into<String>) -> Result<Self> {
        let escalation_field = escalation_field.into();
        if escalation_field.trim().is_empty() {
            return Err(Error::Config("escalation field must not be empty".into()));
        }
        Ok(Self { escalation_field })
    }
}

/// ベースURLから予測エンドポイントURLを組み立てる
pub fn predict_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH)
}

/// `prediction` をカテゴリと表示名へ写像
///
/// 未知の値は (Other, "Unknown")
pub fn map_prediction(prediction: &str) -> (Category, &'static str) {
    match prediction {
        "predator" => (Category::Predator, "Predator"),
        "deer" => (Category::Deer, "Deer"),
        "other" => (Category::Other, "Other Wildlife"),
        _ => (Category::Other, "Unknown"),
    }
}

/// レスポンス本文をパース
///
/// # Arguments
/// * `body` - レスポンス本文
/// * `contract` - エスカレーションキー等
/// * `timestamp` - 受信時刻（バックエンドの値は使わない）
///
/// # Returns
/// * `Err(Error::Json)` - JSONとして不正
/// * `Err(Error::Parse)` - 必須フィールド欠落・範囲外
pub fn parse_predict_response(
    body: &str,
    contract: &BackendContract,
    timestamp: DateTime<Utc>,
) -> Result<AnalysisResult> {
    let value: Value = serde_json::from_str(body)?;
    parse_predict_value(&value, contract, timestamp)
}

/// パース済みJSONから AnalysisResult を生成
pub fn parse_predict_value(
    value: &Value,
    contract: &BackendContract,
    timestamp: DateTime<Utc>,
) -> Result<AnalysisResult> {
    let Some(map) = value.as_object() else {
        return Err(Error::Parse("JSON object not found".into()));
    };

    let prediction = get_str(map, "prediction")
        .ok_or_else(|| Error::Parse("missing field: prediction".into()))?;

    let confidence = get_f64(map, "confidence")
        .ok_or_else(|| Error::Parse("missing field: confidence".into()))?;
    if !(0.0..=1.0).contains(&confidence) {
        return Err(Error::Parse(format!("confidence out of range: {}", confidence)));
    }

    let (category, label) = map_prediction(prediction);
    let priority = get_str(map, "priority")
        .map(Priority::from_wire)
        .unwrap_or(Priority::Low);
    let requires_escalation = get_bool(map, &contract.escalation_field).unwrap_or(false);

    Ok(AnalysisResult {
        category,
        category_label: label.to_string(),
        confidence,
        priority,
        requires_escalation,
        risk_score: get_f64(map, "risk_score"),
        timestamp,
        recommendations: generate_recommendations(category, confidence, requires_escalation),
        source: ResultSource::Backend,
    })
}

fn get_str<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key)?.as_str()
}

fn get_f64(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key)?.as_f64()
}

fn get_bool(map: &Map<String, Value>, key: &str) -> Option<bool> {
    map.get(key)?.as_bool()
}
