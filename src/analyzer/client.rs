//! 分類バックエンド連携
//!
//! `POST {api_url}/predict` に画像をmultipartで送信し、
//! レスポンスを AnalysisResult に変換する。
//! 失敗時はポリシーに従いシミュレーション結果を返す。

use crate::config::Config;
use crate::error::{EcoQnetError, Result};
use crate::upload::ImageUpload;
use chrono::Utc;
use eco_qnet_common::{
    parse_predict_response, predict_url, recover, AnalysisResult, BackendContract,
    FallbackPolicy, FILE_FIELD,
};
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct RemoteAnalyzer {
    client: reqwest::Client,
    api_url: String,
    timeout_seconds: u64,
    contract: BackendContract,
    policy: FallbackPolicy,
}

impl RemoteAnalyzer {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| EcoQnetError::ApiCall(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim().to_string(),
            timeout_seconds: config.timeout_seconds,
            contract: config.contract()?,
            policy: config.fallback_policy(),
        })
    }

    pub fn endpoint(&self) -> String {
        predict_url(&self.api_url)
    }

    /// 解析（フォールバックあり）
    ///
    /// `FallbackPolicy::Simulate` の場合は常に `Ok`
    pub async fn analyze(&self, upload: &ImageUpload) -> Result<AnalysisResult> {
        let outcome = self.request(upload).await;

        if let Err(e) = &outcome {
            match self.policy {
                FallbackPolicy::Simulate => {
                    warn!("API解析に失敗、シミュレーション結果を使用します: {}", e)
                }
                FallbackPolicy::Propagate => warn!("API解析に失敗: {}", e),
            }
        }

        recover(outcome, self.policy, |n| rand::random_range(0..n), Utc::now())
    }

    /// バックエンド呼び出し（フォールバックなし）
    pub async fn request(&self, upload: &ImageUpload) -> Result<AnalysisResult> {
        let url = self.endpoint();
        debug!(
            "POST {} ({}, {} bytes)",
            url,
            upload.file_name,
            upload.bytes.len()
        );

        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(upload.media_type)
            .map_err(|e| EcoQnetError::ApiCall(e.to_string()))?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EcoQnetError::ApiStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        let result = parse_predict_response(&body, &self.contract, Utc::now())
            .map_err(|e| EcoQnetError::ApiParse(e.to_string()))?;

        info!(
            "解析完了: {} ({:.2}, {})",
            result.category_label,
            result.confidence,
            result.priority.as_str()
        );
        Ok(result)
    }

    fn transport_error(&self, e: reqwest::Error) -> EcoQnetError {
        if e.is_timeout() {
            EcoQnetError::Timeout(self.timeout_seconds)
        } else {
            EcoQnetError::ApiCall(e.to_string())
        }
    }
}
