//! fetch による /predict 呼び出し

use chrono::Utc;
use eco_qnet_common::{
    parse_predict_value, predict_url, recover, scenario_index, AnalysisResult, FILE_FIELD,
};
use futures::future::{select, Either};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, AbortController, File, FormData, Request, RequestInit, RequestMode, Response};

use super::ApiSettings;

/// 画像を解析し、失敗時はポリシーに従ってシミュレーション結果に置き換える
pub async fn analyze_image(settings: &ApiSettings, file: &File) -> Result<AnalysisResult, String> {
    let outcome = request_prediction(settings, file).await;
    if let Err(e) = &outcome {
        console::warn_1(&JsValue::from_str(&format!("classification failed: {}", e)));
    }
    recover(
        outcome,
        settings.policy,
        |_| scenario_index(js_sys::Math::random()),
        Utc::now(),
    )
}

/// バックエンドへ1回だけ問い合わせる（フォールバックなし）
async fn request_prediction(settings: &ApiSettings, file: &File) -> Result<AnalysisResult, String> {
    let form = FormData::new().map_err(js_message)?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(js_message)?;

    let controller = AbortController::new().map_err(js_message)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);
    opts.set_signal(Some(&controller.signal()));

    let request = Request::new_with_str_and_init(&predict_url(&settings.api_url), &opts)
        .map_err(js_message)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_message)?;

    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let fetch = Box::pin(JsFuture::from(window.fetch_with_request(&request)));
    let timeout = Box::pin(TimeoutFuture::new(settings.timeout_ms));

    let resp_value = match select(fetch, timeout).await {
        Either::Left((outcome, _)) => outcome.map_err(js_message)?,
        Either::Right(_) => {
            controller.abort();
            return Err(format!("request timed out after {} ms", settings.timeout_ms));
        }
    };
    let resp: Response = resp_value.dyn_into().map_err(js_message)?;

    if !resp.ok() {
        return Err(format!("API error: {}", resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(js_message)?)
        .await
        .map_err(js_message)?;
    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(json).map_err(|e| format!("Invalid response: {}", e))?;

    parse_predict_value(&value, &settings.contract, Utc::now())
        .map_err(|e| format!("Invalid response: {}", e))
}

/// JsValue のエラーを表示用メッセージへ
fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
