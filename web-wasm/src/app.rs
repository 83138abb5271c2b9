//! メインアプリケーションコンポーネント
//!
//! ダッシュボードの状態とプレビューURLはここで一元管理する

use eco_qnet_common::presenter::RESET_LABEL;
use eco_qnet_common::Dashboard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{console, File};

use crate::api::{analyze_image, ApiSettings};
use crate::components::{
    analysis_results::AnalysisResults,
    header::Header,
    upload_area::UploadArea,
};
use crate::preview::ObjectUrl;

#[component]
pub fn App() -> impl IntoView {
    let dashboard = RwSignal::new(Dashboard::<ObjectUrl>::new());
    let settings = StoredValue::new(ApiSettings::from_build_env());

    // 画像受付 → 解析開始
    let on_file_selected = move |file: File| {
        let preview = match ObjectUrl::new(&file) {
            Ok(url) => url,
            Err(e) => {
                console::warn_1(&e);
                return;
            }
        };

        // Idle以外では拒否（プレビューはその場で解放される）
        let Some(Ok(ticket)) = dashboard.try_update(|d| d.begin_upload(preview)) else {
            return;
        };

        spawn_local(async move {
            let settings = settings.get_value();
            let outcome = analyze_image(&settings, &file).await;
            // 破棄済み・古いチケットの結果は捨てる
            dashboard.try_update(|d| d.finish(ticket, outcome));
        });
    };

    let on_reset = move || {
        dashboard.update(|d| {
            d.reset();
        });
    };

    view! {
        <div class="container">
            <Header />

            <main class="dashboard">
                {move || {
                    dashboard
                        .with(|d| d.state().error_message().map(str::to_string))
                        .map(|message| view! {
                            <div class="error-banner">
                                <p>{message}</p>
                                <button class="btn" on:click=move |_| on_reset()>
                                    {RESET_LABEL}
                                </button>
                            </div>
                        })
                }}

                <Show when=move || dashboard.with(|d| d.can_upload())>
                    <UploadArea on_file_selected=on_file_selected />
                </Show>

                {move || {
                    dashboard
                        .with(|d| d.preview().map(|url| url.as_str().to_string()))
                        .map(|src| view! {
                            <div class="preview">
                                <img src=src alt="Uploaded camera trap image" />
                                <Show when=move || dashboard.with(|d| d.is_analyzing())>
                                    <div class="analyzing-overlay">
                                        <div class="spinner" />
                                        <p>"Analyzing image..."</p>
                                    </div>
                                </Show>
                            </div>
                        })
                }}

                {move || {
                    dashboard
                        .with(|d| d.state().result().cloned())
                        .map(|result| view! {
                            <AnalysisResults result=result on_reset=on_reset />
                        })
                }}
            </main>

            <footer class="footer text-muted">
                "ECO Q-Net Wildlife Monitoring System"
            </footer>
        </div>
    }
}
