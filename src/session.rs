//! 1回の解析セッション
//!
//! common の Dashboard を使い、アップロード→解析→結果表示の流れを管理する。
//! 端末版ではプレビュー参照として画像パスを保持する。

use crate::analyzer::RemoteAnalyzer;
use crate::error::Result;
use crate::upload::ImageUpload;
use eco_qnet_common::{Dashboard, DashboardState};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Default)]
pub struct Session {
    dashboard: Dashboard<PathBuf>,
    show_progress: bool,
}

impl Session {
    pub fn new(show_progress: bool) -> Self {
        Self {
            dashboard: Dashboard::new(),
            show_progress,
        }
    }

    pub fn state(&self) -> &DashboardState {
        self.dashboard.state()
    }

    /// 解析中の画像パス
    pub fn image_path(&self) -> Option<&PathBuf> {
        self.dashboard.preview()
    }

    /// 画像を送信して結果を待つ
    ///
    /// 解析の失敗は `ShowingError` 状態として返る
    pub async fn submit(
        &mut self,
        analyzer: &RemoteAnalyzer,
        upload: &ImageUpload,
    ) -> Result<&DashboardState> {
        let ticket = self.dashboard.begin_upload(upload.path.clone())?;

        let spinner = self.show_progress.then(|| {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message(format!("解析中... {}", upload.file_name));
            spinner.enable_steady_tick(Duration::from_millis(120));
            spinner
        });

        let outcome = analyzer.analyze(upload).await.map_err(|e| e.to_string());

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        self.dashboard.finish(ticket, outcome);
        Ok(self.dashboard.state())
    }

    pub fn reset(&mut self) -> bool {
        self.dashboard.reset()
    }
}
