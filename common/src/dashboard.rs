//! ダッシュボードの状態遷移
//!
//! ```text
//! Idle --upload--> Analyzing --success--> Showing(result)
//!                            --failure--> ShowingError(message)
//! Showing | ShowingError --reset--> Idle
//! ```
//!
//! アップロード画像のプレビュー参照（ブラウザのObject URL等）は
//! `Dashboard` だけが保持し、リセット時・置き換え時にdropされる。

use thiserror::Error;

use crate::types::AnalysisResult;

/// 解析1回ごとの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Idle,
    Analyzing,
    Showing(AnalysisResult),
    ShowingError(String),
}

impl DashboardState {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardState::Idle => "idle",
            DashboardState::Analyzing => "analyzing",
            DashboardState::Showing(_) => "showing",
            DashboardState::ShowingError(_) => "error",
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            DashboardState::Showing(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            DashboardState::ShowingError(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("upload is only accepted while idle (current state: {0})")]
    UploadNotAllowed(&'static str),
}

/// 状態とプレビュー参照の所有者
#[derive(Debug)]
pub struct Dashboard<P> {
    state: DashboardState,
    preview: Option<P>,
    in_flight: Option<UploadTicket>,
    next_ticket: u64,
}

impl<P> Default for Dashboard<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Dashboard<P> {
    pub fn new() -> Self {
        Self {
            state: DashboardState::Idle,
            preview: None,
            in_flight: None,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn preview(&self) -> Option<&P> {
        self.preview.as_ref()
    }

    pub fn can_upload(&self) -> bool {
        matches!(self.state, DashboardState::Idle)
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.state, DashboardState::Analyzing)
    }

    /// アップロード受付（Idleのみ）
    ///
    /// 拒否した場合、渡されたプレビューはここでdropされる
    pub fn begin_upload(&mut self, preview: P) -> Result<UploadTicket, TransitionError> {
        if !self.can_upload() {
            return Err(TransitionError::UploadNotAllowed(self.state.name()));
        }

        let ticket = UploadTicket(self.next_ticket);
        self.next_ticket += 1;

        // 旧プレビューは置き換えで解放
        self.preview = Some(preview);
        self.in_flight = Some(ticket);
        self.state = DashboardState::Analyzing;
        Ok(ticket)
    }

    /// 解析成功。古いチケットの結果は捨てて `false`
    pub fn complete(&mut self, ticket: UploadTicket, result: AnalysisResult) -> bool {
        self.settle(ticket, DashboardState::Showing(result))
    }

    /// 解析失敗。古いチケットの結果は捨てて `false`
    pub fn fail(&mut self, ticket: UploadTicket, message: impl Into<String>) -> bool {
        self.settle(ticket, DashboardState::ShowingError(message.into()))
    }

    pub fn finish(
        &mut self,
        ticket: UploadTicket,
        outcome: Result<AnalysisResult, String>,
    ) -> bool {
        match outcome {
            Ok(result) => self.complete(ticket, result),
            Err(message) => self.fail(ticket, message),
        }
    }

    fn settle(&mut self, ticket: UploadTicket, next: DashboardState) -> bool {
        if self.in_flight != Some(ticket) || !self.is_analyzing() {
            return false;
        }
        self.in_flight = None;
        self.state = next;
        true
    }

    /// 結果・エラー表示からIdleへ戻る
    ///
    /// それ以外の状態では何もせず `false`
    pub fn reset(&mut self) -> bool {
        match self.state {
            DashboardState::Showing(_) | DashboardState::ShowingError(_) => {
                self.preview = None;
                self.in_flight = None;
                self.state = DashboardState::Idle;
                true
            }
            DashboardState::Idle | DashboardState::Analyzing => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::simulated_result;
    use chrono::Utc;
    use std::cell::Cell;
    use std::rc::Rc;

    /// drop回数を数えるプレビュー
    struct CountingPreview(Rc<Cell<usize>>);

    impl Drop for CountingPreview {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn result() -> AnalysisResult {
        simulated_result(1, Utc::now())
    }

    #[test]
    fn test_initial_state_is_idle() {
        let dashboard: Dashboard<()> = Dashboard::new();
        assert_eq!(dashboard.state(), &DashboardState::Idle);
        assert!(dashboard.can_upload());
        assert!(dashboard.preview().is_none());
    }

    #[test]
    fn test_upload_then_complete() {
        let mut dashboard = Dashboard::new();
        let ticket = dashboard.begin_upload("blob:1").unwrap();
        assert_eq!(dashboard.state(), &DashboardState::Analyzing);
        assert_eq!(dashboard.preview(), Some(&"blob:1"));

        let r = result();
        assert!(dashboard.complete(ticket, r.clone()));
        assert_eq!(dashboard.state().result(), Some(&r));
        // プレビューは結果表示中も保持
        assert_eq!(dashboard.preview(), Some(&"blob:1"));
    }

    #[test]
    fn test_upload_then_fail() {
        let mut dashboard = Dashboard::new();
        let ticket = dashboard.begin_upload(()).unwrap();
        assert!(dashboard.fail(ticket, "API error: 503"));
        assert_eq!(dashboard.state().error_message(), Some("API error: 503"));
    }

    #[test]
    fn test_finish_dispatches() {
        let mut dashboard = Dashboard::new();
        let ticket = dashboard.begin_upload(()).unwrap();
        assert!(dashboard.finish(ticket, Err("boom".to_string())));
        assert_eq!(dashboard.state().name(), "error");
    }

    #[test]
    fn test_second_upload_while_analyzing_is_rejected() {
        let drops = Rc::new(Cell::new(0));
        let mut dashboard = Dashboard::new();
        dashboard.begin_upload(CountingPreview(drops.clone())).unwrap();

        let err = dashboard
            .begin_upload(CountingPreview(drops.clone()))
            .unwrap_err();
        assert_eq!(err, TransitionError::UploadNotAllowed("analyzing"));
        // 拒否されたプレビューだけ解放
        assert_eq!(drops.get(), 1);
        assert!(dashboard.is_analyzing());
    }

    #[test]
    fn test_upload_rejected_while_showing() {
        let mut dashboard = Dashboard::new();
        let ticket = dashboard.begin_upload(()).unwrap();
        dashboard.complete(ticket, result());
        assert!(matches!(
            dashboard.begin_upload(()),
            Err(TransitionError::UploadNotAllowed("showing"))
        ));
    }

    #[test]
    fn test_reset_releases_preview() {
        let drops = Rc::new(Cell::new(0));
        let mut dashboard = Dashboard::new();
        let ticket = dashboard.begin_upload(CountingPreview(drops.clone())).unwrap();
        dashboard.complete(ticket, result());
        assert_eq!(drops.get(), 0);

        assert!(dashboard.reset());
        assert_eq!(drops.get(), 1);
        assert_eq!(dashboard.state(), &DashboardState::Idle);
        assert!(dashboard.preview().is_none());
    }

    #[test]
    fn test_reset_from_error() {
        let mut dashboard = Dashboard::new();
        let ticket = dashboard.begin_upload(()).unwrap();
        dashboard.fail(ticket, "timeout");
        assert!(dashboard.reset());
        assert!(dashboard.can_upload());
    }

    #[test]
    fn test_reset_is_noop_when_idle_or_analyzing() {
        let mut dashboard = Dashboard::new();
        assert!(!dashboard.reset());

        dashboard.begin_upload(()).unwrap();
        assert!(!dashboard.reset());
        assert!(dashboard.is_analyzing());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut dashboard = Dashboard::new();
        let first = dashboard.begin_upload(()).unwrap();
        assert!(dashboard.fail(first, "timeout"));
        dashboard.reset();

        let second = dashboard.begin_upload(()).unwrap();
        assert_ne!(first, second);

        // 1回目の遅延レスポンス
        assert!(!dashboard.complete(first, result()));
        assert!(dashboard.is_analyzing());

        assert!(dashboard.complete(second, result()));
    }

    #[test]
    fn test_completion_after_settle_is_ignored() {
        let mut dashboard = Dashboard::new();
        let ticket = dashboard.begin_upload(()).unwrap();
        assert!(dashboard.complete(ticket, result()));
        assert!(!dashboard.fail(ticket, "late error"));
        assert_eq!(dashboard.state().name(), "showing");
    }

    #[test]
    fn test_new_upload_replaces_preview() {
        let drops = Rc::new(Cell::new(0));
        let mut dashboard = Dashboard::new();
        let ticket = dashboard.begin_upload(CountingPreview(drops.clone())).unwrap();
        dashboard.complete(ticket, result());
        dashboard.reset();
        assert_eq!(drops.get(), 1);

        dashboard.begin_upload(CountingPreview(drops.clone())).unwrap();
        assert_eq!(drops.get(), 1);
        assert!(dashboard.preview().is_some());
    }
}
