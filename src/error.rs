use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoQnetError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像ファイルではありません: {0}")]
    NotAnImage(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIがエラーを返しました: HTTP {0}")]
    ApiStatus(u16),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("APIがタイムアウトしました ({0}秒)")]
    Timeout(u64),

    #[error("ダッシュボード状態エラー: {0}")]
    Transition(#[from] eco_qnet_common::TransitionError),

    #[error(transparent)]
    Common(#[from] eco_qnet_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EcoQnetError>;
