//! ECO Q-Net CLI
//!
//! カメラトラップ画像を分類バックエンドへ送り、結果と推奨アクションを表示する

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod session;
pub mod upload;
