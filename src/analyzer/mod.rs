//! 解析モジュール
//!
//! 分類バックエンドへの送信と、失敗時のフォールバック

mod client;

pub use client::RemoteAnalyzer;
