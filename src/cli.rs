use clap::{Parser, Subcommand};
use eco_qnet_common::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ecoqnet")]
#[command(about = "ECO Q-Net - カメラトラップ画像の野生動物解析", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を解析して結果を表示
    Analyze {
        /// カメラトラップ画像のパス
        #[arg(required = true)]
        image: PathBuf,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// APIのベースURL（設定ファイル・環境変数より優先）
        #[arg(long)]
        api_url: Option<String>,

        /// タイムアウト秒数
        #[arg(long)]
        timeout: Option<u64>,

        /// 失敗時にシミュレーション結果を使わずエラーにする
        #[arg(long)]
        no_fallback: bool,
    },

    /// 推奨アクションを表示（API呼び出しなし）
    Recommend {
        /// カテゴリ (deer/predator/other/unknown)
        category: Category,

        /// 信頼度 (0.0-1.0)
        #[arg(value_parser = parse_confidence)]
        confidence: f64,

        /// エスカレーションあり
        #[arg(long)]
        escalated: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 失敗時のシミュレーション結果を有効/無効 (true/false)
        #[arg(long)]
        simulate: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 信頼度引数（0.0〜1.0）
pub fn parse_confidence(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("Invalid confidence: {}", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("Confidence must be between 0.0 and 1.0: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_confidence() {
        assert_eq!(parse_confidence("0.5"), Ok(0.5));
        assert_eq!(parse_confidence("1"), Ok(1.0));
        assert!(parse_confidence("1.01").is_err());
        assert!(parse_confidence("-0.1").is_err());
        assert!(parse_confidence("high").is_err());
        assert!(parse_confidence("NaN").is_err());
    }

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::try_parse_from([
            "ecoqnet", "analyze", "cam01.jpg", "--json", "--timeout", "5", "--no-fallback",
        ])
        .expect("引数パース失敗");

        match cli.command {
            Commands::Analyze { image, json, timeout, no_fallback, api_url } => {
                assert_eq!(image, PathBuf::from("cam01.jpg"));
                assert!(json);
                assert_eq!(timeout, Some(5));
                assert!(no_fallback);
                assert_eq!(api_url, None);
            }
            _ => panic!("Analyze コマンドのはず"),
        }
    }

    #[test]
    fn test_parse_recommend_command() {
        let cli = Cli::try_parse_from(["ecoqnet", "-v", "recommend", "predator", "0.5", "--escalated"])
            .expect("引数パース失敗");

        assert!(cli.verbose);
        match cli.command {
            Commands::Recommend { category, confidence, escalated } => {
                assert_eq!(category, Category::Predator);
                assert_eq!(confidence, 0.5);
                assert!(escalated);
            }
            _ => panic!("Recommend コマンドのはず"),
        }
    }

    #[test]
    fn test_parse_recommend_rejects_bad_category() {
        assert!(Cli::try_parse_from(["ecoqnet", "recommend", "bird", "0.5"]).is_err());
    }

    #[test]
    fn test_parse_config_command() {
        let cli = Cli::try_parse_from(["ecoqnet", "config", "--simulate", "false", "--show"])
            .expect("引数パース失敗");

        match cli.command {
            Commands::Config { simulate, show, set_api_url, set_timeout } => {
                assert_eq!(simulate, Some(false));
                assert!(show);
                assert_eq!(set_api_url, None);
                assert_eq!(set_timeout, None);
            }
            _ => panic!("Config コマンドのはず"),
        }
    }
}
