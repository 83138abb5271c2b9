use clap::Parser;
use eco_qnet::{analyzer, cli, config, error, report, session, upload};
use cli::{Cli, Commands};
use config::Config;
use eco_qnet_common::{generate_recommendations, DashboardState};
use error::{EcoQnetError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image, json, api_url, timeout, no_fallback } => {
            let mut config = config.with_env_override();
            if let Some(url) = api_url {
                config.api_url = url;
            }
            if let Some(secs) = timeout {
                config.timeout_seconds = secs;
            }
            if no_fallback {
                config.simulate_on_failure = false;
            }

            let upload = upload::ImageUpload::read(&image)?;
            let analyzer = analyzer::RemoteAnalyzer::new(&config)?;

            if !json {
                println!("📷 ecoqnet - 画像解析\n");
                println!("送信先: {}\n", analyzer.endpoint());
            }

            let mut session = session::Session::new(!json);
            match session.submit(&analyzer, &upload).await? {
                DashboardState::Showing(result) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(result)?);
                    } else {
                        print!("{}", report::render_report(result));
                        println!("\n{}", report::render_reset_hint());
                    }
                }
                DashboardState::ShowingError(message) => {
                    return Err(EcoQnetError::ApiCall(message.clone()));
                }
                other => {
                    return Err(EcoQnetError::ApiCall(format!(
                        "unexpected state: {}",
                        other.name()
                    )));
                }
            }
        }

        Commands::Recommend { category, confidence, escalated } => {
            for rec in generate_recommendations(category, confidence, escalated) {
                println!("• {}", rec);
            }
        }

        Commands::Config { set_api_url, set_timeout, simulate, show } => {
            let mut config = config;
            let changed = set_api_url.is_some() || set_timeout.is_some() || simulate.is_some();

            if let Some(url) = set_api_url {
                config.api_url = url;
            }
            if let Some(secs) = set_timeout {
                config.timeout_seconds = secs;
            }
            if let Some(flag) = simulate {
                config.simulate_on_failure = flag;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  APIのURL: {}", config.api_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  失敗時のシミュレーション: {}",
                    if config.simulate_on_failure { "有効" } else { "無効" }
                );
                println!("  エスカレーションキー: {}", config.escalation_field);
                if let Ok(url) = std::env::var(config::API_URL_ENV) {
                    println!("  ({} により解析時のURLは {} になります)", config::API_URL_ENV, url);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
