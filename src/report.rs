//! 解析結果の端末表示

use eco_qnet_common::presenter::{ESCALATION_BADGE, RECOMMENDATIONS_TITLE, RESET_LABEL, SIMULATED_BANNER};
use eco_qnet_common::{confidence_percent, meter_width_percent, priority_config, AnalysisResult};

/// メーターの文字数
pub const METER_CELLS: usize = 30;

/// 信頼度メーター（例: "[█████░░░░░] 50%"）
pub fn render_meter(confidence: f64, cells: usize) -> String {
    let filled = ((meter_width_percent(confidence) / 100.0) * cells as f64).round() as usize;
    let filled = filled.min(cells);
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(cells - filled),
        confidence_percent(confidence)
    )
}

/// 結果レポート
pub fn render_report(result: &AnalysisResult) -> String {
    let config = priority_config(result.priority);
    let mut out = String::new();

    if result.is_simulated() {
        out.push_str(&format!("⚠ {}\n\n", SIMULATED_BANNER));
    }

    out.push_str(&format!("{} {}", config.icon.glyph(), config.label));
    if result.requires_escalation {
        out.push_str(&format!("  [{}]", ESCALATION_BADGE));
    }
    out.push('\n');
    out.push_str(&format!("  {}\n\n", config.description));

    out.push_str("Detection\n");
    out.push_str(&format!("  Category:   {}\n", result.category_label));
    out.push_str(&format!(
        "  Confidence: {}\n",
        render_meter(result.confidence, METER_CELLS)
    ));
    if let Some(risk) = result.risk_score {
        out.push_str(&format!("  Risk score: {:.2}\n", risk));
    }
    out.push_str(&format!("  Analyzed:   {}\n\n", result.timestamp.to_rfc3339()));

    out.push_str(&format!("{}\n", RECOMMENDATIONS_TITLE));
    for rec in &result.recommendations {
        out.push_str(&format!("  • {}\n", rec));
    }

    out
}

/// 次の解析への案内
pub fn render_reset_hint() -> String {
    format!("{}: ecoqnet analyze <IMAGE>", RESET_LABEL)
}
