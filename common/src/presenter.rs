//! 結果表示の設定（CLI/WASM共通）
//!
//! 優先度ごとの色・アイコン・見出しと、信頼度メーターの計算

use crate::types::Priority;

pub const ESCALATION_BADGE: &str = "Escalation Required";
pub const SIMULATED_BANNER: &str =
    "Simulated result - the classification service could not be reached";
pub const RESET_LABEL: &str = "Analyze Another Image";
pub const RECOMMENDATIONS_TITLE: &str = "Recommended Actions";

/// 優先度アイコン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityIcon {
    AlertTriangle,
    AlertCircle,
    CheckCircle,
}

impl PriorityIcon {
    /// 端末表示用
    pub fn glyph(&self) -> &'static str {
        match self {
            PriorityIcon::AlertTriangle => "⚠",
            PriorityIcon::AlertCircle => "❗",
            PriorityIcon::CheckCircle => "✔",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PriorityIcon::AlertTriangle => "alert-triangle",
            PriorityIcon::AlertCircle => "alert-circle",
            PriorityIcon::CheckCircle => "check-circle",
        }
    }
}

/// 優先度ごとの表示設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriorityConfig {
    pub color: &'static str,
    pub icon: PriorityIcon,
    pub label: &'static str,
    pub description: &'static str,
}

impl PriorityConfig {
    /// CSSクラス名（例: "priority-red"）
    pub fn css_class(&self) -> String {
        format!("priority-{}", self.color)
    }
}

pub fn priority_config(priority: Priority) -> PriorityConfig {
    match priority {
        Priority::High => PriorityConfig {
            color: "red",
            icon: PriorityIcon::AlertTriangle,
            label: "High Priority",
            description: "Immediate attention required",
        },
        Priority::Medium => PriorityConfig {
            color: "amber",
            icon: PriorityIcon::AlertCircle,
            label: "Medium Priority",
            description: "Review within 48 hours",
        },
        Priority::Low => PriorityConfig {
            color: "emerald",
            icon: PriorityIcon::CheckCircle,
            label: "Low Priority",
            description: "Routine monitoring",
        },
    }
}

/// メーター幅（0.0〜100.0 %）
pub fn meter_width_percent(confidence: f64) -> f64 {
    if confidence.is_nan() {
        return 0.0;
    }
    confidence.clamp(0.0, 1.0) * 100.0
}

/// 表示用の整数パーセント
pub fn confidence_percent(confidence: f64) -> u32 {
    meter_width_percent(confidence).round() as u32
}
