//! 推奨アクション生成
//!
//! (カテゴリ, 信頼度, エスカレーション) から表示用の推奨アクションを生成する。
//! 出力順序は固定:
//! 1. エスカレーション（3件）
//! 2. 低信頼度の注意（1件）
//! 3. カテゴリ別（0〜3件）
//! 4. 高信頼度の注記（1件）

use crate::types::Category;

/// これ未満は低信頼度
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.75;

/// これを超えると高信頼度
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.95;

pub const ESCALATION_WARNING: &str =
    "⚠️ QUANTUM ANALYSIS REQUIRED - High-risk prediction with low confidence";
pub const ALERT_SUPERVISOR: &str = "Alert supervisor for manual verification";
pub const ESCALATE_PROCESSING: &str = "Escalate to quantum-enhanced processing";
pub const LOW_CONFIDENCE_NOTE: &str = "⚠️ Low confidence detection - verify manually";
pub const HIGH_CONFIDENCE_NOTE: &str =
    "✅ High confidence detection - proceed with standard protocols";

/// どのブロックも該当しない場合（不明カテゴリ・中間信頼度）の1件
pub const MANUAL_REVIEW: &str = "Manual review required";

const PREDATOR_ACTIONS: &[&str] = &[
    "Alert field team immediately",
    "Monitor area for increased predator activity",
    "Review nearby camera footage for patterns",
];

const DEER_ACTIONS: &[&str] = &["Continue routine monitoring", "Log sighting in database"];

const OTHER_ACTIONS: &[&str] = &["Document wildlife observation"];

fn category_actions(category: Category) -> &'static [&'static str] {
    match category {
        Category::Predator => PREDATOR_ACTIONS,
        Category::Deer => DEER_ACTIONS,
        Category::Other => OTHER_ACTIONS,
        Category::Unknown => &[],
    }
}

/// 推奨アクションを生成
///
/// 戻り値は必ず1件以上
pub fn generate_recommendations(category: Category, confidence: f64, escalated: bool) -> Vec<String> {
    let mut recommendations = Vec::new();

    if escalated {
        recommendations.push(ESCALATION_WARNING.to_string());
        recommendations.push(ALERT_SUPERVISOR.to_string());
        recommendations.push(ESCALATE_PROCESSING.to_string());
    }

    if confidence < LOW_CONFIDENCE_THRESHOLD {
        recommendations.push(LOW_CONFIDENCE_NOTE.to_string());
    }

    recommendations.extend(category_actions(category).iter().map(|s| s.to_string()));

    if confidence > HIGH_CONFIDENCE_THRESHOLD {
        recommendations.push(HIGH_CONFIDENCE_NOTE.to_string());
    }

    if recommendations.is_empty() {
        recommendations.push(MANUAL_REVIEW.to_string());
    }

    recommendations
}
