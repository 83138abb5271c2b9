//! 解析結果コンポーネント

use eco_qnet_common::presenter::{
    ESCALATION_BADGE, RECOMMENDATIONS_TITLE, RESET_LABEL, SIMULATED_BANNER,
};
use eco_qnet_common::{priority_config, AnalysisResult};
use leptos::prelude::*;

use crate::components::confidence_meter::ConfidenceMeter;

#[component]
pub fn AnalysisResults<F>(result: AnalysisResult, on_reset: F) -> impl IntoView
where
    F: Fn() + 'static + Clone,
{
    let config = priority_config(result.priority);
    let timestamp = result
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    let risk_score = result.risk_score.map(|score| format!("{:.2}", score));
    let is_simulated = result.is_simulated();
    let requires_escalation = result.requires_escalation;

    view! {
        <div class="results">
            {is_simulated.then(|| view! {
                <div class="simulated-banner">{SIMULATED_BANNER}</div>
            })}

            <div class=format!("priority-card {}", config.css_class())>
                <div class="priority-header">
                    <span class="priority-icon" title=config.icon.name()>{config.icon.glyph()}</span>
                    <h2>{config.label}</h2>
                    {requires_escalation.then(|| view! {
                        <span class="escalation-badge">{ESCALATION_BADGE}</span>
                    })}
                </div>
                <p class="priority-description">{config.description}</p>
            </div>

            <div class="detection-card">
                <h3>"Detection"</h3>
                <p class="category-label">{result.category_label.clone()}</p>
                <ConfidenceMeter confidence=result.confidence color=config.color />
                {risk_score.map(|score| view! {
                    <p class="risk-score">"Risk score: " {score}</p>
                })}
                <p class="timestamp text-muted">{timestamp}</p>
            </div>

            <div class="recommendations">
                <h3>{RECOMMENDATIONS_TITLE}</h3>
                <ul>
                    {result
                        .recommendations
                        .iter()
                        .map(|rec| view! { <li>{rec.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>

            <button class="btn btn-primary" on:click=move |_| on_reset()>
                {RESET_LABEL}
            </button>
        </div>
    }
}
