//! 信頼度メーター

use eco_qnet_common::{confidence_percent, meter_width_percent};
use leptos::prelude::*;

#[component]
pub fn ConfidenceMeter(confidence: f64, color: &'static str) -> impl IntoView {
    view! {
        <div class="confidence-container">
            <div class="confidence-header">
                <span>"Confidence"</span>
                <span class="confidence-value">{format!("{}%", confidence_percent(confidence))}</span>
            </div>
            <div class="confidence-bar">
                <div
                    class=format!("confidence-fill fill-{}", color)
                    style=format!("width: {}%", meter_width_percent(confidence))
                />
            </div>
        </div>
    }
}
