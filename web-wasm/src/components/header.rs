//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"ECO Q-Net"</h1>
            <p class="subtitle">"Wildlife Monitoring System"</p>
        </header>
    }
}
