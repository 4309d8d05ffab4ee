//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(phase: Signal<&'static str>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Anomaly Detection"</h1>
            <span class=move || format!("phase phase-{}", phase.get())>{move || phase.get()}</span>
        </header>
    }
}
