//! 処理中表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ProgressBar(message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="progress-container">
                <div class="progress-bar">
                    <div class="progress-fill indeterminate" />
                </div>
                <p class="progress-text">{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
