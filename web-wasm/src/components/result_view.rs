//! 検知結果表示コンポーネント
//!
//! バックエンドのJSONを整形してそのまま表示する。

use leptos::prelude::*;

#[component]
pub fn ResultView(result: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || result.get().is_some()>
            <div class="result">
                <h2>"Result"</h2>
                <pre>{move || result.get().unwrap_or_default()}</pre>
            </div>
        </Show>
    }
}
