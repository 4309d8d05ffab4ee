//! ファイル選択エリアコンポーネント

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

#[component]
pub fn UploadArea<FS, FL>(
    file_name: Signal<Option<String>>,
    is_loading: Signal<bool>,
    is_reading: Signal<bool>,
    on_file_selected: FS,
    on_load_columns: FL,
) -> impl IntoView
where
    FS: Fn(File) + 'static + Clone,
    FL: Fn(()) + 'static + Clone,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected(file);
        }
    };

    view! {
        <div class="upload-area">
            <label for="file">"CSV file"</label>
            <input type="file" id="file" accept=".csv" on:change=on_change />
            <p class="text-muted">
                {move || file_name.get().unwrap_or_else(|| "No file selected".to_string())}
            </p>
            <button
                class="btn btn-primary"
                disabled=move || is_loading.get() || is_reading.get()
                on:click={
                    let on_load_columns = on_load_columns.clone();
                    move |_| on_load_columns(())
                }
            >
                {move || if is_loading.get() { "Uploading..." } else { "Upload File" }}
            </button>
        </div>
    }
}
