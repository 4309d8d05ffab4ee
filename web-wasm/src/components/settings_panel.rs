//! 検知設定パネルコンポーネント

use leptos::prelude::*;
use anomaly_upload_common::DEFAULT_CONTAMINATION;
use crate::config::parse_contamination_input;

#[component]
pub fn SettingsPanel<FC, FD>(
    is_detecting: Signal<bool>,
    is_reading: Signal<bool>,
    on_contamination: FC,
    on_detect: FD,
) -> impl IntoView
where
    FC: Fn(f64) + 'static + Clone,
    FD: Fn(()) + 'static + Clone,
{
    view! {
        <div class="settings-panel">
            <div class="form-group">
                <label for="contamination">"Contamination"</label>
                // 入力中の値を書き換えないよう初期値のみ設定する
                <input
                    type="number"
                    id="contamination"
                    min="0"
                    max="1"
                    step="0.01"
                    value=DEFAULT_CONTAMINATION.to_string()
                    on:input=move |ev| on_contamination(parse_contamination_input(&event_target_value(&ev)))
                />
            </div>

            <button
                class="btn btn-primary"
                disabled=move || is_detecting.get() || is_reading.get()
                on:click={
                    let on_detect = on_detect.clone();
                    move |_| on_detect(())
                }
            >
                {move || if is_detecting.get() { "Detecting..." } else { "Detect Anomalies" }}
            </button>
        </div>
    }
}
