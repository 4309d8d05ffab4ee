//! カラム選択コンポーネント

use leptos::prelude::*;

#[component]
pub fn ColumnSelector<F>(
    columns: Signal<Vec<String>>,
    selected: Signal<Vec<String>>,
    on_toggle: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="column-selector">
            <Show
                when=move || !columns.get().is_empty()
                fallback=|| view! { <p class="text-muted">"Upload a file to list its columns"</p> }
            >
                <p>"Select columns for anomaly detection"</p>
            </Show>
            <For
                each=move || columns.get()
                key=|column| column.clone()
                children=move |column| {
                    let on_toggle = on_toggle.clone();
                    let checked_column = column.clone();
                    let toggled_column = column.clone();
                    view! {
                        <label class="column-option">
                            <input
                                type="checkbox"
                                prop:checked=move || selected.get().contains(&checked_column)
                                on:change=move |_| on_toggle(toggled_column.clone())
                            />
                            {column}
                        </label>
                    }
                }
            />
        </div>
    }
}
