//! メインアプリケーションコンポーネント
//!
//! 状態はすべて `UploadController` が持ち、コンポーネントはそこから派生した
//! シグナルを表示するだけ。リクエストは begin → fetch → complete の順に進め、
//! 失敗は両操作ともalertで通知する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use anomaly_upload_common::{
    AnomalyService, ControllerError, Operation, Outcome, PendingRequest, SelectedFile,
    UploadController,
};
use crate::api::anomaly::{js_message, FetchAnomalyService};
use crate::components::{
    header::Header,
    upload_area::UploadArea,
    column_selector::ColumnSelector,
    settings_panel::SettingsPanel,
    progress_bar::ProgressBar,
    result_view::ResultView,
};
use crate::config;
use crate::file_read::FileReads;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let controller = RwSignal::new(UploadController::new());
    let reads = RwSignal::new(FileReads::default());
    let service = FetchAnomalyService::new(config::base_url());

    // 表示用の派生シグナル
    let phase = Signal::derive(move || controller.with(|c| c.phase().as_str()));
    let file_name = Signal::derive(move || {
        controller.with(|c| c.session().file().map(|f| f.file_name().to_string()))
    });
    let columns = Signal::derive(move || controller.with(|c| c.session().columns().to_vec()));
    let selected = Signal::derive(move || {
        controller.with(|c| c.session().selected_columns().to_vec())
    });
    let result = Signal::derive(move || {
        controller.with(|c| c.session().result().map(|r| r.to_pretty_string()))
    });
    let loading_columns = Signal::derive(move || {
        controller.with(|c| c.is_in_flight(Operation::RequestColumns))
    });
    let detecting = Signal::derive(move || {
        controller.with(|c| c.is_in_flight(Operation::DetectAnomalies))
    });
    let reading = Signal::derive(move || reads.with(|r| r.is_pending()));
    let busy_message = Signal::derive(move || {
        if reading.get() {
            Some("Reading file...")
        } else if loading_columns.get() {
            Some("Reading columns...")
        } else if detecting.get() {
            Some("Detecting anomalies...")
        } else {
            None
        }
    });

    // ファイル選択ハンドラ（最後に選ばれたファイルの読み込みだけ反映する）
    let on_file_selected = move |file: web_sys::File| {
        let Some(stamp) = reads.try_update(|r| r.start()) else {
            return;
        };
        spawn_local(async move {
            let loaded = read_file(&file).await;
            if reads.try_update(|r| r.finish(stamp)) != Some(true) {
                gloo::console::log!("stale file read discarded");
                return;
            }
            match loaded {
                Ok(selected) => controller.update(|c| c.select_file(selected)),
                Err(message) => notify(&format!("Error reading file: {}", message)),
            }
        });
    };

    // カラム一覧取得ハンドラ
    let on_load_columns = {
        let service = service.clone();
        move |_| {
            let Some(pending) = start(controller, |c| c.begin_request_columns()) else {
                return;
            };
            let service = service.clone();
            spawn_local(async move {
                let response = service.post_form(&pending.form).await;
                finish(controller, |c| c.complete_request_columns(pending.ticket, response));
            });
        }
    };

    // カラム選択ハンドラ
    let on_toggle_column = move |column: String| {
        if let Some(Err(e)) = controller.try_update(|c| c.toggle_column(&column)) {
            notify(&e.to_string());
        }
    };

    let on_contamination = move |value: f64| {
        controller.update(|c| c.set_contamination(value));
    };

    // 異常検知ハンドラ
    let on_detect = move |_| {
        let Some(pending) = start(controller, |c| c.begin_detect()) else {
            return;
        };
        let service = service.clone();
        spawn_local(async move {
            let response = service.post_form(&pending.form).await;
            finish(controller, |c| c.complete_detect(pending.ticket, response));
        });
    };

    view! {
        <div class="container">
            <Header phase=phase />

            <UploadArea
                file_name=file_name
                is_loading=loading_columns
                is_reading=reading
                on_file_selected=on_file_selected
                on_load_columns=on_load_columns
            />

            <ColumnSelector
                columns=columns
                selected=selected
                on_toggle=on_toggle_column
            />

            <SettingsPanel
                is_detecting=detecting
                is_reading=reading
                on_contamination=on_contamination
                on_detect=on_detect
            />

            <ProgressBar message=busy_message />

            <ResultView result=result />
        </div>
    }
}

/// リクエストを開始する。入力エラー・実行中なら通知してNone
fn start(
    controller: RwSignal<UploadController>,
    begin: impl FnOnce(&mut UploadController) -> Result<PendingRequest, ControllerError>,
) -> Option<PendingRequest> {
    match controller.try_update(begin)? {
        Ok(pending) => Some(pending),
        Err(e) => {
            notify(&e.notification());
            None
        }
    }
}

/// レスポンスを反映する。失敗なら通知
fn finish(
    controller: RwSignal<UploadController>,
    complete: impl FnOnce(&mut UploadController) -> Result<Outcome, ControllerError>,
) {
    match controller.try_update(complete) {
        Some(Ok(Outcome::Discarded)) => {
            gloo::console::log!("stale response discarded");
        }
        Some(Err(e)) => notify(&e.notification()),
        _ => {}
    }
}

async fn read_file(file: &web_sys::File) -> Result<SelectedFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| js_message(&e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile::new(file.name(), bytes))
}

fn notify(message: &str) {
    gloo::console::warn!(message.to_string());
    gloo::dialogs::alert(message);
}
