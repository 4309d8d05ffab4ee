//! コントローラをターミナルから操作する
//!
//! リクエスト中はスピナーを表示し、対話的なカラム選択にはdialoguerを使う。

use crate::error::{AppError, Result};
use anomaly_upload_common::{AnomalyService, Outcome, SelectedFile, UploadController};
use dialoguer::MultiSelect;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// ローカルファイルを読み込む
pub fn load_file(path: &Path) -> Result<SelectedFile> {
    if !path.is_file() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(SelectedFile::new(file_name, bytes))
}

/// カラム一覧を取得
pub async fn load_columns<S: AnomalyService>(
    controller: &mut UploadController,
    service: &S,
) -> Result<Outcome> {
    let spinner = spinner("カラム一覧を取得中...");
    let outcome = controller.request_columns(service).await;
    spinner.finish_and_clear();
    Ok(outcome?)
}

/// 異常検知を実行
pub async fn run_detection<S: AnomalyService>(
    controller: &mut UploadController,
    service: &S,
) -> Result<Outcome> {
    let spinner = spinner("異常検知中...");
    let outcome = controller.detect_anomalies(service).await;
    spinner.finish_and_clear();
    Ok(outcome?)
}

/// カラムを対話的に選択
///
/// 候補がない、または端末でない場合は空の選択を返し、検知側の入力チェックに任せる。
pub fn prompt_columns(columns: &[String]) -> Result<Vec<String>> {
    if columns.is_empty() {
        return Ok(Vec::new());
    }
    if !std::io::stdin().is_terminal() || !std::io::stderr().is_terminal() {
        warn!("端末がないためカラム選択をスキップ (--columns で指定可能)");
        return Ok(Vec::new());
    }

    let indices = MultiSelect::new()
        .with_prompt("異常検知に使うカラムを選択 (Spaceで選択, Enterで決定)")
        .items(columns)
        .interact()
        .map_err(|e| AppError::Prompt(e.to_string()))?;

    Ok(indices.into_iter().map(|i| columns[i].clone()).collect())
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
