//! セッション状態
//!
//! 1セッション分の状態をまとめたレコード。永続化はしない。
//! 変更は `UploadController` 経由でのみ行う。

use crate::types::{DetectionResult, SelectedFile, DEFAULT_CONTAMINATION};

/// 状態遷移のフェーズ
///
/// `Idle → FileSelected → ColumnsLoaded → ResultReady`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    FileSelected,
    ColumnsLoaded,
    ResultReady,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::FileSelected => "file-selected",
            Phase::ColumnsLoaded => "columns-loaded",
            Phase::ResultReady => "result-ready",
        }
    }
}

/// セッション状態
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub(crate) file: Option<SelectedFile>,
    pub(crate) columns: Vec<String>,
    pub(crate) selected_columns: Vec<String>,
    pub(crate) contamination: f64,
    pub(crate) result: Option<DetectionResult>,
    pub(crate) phase: Phase,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            file: None,
            columns: Vec::new(),
            selected_columns: Vec::new(),
            contamination: DEFAULT_CONTAMINATION,
            result: None,
            phase: Phase::Idle,
        }
    }
}

impl SessionState {
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// 直近の成功レスポンスのカラム一覧（順序はサーバーのまま）
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// 選択中のカラム（`columns` の順）
    pub fn selected_columns(&self) -> &[String] {
        &self.selected_columns
    }

    pub fn is_selected(&self, column: &str) -> bool {
        self.selected_columns.iter().any(|c| c == column)
    }

    pub fn contamination(&self) -> f64 {
        self.contamination
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 選択を `columns` の順に並べ直す
    pub(crate) fn reorder_selection(&mut self, mut selected: Vec<String>) {
        selected.retain(|c| self.columns.contains(c));
        self.selected_columns = self
            .columns
            .iter()
            .filter(|c| selected.contains(c))
            .cloned()
            .collect();
    }

    /// 新しいカラム一覧で置き換える。一覧にない選択は外す
    pub(crate) fn replace_columns(&mut self, columns: Vec<String>) {
        self.columns = columns;
        let selected = std::mem::take(&mut self.selected_columns);
        self.reorder_selection(selected);
    }
}
