//! アップロードコントローラ
//!
//! ユーザー操作と2つのリモート呼び出しを結び付け、結果をセッション状態に反映する。
//!
//! 各操作は `begin_*`（入力検証・フォーム作成）と `complete_*`（レスポンス反映）に
//! 分かれている。UIのイベントループから使う場合は begin と complete の間で
//! 非同期呼び出しを行う。`request_columns` / `detect_anomalies` はその一連を
//! まとめたもの。
//!
//! 重複送信と古いレスポンスの扱い:
//! - 同じ操作が実行中なら `ControllerError::Busy` で拒否する
//! - ファイルを選び直すと世代が進み、実行中のレスポンスはすべて破棄される

use crate::error::{ControllerError, Operation, Result, TransportError, UserInputError};
use crate::form::UploadForm;
use crate::service::AnomalyService;
use crate::session::{Phase, SessionState};
use crate::types::{ColumnsResponse, DetectionResult, SelectedFile};
use serde_json::Value;
use tracing::{debug, info, warn};

/// 実行中リクエストの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    operation: Operation,
    generation: u64,
    seq: u64,
}

impl Ticket {
    pub fn operation(&self) -> Operation {
        self.operation
    }
}

/// 送信待ちのリクエスト
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub ticket: Ticket,
    pub form: UploadForm,
}

/// レスポンス反映の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 状態に反映した
    Applied,
    /// 古いリクエストのレスポンスなので捨てた
    Discarded,
}

#[derive(Debug, Clone, Copy, Default)]
struct InFlight {
    columns: Option<Ticket>,
    detect: Option<Ticket>,
}

impl InFlight {
    fn slot(&mut self, operation: Operation) -> &mut Option<Ticket> {
        match operation {
            Operation::RequestColumns => &mut self.columns,
            Operation::DetectAnomalies => &mut self.detect,
        }
    }

    fn get(&self, operation: Operation) -> Option<Ticket> {
        match operation {
            Operation::RequestColumns => self.columns,
            Operation::DetectAnomalies => self.detect,
        }
    }
}

/// アップロードコントローラ
#[derive(Debug, Clone, Default)]
pub struct UploadController {
    session: SessionState,
    generation: u64,
    next_seq: u64,
    in_flight: InFlight,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    /// contaminationの初期値を指定して作成
    pub fn with_contamination(contamination: f64) -> Self {
        let mut controller = Self::default();
        controller.session.contamination = contamination;
        controller
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn is_in_flight(&self, operation: Operation) -> bool {
        self.in_flight.get(operation).is_some()
    }

    // =============================================
    // ユーザー入力
    // =============================================

    /// ファイルを選択する
    ///
    /// カラム一覧・選択・結果はそのまま残す。実行中のリクエストは無効になる。
    pub fn select_file(&mut self, file: SelectedFile) {
        info!(file = file.file_name(), bytes = file.len(), "file selected");
        self.generation += 1;
        self.in_flight = InFlight::default();
        self.session.file = Some(file);
        self.session.phase = Phase::FileSelected;
    }

    /// contaminationを設定する（範囲チェックは送信時）
    pub fn set_contamination(&mut self, contamination: f64) {
        self.session.contamination = contamination;
    }

    pub fn select_column(&mut self, column: &str) -> std::result::Result<(), UserInputError> {
        self.ensure_known(column)?;
        if !self.session.is_selected(column) {
            let mut selected = self.session.selected_columns.clone();
            selected.push(column.to_string());
            self.session.reorder_selection(selected);
        }
        Ok(())
    }

    pub fn deselect_column(&mut self, column: &str) {
        self.session.selected_columns.retain(|c| c != column);
    }

    /// 選択を切り替え、切り替え後に選択されていればtrue
    pub fn toggle_column(&mut self, column: &str) -> std::result::Result<bool, UserInputError> {
        if self.session.is_selected(column) {
            self.deselect_column(column);
            Ok(false)
        } else {
            self.select_column(column)?;
            Ok(true)
        }
    }

    /// 選択をまとめて置き換える。未知のカラムが1つでもあれば何も変えない
    pub fn set_selected_columns<I, S>(&mut self, columns: I) -> std::result::Result<(), UserInputError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        for column in &columns {
            self.ensure_known(column)?;
        }
        self.session.reorder_selection(columns);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.session.selected_columns.clear();
    }

    fn ensure_known(&self, column: &str) -> std::result::Result<(), UserInputError> {
        if self.session.columns.iter().any(|c| c == column) {
            Ok(())
        } else {
            Err(UserInputError::UnknownColumn(column.to_string()))
        }
    }

    // =============================================
    // カラム一覧取得
    // =============================================

    pub fn begin_request_columns(&mut self) -> Result<PendingRequest> {
        let file = self.session.file.as_ref().ok_or(UserInputError::NoFileToUpload)?;
        let form = UploadForm::columns(file);
        let ticket = self.issue(Operation::RequestColumns)?;
        debug!(seq = ticket.seq, "requesting columns");
        Ok(PendingRequest { ticket, form })
    }

    pub fn complete_request_columns(
        &mut self,
        ticket: Ticket,
        response: std::result::Result<Value, TransportError>,
    ) -> Result<Outcome> {
        if !self.settle(ticket) {
            return Ok(Outcome::Discarded);
        }

        let columns = response
            .and_then(|body| {
                serde_json::from_value::<ColumnsResponse>(body)
                    .map_err(|e| TransportError::InvalidResponse(e.to_string()))
            })
            .map_err(|error| self.transport_failure(Operation::RequestColumns, error))?
            .columns;

        info!(count = columns.len(), "columns loaded");
        self.session.replace_columns(columns);
        self.session.phase = Phase::ColumnsLoaded;
        Ok(Outcome::Applied)
    }

    /// カラム一覧を取得して状態に反映する
    pub async fn request_columns<S: AnomalyService>(&mut self, service: &S) -> Result<Outcome> {
        let pending = self.begin_request_columns()?;
        let response = service.post_form(&pending.form).await;
        self.complete_request_columns(pending.ticket, response)
    }

    // =============================================
    // 異常検知
    // =============================================

    pub fn begin_detect(&mut self) -> Result<PendingRequest> {
        let file = self
            .session
            .file
            .as_ref()
            .ok_or(UserInputError::NoFileForDetection)?;
        if self.session.selected_columns.is_empty() {
            return Err(UserInputError::NoColumnsSelected.into());
        }
        let contamination = self.session.contamination;
        if !is_valid_contamination(contamination) {
            return Err(UserInputError::ContaminationOutOfRange(contamination).into());
        }

        let form = UploadForm::detection(file, &self.session.selected_columns, contamination);
        let ticket = self.issue(Operation::DetectAnomalies)?;
        debug!(
            seq = ticket.seq,
            columns = ?self.session.selected_columns,
            contamination,
            "requesting detection"
        );
        Ok(PendingRequest { ticket, form })
    }

    pub fn complete_detect(
        &mut self,
        ticket: Ticket,
        response: std::result::Result<Value, TransportError>,
    ) -> Result<Outcome> {
        if !self.settle(ticket) {
            return Ok(Outcome::Discarded);
        }

        let body = response.map_err(|error| self.transport_failure(Operation::DetectAnomalies, error))?;

        info!("detection result received");
        self.session.result = Some(DetectionResult::new(body));
        self.session.phase = Phase::ResultReady;
        Ok(Outcome::Applied)
    }

    /// 異常検知を実行して結果を状態に反映する
    pub async fn detect_anomalies<S: AnomalyService>(&mut self, service: &S) -> Result<Outcome> {
        let pending = self.begin_detect()?;
        let response = service.post_form(&pending.form).await;
        self.complete_detect(pending.ticket, response)
    }

    // =============================================
    // 内部
    // =============================================

    fn issue(&mut self, operation: Operation) -> Result<Ticket> {
        let slot = self.in_flight.slot(operation);
        if slot.is_some() {
            return Err(ControllerError::Busy(operation));
        }
        self.next_seq += 1;
        let ticket = Ticket {
            operation,
            generation: self.generation,
            seq: self.next_seq,
        };
        *self.in_flight.slot(operation) = Some(ticket);
        Ok(ticket)
    }

    /// 現行のチケットなら実行中フラグを下ろしてtrueを返す
    fn settle(&mut self, ticket: Ticket) -> bool {
        let slot = self.in_flight.slot(ticket.operation);
        if *slot != Some(ticket) || ticket.generation != self.generation {
            debug!(operation = %ticket.operation, seq = ticket.seq, "discarding stale response");
            return false;
        }
        *slot = None;
        true
    }

    fn transport_failure(&self, operation: Operation, error: TransportError) -> ControllerError {
        warn!(%operation, %error, "request failed");
        ControllerError::Transport { operation, error }
    }
}

/// contaminationが開区間(0, 1)にあるか
pub fn is_valid_contamination(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value < 1.0
}
