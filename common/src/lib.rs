//! Anomaly Upload Common Library
//!
//! CLIとWeb(WASM)で共有されるセッション状態とコントローラ

pub mod types;
pub mod error;
pub mod form;
pub mod service;
pub mod session;
pub mod controller;

pub use types::{ColumnsResponse, DetectionResult, SelectedFile, DEFAULT_CONTAMINATION};
pub use error::{ControllerError, Operation, Result, TransportError, UserInputError};
pub use form::{Endpoint, FormPart, FormValue, UploadForm};
pub use service::{error_message_from_body, parse_success_body, status_error, AnomalyService};
pub use session::{Phase, SessionState};
pub use controller::{is_valid_contamination, Outcome, PendingRequest, Ticket, UploadController};
