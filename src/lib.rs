//! anomaly-upload CLI library
//!
//! 共通コントローラをreqwestで動かすネイティブ側の実装

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod service;
