//! AnomalyService連携

pub mod anomaly;
