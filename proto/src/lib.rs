//! Data handed from the simulation to presenters and reporters
//!
//! Uses postcard for compact binary export

use postcard::{from_bytes, to_allocvec};

// ============================================================================
// Presentation
// ============================================================================

/// Per-tick view of the arena
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub score_left: u32,
    pub score_right: u32,
}

// ============================================================================
// Reporting
// ============================================================================

/// Outcome of a finished run
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunReport {
    pub ticks: u64,
    pub score_left: u32,
    pub score_right: u32,
    /// Mean combined score, one entry per completed statistics window
    pub window_averages: Vec<f64>,
    /// Ended by a stop request before the tick budget ran out
    pub stopped_early: bool,
}

/// Learned values at the end of a run, one row per position bucket
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QTableSnapshot {
    pub bucket_size: f32,
    pub rows: Vec<[f64; 3]>, // down, up, stay
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl RunReport {
    /// Serialize report to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize report from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }

    /// Mean of all window averages, `None` before the first window closes
    pub fn overall_average(&self) -> Option<f64> {
        if self.window_averages.is_empty() {
            return None;
        }
        Some(self.window_averages.iter().sum::<f64>() / self.window_averages.len() as f64)
    }
}

impl QTableSnapshot {
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_report_serialization() {
        let report = RunReport {
            ticks: 20,
            score_left: 1,
            score_right: 0,
            window_averages: vec![0.0, 0.25],
            stopped_early: false,
        };
        let bytes = report.to_bytes().expect("Serialization should succeed");
        let decoded = RunReport::from_bytes(&bytes).expect("Deserialization should succeed");
        assert_eq!(decoded, report);
    }

    #[test]
    fn test_truncated_report_is_rejected() {
        let report = RunReport {
            ticks: 100,
            score_left: 3,
            score_right: 4,
            window_averages: vec![1.5; 10],
            stopped_early: true,
        };
        let bytes = report.to_bytes().unwrap();
        assert!(RunReport::from_bytes(&bytes[..bytes.len() / 2]).is_err());
    }

    #[test]
    fn test_overall_average() {
        let mut report = RunReport {
            ticks: 0,
            score_left: 0,
            score_right: 0,
            window_averages: Vec::new(),
            stopped_early: false,
        };
        assert_eq!(report.overall_average(), None);

        report.window_averages = vec![1.0, 2.0, 3.0];
        assert_eq!(report.overall_average(), Some(2.0));
    }

    #[test]
    fn test_q_table_snapshot_serialization() {
        let snapshot = QTableSnapshot {
            bucket_size: 10.0,
            rows: vec![[0.0, 0.5, -0.25]; 4],
        };
        let bytes = snapshot.to_bytes().unwrap();
        match QTableSnapshot::from_bytes(&bytes) {
            Ok(decoded) => {
                assert_eq!(decoded.rows.len(), 4);
                assert_eq!(decoded.rows[2], [0.0, 0.5, -0.25]);
            }
            Err(e) => panic!("Deserialization failed: {e:?}"),
        }
    }
}
