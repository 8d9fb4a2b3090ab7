//! Eased count-up animation for the stats cards.

use crate::constants::COUNTER_DURATION_MS;
use crate::error::FxError;
use crate::scroll::is_in_trigger_zone;

#[inline]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Parse a `data-count` attribute value.
pub fn parse_count(raw: &str) -> Result<i64, FxError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FxError::InvalidCount(raw.to_string()))
}

/// Counts from zero up to `target` over `duration_ms`, driven by animation
/// frame timestamps. The first sample fixes the start time.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    duration_ms: f64,
    start_ms: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterSample {
    pub value: i64,
    pub done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self::with_duration(target, COUNTER_DURATION_MS)
    }

    pub fn with_duration(target: i64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            start_ms: None,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn sample(&mut self, timestamp_ms: f64) -> CounterSample {
        let start = *self.start_ms.get_or_insert(timestamp_ms);
        let progress = if self.duration_ms > 0.0 {
            ((timestamp_ms - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return CounterSample {
                value: self.target,
                done: true,
            };
        }
        CounterSample {
            value: (ease_out_cubic(progress) * self.target as f64).floor() as i64,
            done: false,
        }
    }
}

/// One-shot latch: the counters start at most once per page.
#[derive(Clone, Copy, Debug, Default)]
pub struct CounterGate {
    ran: bool,
}

impl CounterGate {
    pub fn has_run(&self) -> bool {
        self.ran
    }

    /// Indices of the cards to start on this scroll pass, given each card's
    /// bounding top. The first pass with any card in the trigger zone starts
    /// those cards and latches the gate; later passes start none.
    pub fn select(&mut self, tops: &[f64], viewport_height: f64, fraction: f64) -> Vec<usize> {
        if self.ran {
            return Vec::new();
        }
        let picked: Vec<usize> = tops
            .iter()
            .enumerate()
            .filter(|&(_, &top)| is_in_trigger_zone(top, viewport_height, fraction))
            .map(|(i, _)| i)
            .collect();
        self.ran = !picked.is_empty();
        picked
    }
}
