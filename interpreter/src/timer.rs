// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::time::{Duration, Instant};

/// Wall-clock time of a run, minus the time spent waiting for input.
#[derive(Debug, Clone)]
pub struct ExecutionTimer {
    started: Instant,
    paused_at: Option<Instant>,
    paused_total: Duration,
}

impl ExecutionTimer {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            paused_at: None,
            paused_total: Duration::ZERO,
        }
    }

    pub fn pause(&mut self) {
        if self.paused_at.is_none() {
            self.paused_at = Some(Instant::now());
        }
    }

    pub fn resume(&mut self) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total += paused_at.elapsed();
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        let now = self.paused_at.unwrap_or_else(Instant::now);
        now.duration_since(self.started).saturating_sub(self.paused_total)
    }
}

impl Default for ExecutionTimer {
    fn default() -> Self {
        Self::start()
    }
}

/// `[timeexec] 1.234 ms`
#[must_use]
pub fn format_report(elapsed: Duration) -> String {
    format!("[timeexec] {:.3} ms", elapsed.as_secs_f64() * 1000.0)
}
