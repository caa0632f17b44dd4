//! Run log: question, terminal, attempts, errors, rows, latency.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use scrutin_core::models::{PipelineOutput, Terminal};

/// A single completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunLogEntry {
    pub run_id: String,
    pub question: String,
    pub terminal: Terminal,
    pub attempts: u32,
    pub error_count: usize,
    pub row_count: usize,
    pub latency: Duration,
    pub timestamp_epoch_ms: i64,
}

impl RunLogEntry {
    /// Summarize `output`, timestamped now.
    pub fn from_output(question: impl Into<String>, output: &PipelineOutput, latency: Duration) -> Self {
        Self {
            run_id: output.run_id.clone(),
            question: question.into(),
            terminal: output.terminal,
            attempts: output.attempts,
            error_count: output.errors.len(),
            row_count: output.result_rows.len(),
            latency,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Aggregate view of a `RunLog`.
#[derive(Debug, Clone, Serialize)]
pub struct RunLogSummary {
    pub runs: usize,
    pub avg_latency_ms: u64,
    pub p95_latency_ms: u64,
    pub by_terminal: BTreeMap<&'static str, usize>,
}

/// Append-only, bounded log of completed runs.
#[derive(Debug, Clone)]
pub struct RunLog {
    entries: Vec<RunLogEntry>,
    /// Oldest entries are dropped past this size.
    max_entries: usize,
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

impl RunLog {
    pub fn new() -> Self {
        Self::with_capacity(10_000)
    }

    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn record(&mut self, entry: RunLogEntry) {
        tracing::debug!(
            event = "run_logged",
            run_id = %entry.run_id,
            terminal = entry.terminal.as_str(),
            attempts = entry.attempts,
            errors = entry.error_count,
            rows = entry.row_count,
            latency_ms = entry.latency.as_millis() as u64,
            "run logged"
        );

        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            self.entries.drain(..self.entries.len() - self.max_entries);
        }
    }

    pub fn entries(&self) -> &[RunLogEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }

    /// Latency at the given percentile (0.0–1.0).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let mut latencies: Vec<Duration> = self.entries.iter().map(|e| e.latency).collect();
        latencies.sort();
        let idx = ((p.clamp(0.0, 1.0) * (latencies.len() - 1) as f64).round() as usize)
            .min(latencies.len() - 1);
        latencies[idx]
    }

    pub fn terminal_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.terminal.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn summary(&self) -> RunLogSummary {
        RunLogSummary {
            runs: self.count(),
            avg_latency_ms: self.avg_latency().as_millis() as u64,
            p95_latency_ms: self.latency_percentile(0.95).as_millis() as u64,
            by_terminal: self.terminal_counts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(terminal: Terminal, latency_ms: u64) -> RunLogEntry {
        RunLogEntry {
            run_id: "r".into(),
            question: "q".into(),
            terminal,
            attempts: 1,
            error_count: 0,
            row_count: 0,
            latency: Duration::from_millis(latency_ms),
            timestamp_epoch_ms: 0,
        }
    }

    #[test]
    fn latency_stats() {
        let mut log = RunLog::new();
        for ms in [10, 20, 30, 40] {
            log.record(entry(Terminal::Answered, ms));
        }
        assert_eq!(log.avg_latency(), Duration::from_millis(25));
        assert_eq!(log.latency_percentile(0.0), Duration::from_millis(10));
        assert_eq!(log.latency_percentile(1.0), Duration::from_millis(40));
    }

    #[test]
    fn bounded_drops_oldest() {
        let mut log = RunLog::with_capacity(2);
        log.record(entry(Terminal::Answered, 1));
        log.record(entry(Terminal::NoResults, 2));
        log.record(entry(Terminal::PolicyRefusal, 3));
        assert_eq!(log.count(), 2);
        assert_eq!(log.entries()[0].terminal, Terminal::NoResults);
    }

    #[test]
    fn summary_counts_terminals() {
        let mut log = RunLog::new();
        log.record(entry(Terminal::Answered, 5));
        log.record(entry(Terminal::Answered, 5));
        log.record(entry(Terminal::GenerationFailed, 5));
        let summary = log.summary();
        assert_eq!(summary.runs, 3);
        assert_eq!(summary.by_terminal.get("answered"), Some(&2));
        assert_eq!(summary.by_terminal.get("generation_failed"), Some(&1));
    }

    #[test]
    fn empty_log_is_zero() {
        let log = RunLog::default();
        assert_eq!(log.avg_latency(), Duration::ZERO);
        assert_eq!(log.latency_percentile(0.5), Duration::ZERO);
        assert!(log.summary().by_terminal.is_empty());
    }
}
