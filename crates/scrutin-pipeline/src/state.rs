//! Per-run aggregate.

use scrutin_core::errors::StageError;
use scrutin_core::models::{
    CandidateQuery, ChartArtifact, Classification, ErrorLog, PipelineOutput, Request, ResultSet,
    RetrievalContext, Terminal,
};
use tracing::info;

/// Everything one run accumulates. Owned by exactly one run and consumed by
/// [`RunState::finish`].
#[derive(Debug)]
pub struct RunState {
    pub run_id: String,
    pub request: Request,
    pub classification: Option<Classification>,
    pub retrieval: Option<RetrievalContext>,
    pub candidate: CandidateQuery,
    pub errors: ErrorLog,
    pub verified_sql: Option<String>,
    pub rows: ResultSet,
    pub chart: Option<ChartArtifact>,
}

impl RunState {
    pub fn new(question: &str) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            request: Request::new(question),
            classification: None,
            retrieval: None,
            candidate: CandidateQuery::new(),
            errors: ErrorLog::new(),
            verified_sql: None,
            rows: ResultSet::empty(),
            chart: None,
        }
    }

    pub fn record(&mut self, error: StageError) {
        tracing::warn!(kind = error.kind(), error = %error, "stage error recorded");
        self.errors.record(error);
    }

    pub fn finish(self, terminal: Terminal, answer: impl Into<String>) -> PipelineOutput {
        info!(
            terminal = terminal.as_str(),
            attempts = self.candidate.attempt(),
            errors = self.errors.len(),
            rows = self.rows.len(),
            "run finished"
        );
        PipelineOutput {
            run_id: self.run_id,
            final_answer: answer.into(),
            result_rows: self.rows,
            chart: self.chart,
            errors: self.errors.messages(),
            terminal,
            attempts: self.candidate.attempt(),
            sql: self.verified_sql,
        }
    }
}
