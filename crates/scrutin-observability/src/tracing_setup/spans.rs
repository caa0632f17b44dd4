//! Span definitions per pipeline stage.

/// Span covering one whole run.
#[macro_export]
macro_rules! run_span {
    ($run_id:expr) => {
        tracing::info_span!("scrutin.run", run_id = %$run_id)
    };
}

/// Span covering one stage of a run.
#[macro_export]
macro_rules! stage_span {
    ($stage:expr) => {
        tracing::info_span!("scrutin.stage", stage = $stage)
    };
}

/// Span covering one generate/verify cycle.
#[macro_export]
macro_rules! attempt_span {
    ($attempt:expr) => {
        tracing::debug_span!("scrutin.attempt", attempt = $attempt)
    };
}

/// Span and stage names as constants for programmatic use.
pub mod names {
    pub const RUN: &str = "scrutin.run";
    pub const STAGE: &str = "scrutin.stage";
    pub const ATTEMPT: &str = "scrutin.attempt";

    pub const GUARDRAIL: &str = "guardrail";
    pub const CLASSIFY: &str = "classify";
    pub const RETRIEVE: &str = "retrieve";
    pub const GENERATE_VERIFY: &str = "generate_verify";
    pub const EXECUTE: &str = "execute";
    pub const CHART: &str = "chart";
    pub const COMPOSE: &str = "compose";
    pub const CLARIFY: &str = "clarify";
}
