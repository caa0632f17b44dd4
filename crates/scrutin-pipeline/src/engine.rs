//! Run orchestration: one question in, one `PipelineOutput` out.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use scrutin_core::config::ScrutinConfig;
use scrutin_core::constants::MAX_RECORDED_ERRORS;
use scrutin_core::errors::StageError;
use scrutin_core::models::{Classification, PipelineOutput, RetrievalContext, Route, Terminal};
use scrutin_core::text::normalize;
use scrutin_core::traits::{IChartRenderer, ICompletionService, IQueryStore};
use scrutin_guardrail::{engine::REFUSAL_MESSAGE, LexicalGuardrail};
use scrutin_observability::tracing_setup::spans::names;
use scrutin_observability::{attempt_span, run_span, stage_span};
use scrutin_retrieval::ExampleRetriever;
use tracing::{debug, warn};

use crate::chart::{decide, ChartDecision, SvgChartRenderer};
use crate::clarification::ClarificationComposer;
use crate::classifier::IntentClassifier;
use crate::composer::AnswerComposer;
use crate::executor::QueryExecutor;
use crate::generator::QueryGenerator;
use crate::messages;
use crate::prompts::generation::GenerationInput;
use crate::state::RunState;
use crate::verifier::QueryVerifier;

/// The full question-answering pipeline. `Send + Sync`; runs share only
/// read-only collaborators.
pub struct Pipeline {
    guardrail: LexicalGuardrail,
    classifier: IntentClassifier,
    retriever: Arc<ExampleRetriever>,
    generator: QueryGenerator,
    verifier: QueryVerifier,
    executor: QueryExecutor,
    renderer: Arc<dyn IChartRenderer>,
    composer: AnswerComposer,
    clarifier: ClarificationComposer,
    row_limit: usize,
}

impl Pipeline {
    /// Wire the stages. The SVG renderer is used until
    /// [`Pipeline::with_renderer`] replaces it.
    pub fn new(
        config: &ScrutinConfig,
        completion: Arc<dyn ICompletionService>,
        store: Arc<dyn IQueryStore>,
        retriever: Arc<ExampleRetriever>,
    ) -> Self {
        Self {
            guardrail: LexicalGuardrail::new(),
            classifier: IntentClassifier::new(
                Arc::clone(&completion),
                config.pipeline.ambiguity_policy,
            ),
            retriever,
            generator: QueryGenerator::new(Arc::clone(&completion)),
            verifier: QueryVerifier::new(Arc::clone(&store)),
            executor: QueryExecutor::new(store),
            renderer: Arc::new(SvgChartRenderer::new()),
            composer: AnswerComposer::new(
                Arc::clone(&completion),
                config.pipeline.composer_max_rows,
            ),
            clarifier: ClarificationComposer::new(completion),
            row_limit: config.pipeline.row_limit,
        }
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn IChartRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Answer one question. Never fails; every failure ends in a terminal
    /// state with a fixed user-facing message.
    pub fn answer(&self, question: &str) -> PipelineOutput {
        let mut state = RunState::new(question);
        let span = run_span!(state.run_id);
        let _run = span.enter();

        let verdict = stage_span!(names::GUARDRAIL).in_scope(|| self.guardrail.check(question));
        if let Some(violation) = verdict.to_stage_error() {
            state.record(violation);
            return state.finish(Terminal::PolicyRefusal, REFUSAL_MESSAGE);
        }

        let classification = stage_span!(names::CLASSIFY).in_scope(|| {
            self.classifier.classify(question).unwrap_or_else(|e| {
                let fallback = Classification::fallback(e.to_string());
                state.record(e);
                fallback
            })
        });
        let route = classification.route();
        state.classification = Some(classification.clone());

        match route {
            Route::Retrieval => {}
            Route::OutOfScopeRefusal => {
                return state.finish(Terminal::OutOfScopeRefusal, messages::OUT_OF_SCOPE)
            }
            Route::PolicyRefusal => {
                return state.finish(Terminal::PolicyRefusal, messages::POLICY_VIOLATION)
            }
            Route::Clarification => {
                let answer = stage_span!(names::CLARIFY).in_scope(|| {
                    self.clarifier
                        .clarify(question, &classification.reasoning)
                        .unwrap_or_else(|e| {
                            state.record(e);
                            messages::CLARIFICATION_FALLBACK.to_string()
                        })
                });
                return state.finish(Terminal::Clarification, answer);
            }
        }

        let retrieval =
            stage_span!(names::RETRIEVE).in_scope(|| self.retriever.retrieve(question));
        debug!(examples = retrieval.examples().len(), "retrieval context ready");

        let verified = stage_span!(names::GENERATE_VERIFY)
            .in_scope(|| self.generate_verified(&mut state, &classification, &retrieval));
        state.retrieval = Some(retrieval);
        let Some(sql) = verified else {
            return state.finish(Terminal::GenerationFailed, messages::GENERATION_FAILED);
        };
        state.verified_sql = Some(sql.clone());

        let executed = stage_span!(names::EXECUTE).in_scope(|| self.executor.execute(&sql));
        match executed {
            Ok(rows) => state.rows = rows,
            Err(e) => {
                state.record(StageError::Execution(e));
                return state.finish(Terminal::ExecutionFailed, messages::EXECUTION_FAILED);
            }
        }

        if state.rows.is_empty() {
            return state.finish(Terminal::NoResults, messages::NO_RESULTS);
        }

        if let ChartDecision::Render(chart_type) = decide(&classification, &state.rows) {
            let rendered =
                stage_span!(names::CHART).in_scope(|| self.renderer.render(chart_type, &state.rows));
            match rendered {
                Ok(artifact) => state.chart = Some(artifact),
                Err(e) => state.record(StageError::Render(e)),
            }
        }

        let composed =
            stage_span!(names::COMPOSE).in_scope(|| self.composer.compose(question, &state.rows));
        match composed {
            Ok(answer) => state.finish(Terminal::Answered, answer),
            Err(e) => {
                state.record(e);
                state.finish(Terminal::CompositionFailed, messages::COMPOSITION_FAILED)
            }
        }
    }

    /// Answer several questions concurrently, one run per rayon task.
    /// Output order follows input order; each output carries its wall time.
    pub fn answer_many(&self, questions: &[String]) -> Vec<(PipelineOutput, Duration)> {
        questions
            .par_iter()
            .map(|q| {
                let start = Instant::now();
                let output = self.answer(q);
                (output, start.elapsed())
            })
            .collect()
    }

    /// Bounded generate/verify loop. Ends with a verified statement, or
    /// `None` once the error log holds `MAX_RECORDED_ERRORS` entries.
    fn generate_verified(
        &self,
        state: &mut RunState,
        classification: &Classification,
        retrieval: &RetrievalContext,
    ) -> Option<String> {
        let question = state.request.text().to_string();
        let normalized = normalize(&question);

        for attempt in 1..=MAX_RECORDED_ERRORS {
            let _attempt = attempt_span!(attempt).entered();

            let feedback = state.errors.last().map(ToString::to_string);
            let input = GenerationInput {
                question: &question,
                normalized_question: &normalized,
                query_nature: classification.query_nature,
                last_error: feedback.as_deref(),
                retrieval,
                row_limit: self.row_limit,
            };

            let generated = self.generator.generate(&input).unwrap_or_else(|e| {
                state.record(StageError::Generation(e));
                None
            });
            state.candidate.replace(generated);
            if state.errors.len() >= MAX_RECORDED_ERRORS {
                warn!(attempt, "error ceiling reached");
                return None;
            }

            match self.verifier.verify(state.candidate.sql()) {
                Ok(()) => return state.candidate.sql().map(str::to_string),
                Err(e) => {
                    state.record(e.into());
                    if state.errors.len() >= MAX_RECORDED_ERRORS {
                        warn!(attempt, "error ceiling reached");
                        return None;
                    }
                }
            }
        }
        None
    }
}
