use std::path::Path;
use std::sync::Arc;

use scrutin_core::config::ScrutinConfig;
use scrutin_core::errors::ScrutinError;
use scrutin_core::traits::{ICompletionService, IQueryStore};
use scrutin_llm::ChatCompletionClient;
use scrutin_observability::{RunLog, RunLogEntry};
use scrutin_pipeline::Pipeline;
use scrutin_retrieval::ExampleRetriever;
use scrutin_storage::loader::parse_records;
use scrutin_storage::{load_results, QueryStore};
use tracing::info;

use crate::error::CliError;

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Build a pipeline wired to the configured store, completion endpoint and
/// example corpus.
pub fn build_pipeline(config: &ScrutinConfig) -> Result<Pipeline, CliError> {
    let store = QueryStore::open(&config.storage)?;
    let client = ChatCompletionClient::from_config(&config.completion).map_err(ScrutinError::from)?;
    let retriever = ExampleRetriever::from_config(&config.retrieval).map_err(ScrutinError::from)?;
    info!(
        db = %config.storage.db_path,
        model = client.name(),
        examples = retriever.corpus().len(),
        "pipeline ready"
    );
    Ok(Pipeline::new(
        config,
        Arc::new(client) as Arc<dyn ICompletionService>,
        Arc::new(store) as Arc<dyn IQueryStore>,
        Arc::new(retriever),
    ))
}

pub fn ask(config: &ScrutinConfig, question: &str) -> Result<(), CliError> {
    let pipeline = build_pipeline(config)?;
    let output = pipeline.answer(question);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn load(config: &ScrutinConfig, records: &Path) -> Result<(), CliError> {
    let records = parse_records(&read(records)?)?;
    let db_path = Path::new(&config.storage.db_path);
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CliError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }
    let summary = load_results(db_path, &records)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Non-empty, trimmed lines of a questions file.
pub fn question_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn batch(config: &ScrutinConfig, questions: &Path) -> Result<(), CliError> {
    let questions = question_lines(&read(questions)?);
    let pipeline = build_pipeline(config)?;

    let outputs = pipeline.answer_many(&questions);

    let mut log = RunLog::new();
    for (question, (output, latency)) in questions.iter().zip(&outputs) {
        log.record(RunLogEntry::from_output(question.as_str(), output, *latency));
        println!("{}", serde_json::to_string(output)?);
    }
    println!("{}", serde_json::to_string_pretty(&log.summary())?);
    Ok(())
}
