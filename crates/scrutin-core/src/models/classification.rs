//! Structured intent produced by the classifier.

use serde::{Deserialize, Deserializer, Serialize};

/// Whether the question may be answered, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestValidity {
    Allowed,
    Ambiguous,
    OutOfScope,
    PolicyViolation,
}

/// Shape of the query the question calls for. Steers SQL generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryNature {
    #[default]
    SimpleRetrieval,
    Ranking,
    Aggregation,
    Comparison,
}

impl QueryNature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SimpleRetrieval => "simple_retrieval",
            Self::Ranking => "ranking",
            Self::Aggregation => "aggregation",
            Self::Comparison => "comparison",
        }
    }
}

/// Kind of answer the user expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    SqlQuery,
    Visualization,
    Mixed,
}

/// Requested visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    Bar,
    Pie,
    Line,
    Histogram,
    Map,
}

/// Next stage after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Retrieval,
    Clarification,
    OutOfScopeRefusal,
    PolicyRefusal,
}

/// Classifier output. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(alias = "request_validity")]
    pub validity: RequestValidity,
    #[serde(default)]
    pub query_nature: QueryNature,
    #[serde(default, deserialize_with = "lenient")]
    pub task_type: Option<TaskType>,
    #[serde(default, deserialize_with = "lenient")]
    pub chart_type: Option<ChartType>,
    #[serde(default, alias = "reasoning_summary")]
    pub reasoning: String,
}

impl Classification {
    /// Deterministic substitute used when the classifier cannot answer.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            validity: RequestValidity::OutOfScope,
            query_nature: QueryNature::SimpleRetrieval,
            task_type: None,
            chart_type: None,
            reasoning: reason.into(),
        }
    }

    /// Routing table. Pure function of `validity`.
    pub fn route(&self) -> Route {
        match self.validity {
            RequestValidity::Allowed => Route::Retrieval,
            RequestValidity::Ambiguous => Route::Clarification,
            RequestValidity::OutOfScope => Route::OutOfScopeRefusal,
            RequestValidity::PolicyViolation => Route::PolicyRefusal,
        }
    }

    /// Whether the user asked for a visualization, explicitly or through the task type.
    pub fn wants_chart(&self) -> bool {
        self.chart_type.is_some()
            || matches!(
                self.task_type,
                Some(TaskType::Visualization) | Some(TaskType::Mixed)
            )
    }
}

/// Optional enum fields tolerate values outside the enum (e.g. `"table"`)
/// by reading them as absent instead of failing the whole classification.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}
