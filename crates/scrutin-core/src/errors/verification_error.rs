/// Reasons a candidate query is rejected before execution.
///
/// Checks run in declaration order; the first failure wins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerificationError {
    #[error("no query generated")]
    EmptyCandidate,

    #[error("security: forbidden statement {keyword} in generated query")]
    ForbiddenStatement { keyword: String },

    #[error("schema hallucination: object '{object}' does not exist")]
    SchemaHallucination { object: String },

    #[error("syntax error reported by the data store: {message}")]
    Syntax { message: String },
}
