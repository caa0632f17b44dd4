/// The query under verification, replaced on every attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateQuery {
    sql: Option<String>,
    attempt: u32,
}

impl CandidateQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt with a freshly generated (possibly null) query.
    pub fn replace(&mut self, sql: Option<String>) {
        self.attempt += 1;
        self.sql = sql;
    }

    pub fn sql(&self) -> Option<&str> {
        self.sql.as_deref()
    }

    /// Number of generation attempts made so far.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }
}
