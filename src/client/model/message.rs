//! User-facing notification texts.

/// Shown for any failed list query.
pub const GENERIC_ERROR: &str = "An error has occurred";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    fn past(self) -> &'static str {
        match self {
            Operation::Create => "created",
            Operation::Update => "updated",
            Operation::Delete => "deleted",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Operation::Create => "creating",
            Operation::Update => "updating",
            Operation::Delete => "deleting",
        }
    }

    /// e.g. "Loan created successfully"
    pub fn success(self, entity: &str) -> String {
        format!("{} {} successfully", capitalize(entity), self.past())
    }

    /// Fallback when the backend gave no structured error,
    /// e.g. "An error occurred while creating the loan"
    pub fn failure(self, entity: &str) -> String {
        format!(
            "An error occurred while {} the {}",
            self.verb(),
            entity.to_lowercase()
        )
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
