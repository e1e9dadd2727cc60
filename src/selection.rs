use std::error::Error;
use std::fmt;

/// Rejected mutations of the selected verb set. The UI treats these as
/// no-ops; they never reach the challenge generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    AlreadySelected(String),
    LastVerb(String),
    UnknownVerb(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::AlreadySelected(name) => {
                write!(f, "verb '{name}' is already selected")
            }
            SelectionError::LastVerb(name) => {
                write!(f, "cannot remove '{name}': at least one verb must stay selected")
            }
            SelectionError::UnknownVerb(name) => write!(f, "unknown verb '{name}'"),
        }
    }
}

impl Error for SelectionError {}

/// The ordered set of verb names the learner drills. Never empty, never
/// holds duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbSelection {
    verbs: Vec<String>,
}

impl VerbSelection {
    pub fn new(first: impl Into<String>) -> Self {
        Self {
            verbs: vec![first.into()],
        }
    }

    pub fn verbs(&self) -> &[String] {
        &self.verbs
    }

    pub fn first(&self) -> &str {
        &self.verbs[0]
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        // The constructor and remove() uphold the non-empty invariant.
        false
    }

    pub fn contains(&self, name: &str) -> bool {
        self.verbs.iter().any(|v| v == name)
    }

    /// Append a verb not already selected.
    pub fn add(&mut self, name: impl Into<String>) -> Result<(), SelectionError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(SelectionError::AlreadySelected(name));
        }
        self.verbs.push(name);
        Ok(())
    }

    /// Remove a verb unless it is the last one left.
    pub fn remove(&mut self, name: &str) -> Result<(), SelectionError> {
        if !self.contains(name) {
            return Err(SelectionError::UnknownVerb(name.to_string()));
        }
        if self.verbs.len() == 1 {
            return Err(SelectionError::LastVerb(name.to_string()));
        }
        self.verbs.retain(|v| v != name);
        Ok(())
    }
}
