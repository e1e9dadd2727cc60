use crate::challenge::{self, Challenge};
use crate::content::{Language, LookupError, Tables};
use crate::render::render;
use crate::selection::{SelectionError, VerbSelection};
use rand::Rng;

/// One practice sitting: the selected verbs, the current challenge, and
/// whether its answer is showing. Replaces the original's ambient mutable
/// current-challenge with a value the UI owns and passes around.
#[derive(Debug, Clone)]
pub struct Session {
    tables: Tables,
    selection: VerbSelection,
    challenge: Challenge,
    answer_visible: bool,
}

impl Session {
    /// Start a session: generates the first challenge with the answer
    /// hidden. The tables are expected to have passed `Tables::validate`.
    pub fn new(tables: Tables, selection: VerbSelection) -> Self {
        let challenge = challenge::generate(&selection, &tables);
        Self {
            tables,
            selection,
            challenge,
            answer_visible: false,
        }
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn selection(&self) -> &VerbSelection {
        &self.selection
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn answer_visible(&self) -> bool {
        self.answer_visible
    }

    /// Flip answer visibility without touching the challenge.
    pub fn toggle_answer(&mut self) {
        self.answer_visible = !self.answer_visible;
    }

    /// Draw a fresh challenge and hide the answer.
    pub fn next_challenge(&mut self) {
        self.challenge = challenge::generate(&self.selection, &self.tables);
        self.answer_visible = false;
    }

    /// Seeded variant for deterministic tests.
    pub fn next_challenge_with(&mut self, rng: &mut impl Rng) {
        self.challenge = challenge::generate_with(&self.selection, &self.tables, rng);
        self.answer_visible = false;
    }

    /// Add a catalog verb to the selection. A successful change regenerates
    /// the challenge with the answer hidden; a rejected one changes nothing.
    pub fn add_verb(&mut self, name: &str) -> Result<(), SelectionError> {
        if self.tables.verb(name).is_none() {
            return Err(SelectionError::UnknownVerb(name.to_string()));
        }
        self.selection.add(name)?;
        self.next_challenge();
        Ok(())
    }

    /// Remove a verb from the selection, unless it is the last one.
    pub fn remove_verb(&mut self, name: &str) -> Result<(), SelectionError> {
        self.selection.remove(name)?;
        self.next_challenge();
        Ok(())
    }

    /// The English sentence the learner translates.
    pub fn question(&self) -> Result<String, LookupError> {
        render(&self.challenge, Language::English, &self.tables)
    }

    /// The Hebrew sentence, shown on request.
    pub fn answer(&self) -> Result<String, LookupError> {
        render(&self.challenge, Language::Hebrew, &self.tables)
    }
}
