use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

static CONTENT_DIR: Dir = include_dir!("src/content");

/// The two languages encoded in the content tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    English,
    Hebrew,
}

/// Tenses a sentence pattern can request from a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Tense {
    Present,
    Past,
}

pub const TENSES: [Tense; 2] = [Tense::Present, Tense::Past];
pub const LANGUAGES: [Language; 2] = [Language::English, Language::Hebrew];

/// Per-tense conjugation maps, keyed by pronoun key.
#[derive(Deserialize, Clone, Debug)]
pub struct ConjugationTable {
    pub present: BTreeMap<String, String>,
    pub past: BTreeMap<String, String>,
}

impl ConjugationTable {
    pub fn form(&self, tense: Tense, pronoun: &str) -> Option<&str> {
        let map = match tense {
            Tense::Present => &self.present,
            Tense::Past => &self.past,
        };
        map.get(pronoun).map(String::as_str)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Verb {
    pub name: String,
    pub english: ConjugationTable,
    pub hebrew: ConjugationTable,
}

impl Verb {
    pub fn form(&self, language: Language, tense: Tense, pronoun: &str) -> Option<&str> {
        match language {
            Language::English => self.english.form(tense, pronoun),
            Language::Hebrew => self.hebrew.form(tense, pronoun),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Pronoun {
    pub key: String,
    pub english: String,
    pub hebrew: String,
}

impl Pronoun {
    pub fn surface(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::Hebrew => &self.hebrew,
        }
    }
}

/// An object word spliced into a sentence, in both languages.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ObjectWord {
    pub english: String,
    pub hebrew: String,
}

impl ObjectWord {
    pub fn surface(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::Hebrew => &self.hebrew,
        }
    }
}

/// Candidate object words for each verb slot of a pattern.
#[derive(Deserialize, Clone, Debug)]
pub struct SlotObjects {
    pub verb1: Vec<ObjectWord>,
    pub verb2: Vec<ObjectWord>,
}

/// A sentence template: its id selects the rendering rule (which tense each
/// slot uses and which literals are spliced in).
#[derive(Deserialize, Clone, Debug)]
pub struct PatternSpec {
    pub id: String,
    pub objects: SlotObjects,
}

#[derive(Deserialize, Clone, Debug)]
struct VerbFile {
    verbs: Vec<Verb>,
}

#[derive(Deserialize, Clone, Debug)]
struct PronounFile {
    pronouns: Vec<Pronoun>,
}

#[derive(Deserialize, Clone, Debug)]
struct PatternFile {
    patterns: Vec<PatternSpec>,
}

/// A referenced conjugation is absent from the tables. This is a content
/// authoring defect, not a runtime fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    pub verb: String,
    pub language: Language,
    pub tense: Tense,
    pub pronoun: String,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no {} {} form of verb '{}' for pronoun '{}'",
            self.language, self.tense, self.verb, self.pronoun
        )
    }
}

impl Error for LookupError {}

/// Defects found by the startup validation pass over the embedded tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    MissingForm(LookupError),
    EmptyObjects { pattern: String, slot: &'static str },
    NoVerbs,
    NoPronouns,
    NoPatterns,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::MissingForm(err) => fmt::Display::fmt(err, f),
            DataError::EmptyObjects { pattern, slot } => {
                write!(f, "pattern '{pattern}' has no object words for {slot}")
            }
            DataError::NoVerbs => write!(f, "verb table is empty"),
            DataError::NoPronouns => write!(f, "pronoun table is empty"),
            DataError::NoPatterns => write!(f, "pattern table is empty"),
        }
    }
}

impl Error for DataError {}

/// The three static tables the whole program runs off.
#[derive(Clone, Debug)]
pub struct Tables {
    pub verbs: Vec<Verb>,
    pub pronouns: Vec<Pronoun>,
    pub patterns: Vec<PatternSpec>,
}

impl Tables {
    /// Deserialize the embedded JSON tables. Panics only if the files baked
    /// into the binary are malformed, which is a build defect.
    pub fn load() -> Self {
        let verbs: VerbFile = read_table("verbs.json");
        let pronouns: PronounFile = read_table("pronouns.json");
        let patterns: PatternFile = read_table("patterns.json");
        Self {
            verbs: verbs.verbs,
            pronouns: pronouns.pronouns,
            patterns: patterns.patterns,
        }
    }

    pub fn verb(&self, name: &str) -> Option<&Verb> {
        self.verbs.iter().find(|v| v.name == name)
    }

    pub fn pronoun(&self, key: &str) -> Option<&Pronoun> {
        self.pronouns.iter().find(|p| p.key == key)
    }

    /// Check the data integrity invariant: every verb supplies a form for
    /// every pronoun, in both tenses and both languages, and every pattern
    /// slot has at least one object word to pick from.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.verbs.is_empty() {
            return Err(DataError::NoVerbs);
        }
        if self.pronouns.is_empty() {
            return Err(DataError::NoPronouns);
        }
        if self.patterns.is_empty() {
            return Err(DataError::NoPatterns);
        }

        for verb in &self.verbs {
            for language in LANGUAGES {
                for tense in TENSES {
                    for pronoun in &self.pronouns {
                        if verb.form(language, tense, &pronoun.key).is_none() {
                            return Err(DataError::MissingForm(LookupError {
                                verb: verb.name.clone(),
                                language,
                                tense,
                                pronoun: pronoun.key.clone(),
                            }));
                        }
                    }
                }
            }
        }

        for pattern in &self.patterns {
            if pattern.objects.verb1.is_empty() {
                return Err(DataError::EmptyObjects {
                    pattern: pattern.id.clone(),
                    slot: "verb1",
                });
            }
            if pattern.objects.verb2.is_empty() {
                return Err(DataError::EmptyObjects {
                    pattern: pattern.id.clone(),
                    slot: "verb2",
                });
            }
        }

        Ok(())
    }
}

fn read_table<T: for<'de> Deserialize<'de>>(file_name: &str) -> T {
    let file = CONTENT_DIR
        .get_file(file_name)
        .expect("Content file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    from_str(file_as_str).expect("Unable to deserialize content json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_load() {
        let tables = Tables::load();

        assert!(!tables.verbs.is_empty());
        assert!(!tables.pronouns.is_empty());
        assert!(!tables.patterns.is_empty());
    }

    #[test]
    fn test_shipped_tables_validate() {
        let tables = Tables::load();
        assert_eq!(tables.validate(), Ok(()));
    }

    #[test]
    fn test_first_verb_is_want() {
        // The default selection at startup is the first verb in the table.
        let tables = Tables::load();
        assert_eq!(tables.verbs[0].name, "want");
    }

    #[test]
    fn test_verb_lookup_by_name() {
        let tables = Tables::load();

        assert!(tables.verb("eat").is_some());
        assert!(tables.verb("fly").is_none());
    }

    #[test]
    fn test_pronoun_lookup_by_key() {
        let tables = Tables::load();

        let pronoun = tables.pronoun("I").unwrap();
        assert_eq!(pronoun.english, "I");
        assert_eq!(pronoun.hebrew, "אני");
        assert!(tables.pronoun("it").is_none());
    }

    #[test]
    fn test_conjugation_forms() {
        let tables = Tables::load();
        let eat = tables.verb("eat").unwrap();

        assert_eq!(eat.form(Language::English, Tense::Present, "he"), Some("eats"));
        assert_eq!(eat.form(Language::English, Tense::Past, "I"), Some("ate"));
        assert_eq!(eat.form(Language::Hebrew, Tense::Past, "I"), Some("אכלתי"));
        assert_eq!(eat.form(Language::Hebrew, Tense::Present, "she"), Some("אוכלת"));
        assert_eq!(eat.form(Language::English, Tense::Present, "it"), None);
    }

    #[test]
    fn test_validate_reports_missing_form() {
        let mut tables = Tables::load();
        tables.verbs[0].hebrew.past.remove("we");

        let verb = tables.verbs[0].name.clone();
        match tables.validate() {
            Err(DataError::MissingForm(err)) => {
                assert_eq!(err.verb, verb);
                assert_eq!(err.language, Language::Hebrew);
                assert_eq!(err.tense, Tense::Past);
                assert_eq!(err.pronoun, "we");
            }
            other => panic!("expected MissingForm, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_reports_empty_object_slot() {
        let mut tables = Tables::load();
        tables.patterns[1].objects.verb2.clear();

        assert_eq!(
            tables.validate(),
            Err(DataError::EmptyObjects {
                pattern: tables.patterns[1].id.clone(),
                slot: "verb2",
            })
        );
    }

    #[test]
    fn test_validate_reports_empty_tables() {
        let mut tables = Tables::load();
        tables.pronouns.clear();
        assert_eq!(tables.validate(), Err(DataError::NoPronouns));
    }

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError {
            verb: "eat".to_string(),
            language: Language::Hebrew,
            tense: Tense::Past,
            pronoun: "we".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "no hebrew past form of verb 'eat' for pronoun 'we'"
        );
    }

    #[test]
    fn test_pattern_schema() {
        let json_data = r#"
        {
            "id": "present-past",
            "objects": {
                "verb1": [{ "english": "falafel", "hebrew": "פלאפל" }],
                "verb2": [{ "english": "pizza", "hebrew": "פיצה" }]
            }
        }
        "#;

        let pattern: PatternSpec = from_str(json_data).expect("Failed to deserialize test pattern");

        assert_eq!(pattern.id, "present-past");
        assert_eq!(pattern.objects.verb1.len(), 1);
        assert_eq!(pattern.objects.verb1[0].surface(Language::Hebrew), "פלאפל");
    }
}
