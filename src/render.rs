use crate::challenge::Challenge;
use crate::content::{Language, LookupError, Tables, Tense};

const PRESENT_PAST: &str = "present-past";

/// Render a challenge as a full sentence in the requested language.
///
/// The pattern id selects the rendering rule. "present-past" is
/// "<subject> <verb1 present> <object1> but yesterday <verb2 past> pizza";
/// every other id is the same-tense rule
/// "<subject> <verb1 past> Hebrew and <verb2 past> <object2>". In the
/// Hebrew branch the "and" is the vav prefix, glued to verb2 with no space.
///
/// Never fails when the tables passed `Tables::validate`; a missing form
/// comes back as a `LookupError` naming the (verb, tense, pronoun) triple.
pub fn render(
    challenge: &Challenge,
    language: Language,
    tables: &Tables,
) -> Result<String, LookupError> {
    let pronoun = &challenge.pronoun;
    let subject = pronoun.surface(language);

    if challenge.pattern.id == PRESENT_PAST {
        let verb1 = conjugate(
            tables,
            &challenge.pattern.verb1.verb,
            language,
            Tense::Present,
            &pronoun.key,
        )?;
        let verb2 = conjugate(
            tables,
            &challenge.pattern.verb2.verb,
            language,
            Tense::Past,
            &pronoun.key,
        )?;
        let object1 = challenge.object1.surface(language);

        Ok(match language {
            Language::English => {
                format!("{subject} {verb1} {object1} but yesterday {verb2} pizza")
            }
            Language::Hebrew => {
                format!("{subject} {verb1} {object1} אבל אתמול {verb2} פיצה")
            }
        })
    } else {
        let verb1 = conjugate(
            tables,
            &challenge.pattern.verb1.verb,
            language,
            Tense::Past,
            &pronoun.key,
        )?;
        let verb2 = conjugate(
            tables,
            &challenge.pattern.verb2.verb,
            language,
            Tense::Past,
            &pronoun.key,
        )?;
        let object2 = challenge.object2.surface(language);

        Ok(match language {
            Language::English => {
                format!("{subject} {verb1} Hebrew and {verb2} {object2}")
            }
            Language::Hebrew => {
                format!("{subject} {verb1} עברית ו{verb2} {object2}")
            }
        })
    }
}

fn conjugate<'a>(
    tables: &'a Tables,
    verb: &str,
    language: Language,
    tense: Tense,
    pronoun: &str,
) -> Result<&'a str, LookupError> {
    tables
        .verb(verb)
        .and_then(|v| v.form(language, tense, pronoun))
        .ok_or_else(|| LookupError {
            verb: verb.to_string(),
            language,
            tense,
            pronoun: pronoun.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::{BoundPattern, SlotBinding};
    use crate::content::ObjectWord;

    fn object(english: &str, hebrew: &str) -> ObjectWord {
        ObjectWord {
            english: english.to_string(),
            hebrew: hebrew.to_string(),
        }
    }

    fn challenge(
        tables: &Tables,
        id: &str,
        verb1: &str,
        verb2: &str,
        pronoun: &str,
        object1: ObjectWord,
        object2: ObjectWord,
    ) -> Challenge {
        Challenge {
            pattern: BoundPattern {
                id: id.to_string(),
                verb1: SlotBinding {
                    verb: verb1.to_string(),
                    objects: vec![object1.clone()],
                },
                verb2: SlotBinding {
                    verb: verb2.to_string(),
                    objects: vec![object2.clone()],
                },
            },
            pronoun: tables.pronoun(pronoun).unwrap().clone(),
            object1,
            object2,
        }
    }

    #[test]
    fn test_present_past_english() {
        let tables = Tables::load();
        let challenge = challenge(
            &tables,
            "present-past",
            "want",
            "eat",
            "I",
            object("falafel", "פלאפל"),
            object("pizza", "פיצה"),
        );

        assert_eq!(
            render(&challenge, Language::English, &tables).unwrap(),
            "I want falafel but yesterday ate pizza"
        );
    }

    #[test]
    fn test_present_past_hebrew() {
        let tables = Tables::load();
        let challenge = challenge(
            &tables,
            "present-past",
            "want",
            "eat",
            "I",
            object("falafel", "פלאפל"),
            object("pizza", "פיצה"),
        );

        assert_eq!(
            render(&challenge, Language::Hebrew, &tables).unwrap(),
            "אני רוצה פלאפל אבל אתמול אכלתי פיצה"
        );
    }

    #[test]
    fn test_past_past_english() {
        let tables = Tables::load();
        let challenge = challenge(
            &tables,
            "past-past",
            "eat",
            "eat",
            "you",
            object("coffee", "קפה"),
            object("soup", "מרק"),
        );

        assert_eq!(
            render(&challenge, Language::English, &tables).unwrap(),
            "you ate Hebrew and ate soup"
        );
    }

    #[test]
    fn test_past_past_hebrew_glues_vav_to_verb2() {
        let tables = Tables::load();
        let challenge = challenge(
            &tables,
            "past-past",
            "learn",
            "eat",
            "we",
            object("coffee", "קפה"),
            object("falafel", "פלאפל"),
        );

        assert_eq!(
            render(&challenge, Language::Hebrew, &tables).unwrap(),
            "אנחנו למדנו עברית ואכלנו פלאפל"
        );
    }

    #[test]
    fn test_unrecognized_pattern_id_uses_same_tense_rule() {
        // Any id other than "present-past" renders with the past-past rule,
        // so the rendering rule is total over pattern ids.
        let tables = Tables::load();
        let challenge = challenge(
            &tables,
            "future-perfect",
            "drink",
            "drink",
            "she",
            object("coffee", "קפה"),
            object("soup", "מרק"),
        );

        assert_eq!(
            render(&challenge, Language::English, &tables).unwrap(),
            "she drank Hebrew and drank soup"
        );
    }

    #[test]
    fn test_third_person_present_agreement() {
        let tables = Tables::load();
        let challenge = challenge(
            &tables,
            "present-past",
            "want",
            "eat",
            "he",
            object("hummus", "חומוס"),
            object("pizza", "פיצה"),
        );

        assert_eq!(
            render(&challenge, Language::English, &tables).unwrap(),
            "he wants hummus but yesterday ate pizza"
        );
    }

    #[test]
    fn test_missing_form_names_the_triple() {
        let mut tables = Tables::load();
        let idx = tables.verbs.iter().position(|v| v.name == "eat").unwrap();
        tables.verbs[idx].hebrew.past.remove("I");

        let challenge = challenge(
            &tables,
            "present-past",
            "want",
            "eat",
            "I",
            object("falafel", "פלאפל"),
            object("pizza", "פיצה"),
        );

        // English still renders.
        assert!(render(&challenge, Language::English, &tables).is_ok());

        let err = render(&challenge, Language::Hebrew, &tables).unwrap_err();
        assert_eq!(err.verb, "eat");
        assert_eq!(err.language, Language::Hebrew);
        assert_eq!(err.tense, Tense::Past);
        assert_eq!(err.pronoun, "I");
    }

    #[test]
    fn test_missing_verb_names_the_triple() {
        let tables = Tables::load();
        let challenge = challenge(
            &tables,
            "past-past",
            "fly",
            "eat",
            "I",
            object("coffee", "קפה"),
            object("soup", "מרק"),
        );

        let err = render(&challenge, Language::English, &tables).unwrap_err();
        assert_eq!(err.verb, "fly");
        assert_eq!(err.tense, Tense::Past);
    }

    #[test]
    fn test_render_never_fails_over_shipped_tables() {
        // Exhaustive sweep: every pattern id, pronoun, verb pair and
        // language renders over the shipped data.
        let tables = Tables::load();

        for spec in &tables.patterns {
            for pronoun in &tables.pronouns {
                for verb1 in &tables.verbs {
                    for verb2 in &tables.verbs {
                        let challenge = Challenge {
                            pattern: BoundPattern {
                                id: spec.id.clone(),
                                verb1: SlotBinding {
                                    verb: verb1.name.clone(),
                                    objects: spec.objects.verb1.clone(),
                                },
                                verb2: SlotBinding {
                                    verb: verb2.name.clone(),
                                    objects: spec.objects.verb2.clone(),
                                },
                            },
                            pronoun: pronoun.clone(),
                            object1: spec.objects.verb1[0].clone(),
                            object2: spec.objects.verb2[0].clone(),
                        };

                        for language in crate::content::LANGUAGES {
                            let sentence = render(&challenge, language, &tables).unwrap();
                            assert!(!sentence.is_empty());
                        }
                    }
                }
            }
        }
    }
}
