use crate::content::{ObjectWord, PatternSpec, Pronoun, Tables};
use crate::selection::VerbSelection;
use rand::seq::SliceRandom;
use rand::Rng;

/// A pattern verb slot bound to a concrete verb from the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotBinding {
    pub verb: String,
    pub objects: Vec<ObjectWord>,
}

/// A sentence pattern with both slots bound.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundPattern {
    pub id: String,
    pub verb1: SlotBinding,
    pub verb2: SlotBinding,
}

/// One drill for the learner: a bound pattern, a pronoun, and the object
/// words picked for each slot. Object picks are made here, once, so that
/// rendering the same challenge twice gives the same sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    pub pattern: BoundPattern,
    pub pronoun: Pronoun,
    pub object1: ObjectWord,
    pub object2: ObjectWord,
}

/// Bind each pattern's slots to the selection. The fallback rule is kept
/// from the original template author: verb1 is "want" when selected, verb2
/// is "eat" when selected, anything else collapses to the first selected
/// verb for both slots.
pub fn bind_patterns(selection: &VerbSelection, patterns: &[PatternSpec]) -> Vec<BoundPattern> {
    let first = selection.first();
    let verb1 = if selection.contains("want") { "want" } else { first };
    let verb2 = if selection.contains("eat") { "eat" } else { first };

    patterns
        .iter()
        .map(|pattern| BoundPattern {
            id: pattern.id.clone(),
            verb1: SlotBinding {
                verb: verb1.to_string(),
                objects: pattern.objects.verb1.clone(),
            },
            verb2: SlotBinding {
                verb: verb2.to_string(),
                objects: pattern.objects.verb2.clone(),
            },
        })
        .collect()
}

/// Pick a pattern, a pronoun, and the slot objects uniformly at random.
///
/// Preconditions (upheld by `VerbSelection` and `Tables::validate`): the
/// selection, pattern table, pronoun table, and slot object lists are all
/// non-empty.
pub fn generate_with(
    selection: &VerbSelection,
    tables: &Tables,
    rng: &mut impl Rng,
) -> Challenge {
    let bound = bind_patterns(selection, &tables.patterns);
    let pattern = bound.choose(rng).expect("pattern table is empty").clone();
    let pronoun = tables
        .pronouns
        .choose(rng)
        .expect("pronoun table is empty")
        .clone();
    let object1 = pattern
        .verb1
        .objects
        .choose(rng)
        .expect("verb1 slot has no object words")
        .clone();
    let object2 = pattern
        .verb2
        .objects
        .choose(rng)
        .expect("verb2 slot has no object words")
        .clone();

    Challenge {
        pattern,
        pronoun,
        object1,
        object2,
    }
}

pub fn generate(selection: &VerbSelection, tables: &Tables) -> Challenge {
    generate_with(selection, tables, &mut rand::thread_rng())
}
