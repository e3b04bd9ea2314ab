//! Static teaching text shown on the intro page.

#[derive(Clone, Copy, Debug)]
pub struct GlossaryItem {
    pub term: &'static str,
    pub definition: &'static str,
}

pub const INTRO_TITLE: &str = "Stacking: An Interactive Machine Learning Tutorial";
pub const DEMO_TITLE: &str = "Interactive Stacking Demo";

pub const INTRO_SUMMARY: &str = "Stacking is an ensemble learning technique that combines multiple \
models (base learners) to improve predictive performance. The predictions of these base models \
are used as inputs to a final model (meta-learner), which learns how to best combine them.";

pub const INTRO_POINTS: &[&str] = &[
    "Base learners: Different models trained on the same dataset.",
    "Meta-learner: A model that learns from the outputs of base learners.",
];

pub const DEMO_INSTRUCTIONS: &str = "Move the slider to change the input sample. Adjust the \
weights to see how the meta-learner combines the base models.";

pub const START_BUTTON: &str = "Try Interactive Demo";
pub const BACK_BUTTON: &str = "Back to Theory";

pub const GLOSSARY: &[GlossaryItem] = &[
    GlossaryItem {
        term: "Base learner",
        definition: "One of several independent predictors whose outputs feed a combiner.",
    },
    GlossaryItem {
        term: "Meta-learner",
        definition: "A model that combines base-learner outputs into a final prediction; here, a weighted average.",
    },
    GlossaryItem {
        term: "Sample",
        definition: "The scalar input value driving all base-model simulations.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glossary_terms_are_unique_and_filled() {
        let mut terms: Vec<_> = GLOSSARY.iter().map(|item| item.term).collect();
        terms.sort_unstable();
        terms.dedup();
        assert_eq!(terms.len(), GLOSSARY.len());
        assert!(GLOSSARY.iter().all(|item| !item.definition.is_empty()));
    }
}
