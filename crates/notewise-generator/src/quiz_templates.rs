//! Fixed question banks for the fallback quiz
//!
//! Multiple-choice answer sets list the correct answer first. True/false
//! statements carry a fixed truth value.

/// Question phrasing and answers, correct answer first; `{term}` is replaced
pub(crate) struct ChoiceTemplate {
    pub question: &'static str,
    pub answers: [&'static str; 4],
}

/// Statement and whether it is true; `{term}` is replaced
pub(crate) struct StatementTemplate {
    pub statement: &'static str,
    pub is_true: bool,
}

pub(crate) const TERM_CHOICES: &[ChoiceTemplate] = &[
    ChoiceTemplate {
        question: "What is the primary function of {term} in the context of this material?",
        answers: [
            "It plays a central role in the main ideas discussed",
            "It is mentioned only as a historical footnote",
            "It contradicts the rest of the material",
            "It has no connection to the topic",
        ],
    },
    ChoiceTemplate {
        question: "How does {term} interact with the other concepts in these notes?",
        answers: [
            "It connects to and supports several related ideas",
            "It stands apart from every other idea",
            "It replaces all of the other concepts",
            "It is only relevant outside this subject",
        ],
    },
    ChoiceTemplate {
        question: "Which statement best describes {term}?",
        answers: [
            "It is a key concept the notes explain",
            "It is an unrelated technical term",
            "It is a minor typographical detail",
            "It is an idea the notes reject as incorrect",
        ],
    },
    ChoiceTemplate {
        question: "Why is {term} important for understanding this topic?",
        answers: [
            "It helps explain how the main ideas fit together",
            "It is only useful for memorization drills",
            "It is not important for this topic",
            "It matters only in unrelated fields",
        ],
    },
    ChoiceTemplate {
        question: "What would most likely happen if {term} were misunderstood?",
        answers: [
            "Related ideas in the notes would be harder to grasp",
            "Nothing, since it is irrelevant",
            "The topic would become simpler",
            "Only the vocabulary would change",
        ],
    },
];

pub(crate) const TERM_STATEMENTS: &[StatementTemplate] = &[
    StatementTemplate {
        statement: "{term} is one of the concepts discussed in this material.",
        is_true: true,
    },
    StatementTemplate {
        statement: "{term} is presented as unrelated to the main topic of the notes.",
        is_true: false,
    },
    StatementTemplate {
        statement: "Understanding {term} helps in understanding the overall topic.",
        is_true: true,
    },
    StatementTemplate {
        statement: "The notes say {term} can be ignored when studying this subject.",
        is_true: false,
    },
];

pub(crate) const GENERIC_CHOICES: &[ChoiceTemplate] = &[
    ChoiceTemplate {
        question: "What is the main purpose of these notes?",
        answers: [
            "To explain the key ideas of a topic",
            "To list unrelated facts",
            "To argue against the topic",
            "To provide entertainment only",
        ],
    },
    ChoiceTemplate {
        question: "What is the most effective way to study this material?",
        answers: [
            "Review the main ideas and how they connect",
            "Memorize a single sentence",
            "Skip the difficult parts",
            "Read only the title",
        ],
    },
    ChoiceTemplate {
        question: "Which habit best helps you retain this content?",
        answers: [
            "Summarizing it in your own words",
            "Reading it once quickly",
            "Ignoring the examples",
            "Avoiding any review",
        ],
    },
];

pub(crate) const GENERIC_STATEMENTS: &[StatementTemplate] = &[
    StatementTemplate {
        statement: "These notes present information about a specific topic.",
        is_true: true,
    },
    StatementTemplate {
        statement: "Nothing in these notes is worth reviewing.",
        is_true: false,
    },
];
