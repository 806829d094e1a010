//! Option value objects accepted by the generators
//!
//! Every option enum has a stable lowercase wire name (`as_str`) and a
//! lenient parser (`parse`) that accepts the same names case-insensitively.

/// Requested summary length
///
/// `Auto` is resolved to one of the concrete lengths from the input text
/// before any generation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SummaryLength {
    /// Two or three sentences
    Short,

    /// One or two paragraphs
    Medium,

    /// Comprehensive multi-paragraph summary
    Long,

    /// Pick a length from the size of the input
    #[default]
    Auto,
}

impl SummaryLength {
    /// Get the length name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
            SummaryLength::Auto => "auto",
        }
    }

    /// Parse a length from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "short" => Some(SummaryLength::Short),
            "medium" => Some(SummaryLength::Medium),
            "long" => Some(SummaryLength::Long),
            "auto" => Some(SummaryLength::Auto),
            _ => None,
        }
    }
}

impl std::str::FromStr for SummaryLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid summary length: {}", s))
    }
}

/// Rendering format of a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SummaryFormat {
    /// Continuous prose
    #[default]
    Paragraph,

    /// One `• ` bullet per point
    BulletPoints,
}

impl SummaryFormat {
    /// Get the format name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryFormat::Paragraph => "paragraph",
            SummaryFormat::BulletPoints => "bullet_points",
        }
    }

    /// Parse a format from a string (`bullets` is accepted as an alias)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "paragraph" => Some(SummaryFormat::Paragraph),
            "bullet_points" | "bullet-points" | "bullets" => Some(SummaryFormat::BulletPoints),
            _ => None,
        }
    }
}

impl std::str::FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid summary format: {}", s))
    }
}

/// Quiz difficulty tier
///
/// Each tier selects a different question style:
/// - Easy: recall of facts and definitions
/// - Medium: relationships between concepts
/// - Hard: analysis, evaluation and synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Recall-only questions
    Easy,

    /// Relational questions
    #[default]
    Medium,

    /// Analytical and synthesis questions
    Hard,
}

impl Difficulty {
    /// Get the difficulty name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a difficulty from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid difficulty: {}", s))
    }
}

/// Kind of questions a quiz contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuizType {
    /// Four options, one correct
    #[default]
    MultipleChoice,

    /// True/False statements
    TrueFalse,

    /// Multiple-choice with interleaved true/false items
    Mixed,
}

impl QuizType {
    /// Get the quiz type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizType::MultipleChoice => "multiple_choice",
            QuizType::TrueFalse => "true_false",
            QuizType::Mixed => "mixed",
        }
    }

    /// Parse a quiz type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "multiple_choice" => Some(QuizType::MultipleChoice),
            "true_false" => Some(QuizType::TrueFalse),
            "mixed" => Some(QuizType::Mixed),
            _ => None,
        }
    }

    /// Split a question count into (multiple-choice, true/false) shares
    ///
    /// `Mixed` gives multiple-choice 60% of the questions, rounded up.
    pub fn allocation(&self, question_count: usize) -> (usize, usize) {
        match self {
            QuizType::MultipleChoice => (question_count, 0),
            QuizType::TrueFalse => (0, question_count),
            QuizType::Mixed => {
                let multiple_choice = (question_count * 3).div_ceil(5);
                (multiple_choice, question_count - multiple_choice)
            }
        }
    }
}

impl std::str::FromStr for QuizType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid quiz type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_length_parsing() {
        assert_eq!(SummaryLength::parse("SHORT"), Some(SummaryLength::Short));
        assert_eq!(SummaryLength::parse(" auto "), Some(SummaryLength::Auto));
        assert_eq!(SummaryLength::parse("tiny"), None);
        assert!("long".parse::<SummaryLength>().is_ok());
    }

    #[test]
    fn test_summary_format_aliases() {
        assert_eq!(SummaryFormat::parse("bullets"), Some(SummaryFormat::BulletPoints));
        assert_eq!(SummaryFormat::parse("bullet_points"), Some(SummaryFormat::BulletPoints));
        assert_eq!(SummaryFormat::BulletPoints.as_str(), "bullet_points");
    }

    #[test]
    fn test_quiz_type_parsing() {
        assert_eq!(QuizType::parse("true-false"), Some(QuizType::TrueFalse));
        assert_eq!(QuizType::parse("Multiple_Choice"), Some(QuizType::MultipleChoice));
        assert!("essay".parse::<QuizType>().is_err());
    }

    #[test]
    fn test_mixed_allocation_rounds_up() {
        assert_eq!(QuizType::Mixed.allocation(5), (3, 2));
        assert_eq!(QuizType::Mixed.allocation(6), (4, 2));
        assert_eq!(QuizType::Mixed.allocation(1), (1, 0));
        assert_eq!(QuizType::Mixed.allocation(0), (0, 0));
    }

    #[test]
    fn test_single_type_allocation() {
        assert_eq!(QuizType::MultipleChoice.allocation(4), (4, 0));
        assert_eq!(QuizType::TrueFalse.allocation(4), (0, 4));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(SummaryLength::default(), SummaryLength::Auto);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(QuizType::default(), QuizType::MultipleChoice);
    }
}
