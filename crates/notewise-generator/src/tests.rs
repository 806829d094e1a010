//! End-to-end tests for the generators

#[cfg(test)]
mod tests {
    use crate::{
        fallback_keywords, fallback_quiz, fallback_summary, ContentGenerator, GeneratorConfig,
        KeywordExtractor, QuizGenerator, QuizOptions, SummaryGenerator,
    };
    use notewise_domain::{
        Difficulty, GenerationOptions, GenerationSource, QuizType, SummaryFormat, SummaryLength,
        TextGenerator,
    };
    use notewise_llm::{LlmError, MockProvider};
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    const NOTES: &str = "Photosynthesis converts light energy into chemical energy. \
        Plants capture light using chlorophyll in their leaves. \
        The chemical energy is stored as glucose for later use.";

    const QUIZ_JSON: &str = r#"{"questions": [
        {"question": "What pigment captures light?", "options": ["A) Chlorophyll", "B) Keratin", "C) Melanin", "D) Hemoglobin"], "correct_answer": "A"},
        {"question": "Glucose stores chemical energy.", "options": ["A) True", "B) False"], "correct_answer": "A"}
    ]}"#;

    /// Backend that answers only after `delay`
    struct SlowProvider {
        delay: Duration,
    }

    impl TextGenerator for SlowProvider {
        type Error = LlmError;

        fn is_available(&self) -> bool {
            true
        }

        async fn generate(&self, _prompt: &str, _options: GenerationOptions) -> Result<String, LlmError> {
            tokio::time::sleep(self.delay).await;
            Ok("too late".to_string())
        }
    }

    fn generator(llm: MockProvider) -> ContentGenerator<MockProvider> {
        ContentGenerator::new(llm, GeneratorConfig::default())
    }

    fn quiz_options(count: usize, quiz_type: QuizType) -> QuizOptions {
        QuizOptions {
            difficulty: Difficulty::Easy,
            question_count: count,
            quiz_type,
            note_title: Some("Plant Biology".to_string()),
        }
    }

    #[tokio::test]
    async fn test_empty_text_never_reaches_backend() {
        let llm = MockProvider::new("unused");
        let generator = generator(llm.clone());

        let summary = generator
            .generate_summary("   \n", SummaryLength::Auto, SummaryFormat::Paragraph)
            .await;
        let quiz = generator.generate_quiz("", &QuizOptions::default()).await;
        let keywords = generator.extract_keywords("\t", 5).await;

        assert_eq!(summary.content, "");
        assert_eq!(summary.source, GenerationSource::Skipped);
        assert!(quiz.content.is_empty());
        assert!(keywords.content.is_empty());
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_summary_ai_path_used_verbatim() {
        let llm = MockProvider::new("  A concise AI summary.  ");
        let generator = generator(llm.clone());

        let summary = generator
            .generate_summary(NOTES, SummaryLength::Long, SummaryFormat::Paragraph)
            .await;

        assert_eq!(summary.content, "A concise AI summary.");
        assert_eq!(summary.source, GenerationSource::Ai);
        assert_eq!(llm.call_count(), 1);
        // long summaries get the long budget
        assert_eq!(llm.recorded_options()[0].max_tokens, 2000);
    }

    #[tokio::test]
    async fn test_summary_auto_resolves_before_call() {
        let llm = MockProvider::new("short one");
        let generator = generator(llm.clone());

        generator
            .generate_summary(NOTES, SummaryLength::Auto, SummaryFormat::Paragraph)
            .await;

        assert_eq!(llm.recorded_options()[0].max_tokens, 600);
    }

    #[tokio::test]
    async fn test_summary_short_scenario_falls_back() {
        let generator = generator(MockProvider::unavailable());

        let summary = generator
            .generate_summary(NOTES, SummaryLength::Auto, SummaryFormat::Paragraph)
            .await;

        assert_eq!(summary.source, GenerationSource::Fallback);
        assert!(summary
            .content
            .starts_with("Photosynthesis converts light energy into chemical energy."));
        assert!(summary.content.contains("energy"));
    }

    #[tokio::test]
    async fn test_summary_backend_error_falls_back() {
        let llm = MockProvider::failing(LlmError::Transport("503".to_string()));
        let generator = generator(llm.clone());

        let summary = generator
            .generate_summary(NOTES, SummaryLength::Medium, SummaryFormat::BulletPoints)
            .await;

        assert_eq!(summary.source, GenerationSource::Fallback);
        assert_eq!(
            summary.content,
            fallback_summary(NOTES, SummaryLength::Medium, SummaryFormat::BulletPoints)
        );
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_backend_is_not_called() {
        let llm = MockProvider::unavailable();
        let generator = generator(llm.clone());

        generator.extract_keywords(NOTES, 3).await;
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_quiz_ai_path() {
        let llm = MockProvider::new(format!("```json\n{}\n```", QUIZ_JSON));
        let generator = generator(llm.clone());

        let quiz = generator
            .generate_quiz(NOTES, &quiz_options(2, QuizType::Mixed))
            .await;

        assert_eq!(quiz.source, GenerationSource::Ai);
        assert_eq!(quiz.content.len(), 2);
        assert_eq!(quiz.content.questions[0].question, "What pigment captures light?");
        assert_eq!(llm.recorded_options()[0].temperature, 0.7);
    }

    #[tokio::test]
    async fn test_quiz_ai_count_is_trusted() {
        // one question returned for a request of two
        let single = r#"{"questions": [{"question": "Q?", "options": ["A) True", "B) False"], "correct_answer": "B"}]}"#;
        let generator = generator(MockProvider::new(single));

        let quiz = generator
            .generate_quiz(NOTES, &quiz_options(2, QuizType::TrueFalse))
            .await;

        assert_eq!(quiz.source, GenerationSource::Ai);
        assert_eq!(quiz.content.len(), 1);
    }

    #[tokio::test]
    async fn test_quiz_unparseable_response_falls_back() {
        let generator = generator(MockProvider::new("I cannot produce a quiz today."));
        let options = quiz_options(4, QuizType::MultipleChoice);

        let quiz = generator.generate_quiz(NOTES, &options).await;

        assert_eq!(quiz.source, GenerationSource::Fallback);
        assert_eq!(quiz.content, fallback_quiz(NOTES, &options));
    }

    #[tokio::test]
    async fn test_quiz_mixed_fallback_scenario() {
        let text = "Mitochondria produce energy. Ribosomes assemble proteins. \
            Chloroplasts capture sunlight. Membranes control transport. Enzymes catalyze reactions.";
        let generator = generator(MockProvider::unavailable());

        let quiz = generator
            .generate_quiz(text, &quiz_options(6, QuizType::Mixed))
            .await;

        let true_false: Vec<usize> = quiz
            .content
            .questions
            .iter()
            .enumerate()
            .filter(|(_, q)| q.options.len() == 2)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(quiz.content.len(), 6);
        assert_eq!(true_false, vec![2, 5]);
        assert_eq!(
            quiz.content
                .questions
                .iter()
                .filter(|q| q.options.len() == 4)
                .count(),
            4
        );
    }

    #[tokio::test]
    async fn test_keywords_ai_path_truncates() {
        let llm = MockProvider::new("photosynthesis, chlorophyll, glucose, light");
        let generator = generator(llm);

        let keywords = generator.extract_keywords(NOTES, 2).await;

        assert_eq!(keywords.source, GenerationSource::Ai);
        assert_eq!(keywords.content, vec!["photosynthesis", "chlorophyll"]);
    }

    #[tokio::test]
    async fn test_keywords_blank_ai_answer_falls_back() {
        let generator = generator(MockProvider::new(" , , "));

        let keywords = generator.extract_keywords("the cat sat on the mat the cat ran", 3).await;

        assert_eq!(keywords.source, GenerationSource::Fallback);
        assert_eq!(keywords.content, vec!["cat", "sat", "mat"]);
    }

    #[tokio::test]
    async fn test_default_keyword_count_from_config() {
        let config = GeneratorConfig {
            default_keyword_count: 2,
            ..GeneratorConfig::default()
        };
        let generator = ContentGenerator::new(MockProvider::unavailable(), config);

        let keywords = generator.extract_default_keywords(NOTES).await;
        assert_eq!(keywords.content.len(), 2);
    }

    #[tokio::test]
    async fn test_prompts_routed_per_capability() {
        let mut llm = MockProvider::new("default");
        llm.add_response("comma-separated", "alpha, beta");
        llm.add_error("quiz", LlmError::MalformedResponse("no candidates".to_string()));
        let generator = generator(llm.clone());

        let keywords = generator.extract_keywords(NOTES, 5).await;
        let quiz = generator
            .generate_quiz(NOTES, &quiz_options(1, QuizType::TrueFalse))
            .await;
        let summary = generator
            .generate_summary(NOTES, SummaryLength::Short, SummaryFormat::Paragraph)
            .await;

        assert_eq!(keywords.content, vec!["alpha", "beta"]);
        assert_eq!(quiz.source, GenerationSource::Fallback);
        assert_eq!(summary.content, "default");
        assert_eq!(llm.call_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_falls_back() {
        let config = GeneratorConfig {
            request_timeout_secs: 1,
            ..GeneratorConfig::default()
        };
        let slow = Arc::new(SlowProvider {
            delay: Duration::from_secs(30),
        });
        let summaries = SummaryGenerator::new(slow, config);

        let summary = summaries
            .generate_summary(NOTES, SummaryLength::Short, SummaryFormat::Paragraph)
            .await;

        assert_eq!(summary.source, GenerationSource::Fallback);
    }

    #[tokio::test]
    async fn test_cancellation_falls_back() {
        let token = CancellationToken::new();
        let slow = Arc::new(SlowProvider {
            delay: Duration::from_secs(30),
        });
        let quizzes =
            QuizGenerator::new(slow, GeneratorConfig::default()).with_cancellation(token.clone());

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });
        let quiz = quizzes
            .generate_quiz(NOTES, &quiz_options(3, QuizType::MultipleChoice))
            .await;
        canceller.await.unwrap();

        assert_eq!(quiz.source, GenerationSource::Fallback);
        assert_eq!(quiz.content.len(), 3);
    }

    #[tokio::test]
    async fn test_pre_cancelled_token_skips_backend() {
        let token = CancellationToken::new();
        token.cancel();
        let llm = MockProvider::new("unused");
        let keywords = KeywordExtractor::new(Arc::new(llm.clone()), GeneratorConfig::default())
            .with_cancellation(token);

        let result = keywords.extract_keywords(NOTES, 3).await;

        assert_eq!(result.source, GenerationSource::Fallback);
        assert_eq!(llm.call_count(), 0);
    }

    #[test]
    fn test_fallbacks_are_deterministic() {
        let options = quiz_options(5, QuizType::Mixed);
        for length in [SummaryLength::Short, SummaryLength::Medium, SummaryLength::Long] {
            assert_eq!(
                fallback_summary(NOTES, length, SummaryFormat::Paragraph),
                fallback_summary(NOTES, length, SummaryFormat::Paragraph)
            );
        }
        assert_eq!(fallback_quiz(NOTES, &options), fallback_quiz(NOTES, &options));
        assert_eq!(fallback_keywords(NOTES, 5), fallback_keywords(NOTES, 5));
    }

    fn quiz_types() -> impl Strategy<Value = QuizType> {
        prop_oneof![
            Just(QuizType::MultipleChoice),
            Just(QuizType::TrueFalse),
            Just(QuizType::Mixed),
        ]
    }

    proptest! {
        #[test]
        fn prop_fallback_quiz_has_requested_count(
            text in "[A-Za-z ,.]{0,200}",
            count in 0usize..25,
            quiz_type in quiz_types(),
        ) {
            let options = QuizOptions { question_count: count, quiz_type, ..QuizOptions::default() };
            let quiz = fallback_quiz(&text, &options);

            prop_assert_eq!(quiz.len(), count);
            for question in &quiz.questions {
                prop_assert!(question.validate().is_ok());
                if question.options.len() == 4 {
                    prop_assert_eq!(question.correct_answer.as_str(), "A");
                } else {
                    prop_assert_eq!(question.options.len(), 2);
                }
            }
        }

        #[test]
        fn prop_fallback_keywords_bounded_and_unique(
            text in "[a-z ]{0,300}",
            count in 0usize..15,
        ) {
            let keywords = fallback_keywords(&text, count);

            prop_assert!(keywords.len() <= count);
            for (i, keyword) in keywords.iter().enumerate() {
                prop_assert!(keyword.chars().count() >= 3);
                prop_assert!(!keywords[..i].contains(keyword));
            }
        }

        #[test]
        fn prop_fallback_summary_nonempty(text in "[A-Za-z ]{1,80}[.!?]") {
            prop_assume!(!text.trim().is_empty());
            let summary = fallback_summary(&text, SummaryLength::Auto, SummaryFormat::Paragraph);
            prop_assert!(!summary.is_empty());
        }
    }
}
