//! Parse model output into quizzes and keyword lists

use crate::error::GeneratorError;
use crate::types::{Question, QuizResult};
use serde_json::Value;
use tracing::{debug, warn};

/// Parse a quiz response
///
/// Code fences are stripped, then the text is parsed as JSON. When that fails
/// the span from the first `{` to the last `}` is tried instead. Individual
/// questions missing a required field are skipped; a response yielding no
/// questions at all is an error.
pub fn parse_quiz_response(response: &str) -> Result<QuizResult, GeneratorError> {
    let body = strip_code_fences(response);

    let questions = match questions_from_json(body) {
        Ok(questions) => questions,
        Err(direct) => {
            let span = embedded_object(body).ok_or(direct)?;
            debug!("Quiz response was not bare JSON, parsing embedded object");
            questions_from_json(span)?
        }
    };

    let mut parsed = Vec::with_capacity(questions.len());
    for (idx, question_json) in questions.iter().enumerate() {
        match parse_question_json(question_json) {
            Ok(question) => {
                if let Err(e) = question.validate() {
                    warn!("Question {} looks inconsistent, keeping it: {}", idx, e);
                }
                parsed.push(question);
            }
            Err(e) => warn!("Failed to parse question {}: {}", idx, e),
        }
    }

    if parsed.is_empty() {
        return Err(GeneratorError::InvalidFormat(
            "response contained no usable questions".to_string(),
        ));
    }
    Ok(QuizResult { questions: parsed })
}

/// Split a keyword response on commas
///
/// Entries are trimmed and empty ones dropped; at most `count` are kept.
pub fn parse_keyword_response(response: &str, count: usize) -> Vec<String> {
    strip_code_fences(response)
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .take(count)
        .map(str::to_string)
        .collect()
}

/// Remove a surrounding markdown code block, if any
fn strip_code_fences(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // drop the info string (```json) along with the opening fence line
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.trim_end().trim_end_matches("```").trim()
}

/// Text from the first `{` to the last `}`
fn embedded_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn questions_from_json(json_str: &str) -> Result<Vec<Value>, GeneratorError> {
    let json: Value = serde_json::from_str(json_str)?;
    match json.get("questions") {
        Some(Value::Array(questions)) => Ok(questions.clone()),
        Some(_) => Err(GeneratorError::InvalidFormat(
            "'questions' is not an array".to_string(),
        )),
        None => Err(GeneratorError::InvalidFormat(
            "missing 'questions' field".to_string(),
        )),
    }
}

fn parse_question_json(json: &Value) -> Result<Question, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Question is not a JSON object".to_string())?;

    let question = obj
        .get("question")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing or invalid 'question'".to_string())?
        .trim()
        .to_string();

    let options = obj
        .get("options")
        .and_then(|v| v.as_array())
        .ok_or_else(|| "Missing or invalid 'options'".to_string())?
        .iter()
        .map(|o| {
            o.as_str()
                .map(|s| s.trim().to_string())
                .ok_or_else(|| "Option is not a string".to_string())
        })
        .collect::<Result<Vec<_>, _>>()?;

    let correct_answer = obj
        .get("correct_answer")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing or invalid 'correct_answer'".to_string())?
        .trim()
        .to_string();

    let explanation = obj
        .get("explanation")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string);

    Ok(Question {
        question,
        options,
        correct_answer,
        explanation,
    })
}
