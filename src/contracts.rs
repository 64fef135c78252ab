//! Structured response contracts: one decode per operation.
//!
//! Raw model text goes in, a typed value or a `ContractError` comes out.
//! A reply that parses but misses a required field (or carries the wrong
//! coarse type) is rejected whole; callers never see a partially populated
//! object. Numeric ranges (rating 1-10, score 0-100) are advisory and are
//! not enforced here.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::{
  ChallengeSpec, CodeReview, ConceptExplanation, DebugGuidance, LearningModule, LearningPathPlan,
  SkillAssessment, ValidationVerdict,
};

/// One named tutoring intent with a fixed request/response contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
  Review,
  ExplainConcept,
  GenerateChallenges,
  GenerateLearningPath,
  ValidateSolution,
  Debug,
  AssessSkill,
  Chat,
  StudyPlan,
}

impl Operation {
  pub fn as_str(&self) -> &'static str {
    match self {
      Operation::Review => "review",
      Operation::ExplainConcept => "explain_concept",
      Operation::GenerateChallenges => "generate_challenges",
      Operation::GenerateLearningPath => "generate_learning_path",
      Operation::ValidateSolution => "validate_solution",
      Operation::Debug => "debug",
      Operation::AssessSkill => "assess_skill",
      Operation::Chat => "chat",
      Operation::StudyPlan => "study_plan",
    }
  }
}

/// Why a model reply failed its contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContractError {
  /// The reply was not a single well-formed JSON document.
  Malformed(String),
  /// The document parsed but a required field was missing or had the
  /// wrong coarse type.
  Schema(String),
}

impl fmt::Display for ContractError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ContractError::Malformed(e) => write!(f, "malformed reply: {}", e),
      ContractError::Schema(e) => write!(f, "contract violation: {}", e),
    }
  }
}

impl std::error::Error for ContractError {}

/// Locate the outermost JSON document inside raw model text. Models often
/// wrap the document in ``` fences or lead with a sentence of prose.
fn extract_document(raw: &str) -> Option<&str> {
  let start = raw.find(|c| c == '{' || c == '[')?;
  let end = raw.rfind(|c| c == '}' || c == ']')?;
  if end < start {
    return None;
  }
  Some(&raw[start..=end])
}

/// Generic decode path shared by every structured contract.
fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, ContractError> {
  let doc = extract_document(raw)
    .ok_or_else(|| ContractError::Malformed("no JSON document in reply".into()))?;
  // Parse to a Value first so malformed documents and schema violations
  // surface as distinct failures.
  let value: serde_json::Value =
    serde_json::from_str(doc).map_err(|e| ContractError::Malformed(e.to_string()))?;
  serde_json::from_value(value).map_err(|e| ContractError::Schema(e.to_string()))
}

#[derive(Deserialize)]
struct ChallengeBatch {
  challenges: Vec<ChallengeSpec>,
}

#[derive(Deserialize)]
struct ModuleBatch {
  modules: Vec<LearningModule>,
}

pub fn decode_code_review(raw: &str) -> Result<CodeReview, ContractError> {
  decode(raw)
}

pub fn decode_concept_explanation(raw: &str) -> Result<ConceptExplanation, ContractError> {
  decode(raw)
}

pub fn decode_challenges(raw: &str) -> Result<Vec<ChallengeSpec>, ContractError> {
  decode::<ChallengeBatch>(raw).map(|b| b.challenges)
}

pub fn decode_learning_modules(raw: &str) -> Result<Vec<LearningModule>, ContractError> {
  decode::<ModuleBatch>(raw).map(|b| b.modules)
}

pub fn decode_study_plan(raw: &str) -> Result<LearningPathPlan, ContractError> {
  decode(raw)
}

pub fn decode_validation_verdict(raw: &str) -> Result<ValidationVerdict, ContractError> {
  decode(raw)
}

pub fn decode_debug_guidance(raw: &str) -> Result<DebugGuidance, ContractError> {
  decode(raw)
}

pub fn decode_skill_assessment(raw: &str) -> Result<SkillAssessment, ContractError> {
  decode(raw)
}

/// Chat has no structured contract; the only requirement is a non-empty
/// reply after trimming.
pub fn decode_chat_reply(raw: &str) -> Result<String, ContractError> {
  let text = raw.trim();
  if text.is_empty() {
    return Err(ContractError::Malformed("empty chat reply".into()));
  }
  Ok(text.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  const REVIEW_OK: &str = r#"{
    "overallRating": 8,
    "strengths": ["clear naming"],
    "improvements": [
      {"issue": "no comments", "explanation": "hard to follow", "suggestedFix": "add comments", "lineNumber": 3}
    ],
    "conceptsToLearn": ["documentation"],
    "bestPractices": ["meaningful names"],
    "nextSteps": "practice refactoring"
  }"#;

  #[test]
  fn review_decodes_from_fenced_reply() {
    let raw = format!("Here is the review:\n```json\n{}\n```\n", REVIEW_OK);
    let review = decode_code_review(&raw).expect("review");
    assert_eq!(review.overall_rating, 8.0);
    assert_eq!(review.improvements[0].line_number, Some(3));
  }

  #[test]
  fn missing_required_field_is_schema_error() {
    // Drop "nextSteps" from an otherwise valid document.
    let raw = REVIEW_OK.replace("\"nextSteps\": \"practice refactoring\"", "\"x\": 1");
    match decode_code_review(&raw) {
      Err(ContractError::Schema(msg)) => assert!(msg.contains("nextSteps"), "msg: {msg}"),
      other => panic!("expected schema error, got {:?}", other),
    }
  }

  #[test]
  fn wrong_coarse_type_is_schema_error() {
    let raw = REVIEW_OK.replace("[\"clear naming\"]", "\"clear naming\"");
    assert!(matches!(decode_code_review(&raw), Err(ContractError::Schema(_))));
  }

  #[test]
  fn out_of_range_rating_passes_through_uncoerced() {
    let raw = REVIEW_OK.replace("\"overallRating\": 8", "\"overallRating\": 12");
    let review = decode_code_review(&raw).expect("review");
    assert_eq!(review.overall_rating, 12.0);
  }

  #[test]
  fn garbage_is_malformed() {
    assert!(matches!(decode_code_review("no json here"), Err(ContractError::Malformed(_))));
    assert!(matches!(decode_code_review("{not: valid"), Err(ContractError::Malformed(_))));
  }

  #[test]
  fn challenge_batch_unwraps() {
    let raw = r#"{"challenges": [{
      "id": "ch-1", "title": "Sum", "description": "Add two numbers",
      "difficulty": "easy", "language": "javascript",
      "starterCode": "function sum(a, b) {}", "solution": "function sum(a, b) { return a + b; }",
      "hints": ["use +"],
      "testCases": [{"input": [1, 2], "expectedOutput": 3, "description": "small ints"}]
    }]}"#;
    let challenges = decode_challenges(raw).expect("challenges");
    assert_eq!(challenges.len(), 1);
    assert_eq!(challenges[0].id, "ch-1");
    assert_eq!(challenges[0].reference_solution, "function sum(a, b) { return a + b; }");
  }

  #[test]
  fn unknown_difficulty_fails_the_whole_batch() {
    let raw = r#"{"challenges": [{
      "id": "ch-1", "title": "Sum", "description": "d",
      "difficulty": "expert", "language": "javascript",
      "starterCode": "", "solution": "", "hints": [], "testCases": []
    }]}"#;
    assert!(matches!(decode_challenges(raw), Err(ContractError::Schema(_))));
  }

  #[test]
  fn chat_reply_must_be_non_empty() {
    assert!(decode_chat_reply("  \n ").is_err());
    assert_eq!(decode_chat_reply(" hi ").unwrap(), "hi");
  }
}
