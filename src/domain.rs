//! Domain models: typed payloads for every tutoring operation, sandbox
//! results, conversation turns, and the record shapes the frontend keeps
//! in its local storage.
//!
//! Wire names are camelCase to match the model contract and the SPA.

use serde::{Deserialize, Serialize};

/// Learner skill tier. Derived locally from quiz percentage; also part of
/// the assess-skill model contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillTier {
  Beginner,
  Intermediate,
  Advanced,
}
impl Default for SkillTier {
  fn default() -> Self { SkillTier::Beginner }
}
impl SkillTier {
  pub fn as_str(&self) -> &'static str {
    match self {
      SkillTier::Beginner => "beginner",
      SkillTier::Intermediate => "intermediate",
      SkillTier::Advanced => "advanced",
    }
  }
}

/// Challenge difficulty bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}
impl Difficulty {
  pub fn as_str(&self) -> &'static str {
    match self {
      Difficulty::Easy => "easy",
      Difficulty::Medium => "medium",
      Difficulty::Hard => "hard",
    }
  }
}

/// One test case attached to a challenge. Input/expected are free-form
/// JSON values; the model decides their shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
  pub input: serde_json::Value,
  pub expected_output: serde_json::Value,
  pub description: String,
}

/// A coding challenge. Immutable once produced; identity is `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeSpec {
  pub id: String,
  pub title: String,
  pub description: String,
  pub difficulty: Difficulty,
  pub language: String,
  pub starter_code: String,
  #[serde(rename = "solution")]
  pub reference_solution: String,
  pub hints: Vec<String>,
  pub test_cases: Vec<TestCase>,
}

/// One module of a learning path; a path is an ordered sequence of these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningModule {
  pub id: String,
  pub title: String,
  pub description: String,
  pub concepts: Vec<String>,
  pub exercises: Vec<ChallengeSpec>,
  pub estimated_time: String,
  pub prerequisites: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewImprovement {
  pub issue: String,
  pub explanation: String,
  pub suggested_fix: String,
  #[serde(default)]
  pub line_number: Option<u32>,
}

/// Code review reply. The 1-10 rating range is advisory; out-of-range
/// values from the model pass through uncoerced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeReview {
  pub overall_rating: f32,
  pub strengths: Vec<String>,
  pub improvements: Vec<ReviewImprovement>,
  pub concepts_to_learn: Vec<String>,
  pub best_practices: Vec<String>,
  pub next_steps: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeExercise {
  pub description: String,
  pub difficulty: String,
  pub starter_code: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptExplanation {
  pub simple_explanation: String,
  pub detailed_explanation: String,
  pub code_example: String,
  pub common_mistakes: Vec<String>,
  pub practice_exercises: Vec<PracticeExercise>,
  pub related_concepts: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathProject {
  pub name: String,
  pub description: String,
  pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPhase {
  pub phase: String,
  pub duration: String,
  pub topics: Vec<String>,
  pub projects: Vec<PathProject>,
  pub milestones: Vec<String>,
}

/// Narrative learning-path plan (phases + routine + resources).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathPlan {
  pub path_name: String,
  pub estimated_duration: String,
  pub phases: Vec<PathPhase>,
  pub daily_routine: String,
  pub resources: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugStep {
  pub step: String,
  pub action: String,
  pub expected_result: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugGuidance {
  pub error_analysis: String,
  pub possible_causes: Vec<String>,
  pub debugging_steps: Vec<DebugStep>,
  pub fixed_code: String,
  pub explanation: String,
  pub prevention_tips: Vec<String>,
}

/// Model-side skill assessment. The tier here is whatever the model said;
/// the merged `AssessmentResult` always carries the locally computed one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAssessment {
  pub skill_level: SkillTier,
  pub strengths: Vec<String>,
  pub areas_for_improvement: Vec<String>,
  pub recommended_topics: Vec<String>,
  pub estimated_learning_time: String,
}

/// Verdict on a submitted challenge solution. Score range 0-100 is
/// advisory, never clamped here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
  pub is_correct: bool,
  pub feedback: String,
  pub suggestions: Vec<String>,
  pub score: f32,
}

/// Quiz score merged with the assess-skill reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
  pub raw_score: u32,
  pub total_questions: u32,
  pub percentage: f32,
  pub skill_tier: SkillTier,
  pub strengths: Vec<String>,
  pub areas_for_improvement: Vec<String>,
  pub recommended_topics: Vec<String>,
  pub estimated_learning_time: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationRole {
  Learner,
  Mentor,
}

/// One chat turn. `seed` marks the canned introductory mentor turn, which
/// is never sent back to the model as history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
  pub role: ConversationRole,
  pub text: String,
  #[serde(default)]
  pub seed: bool,
}

/// Normalized sandbox result. Exactly one of `output` / `error_message`
/// is the active display channel; both may be empty on a no-op run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
  pub output: String,
  pub error_message: Option<String>,
  pub elapsed_millis: f64,
}

/// Source kinds the sandbox actually handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
  Script,
  Markup,
  Stylesheet,
}
impl SourceKind {
  /// Map a language tag from the editor to a supported kind.
  pub fn from_tag(tag: &str) -> Option<SourceKind> {
    match tag.trim().to_ascii_lowercase().as_str() {
      "javascript" | "js" => Some(SourceKind::Script),
      "html" => Some(SourceKind::Markup),
      "css" => Some(SourceKind::Stylesheet),
      _ => None,
    }
  }
}

//
// Persistence-boundary shapes. The frontend owns the storage medium; the
// backend only produces/consumes these.
//

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
  pub id: String,
  pub name: String,
  pub code: String,
  pub language: String,
  pub created_at: String,
  pub last_modified: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
  pub session_start: String,
  pub code_written: u32,
  pub challenges_solved: u32,
  pub concepts_learned: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecord {
  pub total_challenges_solved: u32,
  pub total_code_lines: u32,
  pub favorite_language: String,
  pub last_active_date: String,
  pub sessions_completed: u32,
}
