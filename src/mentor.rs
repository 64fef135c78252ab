//! The operation router: one method per tutoring intent.
//!
//! Every method renders the operation's instruction template with the
//! caller's arguments verbatim, submits it to the model, hands the raw
//! reply to the contract layer, and on any failure (no client, transport
//! error, contract violation) logs the cause and serves the operation's
//! fallback value. No method ever returns an error to the caller.

use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::config::Prompts;
use crate::context;
use crate::contracts::{self, ContractError, Operation};
use crate::domain::{
  AssessmentResult, ChallengeSpec, CodeReview, ConceptExplanation, ConversationTurn,
  DebugGuidance, Difficulty, LearningModule, LearningPathPlan, SkillAssessment, SkillTier,
  ValidationVerdict,
};
use crate::fallback;
use crate::util::fill_template;

pub struct Mentor {
  openai: Option<crate::openai::OpenAI>,
  prompts: Prompts,
}

impl Mentor {
  /// The client is injected, never constructed globally; `None` means the
  /// whole pipeline runs on fallback content.
  pub fn new(openai: Option<crate::openai::OpenAI>, prompts: Prompts) -> Self {
    Self { openai, prompts }
  }

  pub fn model_enabled(&self) -> bool {
    self.openai.is_some()
  }

  /// Shared drive for structured operations: call, decode, degrade.
  async fn structured<T>(
    &self,
    op: Operation,
    system: &str,
    user: &str,
    temperature: f32,
    decode: impl FnOnce(&str) -> Result<T, ContractError>,
    fall: impl FnOnce() -> T,
  ) -> T {
    let request_id = Uuid::new_v4();
    let Some(oa) = &self.openai else {
      info!(target: "mentor", op = op.as_str(), %request_id, "Model disabled; serving fallback");
      return fall();
    };

    match oa.chat_structured(&oa.strong_model, system, user, temperature).await {
      Ok(raw) => match decode(&raw) {
        Ok(v) => {
          info!(target: "mentor", op = op.as_str(), %request_id, reply_len = raw.len(), "Contract satisfied");
          v
        }
        Err(e) => {
          error!(target: "mentor", op = op.as_str(), %request_id, error = %e, "Contract failure; serving fallback");
          fall()
        }
      },
      Err(e) => {
        error!(target: "mentor", op = op.as_str(), %request_id, error = %e, "Model call failed; serving fallback");
        fall()
      }
    }
  }

  #[instrument(level = "info", skip(self, code), fields(code_len = code.len(), %language))]
  pub async fn review_code(&self, code: &str, language: &str, skill: SkillTier) -> CodeReview {
    let user = fill_template(
      &self.prompts.review_user_template,
      &[("language", language), ("skill_level", skill.as_str()), ("code", code)],
    );
    self
      .structured(
        Operation::Review,
        &self.prompts.review_system,
        &user,
        0.3,
        contracts::decode_code_review,
        fallback::default_code_review,
      )
      .await
  }

  #[instrument(level = "info", skip(self, code), fields(%concept, has_code = code.is_some()))]
  pub async fn explain_concept(
    &self,
    concept: &str,
    code: Option<&str>,
    skill: SkillTier,
  ) -> ConceptExplanation {
    let context_code = match code {
      Some(c) if !c.trim().is_empty() => format!("\nContext code:\n```\n{}\n```\n", c),
      _ => String::new(),
    };
    let user = fill_template(
      &self.prompts.explain_user_template,
      &[
        ("concept", concept),
        ("skill_level", skill.as_str()),
        ("context_code", &context_code),
      ],
    );
    self
      .structured(
        Operation::ExplainConcept,
        &self.prompts.explain_system,
        &user,
        0.3,
        contracts::decode_concept_explanation,
        fallback::default_concept_explanation,
      )
      .await
  }

  #[instrument(level = "info", skip(self), fields(difficulty = difficulty.as_str(), %language, has_topic = topic.is_some()))]
  pub async fn generate_challenges(
    &self,
    difficulty: Difficulty,
    language: &str,
    topic: Option<&str>,
  ) -> Vec<ChallengeSpec> {
    let topic_clause = topic
      .map(str::trim)
      .filter(|t| !t.is_empty())
      .map(|t| format!(" focusing on {}", t))
      .unwrap_or_default();
    let user = fill_template(
      &self.prompts.challenges_user_template,
      &[
        ("difficulty", difficulty.as_str()),
        ("language", language),
        ("topic_clause", &topic_clause),
      ],
    );
    let mut challenges = self
      .structured(
        Operation::GenerateChallenges,
        &self.prompts.challenges_system,
        &user,
        0.9,
        contracts::decode_challenges,
        || fallback::fallback_challenges(difficulty, language),
      )
      .await;

    // Identity is the id; backfill any the model left blank.
    for ch in challenges.iter_mut().filter(|c| c.id.trim().is_empty()) {
      ch.id = Uuid::new_v4().to_string();
    }
    challenges
  }

  #[instrument(level = "info", skip(self), fields(%current_skill, %target_goal))]
  pub async fn generate_learning_path(
    &self,
    current_skill: &str,
    target_goal: &str,
    time_commitment: &str,
  ) -> Vec<LearningModule> {
    let user = fill_template(
      &self.prompts.learning_path_user_template,
      &[
        ("current_skill", current_skill),
        ("target_goal", target_goal),
        ("time_commitment", time_commitment),
      ],
    );
    self
      .structured(
        Operation::GenerateLearningPath,
        &self.prompts.learning_path_system,
        &user,
        0.9,
        contracts::decode_learning_modules,
        fallback::fallback_learning_modules,
      )
      .await
  }

  #[instrument(level = "info", skip(self, current_skills, goals), fields(skills = current_skills.len(), goals = goals.len()))]
  pub async fn study_plan(
    &self,
    current_skills: &[String],
    goals: &[String],
    time_commitment: &str,
  ) -> LearningPathPlan {
    let user = fill_template(
      &self.prompts.study_plan_user_template,
      &[
        ("current_skills", &current_skills.join(", ")),
        ("goals", &goals.join(", ")),
        ("time_commitment", time_commitment),
      ],
    );
    self
      .structured(
        Operation::StudyPlan,
        &self.prompts.study_plan_system,
        &user,
        0.9,
        contracts::decode_study_plan,
        fallback::default_study_plan,
      )
      .await
  }

  #[instrument(level = "info", skip(self, challenge, user_code), fields(challenge_id = %challenge.id, code_len = user_code.len()))]
  pub async fn validate_solution(
    &self,
    challenge: &ChallengeSpec,
    user_code: &str,
  ) -> ValidationVerdict {
    // Empty submissions never reach the network.
    if user_code.trim().is_empty() {
      info!(target: "mentor", op = Operation::ValidateSolution.as_str(), "Empty submission rejected locally");
      return fallback::default_validation_verdict();
    }
    let user = fill_template(
      &self.prompts.validation_user_template,
      &[
        ("title", &challenge.title),
        ("description", &challenge.description),
        ("reference_solution", &challenge.reference_solution),
        ("user_code", user_code),
      ],
    );
    self
      .structured(
        Operation::ValidateSolution,
        &self.prompts.validation_system,
        &user,
        0.2,
        contracts::decode_validation_verdict,
        fallback::default_validation_verdict,
      )
      .await
  }

  #[instrument(level = "info", skip(self, code, error_text), fields(code_len = code.len(), %language))]
  pub async fn debug_code(
    &self,
    code: &str,
    error_text: &str,
    language: &str,
  ) -> DebugGuidance {
    let user = fill_template(
      &self.prompts.debug_user_template,
      &[("language", language), ("error", error_text), ("code", code)],
    );
    self
      .structured(
        Operation::Debug,
        &self.prompts.debug_system,
        &user,
        0.3,
        contracts::decode_debug_guidance,
        fallback::default_debug_guidance,
      )
      .await
  }

  #[instrument(level = "info", skip(self, qa_transcript), fields(transcript_len = qa_transcript.len()))]
  pub async fn assess_skill(&self, qa_transcript: &str) -> SkillAssessment {
    let user = fill_template(&self.prompts.assess_user_template, &[("qa_transcript", qa_transcript)]);
    self
      .structured(
        Operation::AssessSkill,
        &self.prompts.assess_system,
        &user,
        0.2,
        contracts::decode_skill_assessment,
        fallback::default_skill_assessment,
      )
      .await
  }

  /// Quiz scoring is local; the model only enriches the result. The tier
  /// always stays the locally computed one.
  #[instrument(level = "info", skip(self, answers), fields(answers = answers.len()))]
  pub async fn assess_from_quiz(&self, answers: &[usize]) -> AssessmentResult {
    let score = crate::assess::score_answers(answers);
    let transcript = crate::assess::qa_transcript(answers);
    let enrichment = self.assess_skill(&transcript).await;
    AssessmentResult {
      raw_score: score.raw_score,
      total_questions: score.total_questions,
      percentage: score.percentage,
      skill_tier: score.skill_tier,
      strengths: enrichment.strengths,
      areas_for_improvement: enrichment.areas_for_improvement,
      recommended_topics: enrichment.recommended_topics,
      estimated_learning_time: enrichment.estimated_learning_time,
    }
  }

  #[instrument(level = "info", skip(self, message, history, code), fields(message_len = message.len(), turns = history.len(), has_code = code.is_some()))]
  pub async fn chat(
    &self,
    message: &str,
    history: &[ConversationTurn],
    code: Option<&str>,
    language: Option<&str>,
  ) -> String {
    // Empty submissions never reach the network.
    if message.trim().is_empty() {
      info!(target: "mentor", op = Operation::Chat.as_str(), "Empty message rejected locally");
      return fallback::chat_fallback_reply();
    }

    let request_id = Uuid::new_v4();
    let Some(oa) = &self.openai else {
      info!(target: "mentor", op = Operation::Chat.as_str(), %request_id, "Model disabled; serving fallback");
      return fallback::chat_fallback_reply();
    };

    let user = context::build_chat_prompt(&self.prompts, message, history, code, language);
    match oa.chat_plain(&oa.fast_model, &self.prompts.chat_system, &user, 0.6).await {
      Ok(raw) => match contracts::decode_chat_reply(&raw) {
        Ok(text) => text,
        Err(e) => {
          error!(target: "mentor", op = Operation::Chat.as_str(), %request_id, error = %e, "Contract failure; serving fallback");
          fallback::chat_fallback_reply()
        }
      },
      Err(e) => {
        error!(target: "mentor", op = Operation::Chat.as_str(), %request_id, error = %e, "Model call failed; serving fallback");
        fallback::chat_fallback_reply()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn offline_mentor() -> Mentor {
    Mentor::new(None, Prompts::default())
  }

  #[tokio::test]
  async fn every_operation_resolves_to_its_fallback_without_a_client() {
    let mentor = offline_mentor();

    let review = mentor.review_code("let x = 1;", "javascript", SkillTier::Beginner).await;
    assert_eq!(review, fallback::default_code_review());

    let explain = mentor.explain_concept("closures", None, SkillTier::Intermediate).await;
    assert_eq!(explain, fallback::default_concept_explanation());

    let challenges = mentor.generate_challenges(Difficulty::Medium, "javascript", None).await;
    assert_eq!(challenges, fallback::fallback_challenges(Difficulty::Medium, "javascript"));

    let modules = mentor.generate_learning_path("none", "learn js", "1h/day").await;
    assert_eq!(modules, fallback::fallback_learning_modules());

    let plan = mentor.study_plan(&["html".into()], &["build apps".into()], "1h/day").await;
    assert_eq!(plan, fallback::default_study_plan());

    let challenge = &fallback::fallback_challenges(Difficulty::Easy, "javascript")[0];
    let verdict = mentor.validate_solution(challenge, "function fizzBuzz() {}").await;
    assert_eq!(verdict, fallback::default_validation_verdict());

    let guidance = mentor.debug_code("1+", "SyntaxError", "javascript").await;
    assert_eq!(guidance, fallback::default_debug_guidance());

    let assessment = mentor.assess_skill("Q: x A: y").await;
    assert_eq!(assessment, fallback::default_skill_assessment());

    let reply = mentor.chat("hello", &[], None, None).await;
    assert_eq!(reply, fallback::chat_fallback_reply());
  }

  #[tokio::test]
  async fn validation_rejects_empty_submission_before_any_call() {
    let mentor = offline_mentor();
    let challenge = &fallback::fallback_challenges(Difficulty::Easy, "javascript")[0];
    let verdict = mentor.validate_solution(challenge, "   ").await;
    assert_eq!(verdict, fallback::default_validation_verdict());
  }

  #[tokio::test]
  async fn empty_chat_message_is_rejected_locally() {
    let mentor = offline_mentor();
    let reply = mentor.chat("  \n ", &[], None, None).await;
    assert_eq!(reply, fallback::chat_fallback_reply());
  }

  #[tokio::test]
  async fn quiz_merge_keeps_the_local_tier() {
    let mentor = offline_mentor();
    // Perfect answer set: enrichment falls back (beginner tier), but the
    // merged result carries the locally computed tier.
    let result = mentor.assess_from_quiz(&crate::assess::perfect_answers()).await;
    assert_eq!(result.percentage, 100.0);
    assert_eq!(result.skill_tier, SkillTier::Advanced);
    assert_eq!(result.strengths, fallback::default_skill_assessment().strengths);
  }
}
