//! Loading mentor configuration (per-operation prompts) from TOML.
//!
//! Every operation ships with a baked-in default prompt pair (system text +
//! user template); a TOML file pointed at by MENTOR_CONFIG_PATH can override
//! any of them to tune tone/structure without a rebuild.

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct MentorConfig {
  #[serde(default)]
  pub prompts: Prompts,
}

/// Prompts used by the operation router. Templates use `{key}` placeholders
/// filled by `util::fill_template`; caller arguments are embedded verbatim.
#[derive(Clone, Debug, Deserialize)]
pub struct Prompts {
  // Code review
  pub review_system: String,
  pub review_user_template: String,
  // Concept explanation
  pub explain_system: String,
  pub explain_user_template: String,
  // Challenge generation
  pub challenges_system: String,
  pub challenges_user_template: String,
  // Learning path (module list)
  pub learning_path_system: String,
  pub learning_path_user_template: String,
  // Narrative study plan (phases + routine)
  pub study_plan_system: String,
  pub study_plan_user_template: String,
  // Solution validation
  pub validation_system: String,
  pub validation_user_template: String,
  // Debugging help
  pub debug_system: String,
  pub debug_user_template: String,
  // Skill assessment
  pub assess_system: String,
  pub assess_user_template: String,
  // Free-form chat
  pub chat_system: String,
  pub chat_user_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      review_system: "You are DevMentor, an expert programming tutor. Respond ONLY with strict JSON.".into(),
      review_user_template: "Review this {language} code for a {skill_level} developer:\n\n```{language}\n{code}\n```\n\nReturn JSON: {\"overallRating\": number (1-10), \"strengths\": [string], \"improvements\": [{\"issue\": string, \"explanation\": string, \"suggestedFix\": string, \"lineNumber\": number (optional)}], \"conceptsToLearn\": [string], \"bestPractices\": [string], \"nextSteps\": string}\n\nFocus on educational value and adapt explanations to {skill_level} level.".into(),

      explain_system: "You are DevMentor, an expert programming tutor. Respond ONLY with strict JSON.".into(),
      explain_user_template: "Explain the programming concept \"{concept}\" to a {skill_level} developer.\n{context_code}\nReturn JSON: {\"simpleExplanation\": string, \"detailedExplanation\": string, \"codeExample\": string, \"commonMistakes\": [string], \"practiceExercises\": [{\"description\": string, \"difficulty\": \"easy|medium|hard\", \"starterCode\": string}], \"relatedConcepts\": [string]}\n\nMake it practical and educational for {skill_level} level.".into(),

      challenges_system: "You are DevMentor, a coding-challenge generator. Respond ONLY with strict JSON.".into(),
      challenges_user_template: "Generate 3 coding challenges for {difficulty} level programmers in {language}{topic_clause}.\n\nReturn JSON: {\"challenges\": [{\"id\": string, \"title\": string, \"description\": string, \"difficulty\": \"{difficulty}\", \"language\": \"{language}\", \"starterCode\": string, \"solution\": string, \"hints\": [string], \"testCases\": [{\"input\": any, \"expectedOutput\": any, \"description\": string}]}]}\n\nMake challenges practical and educational with clear learning objectives.".into(),

      learning_path_system: "You are DevMentor, a curriculum designer. Respond ONLY with strict JSON.".into(),
      learning_path_user_template: "Create a comprehensive learning path for someone with {current_skill} skills who wants to {target_goal} with {time_commitment} available.\n\nReturn JSON: {\"modules\": [{\"id\": string, \"title\": string, \"description\": string, \"concepts\": [string], \"estimatedTime\": string, \"prerequisites\": [string], \"exercises\": [{\"id\": string, \"title\": string, \"description\": string, \"difficulty\": \"easy|medium|hard\", \"language\": string, \"starterCode\": string, \"solution\": string, \"hints\": [string], \"testCases\": [{\"input\": any, \"expectedOutput\": any, \"description\": string}]}]}]}\n\nMake it progressive and practical with hands-on exercises.".into(),

      study_plan_system: "You are DevMentor, a curriculum designer. Respond ONLY with strict JSON.".into(),
      study_plan_user_template: "Create a personalized learning path for a developer with:\n\nCurrent Skills: {current_skills}\nGoals: {goals}\nTime Commitment: {time_commitment}\n\nReturn JSON: {\"pathName\": string, \"estimatedDuration\": string, \"phases\": [{\"phase\": string, \"duration\": string, \"topics\": [string], \"projects\": [{\"name\": string, \"description\": string, \"skills\": [string]}], \"milestones\": [string]}], \"dailyRoutine\": string, \"resources\": [string]}\n\nMake it practical and achievable.".into(),

      validation_system: "You are a strict but encouraging solution evaluator. Respond ONLY with strict JSON.".into(),
      validation_user_template: "Evaluate this solution for the coding challenge:\n\nChallenge: {title}\nDescription: {description}\nExpected Solution: {reference_solution}\nUser's Code: {user_code}\n\nReturn JSON: {\"isCorrect\": boolean, \"feedback\": string, \"suggestions\": [string], \"score\": number (0-100)}\n\nBe constructive and educational in feedback.".into(),

      debug_system: "You are DevMentor, a debugging coach. Respond ONLY with strict JSON.".into(),
      debug_user_template: "Help debug this {language} code that's producing the error: \"{error}\"\n\n```{language}\n{code}\n```\n\nReturn JSON: {\"errorAnalysis\": string, \"possibleCauses\": [string], \"debuggingSteps\": [{\"step\": string, \"action\": string, \"expectedResult\": string}], \"fixedCode\": string, \"explanation\": string, \"preventionTips\": [string]}\n\nFocus on teaching the debugging process, not just providing the fix.".into(),

      assess_system: "You are DevMentor, assessing a learner's programming level. Respond ONLY with strict JSON.".into(),
      assess_user_template: "Assess the programming skill level based on these quiz answers:\n\n{qa_transcript}\n\nReturn JSON: {\"skillLevel\": \"beginner|intermediate|advanced\", \"strengths\": [string], \"areasForImprovement\": [string], \"recommendedTopics\": [string], \"estimatedLearningTime\": string}\n\nBe encouraging but honest in assessment.".into(),

      chat_system: "You are DevMentor, a friendly and knowledgeable programming tutor. Be conversational, helpful, and encouraging. Explain concepts clearly with examples, offer constructive feedback on shared code, and guide students through debugging. Keep responses concise but informative; use markdown for code snippets when helpful.".into(),
      chat_user_template: "Student Message: \"{message}\"{history}{context}\n\nRespond naturally as a helpful programming mentor:".into(),
    }
  }
}

/// Attempt to load `MentorConfig` from MENTOR_CONFIG_PATH. On any parsing/IO
/// error, returns None and the defaults stay in effect.
pub fn load_mentor_config_from_env() -> Option<MentorConfig> {
  let path = std::env::var("MENTOR_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<MentorConfig>(&s) {
      Ok(cfg) => {
        info!(target: "devmentor_backend", %path, "Loaded mentor config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "devmentor_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "devmentor_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
