//! HTTP endpoint handlers. These are thin wrappers that forward to the
//! mentor, sandbox, and scorer. Each handler is instrumented and logs
//! parameters and basic result info, never payload contents.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use tracing::{debug, info, instrument};

use crate::protocol::*;
use crate::sandbox;
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn http_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(HealthOut { ok: true, model_enabled: state.mentor.model_enabled() })
}

#[instrument(level = "info", skip(state))]
pub async fn http_chat_busy(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(BusyOut { busy: state.chat_slot.busy() })
}

#[instrument(level = "info")]
pub async fn http_assess_questions() -> impl IntoResponse {
  let questions = crate::assess::QUESTION_BANK
    .iter()
    .map(|q| QuestionOut {
      id: q.id,
      question: q.question,
      options: q.options,
      correct_answer: q.correct_answer,
      explanation: q.explanation,
      difficulty: q.difficulty,
    })
    .collect();
  Json(QuestionsOut { questions })
}

#[instrument(level = "info", skip(state, body), fields(code_len = body.code.len(), language = %body.language))]
pub async fn http_post_review(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ReviewIn>,
) -> impl IntoResponse {
  let review = state.mentor.review_code(&body.code, &body.language, body.skill_level).await;
  info!(target: "mentor", rating = review.overall_rating, "HTTP review served");
  Json(ReviewOut { review })
}

#[instrument(level = "info", skip(state, body), fields(concept = %body.concept))]
pub async fn http_post_explain(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ExplainIn>,
) -> impl IntoResponse {
  let explanation = state
    .mentor
    .explain_concept(&body.concept, body.code.as_deref(), body.skill_level)
    .await;
  Json(ExplainOut { explanation })
}

#[instrument(level = "info", skip(state, body), fields(difficulty = body.difficulty.as_str(), language = %body.language))]
pub async fn http_post_challenges(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ChallengesIn>,
) -> impl IntoResponse {
  let challenges = state
    .mentor
    .generate_challenges(body.difficulty, &body.language, body.topic.as_deref())
    .await;
  info!(target: "mentor", count = challenges.len(), "HTTP challenges served");
  Json(ChallengesOut { challenges })
}

#[instrument(level = "info", skip(state, body), fields(current_skill = %body.current_skill))]
pub async fn http_post_learning_path(
  State(state): State<Arc<AppState>>,
  Json(body): Json<LearningPathIn>,
) -> impl IntoResponse {
  let modules = state
    .mentor
    .generate_learning_path(&body.current_skill, &body.target_goal, &body.time_commitment)
    .await;
  info!(target: "mentor", count = modules.len(), "HTTP learning path served");
  Json(LearningPathOut { modules })
}

#[instrument(level = "info", skip(state, body), fields(skills = body.current_skills.len()))]
pub async fn http_post_study_plan(
  State(state): State<Arc<AppState>>,
  Json(body): Json<StudyPlanIn>,
) -> impl IntoResponse {
  let plan = state
    .mentor
    .study_plan(&body.current_skills, &body.goals, &body.time_commitment)
    .await;
  Json(StudyPlanOut { plan })
}

#[instrument(level = "info", skip(state, body), fields(challenge_id = %body.challenge.id, code_len = body.code.len()))]
pub async fn http_post_validate(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ValidateIn>,
) -> impl IntoResponse {
  let verdict = state.mentor.validate_solution(&body.challenge, &body.code).await;
  info!(target: "mentor", id = %body.challenge.id, correct = verdict.is_correct, score = verdict.score, "HTTP validation served");
  Json(ValidateOut { verdict })
}

#[instrument(level = "info", skip(state, body), fields(code_len = body.code.len(), language = %body.language))]
pub async fn http_post_debug(
  State(state): State<Arc<AppState>>,
  Json(body): Json<DebugIn>,
) -> impl IntoResponse {
  let guidance = state.mentor.debug_code(&body.code, &body.error, &body.language).await;
  Json(DebugOut { guidance })
}

#[instrument(level = "info", skip(state, body), fields(answers = body.answers.len()))]
pub async fn http_post_assess(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AssessIn>,
) -> impl IntoResponse {
  let result = state.mentor.assess_from_quiz(&body.answers).await;
  info!(target: "mentor", score = result.raw_score, tier = result.skill_tier.as_str(), "HTTP assessment served");
  Json(AssessOut { result })
}

#[instrument(level = "info", skip(state, body), fields(message_len = body.message.len(), turns = body.history.len()))]
pub async fn http_post_chat(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ChatIn>,
) -> impl IntoResponse {
  let token = state.chat_slot.issue();
  let text = state
    .mentor
    .chat(&body.message, &body.history, body.code.as_deref(), body.language.as_deref())
    .await;
  // HTTP pairs request and response, so the reply is returned either way;
  // the commit only keeps the shared busy indicator honest.
  if !state.chat_slot.try_commit(token) {
    debug!(target: "mentor", token, "HTTP chat reply superseded by a newer request");
  }
  Json(ChatOut { text })
}

#[instrument(level = "info", skip(body), fields(code_len = body.code.len(), language = %body.language))]
pub async fn http_post_run(Json(body): Json<RunIn>) -> impl IntoResponse {
  let result = sandbox::run(&body.code, &body.language);
  info!(target: "devmentor_backend", ok = result.error_message.is_none(), elapsed_ms = result.elapsed_millis, "HTTP run finished");
  Json(RunOut { result })
}
