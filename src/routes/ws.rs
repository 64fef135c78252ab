//! WebSocket upgrade + message loop. Each client message is parsed as JSON
//! and forwarded to core logic; we reply with one JSON message per request.
//!
//! Chat is the exception to the one-at-a-time flow: a chat request runs in
//! its own task under the chat request slot, so a newer chat message
//! supersedes an in-flight one and the stale reply is dropped instead of
//! arriving out of order.

use std::sync::Arc;

use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::sandbox;
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "devmentor_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

fn encode(msg: &ServerWsMessage) -> String {
  serde_json::to_string(msg).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
  })
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(socket: WebSocket, state: Arc<AppState>) {
  info!(target: "devmentor_backend", "WebSocket connected");

  let (mut sink, mut stream) = socket.split();
  let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

  // Single writer task: everything outbound funnels through the channel so
  // chat tasks and the main loop never race on the socket.
  let writer = tokio::spawn(async move {
    while let Some(msg) = rx.recv().await {
      if let Err(e) = sink.send(msg).await {
        error!(target: "devmentor_backend", error = %e, "WS send error");
        break;
      }
    }
  });

  while let Some(Ok(msg)) = stream.next().await {
    match msg {
      Message::Text(txt) => {
        match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(ClientWsMessage::Chat { message, history, code, language }) => {
            let token = state.chat_slot.issue();
            let state = state.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
              let text = state
                .mentor
                .chat(&message, &history, code.as_deref(), language.as_deref())
                .await;
              if state.chat_slot.try_commit(token) {
                let _ = tx.send(Message::Text(encode(&ServerWsMessage::ChatReply { text })));
              } else {
                debug!(target: "mentor", token, "Stale chat reply dropped");
              }
            });
          }
          Ok(incoming) => {
            debug!(target = "devmentor_backend", "WS received: {:?}", &incoming);
            let reply = handle_client_ws(incoming, &state).await;
            if tx.send(Message::Text(encode(&reply))).is_err() {
              break;
            }
          }
          Err(e) => {
            let reply = ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) };
            if tx.send(Message::Text(encode(&reply))).is_err() {
              break;
            }
          }
        }
      }
      Message::Ping(payload) => { let _ = tx.send(Message::Pong(payload)); }
      Message::Close(_) => break,
      _ => {}
    }
  }

  drop(tx);
  let _ = writer.await;
  info!(target: "devmentor_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::Review { code, language, skill_level } => {
      let review = state.mentor.review_code(&code, &language, skill_level).await;
      tracing::info!(target: "mentor", rating = review.overall_rating, "WS review served");
      ServerWsMessage::Review { review }
    }

    ClientWsMessage::Explain { concept, code, skill_level } => {
      let explanation = state.mentor.explain_concept(&concept, code.as_deref(), skill_level).await;
      ServerWsMessage::Explanation { explanation }
    }

    ClientWsMessage::NewChallenges { difficulty, language, topic } => {
      let challenges = state.mentor.generate_challenges(difficulty, &language, topic.as_deref()).await;
      tracing::info!(target: "mentor", count = challenges.len(), "WS challenges served");
      ServerWsMessage::Challenges { challenges }
    }

    ClientWsMessage::LearningPath { current_skill, target_goal, time_commitment } => {
      let modules = state.mentor.generate_learning_path(&current_skill, &target_goal, &time_commitment).await;
      ServerWsMessage::LearningPath { modules }
    }

    ClientWsMessage::StudyPlan { current_skills, goals, time_commitment } => {
      let plan = state.mentor.study_plan(&current_skills, &goals, &time_commitment).await;
      ServerWsMessage::StudyPlan { plan }
    }

    ClientWsMessage::ValidateSolution { challenge, code } => {
      let verdict = state.mentor.validate_solution(&challenge, &code).await;
      tracing::info!(target: "mentor", id = %challenge.id, correct = verdict.is_correct, "WS validation served");
      ServerWsMessage::Verdict { verdict }
    }

    ClientWsMessage::Debug { code, error, language } => {
      let guidance = state.mentor.debug_code(&code, &error, &language).await;
      ServerWsMessage::DebugHelp { guidance }
    }

    ClientWsMessage::Assess { answers } => {
      let result = state.mentor.assess_from_quiz(&answers).await;
      tracing::info!(target: "mentor", score = result.raw_score, tier = result.skill_tier.as_str(), "WS assessment served");
      ServerWsMessage::Assessment { result }
    }

    ClientWsMessage::RunCode { code, language } => {
      let result = sandbox::run(&code, &language);
      ServerWsMessage::RunResult { result }
    }

    ClientWsMessage::SyncRecords { projects, session, stats } => {
      tracing::info!(
        target: "devmentor_backend",
        projects = projects.len(),
        has_session = session.is_some(),
        has_stats = stats.is_some(),
        "Client attempted record sync"
      );
      ServerWsMessage::Error {
        message: "Server-side persistence not implemented in this demo; records stay in the browser.".into(),
      }
    }

    // Chat is handled in its own task by the caller; reaching this arm
    // would mean the dispatch above missed it.
    ClientWsMessage::Chat { .. } => ServerWsMessage::Error {
      message: "Chat must be dispatched through the request slot.".into(),
    },
  }
}
