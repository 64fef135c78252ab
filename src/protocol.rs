//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{
    AssessmentResult, ChallengeSpec, CodeReview, ConceptExplanation, ConversationTurn,
    DebugGuidance, Difficulty, ExecutionResult, LearningModule, LearningPathPlan, ProjectRecord,
    SessionRecord, SkillTier, StatsRecord, ValidationVerdict,
};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Review {
        code: String,
        language: String,
        #[serde(rename = "skillLevel", default)]
        skill_level: SkillTier,
    },
    Explain {
        concept: String,
        #[serde(default)]
        code: Option<String>,
        #[serde(rename = "skillLevel", default)]
        skill_level: SkillTier,
    },
    NewChallenges {
        difficulty: Difficulty,
        language: String,
        #[serde(default)]
        topic: Option<String>,
    },
    LearningPath {
        #[serde(rename = "currentSkill")]
        current_skill: String,
        #[serde(rename = "targetGoal")]
        target_goal: String,
        #[serde(rename = "timeCommitment")]
        time_commitment: String,
    },
    StudyPlan {
        #[serde(rename = "currentSkills")]
        current_skills: Vec<String>,
        goals: Vec<String>,
        #[serde(rename = "timeCommitment")]
        time_commitment: String,
    },
    ValidateSolution {
        challenge: ChallengeSpec,
        code: String,
    },
    Debug {
        code: String,
        error: String,
        language: String,
    },
    Assess {
        answers: Vec<usize>,
    },
    Chat {
        message: String,
        #[serde(default)]
        history: Vec<ConversationTurn>,
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        language: Option<String>,
    },
    RunCode {
        code: String,
        language: String,
    },
    /// Storage lives in the browser; this exists so clients get an explicit
    /// answer instead of silence when they try to push records here.
    SyncRecords {
        #[serde(default)]
        projects: Vec<ProjectRecord>,
        #[serde(default)]
        session: Option<SessionRecord>,
        #[serde(default)]
        stats: Option<StatsRecord>,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Review {
        review: CodeReview,
    },
    Explanation {
        explanation: ConceptExplanation,
    },
    Challenges {
        challenges: Vec<ChallengeSpec>,
    },
    LearningPath {
        modules: Vec<LearningModule>,
    },
    StudyPlan {
        plan: LearningPathPlan,
    },
    Verdict {
        verdict: ValidationVerdict,
    },
    DebugHelp {
        guidance: DebugGuidance,
    },
    Assessment {
        result: AssessmentResult,
    },
    ChatReply {
        text: String,
    },
    RunResult {
        result: ExecutionResult,
    },
    Error {
        message: String,
    },
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct ReviewIn {
    pub code: String,
    pub language: String,
    #[serde(rename = "skillLevel", default)]
    pub skill_level: SkillTier,
}
#[derive(Serialize)]
pub struct ReviewOut {
    pub review: CodeReview,
}

#[derive(Debug, Deserialize)]
pub struct ExplainIn {
    pub concept: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "skillLevel", default)]
    pub skill_level: SkillTier,
}
#[derive(Serialize)]
pub struct ExplainOut {
    pub explanation: ConceptExplanation,
}

#[derive(Debug, Deserialize)]
pub struct ChallengesIn {
    pub difficulty: Difficulty,
    pub language: String,
    #[serde(default)]
    pub topic: Option<String>,
}
#[derive(Serialize)]
pub struct ChallengesOut {
    pub challenges: Vec<ChallengeSpec>,
}

#[derive(Debug, Deserialize)]
pub struct LearningPathIn {
    #[serde(rename = "currentSkill")]
    pub current_skill: String,
    #[serde(rename = "targetGoal")]
    pub target_goal: String,
    #[serde(rename = "timeCommitment")]
    pub time_commitment: String,
}
#[derive(Serialize)]
pub struct LearningPathOut {
    pub modules: Vec<LearningModule>,
}

#[derive(Debug, Deserialize)]
pub struct StudyPlanIn {
    #[serde(rename = "currentSkills")]
    pub current_skills: Vec<String>,
    pub goals: Vec<String>,
    #[serde(rename = "timeCommitment")]
    pub time_commitment: String,
}
#[derive(Serialize)]
pub struct StudyPlanOut {
    pub plan: LearningPathPlan,
}

#[derive(Debug, Deserialize)]
pub struct ValidateIn {
    pub challenge: ChallengeSpec,
    pub code: String,
}
#[derive(Serialize)]
pub struct ValidateOut {
    pub verdict: ValidationVerdict,
}

#[derive(Debug, Deserialize)]
pub struct DebugIn {
    pub code: String,
    pub error: String,
    pub language: String,
}
#[derive(Serialize)]
pub struct DebugOut {
    pub guidance: DebugGuidance,
}

#[derive(Debug, Deserialize)]
pub struct AssessIn {
    pub answers: Vec<usize>,
}
#[derive(Serialize)]
pub struct AssessOut {
    pub result: AssessmentResult,
}

#[derive(Debug, Deserialize)]
pub struct ChatIn {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}
#[derive(Serialize)]
pub struct ChatOut {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct RunIn {
    pub code: String,
    pub language: String,
}
#[derive(Serialize)]
pub struct RunOut {
    pub result: ExecutionResult,
}

/// One quiz question as served to the SPA. The client owns presentation
/// (including showing the explanation after an answer); scoring stays on
/// the server.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOut {
    pub id: &'static str,
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: usize,
    pub explanation: &'static str,
    pub difficulty: SkillTier,
}

#[derive(Serialize)]
pub struct QuestionsOut {
    pub questions: Vec<QuestionOut>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
    #[serde(rename = "modelEnabled")]
    pub model_enabled: bool,
}

#[derive(Serialize)]
pub struct BusyOut {
    pub busy: bool,
}
