//! Application state: prompts, the optional OpenAI client, the mentor
//! router built from them, and the chat request slot.
//!
//! The client is constructed once here and injected into the mentor;
//! nothing in the pipeline reaches for a global instance.

use tracing::{info, instrument};

use crate::config::load_mentor_config_from_env;
use crate::mentor::Mentor;
use crate::openai::OpenAI;
use crate::slot::RequestSlot;

pub struct AppState {
    pub mentor: Mentor,
    pub chat_slot: RequestSlot,
}

impl AppState {
    /// Build state from env: load config, init the client, wire the mentor.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let prompts = load_mentor_config_from_env()
            .map(|c| c.prompts)
            .unwrap_or_default();

        let openai = OpenAI::from_env();
        match &openai {
            Some(oa) => {
                info!(target: "devmentor_backend", base_url = %oa.base_url, fast_model = %oa.fast_model, strong_model = %oa.strong_model, "OpenAI enabled.");
            }
            None => {
                info!(target: "devmentor_backend", "OpenAI disabled (no OPENAI_API_KEY). Serving fallback content.");
            }
        }

        Self {
            mentor: Mentor::new(openai, prompts),
            chat_slot: RequestSlot::new(),
        }
    }
}
