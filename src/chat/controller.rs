use crate::{
    config::Config,
    llm::{GeminiClient, TextGenerator},
    render,
};
use tracing::{error, info};

/// Shown instead of contacting the API when the key is missing or still the
/// template placeholder.
pub const CONFIG_NOTICE: &str = "⚠️ Please configure your Gemini API key in config.yaml";

/// Single user-visible message for every API, response-shape, and transport
/// failure. The underlying detail goes to the log, not the chat body.
pub const FAILURE_NOTICE: &str = "Sorry, I encountered an error. Please try again.";

/// Rendered HTML fragments produced by one submission, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only input; nothing displayed, nothing sent.
    Ignored,
    /// Placeholder key detected before any network access.
    ConfigNotice { notice: String },
    Reply { user: String, bot: String },
    /// The user's bubble is still shown; the failure notice takes the place
    /// of the reply.
    Failed { user: String, notice: String },
}

impl SubmitOutcome {
    pub fn into_fragments(self) -> Vec<String> {
        match self {
            SubmitOutcome::Ignored => Vec::new(),
            SubmitOutcome::ConfigNotice { notice } => vec![notice],
            SubmitOutcome::Reply { user, bot } => vec![user, bot],
            SubmitOutcome::Failed { user, notice } => vec![user, notice],
        }
    }
}

/// Owns the widget's server side: one controller per process, shared across
/// requests. Holds the generator seam so tests can swap the HTTP client out.
pub struct ChatController {
    generator: Box<dyn TextGenerator>,
    key_is_placeholder: bool,
}

impl ChatController {
    pub fn new(config: &Config) -> Self {
        Self {
            generator: Box::new(GeminiClient::new(config.api.clone())),
            key_is_placeholder: config.api.key_is_placeholder(),
        }
    }

    pub fn with_generator(generator: Box<dyn TextGenerator>, key_is_placeholder: bool) -> Self {
        Self {
            generator,
            key_is_placeholder,
        }
    }

    /// Handles one form submission: trim, gate on configuration, call the
    /// API, and render the resulting bubbles. Every failure path collapses
    /// into the generic notice; the flow always completes.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let message = raw.trim();
        if message.is_empty() {
            return SubmitOutcome::Ignored;
        }

        if self.key_is_placeholder {
            info!("Rejecting submission: API key not configured");
            return SubmitOutcome::ConfigNotice {
                notice: render::error_bubble(CONFIG_NOTICE),
            };
        }

        let user = render::user_bubble(message);

        match self.generator.generate(message).await {
            Ok(reply) => SubmitOutcome::Reply {
                user,
                bot: render::bot_bubble(&reply),
            },
            Err(e) => {
                error!("Failed to generate reply: {}", e);
                SubmitOutcome::Failed {
                    user,
                    notice: render::error_bubble(FAILURE_NOTICE),
                }
            }
        }
    }
}
