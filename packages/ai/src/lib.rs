// ABOUTME: Text-generation service integration for README summaries
// ABOUTME: OpenAI-compatible chat client, fixed prompt template and tagged reply parsing

pub mod prompt;
pub mod reply;
pub mod service;

pub use prompt::build_summary_prompt;
pub use reply::{parse_summary_reply, SummaryReply};
pub use service::{
    AIResponse, AIService, AIServiceConfig, AIServiceError, AIServiceResult, TextGenerator, Usage,
};
