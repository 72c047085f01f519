//! Topic generation from a document's considerant with a chat completion model.

mod client;
mod config;
mod generator;
mod prompt;

pub use client::{AzureOpenAiClient, LlmClient, LlmRequest, LlmResponse, Message, Role};
pub use config::{LlmConfig, LlmConfigBuilder};
pub use generator::{parse_topics, TopicGenerator};
pub use prompt::build_topic_prompt;
