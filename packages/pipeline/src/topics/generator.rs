use tracing::{debug, info};

use crate::error::Result;
use crate::topics::client::{LlmClient, LlmRequest, Message, Role};
use crate::topics::config::LlmConfig;
use crate::topics::prompt::build_topic_prompt;

/// Asks the model for a document's topics and parses the answer.
pub struct TopicGenerator<'a, C: LlmClient> {
    client: &'a C,
    config: &'a LlmConfig,
}

impl<'a, C: LlmClient> TopicGenerator<'a, C> {
    pub fn new(client: &'a C, config: &'a LlmConfig) -> Self {
        Self { client, config }
    }

    /// Generate topics from the document title and its considerant.
    pub async fn generate(&self, title: &str, considerant: &str) -> Result<Vec<String>> {
        let request = LlmRequest {
            messages: vec![
                Message {
                    role: Role::System,
                    content: String::new(),
                },
                Message {
                    role: Role::User,
                    content: build_topic_prompt(title, considerant),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
        };

        let response = self.client.complete(&request).await?;
        debug!(raw = %response.content, "topic response");

        let topics = parse_topics(&response.content);
        info!(
            count = topics.len(),
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "generated topics"
        );
        Ok(topics)
    }
}

/// Parse a "topic; topic; topic." answer into lowercase topics.
///
/// Only trailing periods of the last topic are removed, so abbreviations
/// such as "u.u." keep their dots instead of collapsing to "uu". Empty
/// entries (from ";;" or a trailing ";") are dropped instead of becoming
/// blank topics.
///
/// # Examples
/// ```
/// use topikhukum_pipeline::topics::parse_topics;
///
/// assert_eq!(
///     parse_topics("Perpajakan; Wajib Pajak; Tata Cara Pembayaran."),
///     vec!["perpajakan", "wajib pajak", "tata cara pembayaran"]
/// );
/// ```
pub fn parse_topics(response: &str) -> Vec<String> {
    let lowered = response.to_lowercase();
    let mut topics: Vec<String> = lowered.split(';').map(|t| t.trim().to_string()).collect();

    if let Some(last) = topics.last_mut() {
        *last = last.trim_end_matches('.').trim_end().to_string();
    }

    topics.retain(|t| !t.is_empty());
    topics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::client::test_support::MockLlmClient;
    use pretty_assertions::assert_eq;

    fn config() -> LlmConfig {
        LlmConfig::builder(
            url::Url::parse("https://example.openai.azure.com").unwrap(),
            "test-key",
        )
        .build()
    }

    #[test]
    fn test_parse_topics_trims_and_lowercases() {
        assert_eq!(
            parse_topics("  Pajak Daerah ;Retribusi;  Pendapatan Asli Daerah.  "),
            vec!["pajak daerah", "retribusi", "pendapatan asli daerah"]
        );
    }

    #[test]
    fn test_parse_topics_keeps_inner_periods() {
        assert_eq!(parse_topics("u.u. pajak; bea."), vec!["u.u. pajak", "bea"]);
    }

    #[test]
    fn test_parse_topics_drops_empty_entries() {
        assert_eq!(parse_topics("pajak;; bea;"), vec!["pajak", "bea"]);
        assert!(parse_topics("").is_empty());
        assert!(parse_topics(".").is_empty());
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_parses() {
        let client = MockLlmClient::with_response("Perpajakan; Wajib Pajak.");
        let config = config();
        let generator = TopicGenerator::new(&client, &config);

        let topics = generator
            .generate("Ketentuan Umum Perpajakan", "bahwa pajak perlu diatur;")
            .await
            .unwrap();
        assert_eq!(topics, vec!["perpajakan", "wajib pajak"]);

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages[0].role, Role::System);
        assert!(requests[0].messages[0].content.is_empty());
        assert!(requests[0].messages[1].content.contains("Ketentuan Umum Perpajakan"));
        assert_eq!(requests[0].max_tokens, 500);
    }

    #[tokio::test]
    async fn test_generate_propagates_client_errors() {
        let client = MockLlmClient::new(vec![]);
        let config = config();
        let generator = TopicGenerator::new(&client, &config);

        assert!(generator.generate("t", "c").await.is_err());
    }
}
