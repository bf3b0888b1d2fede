use async_trait::async_trait;
use ollama_rs::{
    generation::chat::{request::ChatMessageRequest, ChatMessage},
    Ollama,
};
use reqwest::Url;
use serde_json::Value;

use super::{
    comparison_prompt, profile_prompt, report_prompt, AdvisorError, AudienceProfile,
    ReportRequester,
};
use crate::{catalog::SocialClass, settings::AdvisorSettings};

const PROFILE_FORMAT: &str = "Respond with a single JSON object and nothing else. \
    It must have the string fields name, location, ageRange, spendingClass, behavior \
    and strategy.";

/// Sends every prompt to one model on a local Ollama server.
pub(crate) struct OllamaRequester {
    client: Ollama,
    model: String,
}

impl OllamaRequester {
    pub(crate) fn new(settings: &AdvisorSettings) -> Result<Self, AdvisorError> {
        let invalid = || AdvisorError::InvalidHost(settings.ollama_host.clone());
        let mut url = Url::parse(&settings.ollama_host).map_err(|_| invalid())?;
        // The builder panics on a URL without a host or one that cannot take a port.
        if !url.has_host() || url.set_port(Some(settings.ollama_port)).is_err() {
            return Err(invalid());
        }
        Ok(Self {
            client: Ollama::builder().url(url).build(),
            model: settings.ollama_model.clone(),
        })
    }

    async fn chat(&self, prompt: String) -> Result<String, AdvisorError> {
        let request = ChatMessageRequest::new(self.model.clone(), vec![ChatMessage::user(prompt)]);
        let response = self.client.send_chat_messages(request).await?;
        Ok(response.message.content)
    }
}

/// Strips a Markdown code fence the model may wrap its JSON in.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    text.strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(text, str::trim)
}

#[async_trait]
impl ReportRequester for OllamaRequester {
    async fn request_report(
        &self,
        prompt: &str,
        template: &str,
        context: &Value,
    ) -> Result<String, AdvisorError> {
        self.chat(report_prompt(prompt, template, context)).await
    }

    async fn request_comparison(
        &self,
        niche: &str,
        target_class: SocialClass,
    ) -> Result<String, AdvisorError> {
        self.chat(comparison_prompt(niche, target_class)).await
    }

    async fn generate_audience_profile(
        &self,
        niche: &str,
    ) -> Result<AudienceProfile, AdvisorError> {
        let prompt = format!("{}\n{PROFILE_FORMAT}", profile_prompt(niche));
        let text = self.chat(prompt).await?;
        Ok(serde_json::from_str(strip_code_fence(&text))?)
    }
}
