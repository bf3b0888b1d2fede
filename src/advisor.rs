//! Client side of the hosted language model that writes market reports.

mod gemini;
mod ollama;

use std::sync::Arc;

use async_graphql::{Enum, SimpleObject};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub(crate) use self::{gemini::GeminiRequester, ollama::OllamaRequester};
use crate::{
    catalog::{Labelled, SocialClass},
    settings::{AdvisorSettings, Provider},
};

const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Label used when a report is requested without a template.
pub(crate) const GENERAL_STRATEGY: &str = "General Strategy";

#[derive(Debug, Error)]
pub(crate) enum AdvisorError {
    #[error("no API credential is configured")]
    MissingCredential,
    #[error("request to the model failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("the model rejected the credential (HTTP {0})")]
    Unauthorized(u16),
    #[error("the model returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("the model returned no candidates")]
    EmptyResponse,
    #[error("invalid Ollama host `{0}`")]
    InvalidHost(String),
    #[error("ollama request failed: {0}")]
    Ollama(#[from] ollama_rs::error::OllamaError),
    #[error("the audience profile is malformed: {0}")]
    MalformedProfile(#[from] serde_json::Error),
}

/// A generated target-audience profile. Every field is required.
#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AudienceProfile {
    pub(crate) name: String,
    pub(crate) location: String,
    pub(crate) age_range: String,
    pub(crate) spending_class: String,
    pub(crate) behavior: String,
    pub(crate) strategy: String,
}

/// Campaign framing offered for advisor reports.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum ReportTemplate {
    Ramadan,
    Retention,
    Launch,
    Rural,
}

impl Labelled for ReportTemplate {
    const ALL: &'static [Self] = &[Self::Ramadan, Self::Retention, Self::Launch, Self::Rural];

    fn label(self) -> &'static str {
        match self {
            Self::Ramadan => "Ramadan / Festive Blitz",
            Self::Retention => "Customer Retention Loop",
            Self::Launch => "New Product Market Fit",
            Self::Rural => "East Malaysia Expansion",
        }
    }
}

impl ReportTemplate {
    pub(crate) fn icon(self) -> &'static str {
        match self {
            Self::Ramadan => "fa-moon",
            Self::Retention => "fa-sync",
            Self::Launch => "fa-rocket",
            Self::Rural => "fa-map-marked-alt",
        }
    }
}

pub(crate) fn template_label(template: Option<ReportTemplate>) -> &'static str {
    template.map_or(GENERAL_STRATEGY, ReportTemplate::label)
}

/// Sends prompts to a remote model. Every call is a single billed round
/// trip; callers must not retry.
#[async_trait]
pub(crate) trait ReportRequester: Send + Sync {
    /// Writes an executive brief for `prompt`, framed by `template` and
    /// grounded on `context`.
    async fn request_report(
        &self,
        prompt: &str,
        template: &str,
        context: &Value,
    ) -> Result<String, AdvisorError>;

    /// Compares advertising channels for a niche aimed at one social class.
    async fn request_comparison(
        &self,
        niche: &str,
        target_class: SocialClass,
    ) -> Result<String, AdvisorError>;

    async fn generate_audience_profile(&self, niche: &str)
        -> Result<AudienceProfile, AdvisorError>;
}

/// Builds the requester selected in the settings.
pub(crate) fn requester(
    settings: &AdvisorSettings,
) -> Result<Arc<dyn ReportRequester>, AdvisorError> {
    Ok(match settings.provider {
        Provider::Gemini => Arc::new(GeminiRequester::new(settings)?),
        Provider::Ollama => Arc::new(OllamaRequester::new(settings)?),
    })
}

fn report_prompt(prompt: &str, template: &str, context: &Value) -> String {
    format!(
        "You are the \"MY-BIZ ADVISOR AI\", a senior consultant for Malaysian SMEs.\n\
         Template Type: {template}\n\
         Contextual Data: {context}\n\
         User Request: {prompt}\n\
         \n\
         Instructions:\n\
         1. Analyze the demographic breakdown provided.\n\
         2. Suggest specific Item Categories that would thrive in this segment.\n\
         3. Propose a WhatsApp-first campaign strategy.\n\
         4. Use Malaysian business terminology (SST, Halal, Cash-on-Delivery, e-wallet).\n\
         \n\
         Format your response as a structured executive brief with:\n\
         - Executive Summary\n\
         - Demographic Opportunity Analysis\n\
         - WhatsApp Campaign Blueprint\n\
         - Risk Mitigation (e.g., Scams, Logistics)"
    )
}

fn comparison_prompt(niche: &str, target_class: SocialClass) -> String {
    format!(
        "Compare WhatsApp Business, TikTok, and FB Ads for a Malaysian business in the \
         \"{niche}\" niche targeting the \"{class}\" group. Provide a prioritized 1-2-3 \
         implementation plan.",
        class = target_class.code(),
    )
}

fn profile_prompt(niche: &str) -> String {
    format!(
        "Generate a target audience profile for a Malaysian SME selling {niche}. \
         Include location, age, social class, and WhatsApp behavior."
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;

    /// Answers from canned values and records how often it was called.
    pub(crate) struct StubRequester {
        pub(crate) answer: Option<String>,
        pub(crate) calls: AtomicUsize,
    }

    impl StubRequester {
        pub(crate) fn answering(answer: &str) -> Self {
            Self {
                answer: Some(answer.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                answer: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn reply(&self) -> Result<String, AdvisorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.clone().ok_or(AdvisorError::Unauthorized(403))
        }
    }

    #[async_trait]
    impl ReportRequester for StubRequester {
        async fn request_report(
            &self,
            prompt: &str,
            template: &str,
            context: &Value,
        ) -> Result<String, AdvisorError> {
            self.reply().map(|answer| {
                format!(
                    "{answer} [{template}] {prompt} ({} segments)",
                    context.as_array().map_or(0, Vec::len)
                )
            })
        }

        async fn request_comparison(
            &self,
            niche: &str,
            target_class: SocialClass,
        ) -> Result<String, AdvisorError> {
            self.reply()
                .map(|answer| format!("{answer} {niche} {}", target_class.code()))
        }

        async fn generate_audience_profile(
            &self,
            niche: &str,
        ) -> Result<AudienceProfile, AdvisorError> {
            self.reply().map(|answer| AudienceProfile {
                name: answer,
                location: "Selangor".to_string(),
                age_range: "25-34".to_string(),
                spending_class: "M40".to_string(),
                behavior: format!("Buys {niche} over WhatsApp"),
                strategy: "Status updates".to_string(),
            })
        }
    }

    #[test]
    fn report_prompt_embeds_everything() {
        let context = json!([{"name": "Klang Valley Urban Foodies"}]);
        let prompt = report_prompt("Sell durians", "Ramadan / Festive Blitz", &context);
        assert!(prompt.contains("Template Type: Ramadan / Festive Blitz"));
        assert!(prompt.contains(r#"Contextual Data: [{"name":"Klang Valley Urban Foodies"}]"#));
        assert!(prompt.contains("User Request: Sell durians"));
        assert!(prompt.ends_with("- Risk Mitigation (e.g., Scams, Logistics)"));
    }

    #[test]
    fn comparison_prompt_uses_class_code() {
        let prompt = comparison_prompt("Modest Fashion", SocialClass::M40);
        assert!(prompt.contains("\"Modest Fashion\" niche targeting the \"M40\" group"));
    }

    #[test]
    fn template_labels() {
        assert_eq!(template_label(None), GENERAL_STRATEGY);
        assert_eq!(
            template_label(Some(ReportTemplate::Rural)),
            "East Malaysia Expansion"
        );
    }

    #[test]
    fn profile_requires_every_field() {
        let full = r#"{"name":"n","location":"l","ageRange":"a","spendingClass":"s","behavior":"b","strategy":"st"}"#;
        let profile: AudienceProfile = serde_json::from_str(full).unwrap();
        assert_eq!(profile.age_range, "a");

        let partial = r#"{"name":"n","location":"l"}"#;
        assert!(serde_json::from_str::<AudienceProfile>(partial).is_err());
    }
}
