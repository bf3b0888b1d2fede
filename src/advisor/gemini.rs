use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::{
    comparison_prompt, profile_prompt, report_prompt, AdvisorError, AudienceProfile,
    ReportRequester, APP_USER_AGENT,
};
use crate::{catalog::SocialClass, settings::AdvisorSettings};

const REPORT_TEMPERATURE: f32 = 0.8;
const REPORT_THINKING_BUDGET: u32 = 8000;
const COMPARISON_TEMPERATURE: f32 = 0.7;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

impl GenerateContentResponse {
    /// Concatenates the answer parts of the first candidate, skipping the
    /// model's thoughts.
    fn into_text(self) -> Result<String, AdvisorError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(AdvisorError::EmptyResponse)?;
        Ok(candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Schema the model must follow when generating an [`AudienceProfile`].
fn profile_schema() -> Value {
    let fields = [
        "name",
        "location",
        "ageRange",
        "spendingClass",
        "behavior",
        "strategy",
    ];
    let properties: serde_json::Map<String, Value> = fields
        .iter()
        .map(|field| ((*field).to_string(), json!({ "type": "STRING" })))
        .collect();
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": fields,
    })
}

/// Talks to the Gemini `generateContent` REST endpoint.
pub(crate) struct GeminiRequester {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    report_model: String,
    insight_model: String,
}

impl GeminiRequester {
    pub(crate) fn new(settings: &AdvisorSettings) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            report_model: settings.report_model.clone(),
            insight_model: settings.insight_model.clone(),
        })
    }

    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        generation_config: GenerationConfig,
    ) -> Result<String, AdvisorError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AdvisorError::MissingCredential)?;
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config,
        };
        debug!("Sending prompt to {model}");
        let response = self
            .client
            .post(format!("{}/models/{model}:generateContent", self.endpoint))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AdvisorError::Unauthorized(status.as_u16()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response.json::<GenerateContentResponse>().await?.into_text()
    }
}

#[async_trait]
impl ReportRequester for GeminiRequester {
    async fn request_report(
        &self,
        prompt: &str,
        template: &str,
        context: &Value,
    ) -> Result<String, AdvisorError> {
        let config = GenerationConfig {
            temperature: Some(REPORT_TEMPERATURE),
            thinking_config: Some(ThinkingConfig {
                thinking_budget: REPORT_THINKING_BUDGET,
            }),
            ..Default::default()
        };
        self.generate(
            &self.report_model,
            &report_prompt(prompt, template, context),
            config,
        )
        .await
    }

    async fn request_comparison(
        &self,
        niche: &str,
        target_class: SocialClass,
    ) -> Result<String, AdvisorError> {
        let config = GenerationConfig {
            temperature: Some(COMPARISON_TEMPERATURE),
            ..Default::default()
        };
        self.generate(
            &self.insight_model,
            &comparison_prompt(niche, target_class),
            config,
        )
        .await
    }

    async fn generate_audience_profile(
        &self,
        niche: &str,
    ) -> Result<AudienceProfile, AdvisorError> {
        let config = GenerationConfig {
            response_mime_type: Some("application/json"),
            response_schema: Some(profile_schema()),
            ..Default::default()
        };
        let text = self
            .generate(&self.insight_model, &profile_prompt(niche), config)
            .await?;
        Ok(serde_json::from_str(&text)?)
    }
}
