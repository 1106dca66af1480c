use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ExtractError;
use crate::extractors::{JobExtractor, page};
use crate::models::job::JobRecord;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

// Board pages can run to hundreds of KB of markup; cap what we hand the
// model so the prompt stays inside its context window.
const MAX_PAGE_CHARS: usize = 12_000;

const EXTRACTION_PROMPT: &str = r#"Extract all entry-level software engineering jobs posted within the last week from the page content. Respond with a JSON object of the form {"jobs": [...]} where each entry has exactly these string fields:

"job_title": the title of the job position
"company_name": the name of the hiring company
"job_url": the URL linking to the job posting
"location": the job location in the format "city, state" (if available)
"date_posted": the posting date of the job
"description": a detailed description of the company and the job, sufficient for generating a tailored cover letter

If any of the fields are missing or unavailable, leave them empty but include the field in the JSON object. If the page contains no matching jobs, return {"jobs": []}."#;

/// Extraction engine backed by the OpenAI chat-completions API: fetch the
/// page, reduce it to text, and ask the model for structured postings.
pub struct OpenAiExtractor {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiExtractor {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the chat model (default: gpt-4o-mini).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom API base URL (for proxies and tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn chat(&self, user: &str) -> Result<String, ExtractError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: EXTRACTION_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user.to_string(),
                },
            ],
            temperature: 0.0,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ExtractError::Api(error_text));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExtractError::Api(e.to_string()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ExtractError::Api("no choices in completion".to_string()))
    }
}

#[async_trait]
impl JobExtractor for OpenAiExtractor {
    fn name(&self) -> &str {
        "openai"
    }

    async fn extract(&self, url: &str) -> Result<Vec<JobRecord>, ExtractError> {
        let html = page::fetch_page(&self.client, url).await?;
        let text = page::html_to_text(&html);
        let excerpt: String = text.chars().take(MAX_PAGE_CHARS).collect();
        tracing::debug!("Prompting {} with {} chars from {url}", self.model, excerpt.len());

        let user = format!("URL: {url}\n\nPage content:\n{excerpt}");
        let reply = self.chat(&user).await?;
        parse_jobs(&reply)
    }
}

/// Parse the model reply into records. Tolerates a markdown-fenced payload,
/// a bare array, a `{"jobs": [...]}` wrapper, or a single job object.
fn parse_jobs(content: &str) -> Result<Vec<JobRecord>, ExtractError> {
    let trimmed = content
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| ExtractError::Parse(format!("model reply is not JSON: {e}")))?;

    let entries: Vec<&Value> = match &value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => {
            if let Some(items) = map.get("jobs").and_then(Value::as_array) {
                items.iter().collect()
            } else if JOB_FIELDS.iter().any(|k| map.contains_key(*k)) {
                vec![&value]
            } else {
                return Err(ExtractError::Parse(
                    "model reply has no jobs array".to_string(),
                ));
            }
        }
        _ => {
            return Err(ExtractError::Parse(
                "model reply is not an array or object".to_string(),
            ));
        }
    };

    Ok(entries.into_iter().map(JobRecord::from_value).collect())
}

const JOB_FIELDS: [&str; 6] = [
    "job_title",
    "company_name",
    "job_url",
    "location",
    "date_posted",
    "description",
];

// Request/response types for the chat-completions API.

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}
