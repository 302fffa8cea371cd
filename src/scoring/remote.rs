//! Remote judgment strategy: one chat-completion exchange per candidate
//!
//! The request goes to an OpenAI-compatible endpoint and the reply is
//! expected to be a single JSON object. Callers never see an error from this
//! strategy; any failure degrades to a zero score with the error text as the
//! remark.

use crate::config::RemoteConfig;
use crate::error::{Result, ScreenerError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const PROMPT_TEMPLATE: &str = "You are screening a resume against a job description.\n\
Rate how well the resume matches the job on a 0-100 scale and list the matching \
and missing skills.\n\
Respond with exactly one JSON object and nothing else, shaped as:\n\
{\"score\": <number 0-100>, \"matching_skills\": [<strings>], \
\"missing_skills\": [<strings>], \"remark\": <string>}\n\n\
JOB DESCRIPTION:\n{job}\n\nRESUME:\n{resume}\n";

/// Structured verdict parsed out of the model reply.
#[derive(Debug, Clone, Deserialize)]
pub struct Judgment {
    pub score: f32,
    #[serde(default)]
    pub matching_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
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
    content: Option<String>,
}

pub struct RemoteScorer {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl RemoteScorer {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let api_key = std::env::var(&config.api_key_env).ok();

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    /// One request/response exchange. Errors propagate to the caller, which
    /// substitutes a zero score; there is no retry.
    pub async fn judge(&self, job_text: &str, resume_text: &str) -> Result<Judgment> {
        if job_text.trim().is_empty() || resume_text.trim().is_empty() {
            return Ok(Judgment {
                score: 0.0,
                matching_skills: Vec::new(),
                missing_skills: Vec::new(),
                remark: Some("empty document".to_string()),
            });
        }

        let prompt = PROMPT_TEMPLATE
            .replace("{job}", job_text)
            .replace("{resume}", resume_text);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.0,
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?.error_for_status()?;
        let payload: ChatResponse = response.json().await?;

        let content = payload
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| {
                ScreenerError::RemoteJudgment("Model reply contained no content".to_string())
            })?;

        debug!("Remote judgment reply: {}", content);
        parse_judgment(content)
    }
}

/// Parse the model reply into a [`Judgment`], tolerating markdown code
/// fences and prose around the JSON object.
pub fn parse_judgment(content: &str) -> Result<Judgment> {
    let trimmed = strip_code_fences(content);

    let json_slice = match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => {
            return Err(ScreenerError::RemoteJudgment(
                "Model reply contained no JSON object".to_string(),
            ))
        }
    };

    let mut judgment: Judgment = serde_json::from_str(json_slice)?;
    judgment.score = judgment.score.clamp(0.0, 100.0);
    Ok(judgment)
}

fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open.strip_suffix("```").unwrap_or(without_open).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let reply = r#"{"score": 72.5, "matching_skills": ["python"], "missing_skills": ["aws"], "remark": "decent fit"}"#;
        let judgment = parse_judgment(reply).unwrap();

        assert_eq!(judgment.score, 72.5);
        assert_eq!(judgment.matching_skills, vec!["python"]);
        assert_eq!(judgment.missing_skills, vec!["aws"]);
        assert_eq!(judgment.remark.as_deref(), Some("decent fit"));
    }

    #[test]
    fn test_parse_fenced_json() {
        let reply = "```json\n{\"score\": 40, \"remark\": \"partial\"}\n```";
        let judgment = parse_judgment(reply).unwrap();

        assert_eq!(judgment.score, 40.0);
        assert!(judgment.matching_skills.is_empty());
    }

    #[test]
    fn test_parse_json_with_surrounding_prose() {
        let reply = "Here is my assessment:\n{\"score\": 88, \"remark\": \"strong\"}\nHope that helps.";
        let judgment = parse_judgment(reply).unwrap();

        assert_eq!(judgment.score, 88.0);
    }

    #[test]
    fn test_score_clamped_to_range() {
        let judgment = parse_judgment(r#"{"score": 250}"#).unwrap();
        assert_eq!(judgment.score, 100.0);

        let judgment = parse_judgment(r#"{"score": -10}"#).unwrap();
        assert_eq!(judgment.score, 0.0);
    }

    #[test]
    fn test_malformed_reply_is_error() {
        assert!(parse_judgment("the candidate looks fine to me").is_err());
        assert!(parse_judgment("{\"score\": }").is_err());
    }
}
