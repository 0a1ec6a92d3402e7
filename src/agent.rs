use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs
    },
    Client as OpenAIClient
};
use std::{
    error::Error as StdError,
    fmt
};

use crate::prompt::PROMPT;

// Groq exposes an OpenAI-compatible chat completions API, so the
// regular OpenAI client works against it with a different base url.
const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

// we hardcode the model id; it is not configurable per request.
const GROQ_MODEL: &str = "llama-3.1-8b-instant";

pub struct SummaryAgent {
    client: OpenAIClient<OpenAIConfig>
}

impl SummaryAgent {
    pub fn new(client: OpenAIClient<OpenAIConfig>) -> Self {
        SummaryAgent {
            client
        }
    }

    pub fn from_api_key(api_key: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(GROQ_API_BASE)
            .with_api_key(api_key);
        Self::new(OpenAIClient::with_config(config))
    }

    pub async fn summarize(&self, text: &str) -> Result<String, AgentError> {
        let request = build_request(text)?;

        let summary = self.client
            .chat()
            .create(request)
            .await
            .map_err(AgentError::from)?
            .choices
            .into_iter()
            .next()
            .ok_or(AgentError::new("No completion"))?
            .message
            .content
            .ok_or(AgentError::new("No completion"))?;

        Ok(summary)
    }
}

// pure assembly: the same text always yields the same request payload.
pub fn build_request(text: &str) -> Result<CreateChatCompletionRequest, AgentError> {
    let request = CreateChatCompletionRequestArgs::default()
        .model(GROQ_MODEL)
        .messages([
            ChatCompletionRequestSystemMessageArgs::default()
                .content(PROMPT)
                .build()
                .map_err(AgentError::from)?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(text)
                .build()
                .map_err(AgentError::from)?
                .into(),
        ])
        .build()
        .map_err(AgentError::from)?;
    Ok(request)
}

#[derive(Debug)]
pub struct AgentError {
    pub message: String
}

impl AgentError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string()
        }
    }
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for AgentError {}

impl From<OpenAIError> for AgentError {
    fn from(err: OpenAIError) -> Self {
        AgentError::new(&format!("Open AI Error: {}", err))
    }
}
