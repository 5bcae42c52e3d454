//! Content-manager agent with a bounded tool-calling loop.

use super::tools::{parse_tool_call, tool_definitions, ToolContext};
use crate::config::{OpenAISettings, Prompts};
use crate::error::{AgencyError, Result};
use crate::openai::create_client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestToolMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

const DEFAULT_MAX_ITERATIONS: usize = 10;
const DEFAULT_CHANNEL_FOCUS: &str = "AI tools, tutorials and industry news";

fn agent_error(e: impl std::fmt::Display) -> AgencyError {
    AgencyError::Agent(e.to_string())
}

/// LLM agent that plans and produces content using the agency's tools.
pub struct Agent {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    tools: ToolContext,
    max_iterations: usize,
    system_prompt: String,
}

impl Agent {
    /// Create an agent. `channel_focus` fills `{{channel_focus}}` in the system prompt.
    pub fn new(
        tools: ToolContext,
        settings: &OpenAISettings,
        prompts: &Prompts,
        channel_focus: Option<&str>,
    ) -> Result<Self> {
        let mut vars = HashMap::new();
        if let Some(focus) = channel_focus.or(prompts
            .variables
            .get("channel_focus")
            .map(String::as_str)
            .or(Some(DEFAULT_CHANNEL_FOCUS)))
        {
            vars.insert("channel_focus".to_string(), focus.to_string());
        }

        Ok(Self {
            client: create_client(Duration::from_secs(settings.timeout_secs))?,
            model: settings.model.clone(),
            temperature: settings.agent_temperature,
            tools,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            system_prompt: prompts.render_with_custom(&prompts.agent.system, &vars),
        })
    }

    /// Set maximum iterations for the agent loop.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Run the agent on a task until it answers without calling tools.
    pub async fn run(&self, task: &str) -> Result<AgentResponse> {
        let mut messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.system_prompt.clone())
                .build()
                .map_err(agent_error)?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(task)
                .build()
                .map_err(agent_error)?
                .into(),
        ];

        let mut tool_calls_made = Vec::new();

        for iteration in 1..=self.max_iterations {
            debug!("Agent iteration {}", iteration);

            let request = CreateChatCompletionRequestArgs::default()
                .model(&self.model)
                .messages(messages.clone())
                .tools(tool_definitions())
                .temperature(self.temperature)
                .build()
                .map_err(agent_error)?;

            let response = self
                .client
                .chat()
                .create(request)
                .await
                .map_err(|e| AgencyError::OpenAI(format!("Agent API error: {}", e)))?;

            let message = response
                .choices
                .into_iter()
                .next()
                .ok_or_else(|| AgencyError::Agent("No response from model".to_string()))?
                .message;

            let tool_calls = match message.tool_calls {
                Some(calls) if !calls.is_empty() => calls,
                _ => {
                    return Ok(AgentResponse {
                        content: message.content.unwrap_or_default(),
                        tool_calls: tool_calls_made,
                        iterations: iteration,
                    })
                }
            };

            messages.push(
                ChatCompletionRequestAssistantMessageArgs::default()
                    .tool_calls(tool_calls.clone())
                    .build()
                    .map_err(agent_error)?
                    .into(),
            );

            for tool_call in &tool_calls {
                let record = self.execute_tool_call(tool_call).await;
                messages.push(
                    ChatCompletionRequestToolMessageArgs::default()
                        .tool_call_id(&tool_call.id)
                        .content(record.result.clone())
                        .build()
                        .map_err(agent_error)?
                        .into(),
                );
                tool_calls_made.push(record);
            }
        }

        Err(AgencyError::Agent(format!(
            "Agent exceeded maximum iterations ({})",
            self.max_iterations
        )))
    }

    /// Execute a single tool call. Failures become the tool's reply to the model.
    async fn execute_tool_call(&self, tool_call: &ChatCompletionMessageToolCall) -> ToolCallRecord {
        let name = &tool_call.function.name;
        let arguments = &tool_call.function.arguments;

        info!("Agent calling tool: {} with args: {}", name, arguments);

        let (result, failed) = match parse_tool_call(name, arguments) {
            Ok(tool) => match self.tools.execute(&tool).await {
                Ok(output) => (output.to_string(), false),
                Err(e) => (format!("Tool error ({}): {}", e.headline(), e), true),
            },
            Err(e) => (format!("Failed to parse tool call: {}", e), true),
        };

        if failed {
            warn!("Tool {} failed: {}", name, result);
        }

        ToolCallRecord {
            name: name.clone(),
            arguments: arguments.clone(),
            result,
            failed,
        }
    }
}

/// Response from an agent run.
#[derive(Debug)]
pub struct AgentResponse {
    /// The final response content from the agent.
    pub content: String,
    /// Record of all tool calls made during execution.
    pub tool_calls: Vec<ToolCallRecord>,
    /// Number of iterations (LLM calls) used.
    pub iterations: usize,
}

/// Record of a tool call made by the agent.
#[derive(Debug, Clone)]
pub struct ToolCallRecord {
    pub name: String,
    /// JSON arguments passed to the tool.
    pub arguments: String,
    pub result: String,
    pub failed: bool,
}

impl std::fmt::Display for ToolCallRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.arguments)
    }
}
