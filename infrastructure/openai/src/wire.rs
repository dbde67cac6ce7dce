use serde::Deserialize;
use serde_json::{Map, Value, json};

use business::domain::chat::errors::ChatError;
use business::domain::chat::model::{ChatHistory, ChatMessage, Role, ToolCall};
use business::domain::chat::services::ExecutionSettings;
use business::domain::kernel::model::{KernelFunction, ParameterMetadata};

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ResponseToolCall>>,
}

#[derive(Deserialize)]
struct ResponseToolCall {
    id: String,
    function: ResponseFunction,
}

#[derive(Deserialize)]
struct ResponseFunction {
    name: String,
    #[serde(default)]
    arguments: String,
}

fn message_to_wire(message: &ChatMessage) -> Value {
    let mut wire = Map::new();
    wire.insert("role".to_string(), json!(message.role.to_string()));
    wire.insert(
        "content".to_string(),
        message.content.clone().map_or(Value::Null, Value::String),
    );

    if message.role == Role::Assistant && message.has_tool_calls() {
        let calls: Vec<Value> = message
            .tool_calls
            .iter()
            .map(|call| {
                json!({
                    "id": call.id,
                    "type": "function",
                    "function": {
                        "name": call.function_name,
                        "arguments": call.arguments,
                    },
                })
            })
            .collect();
        wire.insert("tool_calls".to_string(), Value::Array(calls));
    }

    if let Some(id) = &message.tool_call_id {
        wire.insert("tool_call_id".to_string(), json!(id));
    }

    Value::Object(wire)
}

fn parameter_schema(parameter: &ParameterMetadata) -> Value {
    let mut schema = Map::new();
    schema.insert("type".to_string(), json!(parameter.kind.schema_type()));
    if let Some(description) = &parameter.description {
        schema.insert("description".to_string(), json!(description));
    }
    if let Some(default) = &parameter.default {
        schema.insert("default".to_string(), default.clone());
    }
    Value::Object(schema)
}

fn function_to_tool(function: &KernelFunction) -> Value {
    let properties: Map<String, Value> = function
        .metadata
        .parameters
        .iter()
        .map(|p| (p.name.clone(), parameter_schema(p)))
        .collect();
    let required: Vec<&str> = function
        .metadata
        .parameters
        .iter()
        .filter(|p| p.required)
        .map(|p| p.name.as_str())
        .collect();

    json!({
        "type": "function",
        "function": {
            "name": function.qualified_name(),
            "description": function.metadata.description,
            "parameters": {
                "type": "object",
                "properties": properties,
                "required": required,
            },
        },
    })
}

/// Builds the chat completions request body.
pub(crate) fn build_request_body(
    history: &ChatHistory,
    functions: &[KernelFunction],
    settings: &ExecutionSettings,
) -> Value {
    let messages: Vec<Value> = history.messages().iter().map(message_to_wire).collect();

    let mut body = Map::new();
    body.insert("messages".to_string(), Value::Array(messages));

    if !functions.is_empty() {
        let tools: Vec<Value> = functions.iter().map(function_to_tool).collect();
        body.insert("tools".to_string(), Value::Array(tools));
        body.insert("tool_choice".to_string(), json!("auto"));
    }
    if let Some(temperature) = settings.temperature {
        body.insert("temperature".to_string(), json!(temperature));
    }
    if let Some(max_tokens) = settings.max_tokens {
        body.insert("max_tokens".to_string(), json!(max_tokens));
    }

    Value::Object(body)
}

/// Extracts the first choice's message from a completions response.
pub(crate) fn parse_completion(body: &str) -> Result<ChatMessage, ChatError> {
    let response: CompletionResponse =
        serde_json::from_str(body).map_err(|_| ChatError::InvalidResponse)?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(ChatError::InvalidResponse)?;

    if let Some(reason) = &choice.finish_reason {
        tracing::debug!(finish_reason = %reason, "Completion finished");
    }

    let tool_calls: Vec<ToolCall> = choice
        .message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .map(|call| ToolCall {
            id: call.id,
            function_name: call.function.name,
            arguments: call.function.arguments,
        })
        .collect();

    if tool_calls.is_empty() && choice.message.content.is_none() {
        return Err(ChatError::InvalidResponse);
    }

    Ok(ChatMessage::assistant_tool_calls(
        choice.message.content,
        tool_calls,
    ))
}
