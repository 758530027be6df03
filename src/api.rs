use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use hashtag_gen::config::HashtagConfig;
use hashtag_gen::{generate_hashtags, GenerationOptions, HashtagError, HashtagInput};

pub const TOOL_NAME: &str = "generate_hashtags";
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Arguments of the `generate_hashtags` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiHashtagRequest {
    /// The video concept or topic. Required.
    pub concept: Option<String>,
    /// Working title of the video.
    pub title: Option<String>,
    /// Keyword research output; only `recommended.primary` and `recommended.secondary` are read.
    pub keywords: Option<KeywordResearch>,
    /// Content niche: tech, gaming, education, lifestyle, business, fitness, cooking, music, beauty, travel or other.
    pub niche: Option<String>,
    /// Content style: tutorial, review, vlog, entertainment, educational or shorts.
    pub content_style: Option<String>,
    /// Who the video is for, e.g. "beginners".
    pub target_audience: Option<String>,
    /// How many hashtags to return (default 5, never more than 15).
    pub max_hashtags: Option<i64>,
    /// Include year-stamped trending tags (default true).
    pub prioritize_trending: Option<bool>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct KeywordResearch {
    pub recommended: Option<RecommendedKeywords>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct RecommendedKeywords {
    #[serde(default)]
    pub primary: Vec<KeywordEntry>,
    #[serde(default)]
    pub secondary: Vec<KeywordEntry>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct KeywordEntry {
    pub keyword: String,
}

impl ApiHashtagRequest {
    pub fn into_input(self, defaults: &GenerationOptions) -> Result<HashtagInput, HashtagError> {
        let concept = self.concept.unwrap_or_default().trim().to_string();
        if concept.is_empty() {
            return Err(HashtagError::missing("concept"));
        }

        let mut input = HashtagInput::new(concept);
        input.options = defaults.clone();
        input.title = self.title.filter(|title| !title.trim().is_empty());
        input.target_audience = self.target_audience;

        if let Some(recommended) = self.keywords.and_then(|keywords| keywords.recommended) {
            input.primary_keywords = keyword_texts(recommended.primary);
            input.secondary_keywords = keyword_texts(recommended.secondary);
        }
        if let Some(niche) = self.niche {
            input.options.niche = niche;
        }
        if let Some(style) = self.content_style {
            input.options.content_style = style;
        }
        if let Some(value) = self.max_hashtags {
            input.options.max_hashtags = value.max(0) as usize;
        }
        if let Some(value) = self.prioritize_trending {
            input.options.prioritize_trending = value;
        }

        Ok(input)
    }
}

fn keyword_texts(entries: Vec<KeywordEntry>) -> Vec<String> {
    entries.into_iter().map(|entry| entry.keyword).collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

pub fn tool_list() -> Vec<ToolDescriptor> {
    vec![ToolDescriptor {
        name: TOOL_NAME,
        description: "Generate ranked YouTube hashtags for a video concept, split into the 3 shown above the title and the rest for the description.",
        input_schema: request_schema(),
    }]
}

fn request_schema() -> Value {
    let mut schema = serde_json::to_value(schemars::schema_for!(ApiHashtagRequest))
        .unwrap_or_default();
    if let Some(object) = schema.as_object_mut() {
        object.insert("required".to_string(), json!(["concept"]));
    }
    schema
}

#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl RpcResponse {
    fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Value, code: i64, message: String) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError { code, message }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ToolCallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

pub fn handle_rpc(request: RpcRequest, config: &HashtagConfig) -> RpcResponse {
    let id = request.id;
    match request.method.as_str() {
        "initialize" => RpcResponse::result(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                },
                "capabilities": { "tools": {} },
            }),
        ),
        "tools/list" => RpcResponse::result(id, json!({ "tools": tool_list() })),
        "tools/call" => {
            let params: ToolCallParams = match serde_json::from_value(request.params) {
                Ok(params) => params,
                Err(err) => return RpcResponse::error(id, -32602, format!("invalid params: {}", err)),
            };
            if params.name != TOOL_NAME {
                return RpcResponse::error(id, -32602, format!("unknown tool: {}", params.name));
            }
            let arguments = if params.arguments.is_null() {
                json!({})
            } else {
                params.arguments
            };
            let request: ApiHashtagRequest = match serde_json::from_value(arguments) {
                Ok(request) => request,
                Err(err) => {
                    return RpcResponse::error(id, -32602, format!("invalid arguments: {}", err))
                }
            };
            RpcResponse::result(id, call_tool(request, config))
        }
        other => RpcResponse::error(id, -32601, format!("method not found: {}", other)),
    }
}

fn call_tool(request: ApiHashtagRequest, config: &HashtagConfig) -> Value {
    let outcome = request
        .into_input(&config.defaults)
        .and_then(|input| generate_hashtags(&input, config));
    match outcome {
        Ok(output) => {
            let text = serde_json::to_string_pretty(&output)
                .unwrap_or_else(|err| format!("failed to serialize result: {}", err));
            json!({ "content": [{ "type": "text", "text": text }] })
        }
        Err(err) => json!({
            "content": [{ "type": "text", "text": format!("Error: {}", err) }],
            "isError": true,
        }),
    }
}
