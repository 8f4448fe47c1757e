use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON-RPC 2.0 request. A missing or null `id` marks a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Notifications carry no id and get no response.
    #[must_use]
    pub fn is_notification(&self) -> bool {
        self.id.is_null()
    }

    /// Parse a raw body, mapping failures to the JSON-RPC error response the
    /// caller should send back.
    ///
    /// # Errors
    ///
    /// Returns a `PARSE_ERROR` response for invalid JSON and an
    /// `INVALID_REQUEST` response for JSON that is not a 2.0 request.
    pub fn parse(body: &[u8]) -> Result<Self, Box<JsonRpcResponse>> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            Box::new(JsonRpcResponse::error(
                Value::Null,
                PARSE_ERROR,
                format!("Parse error: {e}"),
            ))
        })?;

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let req: Self = serde_json::from_value(value).map_err(|e| {
            Box::new(JsonRpcResponse::error(
                id.clone(),
                INVALID_REQUEST,
                format!("Invalid request: {e}"),
            ))
        })?;

        if req.jsonrpc != "2.0" {
            return Err(Box::new(JsonRpcResponse::error(
                id,
                INVALID_REQUEST,
                "Invalid request: jsonrpc must be \"2.0\"",
            )));
        }
        Ok(req)
    }
}

/// A JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Standard JSON-RPC error codes.
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;
