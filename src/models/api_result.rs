use salvo::http::StatusCode;
use salvo::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiResult {
    pub success: bool,
    pub code: u16,
    pub msg: Option<String>,
    pub data: Value,
}

impl ApiResult {
    pub fn new(code: StatusCode, msg: Option<&str>, data: Value) -> Self {
        Self {
            success: code.is_success(),
            code: code.as_u16(),
            msg: msg.map(|m| m.to_string()),
            data,
        }
    }

    pub fn ok(msg: Option<&str>, data: Value) -> Self {
        Self::new(StatusCode::OK, msg, data)
    }

    pub fn error(code: StatusCode, msg: &str) -> Self {
        Self::new(code, Some(msg), Value::Null)
    }

    /// Writes the envelope with a matching HTTP status.
    pub fn render(self, res: &mut Response) {
        if let Ok(code) = StatusCode::from_u16(self.code) {
            res.status_code(code);
        }
        res.render(Json(self));
    }
}
