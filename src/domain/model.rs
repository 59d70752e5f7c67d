use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 轉換方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    RomanToArabic,
    ArabicToRoman,
}

/// 單筆轉換成功的結果，`input` 為回傳給呼叫端的正規化輸入
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub direction: Direction,
    pub input: Value,
    pub roman: String,
    pub arabic: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<Direction>,
    pub input: Value,
    pub roman: String,
    pub arabic: u16,
    pub timestamp: String,
}

/// 批次中的單筆結果，成功與失敗互不影響
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchEntry {
    Success {
        input: Value,
        roman: String,
        arabic: u16,
    },
    Error {
        input: Value,
        message: String,
    },
}

impl BatchEntry {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchEntry::Success { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub status: Status,
    pub total: usize,
    pub results: Vec<BatchEntry>,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_endpoints: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            kind: None,
            input: None,
            example: None,
            path: None,
            available_endpoints: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_input(mut self, input: Value) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }
}
