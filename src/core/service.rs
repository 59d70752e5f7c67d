use crate::core::dispatch::{convert_batch, convert_value};
use crate::core::roman;
use crate::domain::model::{
    BatchResponse, ConversionResponse, Direction, ErrorResponse, Status,
};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::ConversionError;
use chrono::SecondsFormat;
use serde_json::{json, Value};
use std::sync::Arc;

pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

pub const AVAILABLE_ENDPOINTS: [&str; 5] =
    ["/api", "/api/r2a", "/api/a2r", "/api/convert", "/api/batch"];

pub type ServiceResult<T> = std::result::Result<T, ErrorResponse>;

/// 把核心轉換結果包成 API 回應格式
#[derive(Clone)]
pub struct ConversionService {
    clock: Arc<dyn Clock>,
    max_batch_size: usize,
}

impl Default for ConversionService {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), DEFAULT_MAX_BATCH_SIZE)
    }
}

impl ConversionService {
    pub fn new(clock: Arc<dyn Clock>, max_batch_size: usize) -> Self {
        Self {
            clock,
            max_batch_size,
        }
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// ISO-8601，毫秒精度，UTC
    pub fn timestamp(&self) -> String {
        self.clock
            .now()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn conversion_error(error: &ConversionError, input: Value) -> ErrorResponse {
        ErrorResponse::new(error.to_string())
            .with_kind(error.kind())
            .with_input(input)
    }

    pub fn roman_to_arabic(&self, roman: Option<&str>) -> ServiceResult<ConversionResponse> {
        let roman = match roman {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                return Err(ErrorResponse::new("Parameter \"roman\" is required")
                    .with_example(json!("/api/r2a?roman=XIV")))
            }
        };

        let arabic = roman::roman_to_arabic(roman)
            .map_err(|e| Self::conversion_error(&e, json!(roman)))?;
        let upper = roman.to_uppercase();

        Ok(ConversionResponse {
            status: Status::Success,
            conversion: None,
            input: json!(upper),
            roman: upper,
            arabic,
            timestamp: self.timestamp(),
        })
    }

    pub fn arabic_to_roman(&self, arabic: Option<&str>) -> ServiceResult<ConversionResponse> {
        let arabic = match arabic {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                return Err(ErrorResponse::new("Parameter \"arabic\" is required")
                    .with_example(json!("/api/a2r?arabic=14")))
            }
        };

        let value = roman::parse_arabic(arabic)
            .map_err(|e| Self::conversion_error(&e, json!(arabic)))?;
        let roman = roman::encode(value).map_err(|e| Self::conversion_error(&e, json!(arabic)))?;

        Ok(ConversionResponse {
            status: Status::Success,
            conversion: None,
            input: json!(value),
            roman,
            arabic: value,
            timestamp: self.timestamp(),
        })
    }

    /// 自動判斷方向，回應中帶 `conversion` 欄位
    pub fn convert(&self, value: Option<&Value>) -> ServiceResult<ConversionResponse> {
        let value = match value {
            None | Some(Value::Null) => return Err(Self::missing_value()),
            Some(Value::String(text)) if text.trim().is_empty() => {
                return Err(Self::missing_value())
            }
            Some(value) => value,
        };

        let conversion =
            convert_value(value).map_err(|e| Self::conversion_error(&e, value.clone()))?;

        tracing::debug!(
            "Converted {} via {:?}",
            value,
            conversion.direction
        );

        Ok(ConversionResponse {
            status: Status::Success,
            conversion: Some(conversion.direction),
            input: conversion.input,
            roman: conversion.roman,
            arabic: conversion.arabic,
            timestamp: self.timestamp(),
        })
    }

    fn missing_value() -> ErrorResponse {
        ErrorResponse::new("Field \"value\" is required").with_example(json!({ "value": "XIV" }))
    }

    pub fn batch(&self, values: Option<&Value>) -> ServiceResult<BatchResponse> {
        let values = match values {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => {
                return Err(
                    ErrorResponse::new("Field \"values\" must be a non-empty array")
                        .with_example(json!({ "values": ["XIV", 14, "IX"] })),
                )
            }
        };

        if values.len() > self.max_batch_size {
            return Err(ErrorResponse::new(format!(
                "Field \"values\" accepts at most {} elements, got {}",
                self.max_batch_size,
                values.len()
            ))
            .with_kind("batch_too_large"));
        }

        let results = convert_batch(values);
        let failed = results.iter().filter(|r| !r.is_success()).count();
        tracing::debug!(
            "Batch of {} converted ({} failed)",
            results.len(),
            failed
        );

        Ok(BatchResponse {
            status: Status::Success,
            total: values.len(),
            results,
            timestamp: self.timestamp(),
        })
    }

    pub fn documentation(&self) -> Value {
        json!({
            "name": "Roman <-> Arabic Numeral Conversion API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "GET /api/r2a": {
                    "description": "Converts a Roman numeral to an Arabic number",
                    "params": { "roman": "Roman numeral (e.g. XIV)" },
                    "example": "/api/r2a?roman=XIV"
                },
                "GET /api/a2r": {
                    "description": "Converts an Arabic number to a Roman numeral",
                    "params": { "arabic": "Number from 1 to 3999 (e.g. 14)" },
                    "example": "/api/a2r?arabic=14"
                },
                "POST /api/convert": {
                    "description": "Detects the direction from the value and converts it",
                    "body": { "value": "Roman numeral or Arabic number" },
                    "example": { "value": "XIV" },
                    "conversions": [Direction::RomanToArabic, Direction::ArabicToRoman]
                },
                "POST /api/batch": {
                    "description": "Converts several values, each independently",
                    "body": { "values": "Array of Roman numerals or Arabic numbers" },
                    "example": { "values": ["XIV", 14, "IX", 100] },
                    "maxBatchSize": self.max_batch_size
                }
            },
            "status": "online",
            "timestamp": self.timestamp()
        })
    }

    pub fn not_found(path: &str) -> ErrorResponse {
        let mut response = ErrorResponse::new("Endpoint not found");
        response.path = Some(path.to_string());
        response.available_endpoints =
            Some(AVAILABLE_ENDPOINTS.iter().map(|e| e.to_string()).collect());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
        }
    }

    fn service() -> ConversionService {
        ConversionService::new(Arc::new(FixedClock), 3)
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(service().timestamp(), "2024-03-01T12:30:00.000Z");
    }

    #[test]
    fn test_roman_to_arabic_envelope() {
        let response = service().roman_to_arabic(Some("xiv")).unwrap();
        assert_eq!(response.input, json!("XIV"));
        assert_eq!(response.arabic, 14);
        assert_eq!(response.conversion, None);

        let error = service().roman_to_arabic(Some("IIII")).unwrap_err();
        assert_eq!(error.kind.as_deref(), Some("invalid_grammar"));
        assert_eq!(error.input, Some(json!("IIII")));

        let error = service().roman_to_arabic(None).unwrap_err();
        assert_eq!(error.example, Some(json!("/api/r2a?roman=XIV")));
    }

    #[test]
    fn test_arabic_to_roman_envelope() {
        let response = service().arabic_to_roman(Some("0014")).unwrap();
        assert_eq!(response.input, json!(14));
        assert_eq!(response.roman, "XIV");

        let error = service().arabic_to_roman(Some("4000")).unwrap_err();
        assert_eq!(error.kind.as_deref(), Some("out_of_range"));
        assert_eq!(error.input, Some(json!("4000")));

        assert!(service().arabic_to_roman(Some("")).is_err());
    }

    #[test]
    fn test_convert_reports_direction() {
        let response = service().convert(Some(&json!("IX"))).unwrap();
        assert_eq!(response.conversion, Some(Direction::RomanToArabic));

        let response = service().convert(Some(&json!(9))).unwrap();
        assert_eq!(response.conversion, Some(Direction::ArabicToRoman));
        assert_eq!(response.roman, "IX");

        let error = service().convert(Some(&Value::Null)).unwrap_err();
        assert_eq!(error.example, Some(json!({ "value": "XIV" })));
    }

    #[test]
    fn test_blank_values_are_missing() {
        let error = service().roman_to_arabic(Some("   ")).unwrap_err();
        assert_eq!(error.example, Some(json!("/api/r2a?roman=XIV")));

        let error = service().arabic_to_roman(Some("   ")).unwrap_err();
        assert_eq!(error.example, Some(json!("/api/a2r?arabic=14")));
        assert_eq!(error.kind, None);

        let error = service().convert(Some(&json!("   "))).unwrap_err();
        assert_eq!(error.example, Some(json!({ "value": "XIV" })));
        assert_eq!(error.kind, None);

        let response = service().batch(Some(&json!(["  ", "IX"]))).unwrap();
        assert_eq!(
            serde_json::to_value(&response.results[0]).unwrap()["message"],
            "A valid value must be provided"
        );
        assert!(response.results[1].is_success());
    }

    #[test]
    fn test_batch_limits() {
        let error = service().batch(Some(&json!([]))).unwrap_err();
        assert!(error.example.is_some());

        let error = service().batch(Some(&json!("XIV"))).unwrap_err();
        assert!(error.message.contains("non-empty array"));

        let error = service().batch(Some(&json!([1, 2, 3, 4]))).unwrap_err();
        assert_eq!(error.kind.as_deref(), Some("batch_too_large"));

        let response = service().batch(Some(&json!(["XIV", 4000, "IX"]))).unwrap();
        assert_eq!(response.total, 3);
        assert_eq!(response.results.iter().filter(|r| r.is_success()).count(), 2);
    }

    #[test]
    fn test_not_found_lists_endpoints() {
        let response = ConversionService::not_found("/nope?x=1");
        assert_eq!(response.path.as_deref(), Some("/nope?x=1"));
        assert_eq!(response.available_endpoints.map(|e| e.len()), Some(5));
    }
}
