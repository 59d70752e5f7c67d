use crate::core::roman::{self, is_numeral_symbol};
use crate::domain::model::{BatchEntry, Conversion, Direction};
use crate::utils::error::ConversionError;
use serde_json::Value;

/// 只由羅馬字母組成的字串走羅馬轉阿拉伯，其餘一律視為阿拉伯數字
pub fn detect_direction(value: &Value) -> Direction {
    match value {
        Value::String(text) if !text.is_empty() && text.chars().all(is_numeral_symbol) => {
            Direction::RomanToArabic
        }
        _ => Direction::ArabicToRoman,
    }
}

/// 把任意 JSON 值轉成阿拉伯數字的文字形式
fn arabic_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => match (number.as_u64(), number.as_i64(), number.as_f64()) {
            (Some(n), _, _) => n.to_string(),
            (None, Some(n), _) => n.to_string(),
            // 14.0 會顯示成 "14"，與整數相同
            (None, None, Some(n)) => n.to_string(),
            _ => number.to_string(),
        },
        other => other.to_string(),
    }
}

pub fn convert_value(value: &Value) -> Result<Conversion, ConversionError> {
    match value {
        Value::Null => return Err(ConversionError::InvalidInput),
        // 空白字串不進入任何一個轉換方向
        Value::String(text) if text.trim().is_empty() => {
            return Err(ConversionError::InvalidInput)
        }
        _ => {}
    }

    match detect_direction(value) {
        Direction::RomanToArabic => {
            let text = value.as_str().unwrap_or_default();
            let arabic = roman::roman_to_arabic(text)?;
            let roman = text.to_uppercase();
            Ok(Conversion {
                direction: Direction::RomanToArabic,
                input: Value::String(roman.clone()),
                roman,
                arabic,
            })
        }
        Direction::ArabicToRoman => {
            let arabic = roman::parse_arabic(&arabic_text(value))?;
            Ok(Conversion {
                direction: Direction::ArabicToRoman,
                input: Value::from(arabic),
                roman: roman::encode(arabic)?,
                arabic,
            })
        }
    }
}

/// 每筆獨立轉換，單筆失敗不會中斷其他筆
pub fn convert_batch(values: &[Value]) -> Vec<BatchEntry> {
    values
        .iter()
        .map(|value| match convert_value(value) {
            Ok(conversion) => BatchEntry::Success {
                input: conversion.input,
                roman: conversion.roman,
                arabic: conversion.arabic,
            },
            Err(e) => {
                tracing::debug!("Batch element {} failed: {}", value, e);
                BatchEntry::Error {
                    input: value.clone(),
                    message: e.to_string(),
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_direction() {
        assert_eq!(detect_direction(&json!("XIV")), Direction::RomanToArabic);
        assert_eq!(detect_direction(&json!("xiv")), Direction::RomanToArabic);
        assert_eq!(detect_direction(&json!("14")), Direction::ArabicToRoman);
        assert_eq!(detect_direction(&json!(14)), Direction::ArabicToRoman);
        assert_eq!(detect_direction(&json!(" XIV ")), Direction::ArabicToRoman);
        assert_eq!(detect_direction(&json!("")), Direction::ArabicToRoman);
        assert_eq!(detect_direction(&json!(["X"])), Direction::ArabicToRoman);
    }

    #[test]
    fn test_convert_roman_value() {
        let conversion = convert_value(&json!("xiv")).unwrap();
        assert_eq!(conversion.direction, Direction::RomanToArabic);
        assert_eq!(conversion.input, json!("XIV"));
        assert_eq!(conversion.roman, "XIV");
        assert_eq!(conversion.arabic, 14);
    }

    #[test]
    fn test_convert_arabic_values() {
        for value in [json!(14), json!("14"), json!(" 14 "), json!(14.0)] {
            let conversion = convert_value(&value).unwrap();
            assert_eq!(conversion.direction, Direction::ArabicToRoman);
            assert_eq!(conversion.input, json!(14));
            assert_eq!(conversion.roman, "XIV");
        }
    }

    #[test]
    fn test_convert_rejects_missing_and_malformed() {
        assert_eq!(convert_value(&Value::Null), Err(ConversionError::InvalidInput));
        assert_eq!(convert_value(&json!("")), Err(ConversionError::InvalidInput));
        assert_eq!(convert_value(&json!("   ")), Err(ConversionError::InvalidInput));
        assert_eq!(convert_value(&json!("\t\n")), Err(ConversionError::InvalidInput));
        for value in [json!(true), json!(-3), json!(14.5), json!({"n": 1}), json!("abc")] {
            assert!(
                matches!(
                    convert_value(&value),
                    Err(ConversionError::InvalidFormat { .. })
                ),
                "expected InvalidFormat for {}",
                value
            );
        }
        assert!(matches!(
            convert_value(&json!("IIII")),
            Err(ConversionError::InvalidGrammar { .. })
        ));
    }

    #[test]
    fn test_batch_independence() {
        let results = convert_batch(&[json!("XIV"), json!(14), json!("not-a-numeral"), json!(4000)]);

        assert_eq!(results.len(), 4);
        assert_eq!(results.iter().filter(|r| r.is_success()).count(), 2);
        assert_eq!(
            results[0],
            BatchEntry::Success {
                input: json!("XIV"),
                roman: "XIV".to_string(),
                arabic: 14
            }
        );
        assert_eq!(
            results[1],
            BatchEntry::Success {
                input: json!(14),
                roman: "XIV".to_string(),
                arabic: 14
            }
        );
        assert!(matches!(&results[2], BatchEntry::Error { input, .. } if input == &json!("not-a-numeral")));
        assert!(matches!(&results[3], BatchEntry::Error { input, .. } if input == &json!(4000)));
    }

    #[test]
    fn test_batch_blank_element_is_invalid_input() {
        let results = convert_batch(&[json!("  "), json!("X")]);

        assert_eq!(
            results[0],
            BatchEntry::Error {
                input: json!("  "),
                message: ConversionError::InvalidInput.to_string()
            }
        );
        assert!(results[1].is_success());
    }
}
