use anyhow::Context;
use clap::Parser;
use roman_api::core::dispatch::convert_value;
use roman_api::core::service::ConversionService;
use roman_api::domain::model::Direction;
use roman_api::utils::error::{AppError, Result};
use roman_api::utils::logger;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "convert")]
#[command(about = "Convert values between Roman and Arabic numerals")]
struct Args {
    /// Values to convert, e.g. XIV 14 mmxxiv
    #[arg(required = true)]
    values: Vec<String>,

    /// Print the batch response as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// 純數字參數當作數字，其餘保留字串，與 JSON 輸入的判斷一致
fn to_value(arg: &str) -> Value {
    match arg.trim().parse::<u64>() {
        Ok(number) => Value::from(number),
        Err(_) => Value::String(arg.to_string()),
    }
}

/// `輸入 -> 輸出`，方向與批次路由相同
fn describe(value: &Value) -> Result<String> {
    let conversion = convert_value(value)?;
    Ok(match conversion.direction {
        Direction::RomanToArabic => format!("{} -> {}", conversion.roman, conversion.arabic),
        Direction::ArabicToRoman => format!("{} -> {}", conversion.arabic, conversion.roman),
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.verbose { None } else { Some("warn") };
    logger::init_cli_logger(args.verbose, false, level);

    let values: Vec<Value> = args.values.iter().map(|arg| to_value(arg)).collect();

    let failed = if args.json {
        let service = ConversionService::default();
        let response = service.batch(Some(&Value::Array(values)));
        match response {
            Ok(batch) => {
                let text = serde_json::to_string_pretty(&batch)
                    .context("failed to encode batch response")?;
                println!("{}", text);
                batch.results.iter().any(|r| !r.is_success())
            }
            Err(error) => {
                let text = serde_json::to_string_pretty(&error)
                    .context("failed to encode error response")?;
                println!("{}", text);
                true
            }
        }
    } else {
        let mut failed = false;
        for value in &values {
            match describe(value) {
                Ok(line) => println!("{}", line),
                Err(error) => {
                    failed = true;
                    report(value, &error);
                }
            }
        }
        failed
    };

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn report(value: &Value, error: &AppError) {
    tracing::debug!("{} failed: {:?}", value, error);
    eprintln!("❌ {}: {}", value, error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
}

#[cfg(test)]
mod tests {
    use super::*;
    use roman_api::utils::error::{ConversionError, ErrorCategory};
    use serde_json::json;

    #[test]
    fn test_to_value_splits_numbers_and_text() {
        assert_eq!(to_value("14"), json!(14));
        assert_eq!(to_value(" 14 "), json!(14));
        assert_eq!(to_value("XIV"), json!("XIV"));
        assert_eq!(to_value("-3"), json!("-3"));
    }

    #[test]
    fn test_describe_both_directions() {
        assert_eq!(describe(&to_value("mmxxiv")).unwrap(), "MMXXIV -> 2024");
        assert_eq!(describe(&to_value("1994")).unwrap(), "1994 -> MCMXCIV");
    }

    #[test]
    fn test_describe_failure_is_conversion_error() {
        let error = describe(&to_value("IIII")).unwrap_err();
        assert_eq!(error.category(), ErrorCategory::Input);
        assert!(matches!(
            error,
            AppError::Conversion(ConversionError::InvalidGrammar { .. })
        ));

        let error = describe(&to_value("4000")).unwrap_err();
        assert!(matches!(
            error,
            AppError::Conversion(ConversionError::OutOfRange { .. })
        ));
    }
}
