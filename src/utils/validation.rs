use crate::utils::error::{AppError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// CORS 來源：`*` 或是不含路徑的 http(s) 絕對網址
pub fn validate_origin(field_name: &str, origin: &str) -> Result<()> {
    if origin == "*" {
        return Ok(());
    }

    if origin.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: origin.to_string(),
            reason: "Origin cannot be empty".to_string(),
        });
    }

    match Url::parse(origin) {
        Ok(url) => {
            match url.scheme() {
                "http" | "https" => {}
                scheme => {
                    return Err(AppError::InvalidConfigValueError {
                        field: field_name.to_string(),
                        value: origin.to_string(),
                        reason: format!("Unsupported origin scheme: {}", scheme),
                    })
                }
            }
            if url.path() != "/" || url.query().is_some() || origin.ends_with('/') {
                return Err(AppError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: origin.to_string(),
                    reason: "Origin must not contain a path, query or trailing slash".to_string(),
                });
            }
            Ok(())
        }
        Err(e) => Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: origin.to_string(),
            reason: format!("Invalid origin format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_origin() {
        assert!(validate_origin("cors.allowed_origins", "*").is_ok());
        assert!(validate_origin("cors.allowed_origins", "https://example.com").is_ok());
        assert!(validate_origin("cors.allowed_origins", "http://localhost:5173").is_ok());
        assert!(validate_origin("cors.allowed_origins", "").is_err());
        assert!(validate_origin("cors.allowed_origins", "example.com").is_err());
        assert!(validate_origin("cors.allowed_origins", "ftp://example.com").is_err());
        assert!(validate_origin("cors.allowed_origins", "https://example.com/app").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("server.port", 3000u16, 1, u16::MAX).is_ok());
        assert!(validate_range("server.port", 0u16, 1, u16::MAX).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("server.host", "0.0.0.0").is_ok());
        assert!(validate_non_empty_string("server.host", "   ").is_err());
    }
}
