use crate::core::service::DEFAULT_MAX_BATCH_SIZE;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_range, Validate};
use std::env;

use super::toml_config::MAX_BATCH_SIZE_LIMIT;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub max_batch_size: usize,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        let max_batch_size = match env::var("MAX_BATCH_SIZE") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| AppError::InvalidConfigValueError {
                    field: "MAX_BATCH_SIZE".to_string(),
                    value: raw.clone(),
                    reason: "Must be a positive integer".to_string(),
                })?,
            Err(_) => DEFAULT_MAX_BATCH_SIZE,
        };

        Ok(Self { max_batch_size })
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_range("MAX_BATCH_SIZE", self.max_batch_size, 1, MAX_BATCH_SIZE_LIMIT)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
