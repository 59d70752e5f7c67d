#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use roman_api::core::service::ConversionService;
#[cfg(feature = "lambda")]
use roman_api::domain::ports::SystemClock;
#[cfg(feature = "lambda")]
use roman_api::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use roman_api::LambdaConfig;
#[cfg(feature = "lambda")]
use serde_json::Value;
#[cfg(feature = "lambda")]
use std::sync::Arc;

/// `{ "values": [...] }` 走批次，其餘當作單筆 `{ "value": ... }`
#[cfg(feature = "lambda")]
fn handle(service: &ConversionService, payload: &Value) -> Value {
    let result = match payload.get("values") {
        Some(values) => service.batch(Some(values)).map(serde_json::to_value),
        None => service
            .convert(payload.get("value"))
            .map(serde_json::to_value),
    };

    match result {
        Ok(Ok(body)) => body,
        Ok(Err(e)) => serde_json::json!({ "status": "error", "message": e.to_string() }),
        Err(error) => serde_json::to_value(error)
            .unwrap_or_else(|e| serde_json::json!({ "status": "error", "message": e.to_string() })),
    }
}

#[cfg(feature = "lambda")]
async fn function_handler(
    service: &ConversionService,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    tracing::info!("Handling conversion request {}", event.context.request_id);
    Ok(handle(service, &event.payload))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let service = ConversionService::new(Arc::new(SystemClock), config.max_batch_size);
    let service = &service;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(service, event).await
    }))
    .await
}
