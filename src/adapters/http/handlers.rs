use crate::adapters::http::response::{respond, ApiErrorResponse};
use crate::adapters::http::router::AppState;
use crate::core::service::ConversionService;
use crate::domain::model::ErrorResponse;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

type Params = Result<Query<HashMap<String, String>>, QueryRejection>;

fn param<'a>(params: &'a Params, name: &str) -> Result<Option<&'a str>, Response> {
    match params {
        Ok(Query(map)) => Ok(map.get(name).map(String::as_str)),
        Err(rejection) => Err(query_rejected(rejection)),
    }
}

fn query_rejected(rejection: &QueryRejection) -> Response {
    ApiErrorResponse::bad_request(
        ErrorResponse::new(format!("Invalid query string: {}", rejection.body_text()))
            .with_kind("invalid_query"),
    )
    .into_response()
}

/// 解析失敗的 JSON 也要回傳統一格式
fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, Response> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        ApiErrorResponse::bad_request(
            ErrorResponse::new(format!("Invalid JSON body: {}", rejection.body_text()))
                .with_kind("invalid_json"),
        )
        .into_response()
    })
}

pub async fn documentation(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.service.documentation())).into_response()
}

pub async fn roman_to_arabic(State(state): State<AppState>, params: Params) -> Response {
    match param(&params, "roman") {
        Ok(roman) => respond(state.service.roman_to_arabic(roman)),
        Err(response) => response,
    }
}

pub async fn arabic_to_roman(State(state): State<AppState>, params: Params) -> Response {
    match param(&params, "arabic") {
        Ok(arabic) => respond(state.service.arabic_to_roman(arabic)),
        Err(response) => response,
    }
}

pub async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    match json_body(payload) {
        Ok(body) => respond(state.service.convert(body.get("value"))),
        Err(response) => response,
    }
}

pub async fn batch(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    match json_body(payload) {
        Ok(body) => respond(state.service.batch(body.get("values"))),
        Err(response) => response,
    }
}

pub async fn get_only() -> Response {
    ApiErrorResponse::method_not_allowed("GET").into_response()
}

pub async fn post_only() -> Response {
    ApiErrorResponse::method_not_allowed("POST").into_response()
}

pub async fn not_found(uri: Uri) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    tracing::debug!("No route for {}", path);
    ApiErrorResponse::not_found(ConversionService::not_found(path)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_query_rejection_is_structured() {
        let uri: Uri = "/api/a2r?arabic=fourteen".parse().unwrap();
        let rejection = Query::<HashMap<String, u16>>::try_from_uri(&uri).unwrap_err();

        let response = query_rejected(&rejection);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["kind"], "invalid_query");
    }

    #[test]
    fn test_param_reads_present_and_missing_keys() {
        let uri: Uri = "/api/r2a?roman=XIV".parse().unwrap();
        let params: Params = Query::try_from_uri(&uri);

        assert_eq!(param(&params, "roman").ok().flatten(), Some("XIV"));
        assert_eq!(param(&params, "arabic").ok().flatten(), None);
    }
}
