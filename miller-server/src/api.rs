//! HTTP API for the notation parser
//!
//! A single endpoint, `POST /api/parse`, takes a JSON body with the raw
//! notation string and returns its decomposition. Parse failures map to
//! 400 responses; the parser cannot fault on well-formed string input, so
//! no failure ever maps to a server error.

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use miller_core::{parse, Config, Notation, ParseError};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

/// Request body for `POST /api/parse`
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Raw notation string, e.g. `(100)` or `[111]`
    pub input: String,
}

/// Response body, tagged by notation kind
///
/// The `intercept` array is only present for planes.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParseResponse {
    Plane {
        indices: Vec<i32>,
        intercept: Vec<f64>,
    },
    Direction {
        indices: Vec<i32>,
    },
}

impl From<Notation> for ParseResponse {
    fn from(notation: Notation) -> Self {
        match notation {
            Notation::Plane {
                indices,
                intercepts,
            } => ParseResponse::Plane {
                indices,
                intercept: intercepts,
            },
            Notation::Direction { indices } => ParseResponse::Direction { indices },
        }
    }
}

/// Parse failure surfaced to the HTTP client
///
/// Every parse failure is the caller's fault, so the status is always
/// 400 and the body is the error's message.
#[derive(Debug)]
pub struct ApiError(ParseError);

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.0.to_string()).into_response()
    }
}

/// Build the application router with CORS for the configured origin
///
/// The CORS layer allows POST and OPTIONS from the single configured
/// origin and answers preflight requests itself. An origin that is not a
/// valid header value is a startup error.
pub fn router(config: &Config) -> anyhow::Result<Router> {
    let origin: HeaderValue = config.server.cors_origin.parse()?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Router::new()
        .route("/api/parse", post(parse_notation))
        .layer(cors))
}

/// Handler for `POST /api/parse`
async fn parse_notation(Json(req): Json<ParseRequest>) -> Result<Json<ParseResponse>, ApiError> {
    let notation = parse(&req.input)?;

    tracing::debug!(
        kind = notation.kind(),
        input = %req.input,
        "parse request handled"
    );

    Ok(Json(notation.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(input: &str) -> Json<ParseRequest> {
        Json(ParseRequest {
            input: input.to_string(),
        })
    }

    #[tokio::test]
    async fn test_parse_plane_response() {
        let Json(response) = parse_notation(request("(100)")).await.unwrap();
        match response {
            ParseResponse::Plane { indices, intercept } => {
                assert_eq!(indices, vec![1, 0, 0]);
                assert_eq!(intercept, vec![1.0, 0.5, 0.5]);
            }
            other => panic!("expected plane, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_parse_direction_response() {
        let Json(response) = parse_notation(request("[111]")).await.unwrap();
        match response {
            ParseResponse::Direction { indices } => {
                assert_eq!(indices, vec![1, 1, 1]);
            }
            other => panic!("expected direction, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_format_maps_to_bad_request() {
        let err = parse_notation(request("100")).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_no_indices_maps_to_bad_request() {
        let err = parse_notation(request("()")).await.unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_plane_json_shape() {
        let response = ParseResponse::Plane {
            indices: vec![1, 0, 0],
            intercept: vec![1.0, 0.5, 0.5],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "plane",
                "indices": [1, 0, 0],
                "intercept": [1.0, 0.5, 0.5],
            })
        );
    }

    #[test]
    fn test_direction_json_omits_intercept() {
        let response = ParseResponse::Direction {
            indices: vec![1, 1, 1],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "type": "direction", "indices": [1, 1, 1] }));
        assert!(value.get("intercept").is_none());
    }

    #[test]
    fn test_router_builds_with_default_config() {
        assert!(router(&Config::default()).is_ok());
    }

    #[test]
    fn test_router_rejects_invalid_origin() {
        let mut config = Config::default();
        config.server.cors_origin = "not\na\nheader".to_string();
        assert!(router(&config).is_err());
    }
}
