use crate::error::ApiError;
use configuration::ApiSettings;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Maximum number of raw body characters carried into a malformed-response
/// error for diagnostics.
const SNIPPET_LEN: usize = 200;

/// Which of the two timeout tiers a call runs under. Training, experiment
/// runs, backtests and optimization take minutes server-side; everything
/// else answers in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallClass {
    Standard,
    LongRunning,
}

/// The single HTTP request path every resource client delegates to.
///
/// One call: build the URL, send JSON, read the body back as text, sanitize
/// non-finite number tokens, parse, classify. No retries, no caching, no
/// request coalescing.
pub struct Transport {
    client: reqwest::Client,
    root: String,
    timeout: Duration,
    long_timeout: Duration,
}

impl Transport {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {e}")))?;

        let root = format!(
            "{}{}",
            settings.base_url.trim_end_matches('/'),
            settings.base_path.trim_end_matches('/')
        );

        Ok(Self {
            client,
            root,
            timeout: Duration::from_secs(settings.timeout_secs),
            long_timeout: Duration::from_secs(settings.long_timeout_secs),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.client.get(self.url(path)), self.timeout)
            .await
    }

    /// GET with query parameters serialized onto the path. An all-empty
    /// parameter set produces no query string at all.
    pub async fn get_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize,
        T: DeserializeOwned,
    {
        let qs = serde_qs::to_string(query)
            .map_err(|e| ApiError::Network(format!("Failed to encode query string: {e}")))?;
        let url = if qs.is_empty() {
            self.url(path)
        } else {
            format!("{}?{}", self.url(path), qs)
        };
        self.send(self.client.get(url), self.timeout).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, class: CallClass) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(
            self.client.post(self.url(path)).body(encode_body(body)?),
            self.budget(class),
        )
        .await
    }

    /// POST with no request body (action endpoints).
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        class: CallClass,
    ) -> Result<T, ApiError> {
        self.send(self.client.post(self.url(path)), self.budget(class))
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(
            self.client.put(self.url(path)).body(encode_body(body)?),
            self.timeout,
        )
        .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.client.delete(self.url(path)), self.timeout)
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.root, path)
    }

    fn budget(&self, class: CallClass) -> Duration {
        match class {
            CallClass::Standard => self.timeout,
            CallClass::LongRunning => self.long_timeout,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        budget: Duration,
    ) -> Result<T, ApiError> {
        let request = request
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .timeout(budget);

        let response = request
            .send()
            .await
            .map_err(|e| wrap_transport_failure(e, budget))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| wrap_transport_failure(e, budget))?;
        debug!(status = %status, bytes = raw.len(), "Response received.");

        let value = decode_body(status, &raw)?;
        serde_json::from_value(value).map_err(|e| ApiError::MalformedResponse {
            snippet: format!("Unexpected response shape: {e}"),
        })
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(body)
        .map_err(|e| ApiError::Network(format!("Failed to encode request body: {e}")))
}

fn wrap_transport_failure(err: reqwest::Error, budget: Duration) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout {
            secs: budget.as_secs(),
        }
    } else {
        ApiError::Network(err.to_string())
    }
}

/// Classifies a complete response body.
///
/// The body is read as text first and never trusted to match its
/// content-type header. Ordering matters: a parse failure is
/// `MalformedResponse`; a parsed body with an `error` field is an
/// application failure regardless of status; a non-2xx status without a
/// server message synthesizes one from the status line.
pub(crate) fn decode_body(status: StatusCode, raw: &str) -> Result<Value, ApiError> {
    let sanitized = sanitize_non_finite(raw);
    let parsed: Value = match serde_json::from_str(&sanitized) {
        Ok(value) => value,
        Err(_) => {
            return Err(ApiError::MalformedResponse {
                snippet: snippet(raw),
            });
        }
    };

    match parsed.get("error") {
        Some(Value::Null) | None => {}
        Some(Value::String(message)) => {
            return Err(ApiError::Application {
                message: message.clone(),
            });
        }
        Some(other) => {
            return Err(ApiError::Application {
                message: other.to_string(),
            });
        }
    }

    if !status.is_success() {
        return Err(ApiError::Application {
            message: format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            ),
        });
    }

    Ok(parsed)
}

/// Replaces bare `NaN` / `Infinity` / `-Infinity` tokens with `null`.
///
/// The analytics backend serializes frames straight out of its numeric
/// stack, and non-finite values leak into otherwise valid JSON. Tokens
/// inside string literals are left untouched.
pub(crate) fn sanitize_non_finite(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_string = false;
    let mut i = 0;

    while i < raw.len() {
        let rest = &raw[i..];
        let Some(c) = rest.chars().next() else { break };

        if in_string {
            if c == '\\' {
                out.push('\\');
                i += 1;
                if let Some(escaped) = raw[i..].chars().next() {
                    out.push(escaped);
                    i += escaped.len_utf8();
                }
                continue;
            }
            if c == '"' {
                in_string = false;
            }
            out.push(c);
            i += c.len_utf8();
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            i += 1;
        } else if rest.starts_with("NaN") {
            out.push_str("null");
            i += 3;
        } else if rest.starts_with("-Infinity") {
            out.push_str("null");
            i += 9;
        } else if rest.starts_with("Infinity") {
            out.push_str("null");
            i += 8;
        } else {
            out.push(c);
            i += c.len_utf8();
        }
    }

    out
}

fn snippet(raw: &str) -> String {
    raw.chars().take(SNIPPET_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_body_passes_through_unchanged() {
        let body = r#"{"portfolioValue": 1245678, "totalReturn": 12.4}"#;
        let value = decode_body(StatusCode::OK, body).unwrap();
        assert_eq!(
            value,
            json!({ "portfolioValue": 1245678, "totalReturn": 12.4 })
        );
    }

    #[test]
    fn non_json_body_is_malformed_never_success() {
        let err = decode_body(StatusCode::OK, "<html>proxy error</html>").unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse { .. }));
    }

    #[test]
    fn malformed_snippet_is_capped_at_200_chars() {
        let long = "x".repeat(5000);
        let err = decode_body(StatusCode::OK, &long).unwrap_err();
        match err {
            ApiError::MalformedResponse { snippet } => assert_eq!(snippet.len(), 200),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn error_field_beats_a_success_status() {
        let err = decode_body(StatusCode::OK, r#"{"error": "name is required"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Application {
                message: "name is required".into()
            }
        );
    }

    #[test]
    fn server_message_is_preferred_on_failure_status() {
        let err =
            decode_body(StatusCode::BAD_REQUEST, r#"{"error": "name is required"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Application {
                message: "name is required".into()
            }
        );
    }

    #[test]
    fn failure_status_without_message_synthesizes_one() {
        let err = decode_body(StatusCode::NOT_FOUND, r#"{"detail": "nope"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Application {
                message: "HTTP 404 Not Found".into()
            }
        );
    }

    #[test]
    fn null_error_field_does_not_signal_failure() {
        let value = decode_body(StatusCode::OK, r#"{"error": null, "ok": true}"#).unwrap();
        assert_eq!(value["ok"], json!(true));
    }

    #[test]
    fn bare_nan_becomes_null() {
        let value = decode_body(StatusCode::OK, r#"{"value": NaN}"#).unwrap();
        assert_eq!(value, json!({ "value": null }));
    }

    #[test]
    fn infinities_become_null() {
        let value = decode_body(StatusCode::OK, r#"{"hi": Infinity, "lo": -Infinity}"#).unwrap();
        assert_eq!(value, json!({ "hi": null, "lo": null }));
    }

    #[test]
    fn nan_inside_string_literals_is_untouched_by_the_sanitizer() {
        let raw = r#"{"note": "NaN appears in column Infinity", "v": NaN}"#;
        assert_eq!(
            sanitize_non_finite(raw),
            r#"{"note": "NaN appears in column Infinity", "v": null}"#
        );
    }

    #[test]
    fn escaped_quotes_do_not_confuse_the_sanitizer() {
        let raw = r#"{"note": "a \" quote", "v": NaN}"#;
        assert_eq!(
            sanitize_non_finite(raw),
            r#"{"note": "a \" quote", "v": null}"#
        );
    }
}
