//! End-to-end exercises of the transport against a minimal in-process HTTP
//! stub. The stub speaks just enough HTTP/1.1 for a single request/response
//! exchange; no mock-server dependency needed.

use api_client::{ApiClient, ApiError};
use configuration::ApiSettings;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

fn settings_for(base_url: &str, base_path: &str, timeout_secs: u64) -> ApiSettings {
    ApiSettings {
        base_url: base_url.to_string(),
        base_path: base_path.to_string(),
        timeout_secs,
        long_timeout_secs: timeout_secs,
    }
}

/// Serves exactly one canned response, reporting the request line back.
async fn spawn_stub(
    status_line: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let request = read_request(&mut socket).await;
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}"), rx)
}

/// Reads one full HTTP request (headers plus any Content-Length body).
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
        let text = String::from_utf8_lossy(&data);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}

#[tokio::test]
async fn overview_success_returns_parsed_payload() {
    let (base, _rx) = spawn_stub("200 OK", r#"{"portfolioValue": 1245678, "totalReturn": 12.4}"#).await;
    let api = ApiClient::new(&settings_for(&base, "", 5)).unwrap();

    let overview = api.dashboard.overview().await.unwrap();
    assert_eq!(overview.portfolio_value, 1_245_678.0);
    assert_eq!(overview.total_return, 12.4);
}

#[tokio::test]
async fn base_path_prefixes_every_endpoint() {
    let (base, rx) = spawn_stub("200 OK", r#"{"portfolioValue": 1, "totalReturn": 0}"#).await;
    let api = ApiClient::new(&settings_for(&base, "/api", 5)).unwrap();

    api.dashboard.overview().await.unwrap();
    let request_line = rx.await.unwrap();
    assert!(
        request_line.starts_with("GET /api/dashboard/overview"),
        "unexpected request line: {request_line}"
    );
}

#[tokio::test]
async fn query_parameters_are_encoded_onto_the_path() {
    let (base, rx) = spawn_stub("200 OK", "[]").await;
    let api = ApiClient::new(&settings_for(&base, "", 5)).unwrap();

    api.dashboard.recent_signals(Some(5)).await.unwrap();
    let request_line = rx.await.unwrap();
    assert!(
        request_line.starts_with("GET /dashboard/signals?limit=5"),
        "unexpected request line: {request_line}"
    );
}

#[tokio::test]
async fn date_range_serializes_into_the_query_string() {
    let (base, rx) = spawn_stub(
        "200 OK",
        r#"[{"date": "2024-06-28", "strategy": 112450.0, "benchmark": 104210.0}]"#,
    )
    .await;
    let api = ApiClient::new(&settings_for(&base, "", 5)).unwrap();

    let range = core_types::DateRange::new("2024-01-01".parse().ok(), "2024-06-30".parse().ok());
    let curve = api.dashboard.equity_curve(&range).await.unwrap();
    assert_eq!(curve.len(), 1);
    assert_eq!(curve[0].benchmark, Some(104_210.0));

    let request_line = rx.await.unwrap();
    assert!(
        request_line
            .starts_with("GET /dashboard/equity-curve?startDate=2024-01-01&endDate=2024-06-30"),
        "unexpected request line: {request_line}"
    );
}

#[tokio::test]
async fn server_error_field_is_an_application_error() {
    // Scenario: POST /models/train with a rejected body.
    let (base, _rx) = spawn_stub("400 Bad Request", r#"{"error": "name is required"}"#).await;
    let api = ApiClient::new(&settings_for(&base, "", 5)).unwrap();

    let request = core_types::TrainModelRequest {
        name: String::new(),
        factors: vec!["momentum_20d".into()],
        tickers: vec!["AAPL".into()],
        target: "fwd_return_5d".into(),
        params: json!({}),
        walk_forward_params: None,
    };
    let err = api.model.train(&request).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Application {
            message: "name is required".into()
        }
    );
}

#[tokio::test]
async fn non_json_body_is_malformed_response() {
    let (base, _rx) = spawn_stub("200 OK", "<html>gateway</html>").await;
    let api = ApiClient::new(&settings_for(&base, "", 5)).unwrap();

    let err = api.data.sources().await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse { .. }));
}

#[tokio::test]
async fn bare_nan_in_body_parses_as_null() {
    let (base, _rx) = spawn_stub("200 OK", r#"{"value": NaN}"#).await;
    let api = ApiClient::new(&settings_for(&base, "", 5)).unwrap();

    let value = api.ticker.data("TSLA").await.unwrap();
    assert_eq!(value, json!({ "value": null }));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Bind then immediately drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ApiClient::new(&settings_for(&format!("http://{addr}"), "", 5)).unwrap();
    let err = api.dashboard.overview().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn silent_server_trips_the_call_budget() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        // Accept and hold the connection without ever answering.
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(std::time::Duration::from_secs(10)).await;
            drop(socket);
        }
    });

    let api = ApiClient::new(&settings_for(&format!("http://{addr}"), "", 1)).unwrap();
    let err = api.dashboard.overview().await.unwrap_err();
    assert_eq!(err, ApiError::Timeout { secs: 1 });
}
