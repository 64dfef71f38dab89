//! End-to-end tests for the smoke runner.
//!
//! The runner is pointed at an in-process detector, a mock server, or a raw
//! keep-alive socket, through the same reqwest adapter the binary uses.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use sadprobe_application::ApplicationError;
use sadprobe_application::ports::ClientError;
use sadprobe_application::use_cases::RunSmokeTests;
use sadprobe_detector::AppState;
use sadprobe_domain::{Anomaly, record, smoke_suite};
use sadprobe_infrastructure::{ConsoleReporter, ReqwestDetectionClient};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Shared in-memory output so tests can read what the reporter printed.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

async fn spawn_detector(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        sadprobe_detector::serve(listener, state)
            .await
            .expect("detector should serve");
    });
    format!("http://{addr}/sad/post")
}

/// Keep-alive HTTP/1.1 endpoint that answers `{"stats":{}}` to every
/// request and counts the sockets it accepts.
async fn spawn_connection_counter() -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&accepted);
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(answer_keep_alive(socket));
        }
    });
    (format!("http://{addr}/sad/post"), accepted)
}

async fn answer_keep_alive(mut socket: TcpStream) {
    const BODY: &str = r#"{"stats":{}}"#;
    let mut buffered = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let request_end = loop {
            if let Some(end) = request_len(&buffered) {
                break end;
            }
            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => return,
                Ok(n) => buffered.extend_from_slice(&chunk[..n]),
            }
        };
        buffered.drain(..request_end);

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: keep-alive\r\n\r\n{BODY}",
            BODY.len()
        );
        if socket.write_all(response.as_bytes()).await.is_err() {
            return;
        }
    }
}

/// Length of the first complete request in `buffered`, head plus body.
fn request_len(buffered: &[u8]) -> Option<usize> {
    let head_end = buffered.windows(4).position(|w| w == b"\r\n\r\n")? + 4;
    let head = String::from_utf8_lossy(&buffered[..head_end]);
    let body_len = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    (buffered.len() >= head_end + body_len).then_some(head_end + body_len)
}

#[tokio::test]
async fn test_each_request_opens_its_own_connection() {
    let (endpoint, accepted) = spawn_connection_counter().await;
    let runner = RunSmokeTests::new(
        ReqwestDetectionClient::new(&endpoint).unwrap(),
        ConsoleReporter::with_writer(SharedBuffer::default()),
    );

    let summary = runner.run(&smoke_suite()).await.unwrap();

    assert_eq!(summary.cases_sent, 4);
    assert_eq!(accepted.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_smoke_suite_against_detector_reports_nothing_while_warming_up() {
    let state = AppState::new();
    let endpoint = spawn_detector(state.clone()).await;
    let out = SharedBuffer::default();
    let runner = RunSmokeTests::new(
        ReqwestDetectionClient::new(&endpoint).unwrap(),
        ConsoleReporter::with_writer(out.clone()),
    );

    let summary = runner.run(&smoke_suite()).await.unwrap();

    assert_eq!(summary.cases_sent, 4);
    assert!(summary.anomalies.is_empty());
    assert_eq!(out.contents(), "");
    assert_eq!(state.detector.window_count().unwrap(), 1);
}

#[tokio::test]
async fn test_detector_flags_outlier_after_warmup() {
    let state = AppState::new();
    let endpoint = spawn_detector(state).await;
    let out = SharedBuffer::default();
    let runner = RunSmokeTests::new(
        ReqwestDetectionClient::new(&endpoint).unwrap(),
        ConsoleReporter::with_writer(out.clone()),
    );

    let usual = [record([("name", "Ankur")])];
    for _ in 0..8 {
        runner.send("warmup", &usual, "t1").await.unwrap();
    }
    let anomalies = runner
        .send("outlier", &[record([("name", "Rajdeep Sharma #42")])], "t1")
        .await
        .unwrap();

    assert_eq!(anomalies, vec![Anomaly::new("outlier", "name")]);
    assert_eq!(out.contents(), "Anomaly detected outlier name\n");
}

#[tokio::test]
async fn test_flagged_stats_are_printed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sad/post"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"stats": {"name": 1}})))
        .expect(4)
        .mount(&server)
        .await;

    let out = SharedBuffer::default();
    let runner = RunSmokeTests::new(
        ReqwestDetectionClient::new(&format!("{}/sad/post", server.uri())).unwrap(),
        ConsoleReporter::with_writer(out.clone()),
    );

    runner.run(&smoke_suite()).await.unwrap();

    assert_eq!(out.contents(), "Anomaly detected t1 name\n".repeat(4));
}

#[tokio::test]
async fn test_server_error_aborts_remaining_cases() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&server)
        .await;

    let runner = RunSmokeTests::new(
        ReqwestDetectionClient::new(&format!("{}/sad/post", server.uri())).unwrap(),
        ConsoleReporter::with_writer(SharedBuffer::default()),
    );

    let err = runner.run(&smoke_suite()).await.unwrap_err();

    match err {
        ApplicationError::Client { test_name, source } => {
            assert_eq!(test_name, "t1");
            assert!(matches!(
                source,
                ClientError::UnexpectedStatus { status: 500, .. }
            ));
        }
        other => panic!("expected a client error, got {other:?}"),
    }
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_malformed_body_aborts_remaining_cases() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let runner = RunSmokeTests::new(
        ReqwestDetectionClient::new(&format!("{}/sad/post", server.uri())).unwrap(),
        ConsoleReporter::with_writer(SharedBuffer::default()),
    );

    let err = runner.run(&smoke_suite()).await.unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Client {
            source: ClientError::InvalidResponse(_),
            ..
        }
    ));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
