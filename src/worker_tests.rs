//! Tests for the lookup worker

use std::sync::mpsc;
use std::time::Duration;

use super::*;
use crate::dictionary::LookupError;
use crate::test_utils::test_helpers::{FakeSource, client_with, hello_entry};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn start(source: FakeSource) -> (
    tokio::sync::mpsc::UnboundedSender<LookupRequest>,
    mpsc::Receiver<LookupResponse>,
) {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(client_with(source), request_rx, response_tx);
    (request_tx, response_rx)
}

#[test]
fn test_worker_answers_hover() {
    let (request_tx, response_rx) = start(FakeSource::new().with("hello", vec![hello_entry()]));

    request_tx
        .send(LookupRequest::Hover {
            word: "Hello".to_string(),
            request_id: 7,
        })
        .unwrap();

    let response = response_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(
        response,
        LookupResponse::Hover {
            request_id: 7,
            word: "Hello".to_string(),
            lines: Some(
                ["# hello", "## noun", "hey", "## verb", "hi"]
                    .map(String::from)
                    .to_vec()
            ),
        }
    );
}

#[test]
fn test_worker_reports_no_definitions() {
    let (request_tx, response_rx) = start(FakeSource::new());

    request_tx
        .send(LookupRequest::Hover {
            word: "qwxz".to_string(),
            request_id: 1,
        })
        .unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        LookupResponse::Hover { lines, .. } => assert!(lines.is_none()),
        other => panic!("Expected hover response, got {:?}", other),
    }
}

#[test]
fn test_worker_reports_failure() {
    let source = FakeSource::new().failing(
        "hello",
        LookupError::Network {
            word: "hello".to_string(),
            message: "offline".to_string(),
        },
    );
    let (request_tx, response_rx) = start(source);

    request_tx
        .send(LookupRequest::Hover {
            word: "hello".to_string(),
            request_id: 3,
        })
        .unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        LookupResponse::Failed {
            request_id,
            message,
            ..
        } => {
            assert_eq!(request_id, 3);
            assert!(message.contains("offline"));
        }
        other => panic!("Expected failure, got {:?}", other),
    }
}

#[test]
fn test_worker_answers_every_request() {
    let (request_tx, response_rx) = start(FakeSource::new().with("hello", vec![hello_entry()]));

    for request_id in 1..=3 {
        request_tx
            .send(LookupRequest::Hover {
                word: "hello".to_string(),
                request_id,
            })
            .unwrap();
    }

    let mut ids: Vec<u64> = (0..3)
        .map(|_| response_rx.recv_timeout(RECV_TIMEOUT).unwrap().request_id())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_worker_stops_when_requests_close() {
    let (request_tx, response_rx) = start(FakeSource::new());
    drop(request_tx);

    // The worker drops its response sender on exit
    assert!(matches!(
        response_rx.recv_timeout(RECV_TIMEOUT),
        Err(mpsc::RecvTimeoutError::Disconnected)
    ));
}

#[test]
fn test_request_id_accessor() {
    let failed = LookupResponse::Failed {
        request_id: 9,
        word: "w".to_string(),
        message: "m".to_string(),
    };
    assert_eq!(failed.request_id(), 9);
}
