//! Blocking client tests against a mock service.

#![cfg(feature = "blocking")]

use pdfreactor::{
    BlockingClient, BlockingConfig, Configuration, ConnectionSettings, Error, DOWNLOAD_CHUNK_SIZE,
    USER_AGENT,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BlockingClient {
    BlockingClient::new(BlockingConfig {
        service_url: Some(server.uri()),
        ..Default::default()
    })
    .expect("client creation should succeed")
}

#[test]
fn blocking_convert_round_trip() {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime should start");
    let server = rt.block_on(async { MockServer::start().await });

    rt.block_on(async {
        Mock::given(method("POST"))
            .and(path("/convert.json"))
            .and(header("user-agent", USER_AGENT))
            .and(header("x-ro-user-agent", USER_AGENT))
            .and(body_json(json!({
                "document": "<html/>",
                "clientName": "RUST",
                "clientVersion": 8
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "numberOfPages": 2
            })))
            .expect(1)
            .mount(&server)
            .await;
    });

    let client = client_for(&server);
    let config = Configuration::new().with("document", "<html/>");
    let result = client.convert(&config, None).unwrap();
    assert_eq!(result["numberOfPages"], 2);
}

#[test]
fn blocking_error_body_is_read_lazily_over_the_wire() {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime should start");
    let server = rt.block_on(async { MockServer::start().await });

    rt.block_on(async {
        Mock::given(method("POST"))
            .and(path("/convert.json"))
            .respond_with(
                ResponseTemplate::new(422)
                    .insert_header("X-RO-Error-ID", "conversionFailure")
                    .set_body_json(json!({"error": "layout failed"})),
            )
            .mount(&server)
            .await;
    });

    let client = client_for(&server);
    let err = client.convert(&Configuration::new(), None).unwrap_err();

    match err {
        Error::Service(service) => {
            assert_eq!(service.status(), 422);
            assert_eq!(service.error_id(), "conversionFailure");
            // first access pulls the body, later accesses hit the cache
            assert_eq!(service.service_message(), "layout failed");
            assert_eq!(service.body(), r#"{"error":"layout failed"}"#);
            assert_eq!(service.friendly_message(), "layout failed");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[test]
fn blocking_convert_async_harvests_session_cookies() {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime should start");
    let server = rt.block_on(async { MockServer::start().await });

    rt.block_on(async {
        Mock::given(method("POST"))
            .and(path("/convert/async.json"))
            .respond_with(
                ResponseTemplate::new(202)
                    .insert_header("Location", "http://host/service/rest/document/abc123")
                    .append_header("Set-Cookie", "JSESSIONID=node3; Path=/"),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/progress/abc123.json"))
            .and(header("cookie", "JSESSIONID=node3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "finished": true
            })))
            .expect(1)
            .mount(&server)
            .await;
    });

    let client = client_for(&server);
    let mut settings = ConnectionSettings::new();
    let document_id = client
        .convert_async(&Configuration::new(), Some(&mut settings))
        .unwrap();
    assert_eq!(document_id, "abc123");

    let progress = client.get_progress(&document_id, Some(&settings)).unwrap();
    assert!(progress.finished);
}

#[test]
fn blocking_streamed_download_is_chunked() {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime should start");
    let server = rt.block_on(async { MockServer::start().await });
    let payload: Vec<u8> = (0..6000u32).map(|i| (i % 251) as u8).collect();

    rt.block_on({
        let payload = payload.clone();
        let server = &server;
        async move {
            Mock::given(method("GET"))
                .and(path("/document/abc123.bin"))
                .respond_with(ResponseTemplate::new(200).set_body_bytes(payload))
                .expect(1)
                .mount(server)
                .await;
        }
    });

    struct RecordingSink {
        chunks: Vec<usize>,
        bytes: Vec<u8>,
        closed: usize,
    }

    // goes through the blanket io::Write impl
    impl std::io::Write for RecordingSink {
        fn write(&mut self, chunk: &[u8]) -> std::io::Result<usize> {
            self.chunks.push(chunk.len());
            self.bytes.extend_from_slice(chunk);
            Ok(chunk.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.closed += 1;
            Ok(())
        }
    }

    let client = client_for(&server);
    let mut sink = RecordingSink {
        chunks: Vec::new(),
        bytes: Vec::new(),
        closed: 0,
    };
    client
        .get_document_as_binary_to("abc123", &mut sink, None)
        .unwrap();

    assert_eq!(sink.bytes, payload);
    assert!(sink.chunks.iter().all(|len| *len <= DOWNLOAD_CHUNK_SIZE));
    assert_eq!(sink.closed, 1);
}

#[test]
fn blocking_delete_document_sends_delete() {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime should start");
    let server = rt.block_on(async { MockServer::start().await });

    rt.block_on(async {
        Mock::given(method("DELETE"))
            .and(path("/document/abc123.json"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    });

    let client = client_for(&server);
    client.delete_document("abc123", None).unwrap();
}
