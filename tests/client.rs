//! Integration tests for the async client against a mock service.

use std::io;

use pdfreactor::{
    Client, Config, Configuration, ConnectionSettings, Error, StreamArg, DOWNLOAD_CHUNK_SIZE,
    NO_ERROR_ID, USER_AGENT,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::new(Config {
        service_url: Some(server.uri()),
        ..Default::default()
    })
    .expect("client creation should succeed")
}

#[derive(Default)]
struct RecordingSink {
    chunks: Vec<usize>,
    bytes: Vec<u8>,
    closed: usize,
    fail_writes: bool,
}

// goes through the blanket io::Write impl: write_chunk is one write_all,
// close is flush
impl io::Write for RecordingSink {
    fn write(&mut self, chunk: &[u8]) -> io::Result<usize> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"));
        }
        self.chunks.push(chunk.len());
        self.bytes.extend_from_slice(chunk);
        Ok(chunk.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.closed += 1;
        Ok(())
    }
}

#[tokio::test]
async fn convert_sends_stamped_config_and_parses_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/convert.json"))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", USER_AGENT))
        .and(header("x-ro-user-agent", USER_AGENT))
        .and(body_json(json!({
            "document": "<html>Hello</html>",
            "clientName": "RUST",
            "clientVersion": 8
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": "JVBERi0xLjQ=",
            "numberOfPages": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let config = Configuration::new().with("document", "<html>Hello</html>");
    let result = client.convert(&config, None).await.unwrap();

    assert_eq!(result["numberOfPages"], 1);
    // the caller's configuration is not mutated by the send
    assert!(!config.contains_key("clientName"));
}

#[tokio::test]
async fn api_key_is_sent_as_query_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/version.json"))
        .and(query_param("apiKey", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"label": "11.6.5"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(Config {
        service_url: Some(server.uri()),
        api_key: Some("secret-key".to_string()),
        ..Default::default()
    })
    .unwrap();

    let version = client.get_version(None).await.unwrap();
    assert_eq!(version["label"], "11.6.5");
}

#[tokio::test]
async fn connection_settings_add_custom_headers_and_cookies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/convert.json"))
        .and(header("x-trace", "abc"))
        .and(header("cookie", "a=1; b=2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let settings = ConnectionSettings::new()
        .with_header("X-Trace", "abc")
        .with_cookie("a", "1")
        .with_cookie("b", "2");
    client
        .convert(&Configuration::new(), Some(&settings))
        .await
        .unwrap();
}

#[tokio::test]
async fn convert_as_binary_returns_raw_bytes() {
    let server = MockServer::start().await;
    let payload = b"%PDF-1.4 fake".to_vec();

    Mock::given(method("POST"))
        .and(path("/convert.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bytes = client
        .convert_as_binary(&Configuration::new(), None)
        .await
        .unwrap();
    assert_eq!(bytes.as_ref(), payload.as_slice());
}

#[tokio::test]
async fn streamed_download_is_chunked_and_closes_the_sink() {
    let server = MockServer::start().await;
    let payload: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();

    Mock::given(method("POST"))
        .and(path("/convert.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut sink = RecordingSink::default();
    client
        .convert_as_binary_to(&Configuration::new(), &mut sink, None)
        .await
        .unwrap();

    assert_eq!(sink.bytes, payload);
    assert!(sink.chunks.iter().all(|len| *len <= DOWNLOAD_CHUNK_SIZE));
    assert_eq!(sink.closed, 1);
}

#[tokio::test]
async fn failing_sink_surfaces_sink_error_and_still_closes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/convert.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 128]))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut sink = RecordingSink {
        fail_writes: true,
        ..Default::default()
    };
    let err = client
        .convert_as_binary_to(&Configuration::new(), &mut sink, None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Sink(_)));
    assert_eq!(sink.closed, 1);
}

#[tokio::test]
async fn legacy_args_shape_streams_or_buffers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/convert.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"pdf".to_vec()))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);

    // with a sink the payload is consumed and None comes back
    let buffered = client
        .convert_as_binary_args(
            &Configuration::new(),
            vec![
                StreamArg::settings(ConnectionSettings::new()),
                StreamArg::sink(Vec::<u8>::new()),
            ],
        )
        .await
        .unwrap();
    assert!(buffered.is_none());

    // without a sink the payload comes back as bytes
    let bytes = client
        .convert_as_binary_args(&Configuration::new(), Vec::new())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bytes.as_ref(), b"pdf");
}

#[tokio::test]
async fn convert_async_returns_document_id_and_harvests_cookies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/convert/async.json"))
        .respond_with(
            ResponseTemplate::new(202)
                .insert_header("Location", "http://host/service/rest/document/abc123")
                .append_header("Set-Cookie", "JSESSIONID=node7; Path=/; HttpOnly"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut settings = ConnectionSettings::new();
    let document_id = client
        .convert_async(&Configuration::new(), Some(&mut settings))
        .await
        .unwrap();

    assert_eq!(document_id, "abc123");
    assert_eq!(settings.cookies.get("JSESSIONID"), Some("node7"));
}

#[tokio::test]
async fn convert_async_without_settings_drops_session_cookies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/convert/async.json"))
        .respond_with(
            ResponseTemplate::new(202)
                .insert_header("Location", "/service/rest/document/xyz789")
                .append_header("Set-Cookie", "JSESSIONID=node1"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let document_id = client
        .convert_async(&Configuration::new(), None)
        .await
        .unwrap();
    assert_eq!(document_id, "xyz789");
}

#[tokio::test]
async fn convert_async_without_location_is_a_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/convert/async.json"))
        .respond_with(ResponseTemplate::new(202))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .convert_async(&Configuration::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Protocol(_)));
}

#[tokio::test]
async fn async_job_lifecycle_polls_fetches_and_deletes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/progress/abc123.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "finished": false,
            "progress": 42
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/document/abc123.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": "JVBERi0xLjQ="
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/document/metadata/abc123.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "numberOfPages": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/document/abc123.json"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let progress = client.get_progress("abc123", None).await.unwrap();
    assert!(!progress.finished);
    assert_eq!(progress.extra["progress"], 42);

    let document = client.get_document("abc123", None).await.unwrap();
    assert_eq!(document["document"], "JVBERi0xLjQ=");

    let metadata = client.get_document_metadata("abc123", None).await.unwrap();
    assert_eq!(metadata["numberOfPages"], 3);

    client.delete_document("abc123", None).await.unwrap();
}

#[tokio::test]
async fn get_document_as_binary_streams_through_a_sink() {
    let server = MockServer::start().await;
    let payload = vec![7u8; 4096];

    Mock::given(method("GET"))
        .and(path("/document/abc123.bin"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let bytes = client
        .get_document_as_binary("abc123", None)
        .await
        .unwrap();
    assert_eq!(bytes.len(), payload.len());

    let mut sink = RecordingSink::default();
    client
        .get_document_as_binary_to("abc123", &mut sink, None)
        .await
        .unwrap();
    assert_eq!(sink.bytes, payload);
    assert_eq!(sink.closed, 1);
}

#[tokio::test]
async fn get_status_returns_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_status(None).await.unwrap(), "OK");
}

#[tokio::test]
async fn error_status_maps_to_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/document/missing.json"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-RO-Error-ID", "documentNotFound")
                .set_body_json(json!({"error": "no such document"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_document("missing", None).await.unwrap_err();

    match err {
        Error::Service(service) => {
            assert_eq!(service.status(), 404);
            assert_eq!(service.error_id(), "documentNotFound");
            assert_eq!(
                service.friendly_message(),
                "Document with the given ID was not found. no such document"
            );
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_without_id_header_uses_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/convert.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .convert(&Configuration::new(), None)
        .await
        .unwrap_err();

    match err {
        Error::Service(service) => {
            assert_eq!(service.error_id(), NO_ERROR_ID);
            assert_eq!(
                service.service_message(),
                "<non-JSON response body: <html>boom</html>>"
            );
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_service_is_classified_before_any_status() {
    // grab a port nothing is listening on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let url = format!("http://127.0.0.1:{port}/service/rest");
    let client = Client::new(Config {
        service_url: Some(url.clone()),
        ..Default::default()
    })
    .unwrap();

    let err = client
        .convert(&Configuration::new(), None)
        .await
        .unwrap_err();

    match err {
        Error::Unreachable(unreachable) => {
            assert_eq!(
                unreachable.url(),
                Some(format!("{url}/convert.json").as_str())
            );
            let text = unreachable.to_string();
            assert!(text.contains("Error connecting to the PDFreactor Web Service"));
            assert!(text.contains("installed and running"));
        }
        other => panic!("expected unreachable error, got {other:?}"),
    }
}

#[test]
fn document_and_progress_urls_mirror_the_service_layout() {
    let client = Client::new(Config {
        service_url: Some("http://host:9423/service/rest/".to_string()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(
        client.document_url("abc123"),
        "http://host:9423/service/rest/document/abc123"
    );
    assert_eq!(
        client.progress_url("abc123"),
        "http://host:9423/service/rest/progress/abc123"
    );
}
