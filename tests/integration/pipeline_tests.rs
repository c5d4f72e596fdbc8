//! CSV-to-upload pipeline tests

#[cfg(test)]
mod tests {
    use crate::common::{CsvFixture, RecordingTransport, RecordingWait};
    use ct_uploader::config::{InputConfig, PacingStrategy, UploaderConfig};
    use ct_uploader::{BatchUploader, CsvSource, UploaderError};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(fixture: &CsvFixture, batch_size: usize) -> UploaderConfig {
        let mut config = UploaderConfig::default();
        config.input = InputConfig {
            path: fixture.path().to_path_buf(),
            ..Default::default()
        };
        config.batch.batch_size = batch_size;
        config
    }

    #[tokio::test]
    async fn test_two_row_export_is_one_chunk_two_calls_no_pacing() {
        let fixture = CsvFixture::with_rows(&[
            "u-1,38400000-8CF0-11BD-B23E-10B96E40000D,Android OS,fcm-tok,Jane,jane@example.com,TRUE,FALSE",
            "User-2,,ios,apns-tok,Joe,,,",
        ]);
        let config = config_for(&fixture, 100);
        let transport = RecordingTransport::default();
        let wait = RecordingWait::default();

        let uploader =
            BatchUploader::new(Box::new(transport.clone()), Box::new(wait.clone()), &config);
        let summary = uploader
            .run(CsvSource::open(&config.input).unwrap())
            .await
            .unwrap();

        assert_eq!(summary.rows, 2);
        assert_eq!(summary.chunks.len(), 1);
        assert_eq!(summary.upload_calls(), 2);
        assert_eq!(summary.pacing_waits, 0);
        assert!(wait.seen().is_empty());

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);

        let profiles = calls[0]["d"].as_array().unwrap();
        assert_eq!(profiles[0]["objectId"], "__g384000008cf011bdb23e10b96e40000d");
        assert_eq!(profiles[0]["type"], "profile");
        assert_eq!(profiles[0]["profileData"]["MSG-email"], true);
        assert_eq!(profiles[0]["profileData"]["MSG-push"], false);
        assert_eq!(profiles[1]["objectId"], "-guser2");
        assert_eq!(
            profiles[1]["profileData"],
            json!({"Historical_data": "Yes", "identity": "User-2", "Name": "Joe"})
        );

        assert_eq!(
            calls[1],
            json!({"d": [
                {"type": "token", "objectId": "__g384000008cf011bdb23e10b96e40000d",
                 "tokenData": {"id": "fcm-tok", "type": "fcm"}},
                {"type": "token", "objectId": "-guser2",
                 "tokenData": {"id": "apns-tok", "type": "apns"}}
            ]})
        );
    }

    #[tokio::test]
    async fn test_250_rows_make_three_chunks() {
        let fixture = CsvFixture::generated(250);
        let config = config_for(&fixture, 100);
        let transport = RecordingTransport::default();
        let wait = RecordingWait::default();

        let uploader =
            BatchUploader::new(Box::new(transport.clone()), Box::new(wait.clone()), &config);
        let summary = uploader
            .run(CsvSource::open(&config.input).unwrap())
            .await
            .unwrap();

        assert_eq!(summary.chunk_sizes(), vec![100, 100, 50]);
        assert_eq!(wait.seen(), vec![100, 200]);

        let kinds: Vec<(String, usize)> = transport
            .calls()
            .iter()
            .map(|c| {
                let docs = c["d"].as_array().unwrap();
                (docs[0]["type"].as_str().unwrap().to_string(), docs.len())
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("profile".to_string(), 100),
                ("token".to_string(), 100),
                ("profile".to_string(), 100),
                ("token".to_string(), 100),
                ("profile".to_string(), 50),
                ("token".to_string(), 50),
            ]
        );
    }

    #[tokio::test]
    async fn test_row_without_identifiers_aborts_run() {
        let fixture = CsvFixture::with_rows(&["u-1,AA,ios,t,,,,", ",,Android OS,t,,,,"]);
        let config = config_for(&fixture, 1);
        let transport = RecordingTransport::default();

        let uploader = BatchUploader::new(
            Box::new(transport.clone()),
            Box::new(RecordingWait::default()),
            &config,
        );
        let err = uploader
            .run(CsvSource::open(&config.input).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, UploaderError::MissingIdentifier { .. }));
        // The first chunk was already sent before the bad row was reached.
        assert_eq!(transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_end_to_end_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1/upload"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"status":"success","processed":10,"unprocessed":[]}"#),
            )
            .expect(4)
            .mount(&server)
            .await;

        let fixture = CsvFixture::generated(15);
        let mut config = config_for(&fixture, 10);
        config.api.base_url = server.uri();
        config.api.account_id = "ACC".to_string();
        config.api.passcode = "PASS".to_string();
        config.batch.pacing.strategy = PacingStrategy::None;

        let uploader = BatchUploader::from_config(&config).unwrap();
        let summary = uploader
            .run(CsvSource::open(&config.input).unwrap())
            .await
            .unwrap();

        assert_eq!(summary.chunk_sizes(), vec![10, 5]);
        assert_eq!(summary.http_failures(), 0);

        let requests = server.received_requests().await.unwrap();
        let first: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(first["d"].as_array().unwrap().len(), 10);
        assert_eq!(first["d"][0]["type"], "profile");
    }

    const SUCCESS_BODY: &str = r#"{"status":"success","processed":1,"unprocessed":[]}"#;

    fn http_config(fixture: &CsvFixture, base_url: String) -> UploaderConfig {
        let mut config = config_for(fixture, 1);
        config.api.base_url = base_url;
        config.api.account_id = "ACC".to_string();
        config.api.passcode = "PASS".to_string();
        config.api.max_retries = 2;
        config.api.retry_delay_ms = 0;
        config.batch.pacing.strategy = PacingStrategy::None;
        config
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_transport_error_after_retries() {
        let fixture = CsvFixture::generated(2);
        // Nothing listens on port 1.
        let config = http_config(&fixture, "http://127.0.0.1:1".to_string());

        let uploader = BatchUploader::from_config(&config).unwrap();
        let err = uploader
            .run(CsvSource::open(&config.input).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, UploaderError::HttpClient(_)));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_timed_out_upload_is_retried_then_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1/upload"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(SUCCESS_BODY)
                    .set_delay(Duration::from_secs(3)),
            )
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/1/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SUCCESS_BODY))
            .expect(2)
            .mount(&server)
            .await;

        let fixture = CsvFixture::generated(1);
        let mut config = http_config(&fixture, server.uri());
        config.api.timeout_seconds = Some(1);

        let uploader = BatchUploader::from_config(&config).unwrap();
        let summary = uploader
            .run(CsvSource::open(&config.input).unwrap())
            .await
            .unwrap();

        assert_eq!(summary.upload_calls(), 2);
        assert_eq!(summary.http_failures(), 0);
        // The timed-out profile attempt, its retry, then the token upload.
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_transport_failure_stops_run_after_earlier_chunks() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SUCCESS_BODY))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/1/upload"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(SUCCESS_BODY)
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let fixture = CsvFixture::generated(2);
        let mut config = http_config(&fixture, server.uri());
        config.api.timeout_seconds = Some(1);
        config.api.max_retries = 1;

        let uploader = BatchUploader::from_config(&config).unwrap();
        let err = uploader
            .run(CsvSource::open(&config.input).unwrap())
            .await
            .unwrap_err();

        assert!(err.is_transport());
        // First chunk went out in full; the second chunk's profile upload was
        // attempted once and retried once.
        assert_eq!(server.received_requests().await.unwrap().len(), 4);
    }
}
