//! HTTP transport integration tests
//!
//! Runs the reqwest transport against a local wiremock server.

#[cfg(test)]
mod tests {
    use ct_uploader::config::ApiConfig;
    use ct_uploader::core::identifier::TokenType;
    use ct_uploader::core::payload::{BatchPayload, DocumentType, TokenData, TokenDocument};
    use ct_uploader::core::transport::{ACCOUNT_ID_HEADER, PASSCODE_HEADER};
    use ct_uploader::{HttpTransport, UploadTransport, UploaderError};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_config(base_url: String) -> ApiConfig {
        ApiConfig {
            base_url,
            account_id: "TEST-779-684-5Z6Z".to_string(),
            passcode: "passcode".to_string(),
            ..Default::default()
        }
    }

    fn token_payload() -> BatchPayload {
        BatchPayload {
            d: vec![
                TokenDocument {
                    doc_type: DocumentType::Token,
                    object_id: "__gabc".to_string(),
                    token_data: TokenData {
                        id: "tok1".to_string(),
                        token_type: TokenType::Fcm,
                    },
                }
                .into(),
            ],
        }
    }

    #[tokio::test]
    async fn test_posts_payload_with_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1/upload"))
            .and(header(ACCOUNT_ID_HEADER, "TEST-779-684-5Z6Z"))
            .and(header(PASSCODE_HEADER, "passcode"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "d": [{
                    "type": "token",
                    "objectId": "__gabc",
                    "tokenData": {"id": "tok1", "type": "fcm"}
                }]
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"status":"success","processed":1,"unprocessed":[]}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&api_config(server.uri())).unwrap();
        let response = transport.upload(&token_payload()).await.unwrap();

        assert_eq!(response.status, 200);
        assert!(response.parse().unwrap().is_success());
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string(r#"{"status":"fail","error":"Invalid Passcode","code":401}"#),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&api_config(server.uri())).unwrap();
        let response = transport.upload(&token_payload()).await.unwrap();

        assert_eq!(response.status, 401);
        assert!(!response.is_http_success());
        assert_eq!(
            response.parse().unwrap().error.as_deref(),
            Some("Invalid Passcode")
        );
    }

    #[tokio::test]
    async fn test_custom_path_and_trailing_slash() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = api_config(format!("{}/", server.uri()));
        config.path = "v2/upload".to_string();
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.endpoint(), format!("{}/v2/upload", server.uri()));

        let response = transport.upload(&BatchPayload::default()).await.unwrap();
        assert_eq!(response.body, "{}");
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Nothing listens on port 1.
        let mut config = api_config("http://127.0.0.1:1".to_string());
        config.timeout_seconds = Some(2);
        let transport = HttpTransport::new(&config).unwrap();
        let err = transport.upload(&token_payload()).await.unwrap_err();

        assert!(matches!(err, UploaderError::HttpClient(_)));
        assert!(err.is_transport());
    }
}
