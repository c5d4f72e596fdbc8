//! Configuration loading tests

#[cfg(test)]
mod tests {
    use ct_uploader::config::{Config, PacingStrategy};
    use ct_uploader::UploaderError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
api:
  base_url: "https://eu1.api.clevertap.com"
  account_id: "TEST-779-684-5Z6Z"
  passcode: "secret"
  max_retries: 2
input:
  path: "exports/users.csv"
batch:
  batch_size: 250
  pacing:
    strategy: none
logging:
  level: debug
  json: true
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        config.validate().unwrap();

        assert_eq!(config.api().endpoint(), "https://eu1.api.clevertap.com/1/upload");
        assert_eq!(config.api().max_retries, 2);
        assert_eq!(config.batch().batch_size, 250);
        assert_eq!(config.batch().pacing.strategy, PacingStrategy::None);
        assert_eq!(config.input().delimiter, ',');
        assert!(config.logging().json);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = Config::from_file("/nonexistent/uploader.yaml")
            .await
            .unwrap_err();
        assert!(matches!(err, UploaderError::Config(_)));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[tokio::test]
    async fn test_file_without_credentials_fails_validation() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "batch:\n  batch_size: 10\n").unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert!(config.validate().is_err());
    }
}
