//! Test fixtures and doubles

use async_trait::async_trait;
use ct_uploader::core::payload::BatchPayload;
use ct_uploader::{Result, UploadResponse, UploadTransport, WaitStrategy};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// Export header as produced upstream
pub const HEADER: &str =
    "User Id,Device ID,Device OS,Token,Name,Email Address,Email Opt In?,Push Opt In?";

/// A CSV export written to a temporary file
pub struct CsvFixture {
    pub file: NamedTempFile,
}

impl CsvFixture {
    /// Write `rows` under the standard header
    pub fn with_rows(rows: &[&str]) -> Self {
        let mut file = NamedTempFile::new().expect("create temp csv");
        writeln!(file, "{}", HEADER).expect("write header");
        for row in rows {
            writeln!(file, "{}", row).expect("write row");
        }
        file.flush().expect("flush csv");
        Self { file }
    }

    /// `n` alternating iOS/Android rows
    pub fn generated(n: usize) -> Self {
        let rows: Vec<String> = (1..=n)
            .map(|i| {
                let os = if i % 2 == 0 { "Android OS" } else { "ios" };
                format!(
                    "user-{i},ID-{i:05},{os},token-{i},User {i},user{i}@example.com,TRUE,FALSE"
                )
            })
            .collect();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        Self::with_rows(&refs)
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

/// Transport that records payloads and answers with a fixed success body
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    pub payloads: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl RecordingTransport {
    pub fn calls(&self) -> Vec<serde_json::Value> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl UploadTransport for RecordingTransport {
    async fn upload(&self, payload: &BatchPayload) -> Result<UploadResponse> {
        let value = serde_json::to_value(payload)?;
        let processed = payload.len();
        self.payloads.lock().unwrap().push(value);
        Ok(UploadResponse::new(
            200,
            format!(
                r#"{{"status":"success","processed":{},"unprocessed":[]}}"#,
                processed
            ),
        ))
    }
}

/// Wait strategy that records consultations and never sleeps
#[derive(Debug, Clone, Default)]
pub struct RecordingWait {
    pub row_indexes: Arc<Mutex<Vec<u64>>>,
}

impl RecordingWait {
    pub fn seen(&self) -> Vec<u64> {
        self.row_indexes.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitStrategy for RecordingWait {
    async fn after_chunk(&self, row_index: u64) -> bool {
        self.row_indexes.lock().unwrap().push(row_index);
        row_index % 3 == 0
    }

    fn name(&self) -> &str {
        "recording"
    }
}
