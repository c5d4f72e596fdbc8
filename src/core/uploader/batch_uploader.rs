//! Chunked upload loop

use super::pacing::{WaitStrategy, wait_strategy_from_config};
use super::types::{ChunkReport, RetryPolicy, RunSummary};
use crate::config::{ColumnConfig, UploaderConfig};
use crate::core::payload::{
    BatchPayload, DocumentType, build_batch_payload, build_profile, build_token,
};
use crate::core::record::{NormalizedRecord, RawRecord, SourceRecord};
use crate::core::transport::{HttpTransport, UploadResponse, UploadTransport};
use crate::utils::error::Result;
use std::time::Duration;
use tracing::{Level, debug, info, warn};

/// Groups rows into chunks and uploads each chunk as a profile batch
/// followed by a token batch.
pub struct BatchUploader {
    transport: Box<dyn UploadTransport>,
    wait: Box<dyn WaitStrategy>,
    batch_size: usize,
    columns: ColumnConfig,
    retry: RetryPolicy,
}

impl BatchUploader {
    /// Create an uploader over the given transport and wait strategy
    pub fn new(
        transport: Box<dyn UploadTransport>,
        wait: Box<dyn WaitStrategy>,
        config: &UploaderConfig,
    ) -> Self {
        Self {
            transport,
            wait,
            batch_size: config.batch.batch_size.max(1),
            columns: config.input.columns.clone(),
            retry: RetryPolicy {
                max_retries: config.api.max_retries,
                delay: Duration::from_millis(config.api.retry_delay_ms),
            },
        }
    }

    /// Create an uploader that posts to the configured API
    pub fn from_config(config: &UploaderConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.api)?;
        let wait = wait_strategy_from_config(&config.batch.pacing)?;
        info!(
            "Uploading to {} in chunks of {} (pacing: {})",
            transport.endpoint(),
            config.batch.batch_size,
            wait.name()
        );
        Ok(Self::new(Box::new(transport), wait, config))
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Consume every row, flushing a chunk each time `batch_size` rows have
    /// accumulated and once more for any remainder at end of input.
    ///
    /// The first error stops the run; chunks already flushed stay uploaded.
    pub async fn run<I>(&self, rows: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = Result<RawRecord>>,
    {
        let mut summary = RunSummary::default();
        let mut chunk: Vec<RawRecord> = Vec::with_capacity(self.batch_size);

        for (offset, row) in rows.into_iter().enumerate() {
            // The header occupies row 0.
            let row_index = offset as u64 + 1;
            chunk.push(row?);
            summary.rows += 1;

            if chunk.len() >= self.batch_size {
                let report = self.process_chunk(summary.chunks.len(), &chunk).await?;
                summary.chunks.push(report);
                chunk.clear();

                if self.wait.after_chunk(row_index).await {
                    summary.pacing_waits += 1;
                }
            }
        }

        if !chunk.is_empty() {
            debug!("Flushing final chunk of {} records", chunk.len());
            let report = self.process_chunk(summary.chunks.len(), &chunk).await?;
            summary.chunks.push(report);
        }

        info!(
            "Run complete: {} rows, {} chunks, {} upload calls, {} pacing waits",
            summary.rows,
            summary.chunks.len(),
            summary.upload_calls(),
            summary.pacing_waits
        );
        Ok(summary)
    }

    /// Normalize one chunk and upload its profile and token batches
    pub async fn process_chunk(&self, index: usize, rows: &[RawRecord]) -> Result<ChunkReport> {
        info!("Processing chunk {} with {} records", index, rows.len());

        let records = self.normalize(rows)?;

        let profiles = build_batch_payload(&records, build_profile);
        let profile = self.upload(DocumentType::Profile, &profiles).await?;

        let tokens = build_batch_payload(&records, build_token);
        let token = self.upload(DocumentType::Token, &tokens).await?;

        Ok(ChunkReport {
            index,
            size: records.len(),
            profile,
            token,
        })
    }

    fn normalize(&self, rows: &[RawRecord]) -> Result<Vec<NormalizedRecord>> {
        rows.iter()
            .map(|raw| SourceRecord::from_raw(raw, &self.columns)?.normalize())
            .collect()
    }

    async fn upload(&self, kind: DocumentType, payload: &BatchPayload) -> Result<UploadResponse> {
        if tracing::enabled!(Level::DEBUG) {
            debug!("{:?} payload: {}", kind, serde_json::to_string(payload)?);
        }

        let mut attempt = 0;
        let response = loop {
            match self.transport.upload(payload).await {
                Ok(response) => break response,
                Err(e) if e.is_transport() && attempt < self.retry.max_retries => {
                    attempt += 1;
                    warn!(
                        "{:?} upload failed (attempt {}/{}): {}",
                        kind,
                        attempt,
                        self.retry.max_retries + 1,
                        e
                    );
                    tokio::time::sleep(self.retry.delay).await;
                }
                Err(e) => return Err(e),
            }
        };

        info!("{:?} upload returned status {}", kind, response.status);
        println!("{}", response.body);
        match response.parse() {
            Ok(parsed) if !parsed.is_success() => warn!(
                "{:?} upload reported status '{}' with {} unprocessed documents",
                kind,
                parsed.status,
                parsed.unprocessed.len()
            ),
            Ok(_) => {}
            Err(e) => debug!("{:?} upload response is not structured JSON: {}", kind, e),
        }

        Ok(response)
    }
}
