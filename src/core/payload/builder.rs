//! Document builders
//!
//! All builders are pure and total over any [`NormalizedRecord`].

use super::types::*;
use crate::core::record::NormalizedRecord;

const OPT_IN_TRUE: &str = "TRUE";

/// Build a profile document stamped with the current time
pub fn build_profile(record: &NormalizedRecord) -> ProfileDocument {
    build_profile_at(record, round_to_seconds(chrono::Utc::now().timestamp_millis()))
}

/// Epoch milliseconds to the nearest epoch second
pub fn round_to_seconds(millis: i64) -> i64 {
    (millis + 500).div_euclid(1000)
}

/// Build a profile document stamped with `ts` (epoch seconds)
pub fn build_profile_at(record: &NormalizedRecord, ts: i64) -> ProfileDocument {
    let source = &record.record;

    ProfileDocument {
        object_id: record.ctid.clone(),
        ts,
        doc_type: DocumentType::Profile,
        profile_data: ProfileData {
            historical_data: HISTORICAL_DATA_YES.to_string(),
            identity: non_empty(&source.user_id),
            name: non_empty(&source.name),
            email: non_empty(&source.email),
            msg_email: parse_opt_in(&source.email_opt_in),
            msg_push: parse_opt_in(&source.push_opt_in),
        },
    }
}

/// Build a push token document
pub fn build_token(record: &NormalizedRecord) -> TokenDocument {
    TokenDocument {
        doc_type: DocumentType::Token,
        object_id: record.ctid.clone(),
        token_data: TokenData {
            id: record.record.token.clone(),
            token_type: record.token_type,
        },
    }
}

/// Apply `builder` to every record in order and wrap the documents under `d`
pub fn build_batch_payload<D, F>(records: &[NormalizedRecord], builder: F) -> BatchPayload
where
    D: Into<Document>,
    F: Fn(&NormalizedRecord) -> D,
{
    BatchPayload {
        d: records.iter().map(|r| builder(r).into()).collect(),
    }
}

/// Opt-in flag parsing: empty means absent, `"TRUE"` is true, and anything
/// else, including unrecognised values, is false.
pub fn parse_opt_in(value: &str) -> Option<bool> {
    if value.is_empty() {
        None
    } else {
        Some(value == OPT_IN_TRUE)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
