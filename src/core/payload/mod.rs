//! Upload payload construction
//!
//! Turns normalized records into the profile and token documents the upload
//! API accepts, and wraps them into `{"d": [...]}` batch bodies.

mod builder;
mod types;


pub use builder::{
    build_batch_payload, build_profile, build_profile_at, build_token, parse_opt_in,
    round_to_seconds,
};
pub use types::{
    BatchPayload, Document, DocumentType, ProfileData, ProfileDocument, TokenData, TokenDocument,
};
