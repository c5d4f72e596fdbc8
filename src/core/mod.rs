//! Core upload pipeline
//!
//! CSV rows flow through [`source`] into [`record`] types, get a ctid from
//! [`identifier`], become documents in [`payload`] and leave through
//! [`transport`] under the control of [`uploader`].

pub mod identifier;
pub mod payload;
pub mod record;
pub mod source;
pub mod transport;
pub mod uploader;
