//! The ephemeral record built for each log call.

use serde::Serialize;
use time::UtcDateTime;

use crate::{Caller, Level};

/// A single log record. Constructed, rendered and discarded per call; never
/// retained.
#[derive(Debug)]
pub(crate) struct Record<'a> {
    pub(crate) time: UtcDateTime,
    pub(crate) level: Level,
    pub(crate) request_id: &'a str,
    pub(crate) message: String,
    pub(crate) caller: &'a Caller,
    pub(crate) app_name: &'a str,
    pub(crate) version: &'a str,
}

/// Serialized form of a [`Record`] for production (JSON) output.
///
/// Field names are the wire keys; empty string fields are omitted.
#[derive(Debug, Serialize)]
pub(crate) struct JsonRecord<'a> {
    pub(crate) time: String,
    pub(crate) level: Level,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub(crate) request_id: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub(crate) msg: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub(crate) file: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub(crate) func: &'a str,
    pub(crate) line: u32,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub(crate) app_name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub(crate) version: &'a str,
}
