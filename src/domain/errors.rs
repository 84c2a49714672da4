use std::net::SocketAddr;
use thiserror::Error;

/// Errors that fail a whole fetch from the shop API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to shop API failed: {reason}")]
    Transport { reason: String },

    #[error("shop API returned status {status}")]
    HttpStatus { status: u16 },

    #[error("failed to decode shop API response: {reason}")]
    Decode { reason: String },

    #[error("no data")]
    NoData,

    #[error("no valid items ({rejected} rejected)")]
    NoValidItems { rejected: usize },
}

/// Why a single upstream record was skipped
#[derive(Debug, Error)]
pub enum ItemValidationError {
    #[error("malformed item: {reason}")]
    Malformed { reason: String },

    #[error("item {id} has an empty title")]
    EmptyTitle { id: i64 },

    #[error("unrecognized shop type: {code}")]
    UnknownShopType { code: String },

    #[error("duplicate item id {id}")]
    DuplicateId { id: i64 },
}

/// Errors that terminate the exporter process
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("failed to bind metrics listener on {addr}")]
    ListenerBind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("initial fetch failed")]
    InitialFetch(#[source] FetchError),

    #[error("failed to listen for the interrupt signal")]
    Signal(#[source] std::io::Error),
}
