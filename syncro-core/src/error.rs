// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the syncro library.
//!
//! The bridges never produce errors of their own; a [`SyncroError`] flowing
//! through a stream always originates from the source (or from user code
//! feeding a subject) and is relayed unmodified.

/// Root error type carried by [`StreamItem::Error`](crate::StreamItem).
#[derive(Debug, thiserror::Error)]
pub enum SyncroError {
    /// Stream processing encountered an error.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code, wrapped for propagation through a stream.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SyncroError {
    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }
}

// Errors are buffered and re-delivered to late subscribers, so they must be
// cloneable. Boxed user errors cannot be cloned; they degrade to a
// StreamProcessingError carrying their display output.
impl Clone for SyncroError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
        }
    }
}

/// Specialized Result type for syncro operations.
pub type Result<T> = std::result::Result<T, SyncroError>;
