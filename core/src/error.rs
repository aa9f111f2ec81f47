//! Error types, one per layer.
//!
//! # Design
//! `ApiError` describes what went wrong on the wire. Repositories and services
//! wrap it into `RepositoryError` / `ServiceError`, whose `Display` is a fixed
//! message per operation. The underlying cause stays reachable through
//! `source()` for logging.

use std::fmt;

use thiserror::Error;

/// Errors produced while building, executing or parsing an HTTP exchange.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// The remote operations the board performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchUsers,
    UpdateUser,
    DeleteUser,
    FetchPosts,
    CreatePost,
    DeletePost,
}

impl Operation {
    /// Fixed, user-facing failure message for this operation.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::FetchUsers => "Failed to fetch users",
            Operation::UpdateUser => "Failed to update user",
            Operation::DeleteUser => "Failed to delete user",
            Operation::FetchPosts => "Failed to fetch posts",
            Operation::CreatePost => "Failed to create post",
            Operation::DeletePost => "Failed to delete post",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Failure of a repository call. Displays only the operation's fixed message.
#[derive(Debug, Error)]
#[error("{operation}")]
pub struct RepositoryError {
    pub operation: Operation,
    #[source]
    pub source: ApiError,
}

impl RepositoryError {
    pub fn new(operation: Operation, source: ApiError) -> Self {
        Self { operation, source }
    }
}

/// Failure of a service call. Displays `Service error: <fixed message>`.
#[derive(Debug, Error)]
#[error("Service error: {operation}")]
pub struct ServiceError {
    pub operation: Operation,
    #[source]
    pub source: RepositoryError,
}

impl ServiceError {
    pub fn new(operation: Operation, source: RepositoryError) -> Self {
        Self { operation, source }
    }
}
