//! Client core for a users-and-posts board backed by a public REST API.
//!
//! # Overview
//! A user adopts a remote "user" identity, edits or deletes it, and once
//! logged in creates and deletes posts. Everything persists through the
//! `/users` and `/posts` resources of the API.
//!
//! # Design
//! - `ApiClient` builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network; a `Transport` does the round-trip.
//! - Repositories issue one request per call and collapse every failure into
//!   a fixed message. Services wrap that once more with their own message.
//! - Controllers (`UserSession`, `PostBoard`, `PostActions`) hold state,
//!   validate input and call services. `BoardApp` derives the `Screen`.
//! - Randomness goes through `Sampler` so tests can pin the picks.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod post_actions;
pub mod posts;
pub mod repository;
pub mod sampler;
pub mod service;
pub mod session;
pub mod transport;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{BoardApp, Dashboard, HttpBoardApp, Screen};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Operation, RepositoryError, ServiceError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use post_actions::PostActions;
pub use posts::PostBoard;
pub use repository::{HttpPostRepository, HttpUserRepository, PostRepository, UserRepository};
pub use sampler::{FirstSampler, RandomSampler, Sampler};
pub use service::{PostService, UserService};
pub use session::UserSession;
pub use transport::{Transport, UreqTransport};
pub use types::{Address, Company, CreatePost, CreateUser, Post, User};
pub use validation::{validate_post, validate_user, PostErrors, UserErrors};
