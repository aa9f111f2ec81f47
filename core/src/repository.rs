//! Repositories: one HTTP request per method against a fixed resource.
//!
//! Every failure, whatever its cause, becomes a `RepositoryError` carrying the
//! operation's fixed message. The cause is logged here before it is wrapped.

use tracing::error;

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::{ApiError, Operation, RepositoryError};
use crate::transport::{Transport, UreqTransport};
use crate::types::{CreatePost, Post, User};

pub type RepositoryResult<T> = Result<T, RepositoryError>;

pub trait UserRepository {
    fn fetch_users(&self) -> RepositoryResult<Vec<User>>;
    fn update_user(&self, user: &User) -> RepositoryResult<User>;
    fn delete_user(&self, id: u64) -> RepositoryResult<()>;
}

pub trait PostRepository {
    fn fetch_posts(&self) -> RepositoryResult<Vec<Post>>;
    fn create_post(&self, post: &CreatePost) -> RepositoryResult<Post>;
    fn delete_post(&self, id: u64) -> RepositoryResult<()>;
}

fn wrap<T>(operation: Operation, result: Result<T, ApiError>) -> RepositoryResult<T> {
    result.map_err(|source| {
        error!(error = %source, "{}", operation.failure_message());
        RepositoryError::new(operation, source)
    })
}

/// `/users` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpUserRepository<T = UreqTransport> {
    client: ApiClient,
    transport: T,
}

impl HttpUserRepository<UreqTransport> {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(ApiClient::new(&config.base_url), UreqTransport::new())
    }
}

impl<T: Transport> HttpUserRepository<T> {
    pub fn new(client: ApiClient, transport: T) -> Self {
        Self { client, transport }
    }
}

impl<T: Transport> UserRepository for HttpUserRepository<T> {
    fn fetch_users(&self) -> RepositoryResult<Vec<User>> {
        let request = self.client.build_list_users();
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_list_users(response));
        wrap(Operation::FetchUsers, result)
    }

    fn update_user(&self, user: &User) -> RepositoryResult<User> {
        let result = self
            .client
            .build_update_user(user)
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_update_user(response));
        wrap(Operation::UpdateUser, result)
    }

    fn delete_user(&self, id: u64) -> RepositoryResult<()> {
        let request = self.client.build_delete_user(id);
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_delete_user(response));
        wrap(Operation::DeleteUser, result)
    }
}

/// `/posts` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPostRepository<T = UreqTransport> {
    client: ApiClient,
    transport: T,
}

impl HttpPostRepository<UreqTransport> {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(ApiClient::new(&config.base_url), UreqTransport::new())
    }
}

impl<T: Transport> HttpPostRepository<T> {
    pub fn new(client: ApiClient, transport: T) -> Self {
        Self { client, transport }
    }
}

impl<T: Transport> PostRepository for HttpPostRepository<T> {
    fn fetch_posts(&self) -> RepositoryResult<Vec<Post>> {
        let request = self.client.build_list_posts();
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_list_posts(response));
        wrap(Operation::FetchPosts, result)
    }

    fn create_post(&self, post: &CreatePost) -> RepositoryResult<Post> {
        let result = self
            .client
            .build_create_post(post)
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_create_post(response));
        wrap(Operation::CreatePost, result)
    }

    fn delete_post(&self, id: u64) -> RepositoryResult<()> {
        let request = self.client.build_delete_post(id);
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_delete_post(response));
        wrap(Operation::DeletePost, result)
    }
}
