//! Application services: one repository call each, failures re-wrapped with
//! the service's own message. No retry.

use crate::error::{Operation, ServiceError};
use crate::repository::{PostRepository, RepositoryResult, UserRepository};
use crate::types::{CreatePost, Post, User};

pub type ServiceResult<T> = Result<T, ServiceError>;

fn wrap<T>(operation: Operation, result: RepositoryResult<T>) -> ServiceResult<T> {
    result.map_err(|source| ServiceError::new(operation, source))
}

#[derive(Debug, Clone)]
pub struct UserService<R> {
    repository: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn get_users(&self) -> ServiceResult<Vec<User>> {
        wrap(Operation::FetchUsers, self.repository.fetch_users())
    }

    pub fn update_user(&self, user: &User) -> ServiceResult<User> {
        wrap(Operation::UpdateUser, self.repository.update_user(user))
    }

    pub fn delete_user(&self, id: u64) -> ServiceResult<()> {
        wrap(Operation::DeleteUser, self.repository.delete_user(id))
    }
}

#[derive(Debug, Clone)]
pub struct PostService<R> {
    repository: R,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn get_posts(&self) -> ServiceResult<Vec<Post>> {
        wrap(Operation::FetchPosts, self.repository.fetch_posts())
    }

    pub fn create_post(&self, post: &CreatePost) -> ServiceResult<Post> {
        wrap(Operation::CreatePost, self.repository.create_post(post))
    }

    pub fn delete_post(&self, id: u64) -> ServiceResult<()> {
        wrap(Operation::DeletePost, self.repository.delete_post(id))
    }
}
