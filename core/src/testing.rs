//! In-memory repositories for controller and service tests.
//!
//! Clones share state, so a test can keep a handle after moving a fake into a
//! service and inspect what was called.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ApiError, Operation, RepositoryError};
use crate::repository::{PostRepository, RepositoryResult, UserRepository};
use crate::types::{CreatePost, Post, User};

pub fn sample_users(count: u64) -> Vec<User> {
    (1..=count)
        .map(|id| User {
            id,
            name: format!("User Number {id}"),
            username: format!("user{id:02}"),
            email: format!("user{id}@example.com"),
            ..User::default()
        })
        .collect()
}

pub fn sample_posts(owners: &[u64]) -> Vec<Post> {
    owners
        .iter()
        .enumerate()
        .map(|(i, &user_id)| Post {
            id: i as u64 + 1,
            user_id,
            title: format!("Post {}", i + 1),
            body: "Seeded post body".to_string(),
        })
        .collect()
}

fn failure(operation: Operation) -> RepositoryError {
    RepositoryError::new(
        operation,
        ApiError::HttpError {
            status: 500,
            body: "fake failure".to_string(),
        },
    )
}

#[derive(Debug)]
struct FakeState<T> {
    items: Vec<T>,
    failing: Vec<Operation>,
    calls: Vec<String>,
}

impl<T> Default for FakeState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            failing: Vec::new(),
            calls: Vec::new(),
        }
    }
}

impl<T> FakeState<T> {
    fn check(&mut self, operation: Operation, call: String) -> RepositoryResult<()> {
        self.calls.push(call);
        if self.failing.contains(&operation) {
            return Err(failure(operation));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeUsers {
    state: Rc<RefCell<FakeState<User>>>,
}

impl FakeUsers {
    pub fn with(users: Vec<User>) -> Self {
        let fake = Self::default();
        fake.state.borrow_mut().items = users;
        fake
    }

    pub fn fail_on(&self, operation: Operation) {
        self.state.borrow_mut().failing.push(operation);
    }

    pub fn fail_all(&self) {
        for operation in [Operation::FetchUsers, Operation::UpdateUser, Operation::DeleteUser] {
            self.fail_on(operation);
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    pub fn stored(&self) -> Vec<User> {
        self.state.borrow().items.clone()
    }
}

impl UserRepository for FakeUsers {
    fn fetch_users(&self) -> RepositoryResult<Vec<User>> {
        let mut state = self.state.borrow_mut();
        state.check(Operation::FetchUsers, "fetch_users".to_string())?;
        Ok(state.items.clone())
    }

    fn update_user(&self, user: &User) -> RepositoryResult<User> {
        let mut state = self.state.borrow_mut();
        state.check(Operation::UpdateUser, format!("update_user:{}", user.id))?;
        let slot = state
            .items
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| RepositoryError::new(Operation::UpdateUser, ApiError::NotFound))?;
        *slot = user.clone();
        Ok(user.clone())
    }

    fn delete_user(&self, id: u64) -> RepositoryResult<()> {
        let mut state = self.state.borrow_mut();
        state.check(Operation::DeleteUser, format!("delete_user:{id}"))?;
        state.items.retain(|u| u.id != id);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakePosts {
    state: Rc<RefCell<FakeState<Post>>>,
}

impl FakePosts {
    pub fn with(posts: Vec<Post>) -> Self {
        let fake = Self::default();
        fake.state.borrow_mut().items = posts;
        fake
    }

    pub fn fail_on(&self, operation: Operation) {
        self.state.borrow_mut().failing.push(operation);
    }

    pub fn fail_all(&self) {
        for operation in [Operation::FetchPosts, Operation::CreatePost, Operation::DeletePost] {
            self.fail_on(operation);
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }
}

impl PostRepository for FakePosts {
    fn fetch_posts(&self) -> RepositoryResult<Vec<Post>> {
        let mut state = self.state.borrow_mut();
        state.check(Operation::FetchPosts, "fetch_posts".to_string())?;
        Ok(state.items.clone())
    }

    fn create_post(&self, post: &CreatePost) -> RepositoryResult<Post> {
        let mut state = self.state.borrow_mut();
        state.check(Operation::CreatePost, format!("create_post:{}", post.user_id))?;
        let id = state.items.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let created = Post {
            id,
            user_id: post.user_id,
            title: post.title.clone(),
            body: post.body.clone(),
        };
        state.items.push(created.clone());
        Ok(created)
    }

    fn delete_post(&self, id: u64) -> RepositoryResult<()> {
        let mut state = self.state.borrow_mut();
        state.check(Operation::DeletePost, format!("delete_post:{id}"))?;
        state.items.retain(|p| p.id != id);
        Ok(())
    }
}
