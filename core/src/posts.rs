//! The post board: every post known to the client, with loading and error state.

use tracing::{info, warn};

use crate::error::Operation;
use crate::repository::PostRepository;
use crate::service::PostService;
use crate::types::{CreatePost, Post};
use crate::validation::{validate_post, PostErrors};

#[derive(Debug)]
pub struct PostBoard<R> {
    service: PostService<R>,
    loading: bool,
    posts: Vec<Post>,
    errors: PostErrors,
}

impl<R: PostRepository> PostBoard<R> {
    /// A board that has not fetched yet; `is_loading` is true until `load` ends.
    pub fn new(service: PostService<R>) -> Self {
        Self {
            service,
            loading: true,
            posts: Vec::new(),
            errors: PostErrors::default(),
        }
    }

    pub fn service(&self) -> &PostService<R> {
        &self.service
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn errors(&self) -> &PostErrors {
        &self.errors
    }

    pub fn load(&mut self) {
        self.loading = true;
        match self.service.get_posts() {
            Ok(posts) => {
                info!(count = posts.len(), "posts loaded");
                self.posts = posts;
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch posts");
                self.errors = PostErrors::general(Operation::FetchPosts.failure_message());
            }
        }
        self.loading = false;
    }

    /// Validates and creates a post, appending it to the board.
    ///
    /// Returns the stored post, or `None` when validation or the remote call
    /// failed (see `errors`).
    pub fn create(&mut self, post: &CreatePost) -> Option<Post> {
        let validation = validate_post(post);
        if !validation.is_empty() {
            self.errors = validation;
            return None;
        }

        match self.service.create_post(post) {
            Ok(created) => {
                info!(post_id = created.id, user_id = created.user_id, "post created");
                self.posts.push(created.clone());
                self.errors = PostErrors::default();
                Some(created)
            }
            Err(err) => {
                warn!(error = %err, "Failed to create post");
                self.errors = PostErrors::general(Operation::CreatePost.failure_message());
                None
            }
        }
    }

    /// Deletes a post remotely and drops it from the board. Returns whether
    /// the remote deletion succeeded.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.service.delete_post(id) {
            Ok(()) => {
                info!(post_id = id, "post deleted");
                self.posts.retain(|p| p.id != id);
                true
            }
            Err(err) => {
                warn!(error = %err, post_id = id, "Failed to delete post");
                self.errors = PostErrors::general(Operation::DeletePost.failure_message());
                false
            }
        }
    }
}
