//! The whole board: a user session plus post actions, and the screen a
//! front-end should show for their combined state.

use serde::Serialize;

use crate::config::ApiConfig;
use crate::post_actions::PostActions;
use crate::posts::PostBoard;
use crate::repository::{HttpPostRepository, HttpUserRepository, PostRepository, UserRepository};
use crate::sampler::{RandomSampler, Sampler};
use crate::service::{PostService, UserService};
use crate::session::UserSession;
use crate::types::{CreatePost, CreateUser, Post, User};
use crate::validation::{PostErrors, UserErrors};

/// What a front-end renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// No identity has been picked yet.
    Loading,
    /// The identity form, either for logging in or for editing.
    UserForm {
        edit_mode: bool,
        draft: CreateUser,
        errors: UserErrors,
    },
    Dashboard(Dashboard),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub user: User,
    /// False once the user created a post this session.
    pub can_create_post: bool,
    pub creating_post: bool,
    pub post_draft: CreatePost,
    pub post_errors: PostErrors,
    pub created_posts: Vec<Post>,
    pub connected_users: Vec<User>,
}

pub type HttpBoardApp = BoardApp<HttpUserRepository, HttpPostRepository, RandomSampler>;

#[derive(Debug)]
pub struct BoardApp<U, P, S = RandomSampler> {
    session: UserSession<U, S>,
    actions: PostActions<P, S>,
}

impl HttpBoardApp {
    pub fn from_config(config: &ApiConfig) -> Self {
        let session = UserSession::new(UserService::new(HttpUserRepository::from_config(config)));
        let board = PostBoard::new(PostService::new(HttpPostRepository::from_config(config)));
        Self::with_parts(session, PostActions::new(board))
    }
}

impl<U, P, S> BoardApp<U, P, S>
where
    U: UserRepository,
    P: PostRepository,
    S: Sampler,
{
    pub fn with_parts(session: UserSession<U, S>, actions: PostActions<P, S>) -> Self {
        Self { session, actions }
    }

    pub fn session(&self) -> &UserSession<U, S> {
        &self.session
    }

    pub fn actions(&self) -> &PostActions<P, S> {
        &self.actions
    }

    /// Picks the current identity and loads the posts.
    pub fn start(&mut self) {
        self.session.load();
        self.actions.sync_owner(self.session.selected());
        self.actions.board_mut().load();
    }

    pub fn set_user_draft(&mut self, draft: CreateUser) {
        self.session.set_draft(draft);
    }

    pub fn submit_user(&mut self) {
        self.session.submit();
        self.actions.sync_owner(self.session.selected());
    }

    /// Opens the identity form for the current user. No-op without one.
    pub fn edit_current_user(&mut self) {
        if let Some(user) = self.session.selected().cloned() {
            self.session.edit(&user);
        }
    }

    pub fn open_post_form(&mut self) {
        self.actions.set_creating(true);
    }

    pub fn set_post_draft(&mut self, draft: CreatePost) {
        self.actions.set_draft(draft);
    }

    pub fn create_post(&mut self) -> Option<Post> {
        self.actions.create(self.session.selected())
    }

    pub fn delete_post(&mut self, post_id: u64) -> bool {
        self.actions.delete(post_id)
    }

    /// Deletes the current user along with the posts they created.
    pub fn delete_current_user(&mut self) -> bool {
        match self.session.selected().map(|user| user.id) {
            Some(id) => self.actions.delete_user_cascade(&mut self.session, id),
            None => false,
        }
    }

    /// Derives the screen for the current state. Connected users are
    /// resampled on every call.
    pub fn screen(&mut self) -> Screen {
        let session = &self.session;
        let Some(user) = session.selected() else {
            return Screen::Loading;
        };
        if session.is_edit_mode() || !session.is_logged_in() {
            return Screen::UserForm {
                edit_mode: session.is_edit_mode(),
                draft: session.draft().clone(),
                errors: session.errors().clone(),
            };
        }

        let connected_users = self.actions.other_users(Some(user), session.users());
        Screen::Dashboard(Dashboard {
            user: user.clone(),
            can_create_post: !self.actions.has_created_post(Some(user)),
            creating_post: self.actions.is_creating(),
            post_draft: self.actions.draft().clone(),
            post_errors: self.actions.errors().clone(),
            created_posts: self.actions.created_posts().to_vec(),
            connected_users,
        })
    }
}
