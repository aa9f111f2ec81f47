//! The user session: who the current identity is and the form that edits it.
//!
//! There is no real authentication. `load` fetches every user and adopts one
//! at random as the current identity; submitting a valid profile updates that
//! user remotely and counts as logging in.

use tracing::{info, warn};

use crate::error::Operation;
use crate::repository::UserRepository;
use crate::sampler::{RandomSampler, Sampler};
use crate::service::UserService;
use crate::types::{CreateUser, User};
use crate::validation::{validate_user, UserErrors};

/// Once a deletion leaves this many users or fewer, the list is refetched.
pub const REFETCH_THRESHOLD: usize = 2;

#[derive(Debug)]
pub struct UserSession<R, S = RandomSampler> {
    service: UserService<R>,
    sampler: S,
    draft: CreateUser,
    selected: Option<User>,
    logged_in: bool,
    edit_mode: bool,
    errors: UserErrors,
    users: Vec<User>,
}

impl<R: UserRepository> UserSession<R, RandomSampler> {
    pub fn new(service: UserService<R>) -> Self {
        Self::with_sampler(service, RandomSampler::new())
    }
}

impl<R: UserRepository, S: Sampler> UserSession<R, S> {
    pub fn with_sampler(service: UserService<R>, sampler: S) -> Self {
        Self {
            service,
            sampler,
            draft: CreateUser::default(),
            selected: None,
            logged_in: false,
            edit_mode: false,
            errors: UserErrors::default(),
            users: Vec::new(),
        }
    }

    pub fn service(&self) -> &UserService<R> {
        &self.service
    }

    pub fn draft(&self) -> &CreateUser {
        &self.draft
    }

    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn errors(&self) -> &UserErrors {
        &self.errors
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn set_draft(&mut self, draft: CreateUser) {
        self.draft = draft;
    }

    /// Fetches all users and adopts a random one as the current identity.
    pub fn load(&mut self) {
        match self.service.get_users() {
            Ok(users) => {
                self.users = users;
                self.select_random();
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch users");
                self.errors = UserErrors::general(Operation::FetchUsers.failure_message());
            }
        }
    }

    /// Validates the draft and, if valid, writes it onto the selected user.
    ///
    /// Validation failures replace the error map and skip the network.
    pub fn submit(&mut self) {
        let validation = validate_user(&self.draft);
        if !validation.is_empty() {
            self.errors = validation;
            return;
        }
        let Some(selected) = self.selected.as_ref() else {
            warn!("submit without a selected user");
            return;
        };

        match self.service.update_user(&selected.with_profile(&self.draft)) {
            Ok(updated) => {
                info!(user_id = updated.id, username = %updated.username, "logged in");
                self.selected = Some(updated);
                self.logged_in = true;
                self.edit_mode = false;
                self.errors = UserErrors::default();
            }
            Err(err) => {
                warn!(error = %err, "Failed to update user");
                self.errors = UserErrors::general(Operation::UpdateUser.failure_message());
            }
        }
    }

    /// Enters edit mode for `user`, pre-filling the draft. The session stays
    /// logged in.
    pub fn edit(&mut self, user: &User) {
        self.draft = user.profile();
        self.selected = Some(user.clone());
        self.edit_mode = true;
    }

    /// Deletes a user remotely and picks a new current identity.
    ///
    /// Returns whether the remote deletion succeeded. On failure nothing but
    /// the general error changes.
    pub fn delete_user(&mut self, id: u64) -> bool {
        if let Err(err) = self.service.delete_user(id) {
            warn!(error = %err, user_id = id, "Failed to delete user");
            self.errors = UserErrors::general(Operation::DeleteUser.failure_message());
            return false;
        }
        info!(user_id = id, "user deleted");

        self.reset();
        self.users.retain(|u| u.id != id);
        self.select_random();
        // A failed refetch keeps the trimmed list and the new pick.
        if self.users.len() <= REFETCH_THRESHOLD {
            self.load();
        }
        true
    }

    fn select_random(&mut self) {
        self.selected = self.sampler.choose(&self.users).cloned();
        if let Some(user) = &self.selected {
            info!(user_id = user.id, "current user selected");
        }
    }

    fn reset(&mut self) {
        self.logged_in = false;
        self.errors = UserErrors::default();
        self.draft = CreateUser::default();
        self.edit_mode = false;
    }
}
