//! Client-side validation of user and post input.
//!
//! Validation never touches the network. An empty error map means the input
//! may be submitted.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::{CreatePost, CreateUser};

pub const MIN_NAME_LEN: usize = 4;
pub const MIN_USERNAME_LEN: usize = 4;
pub const MIN_TITLE_LEN: usize = 4;
pub const MIN_BODY_LEN: usize = 10;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
        Ok(regex) => regex,
        Err(err) => panic!("Email regex is invalid: {err}"),
    });

/// Per-field messages for the user form, plus a general slot for remote failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<String>,
}

impl UserErrors {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            general: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.username.is_none() && self.email.is_none() && self.general.is_none()
    }
}

/// Per-field messages for the post form, plus a general slot for remote failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<String>,
}

impl PostErrors {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            general: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.general.is_none()
    }
}

fn shorter_than(value: &str, min: usize) -> bool {
    value.chars().count() < min
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_user(user: &CreateUser) -> UserErrors {
    let mut errors = UserErrors::default();
    if shorter_than(&user.name, MIN_NAME_LEN) {
        errors.name = Some(format!("Name must be at least {MIN_NAME_LEN} characters"));
    }
    if shorter_than(&user.username, MIN_USERNAME_LEN) {
        errors.username = Some(format!("Username must be at least {MIN_USERNAME_LEN} characters"));
    }
    if !is_valid_email(&user.email) {
        errors.email = Some("Email must be valid".to_string());
    }
    errors
}

pub fn validate_post(post: &CreatePost) -> PostErrors {
    let mut errors = PostErrors::default();
    if shorter_than(&post.title, MIN_TITLE_LEN) {
        errors.title = Some(format!("Title must be at least {MIN_TITLE_LEN} characters"));
    }
    if shorter_than(&post.body, MIN_BODY_LEN) {
        errors.body = Some(format!("Body must be at least {MIN_BODY_LEN} characters"));
    }
    errors
}
