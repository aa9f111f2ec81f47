//! Domain DTOs for the users and posts resources.
//!
//! # Design
//! Field names follow the remote JSON (camelCase on the wire). The mock server
//! defines its own copies; integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// Postal address nested in a [`User`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

/// Employer record nested in a [`User`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// A user as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub company: Company,
}

impl User {
    /// Returns a copy of this user with the profile fields of `profile` applied.
    pub fn with_profile(&self, profile: &CreateUser) -> User {
        User {
            name: profile.name.clone(),
            username: profile.username.clone(),
            email: profile.email.clone(),
            ..self.clone()
        }
    }

    /// The editable subset of this user.
    pub fn profile(&self) -> CreateUser {
        CreateUser {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// Form input for editing a user's identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub email: String,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// Request payload for creating a post. The server assigns the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl CreatePost {
    /// An empty draft owned by `user_id`.
    pub fn empty_for(user_id: u64) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }
}
