//! Form payloads - the urlencoded bodies the HTML pages submit.

use serde::{Deserialize, Serialize};

/// Body of the post create and edit forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

/// Body of the registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of the login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}
