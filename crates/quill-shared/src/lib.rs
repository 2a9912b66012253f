//! # Quill Shared
//!
//! Form payload types shared between the server handlers and their tests.

pub mod dto;
