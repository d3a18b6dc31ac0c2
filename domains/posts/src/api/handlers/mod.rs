//! HTTP handlers for the Posts domain

pub mod comments;
pub mod likes;
pub mod posts;
