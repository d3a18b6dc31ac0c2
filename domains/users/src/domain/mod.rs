//! Domain layer for the Users domain

pub mod entities;
pub mod gravatar;
pub mod password;
pub mod validation;
