//! Domain layer for the Posts domain

pub mod entities;
pub mod validation;
