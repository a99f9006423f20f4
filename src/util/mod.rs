//! Small shared helpers.

pub mod jwt;
pub mod uri;
