//! # Kitchen Security
//!
//! Security utilities: password hashing and session tokens.

pub mod password;
pub mod session;

pub use password::PasswordService;
pub use session::{generate_session_token, Session};
