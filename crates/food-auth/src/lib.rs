//! Session handling for FoodDelivery.
//!
//! The demo has no real authentication: any non-empty email logs in and the
//! password is ignored. This crate keeps that trust model and models the
//! session as an explicit `Anonymous | Authenticated` state.

mod error;
mod identity;
mod session;

pub use error::AuthError;
pub use identity::{Identity, LoginForm};
pub use session::{Session, SessionId, SessionState};
