//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is app-wide and provided through context; `sign_in` is owned by
//! the sign-in page and dropped with it.

pub mod auth;
pub mod sign_in;
