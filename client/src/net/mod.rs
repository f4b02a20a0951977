//! Identity-service plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` defines the capability the UI depends on, `firebase` and
//! `popup` implement it against the hosted identity service, and `config`
//! carries the public settings from the server to the browser.

pub mod config;
pub mod firebase;
pub mod identity;
pub mod popup;
