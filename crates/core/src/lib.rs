//! strava_core - Pure types and functions shared by the strava-cli crates.
//!
//! Nothing in this crate performs I/O. Requests are built here, responses are
//! formatted here, and the client crate only moves bytes around.

pub mod activity;
