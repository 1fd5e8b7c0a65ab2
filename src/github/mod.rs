//! Authenticated read-only access to the GitHub REST v3 API.
//!
//! Every request failure (404, other statuses, transport errors, bad
//! payloads) collapses to an absent value with a logged reason. Callers
//! treat a failed call as a verification failure, never as a crash.

mod client;
mod commits;
mod content;

pub use client::GithubClient;
