// ABOUTME: GitHub REST client for the portfolio repository listing
// ABOUTME: Lists the authenticated account's repositories and fetches raw READMEs

pub mod client;
pub mod error;

pub use client::{filter_by_marker, GitHubClient, GitHubConfig, GITHUB_API_VERSION};
pub use error::{GitHubError, Result};
