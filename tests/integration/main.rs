//! Tag scenarios against a live GitLab instance.
//!
//! # Running Tests
//!
//! ```bash
//! export GITLAB_URL=https://gitlab.example.com
//! export GITLAB_PRIVATE_TOKEN=glpat-...
//! export GITLAB_TEST_NAMESPACE=my-group
//! export GITLAB_TEST_PROJECT=test-project
//!
//! # The scenarios share one project and fixed tag names, so run them
//! # single-threaded
//! cargo test --features integration-tests --test integration -- --test-threads=1
//! ```
//!
//! # Environment Variables
//!
//! - `GITLAB_URL`: Instance base URL
//! - `GITLAB_PRIVATE_TOKEN`: Token with `api` scope and Maintainer access
//! - `GITLAB_TEST_NAMESPACE` / `GITLAB_TEST_PROJECT`: The project to tag;
//!   its `master` branch must exist
//!
//! Tests print a notice and pass when the environment is not configured.

#[path = "../support/mod.rs"]
mod support;

mod common;
