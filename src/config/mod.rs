//! Configuration types for the client.
//!
//! - [`TlsConfig`]: TLS settings for self-hosted instances
//! - [`EnvConfig`]: Connection settings read from `GITLAB_*` variables

mod env;
mod tls;

pub use env::{
    ENV_PRIVATE_TOKEN, ENV_TEST_NAMESPACE, ENV_TEST_PROJECT, ENV_URL, EnvConfig,
};
pub use tls::TlsConfig;
