//! The `User-Agent` sent with every request.
//!
//! GitLab writes the agent of each API call to its request logs, so a
//! distinctive value makes this client's traffic easy to pick out.

use std::sync::OnceLock;

const CLIENT_NAME: &str = "gitlab-tags-rust";

static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns `gitlab-tags-rust/<version> (rust/<msrv>; <os>/<arch>)`.
pub(crate) fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        let os = match std::env::consts::OS {
            "macos" => "darwin",
            other => other,
        };
        format!(
            "{}/{} (rust/{}; {}/{})",
            CLIENT_NAME,
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_RUST_VERSION"),
            os,
            std::env::consts::ARCH,
        )
    })
}
