//! Environment-based configuration.

use crate::Error;

/// Base URL of the GitLab instance, e.g. `https://gitlab.example.com`.
pub const ENV_URL: &str = "GITLAB_URL";

/// Personal, project or group access token sent as `PRIVATE-TOKEN`.
pub const ENV_PRIVATE_TOKEN: &str = "GITLAB_PRIVATE_TOKEN";

/// Namespace (user or group path) of the project used by the test suites.
pub const ENV_TEST_NAMESPACE: &str = "GITLAB_TEST_NAMESPACE";

/// Name of the project used by the test suites.
pub const ENV_TEST_PROJECT: &str = "GITLAB_TEST_PROJECT";

/// Connection settings read from the process environment.
///
/// | Variable                | Required | Purpose                        |
/// |-------------------------|----------|--------------------------------|
/// | `GITLAB_URL`            | yes      | Instance base URL              |
/// | `GITLAB_PRIVATE_TOKEN`  | no       | `PRIVATE-TOKEN` header value   |
/// | `GITLAB_TEST_NAMESPACE` | no       | Test project namespace         |
/// | `GITLAB_TEST_PROJECT`   | no       | Test project name              |
///
/// Empty values are treated as unset.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Instance base URL.
    pub url: String,
    /// Access token, if any.
    pub private_token: Option<String>,
    /// Test project namespace, if any.
    pub test_namespace: Option<String>,
    /// Test project name, if any.
    pub test_project: Option<String>,
}

impl EnvConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `GITLAB_URL` is not set.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = get(ENV_URL)
            .ok_or_else(|| Error::configuration(format!("{} is not set", ENV_URL)))?;

        Ok(Self {
            url,
            private_token: get(ENV_PRIVATE_TOKEN),
            test_namespace: get(ENV_TEST_NAMESPACE),
            test_project: get(ENV_TEST_PROJECT),
        })
    }

    /// Returns `namespace/project` if both test settings are present.
    pub fn test_project_path(&self) -> Option<String> {
        match (&self.test_namespace, &self.test_project) {
            (Some(namespace), Some(project)) => Some(format!("{}/{}", namespace, project)),
            _ => None,
        }
    }
}

impl std::fmt::Debug for EnvConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvConfig")
            .field("url", &self.url)
            .field("private_token", &self.private_token.as_ref().map(|_| "[REDACTED]"))
            .field("test_namespace", &self.test_namespace)
            .field("test_project", &self.test_project)
            .finish()
    }
}
