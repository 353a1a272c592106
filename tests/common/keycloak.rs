use std::borrow::Cow;

use testcontainers::{
    Image,
    core::{ContainerPort, WaitFor},
};

pub const HTTP_PORT: u16 = 8080;

const DEV_MODE_BANNER: &str =
    "Running the server in development mode. DO NOT use this configuration in production.";

/// Bootstrap admin of the `master` realm.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// `quay.io/keycloak/keycloak` started with `start-dev`.
#[derive(Debug, Clone)]
pub struct KeycloakImage {
    tag: String,
    admin: AdminCredentials,
    features: Vec<String>,
    log_level: Option<String>,
}

impl KeycloakImage {
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_owned();
        self
    }

    pub fn with_admin(mut self, username: &str, password: &str) -> Self {
        self.admin = AdminCredentials {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        self
    }

    /// Preview features passed as `--features`, e.g. `token-exchange`.
    pub fn with_feature(mut self, feature: &str) -> Self {
        self.features.push(feature.to_owned());
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = Some(level.to_owned());
        self
    }

    pub fn admin(&self) -> &AdminCredentials {
        &self.admin
    }
}

impl Default for KeycloakImage {
    fn default() -> Self {
        KeycloakImage {
            tag: "26.0.7".to_owned(),
            admin: AdminCredentials {
                username: "admin".to_owned(),
                password: "admin".to_owned(),
            },
            features: Vec::new(),
            log_level: None,
        }
    }
}

impl Image for KeycloakImage {
    fn name(&self) -> &str {
        "quay.io/keycloak/keycloak"
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn ready_conditions(&self) -> Vec<WaitFor> {
        vec![WaitFor::message_on_stdout(DEV_MODE_BANNER)]
    }

    fn env_vars(
        &self,
    ) -> impl IntoIterator<Item = (impl Into<Cow<'_, str>>, impl Into<Cow<'_, str>>)> {
        [
            ("KC_BOOTSTRAP_ADMIN_USERNAME", self.admin.username.as_str()),
            ("KC_BOOTSTRAP_ADMIN_PASSWORD", self.admin.password.as_str()),
        ]
    }

    fn expose_ports(&self) -> &[ContainerPort] {
        &[ContainerPort::Tcp(HTTP_PORT)]
    }

    fn cmd(&self) -> impl IntoIterator<Item = impl Into<Cow<'_, str>>>
    where
        Self: Sized,
    {
        let mut cmd = vec!["start-dev".to_owned()];

        if !self.features.is_empty() {
            cmd.push(format!("--features={}", self.features.join(",")));
        }

        if let Some(level) = &self.log_level {
            cmd.push(format!("--log-level={}", level));
        }

        cmd
    }
}
