use anyhow::Result;
use kcrest::KeycloakClient;
use testcontainers::{ContainerAsync, core::ContainerPort, runners::AsyncRunner};

use super::keycloak::{AdminCredentials, HTTP_PORT, KeycloakImage};

/// A running Keycloak container and a client pointed at it.
pub struct LiveKeycloak {
    _container: ContainerAsync<KeycloakImage>,
    pub client: KeycloakClient,
    pub admin: AdminCredentials,
}

impl LiveKeycloak {
    pub async fn start() -> Result<LiveKeycloak> {
        let image = KeycloakImage::default().with_admin("admin", "admin");
        let admin = image.admin().clone();

        let container = image.start().await?;
        let port = container.get_host_port_ipv4(ContainerPort::Tcp(HTTP_PORT)).await?;
        let client = KeycloakClient::new(&format!("http://localhost:{}", port))?;

        Ok(LiveKeycloak {
            _container: container,
            client,
            admin,
        })
    }

    pub async fn admin_token(&self) -> Result<String> {
        let jwt = self
            .client
            .login_admin(&self.admin.username, &self.admin.password, "master")
            .await?;

        Ok(jwt.access_token)
    }
}
