//! Runner configuration, read from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use nexsales_auth::AuthConfig;
use nexsales_store::MockCatalogConfig;
use serde::Deserialize;

/// Top-level settings file. Every key is optional.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the persisted session and settings.
    pub data_dir: PathBuf,
    /// `EnvFilter` directive added on top of `RUST_LOG`.
    pub log_filter: String,
    /// Emit logs as JSON lines.
    pub log_json: bool,
    pub auth: AuthSection,
    pub catalog: CatalogSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("nexsales-data"),
            log_filter: "nexsales=info".into(),
            log_json: false,
            auth: AuthSection::default(),
            catalog: CatalogSection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuthSection {
    pub demo_email: String,
    pub demo_password: String,
    pub login_latency_ms: u64,
}

impl Default for AuthSection {
    fn default() -> Self {
        let defaults = AuthConfig::default();
        Self {
            demo_email: defaults.demo_email,
            demo_password: defaults.demo_password,
            login_latency_ms: defaults.login_latency.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogSection {
    pub product_count: usize,
    pub products_latency_ms: u64,
    pub sales_latency_ms: u64,
}

impl Default for CatalogSection {
    fn default() -> Self {
        let defaults = MockCatalogConfig::default();
        Self {
            product_count: defaults.product_count,
            products_latency_ms: defaults.products_latency.as_millis() as u64,
            sales_latency_ms: defaults.sales_latency.as_millis() as u64,
        }
    }
}

impl AppConfig {
    /// Parse `path`, or use defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            demo_email: self.auth.demo_email.clone(),
            demo_password: self.auth.demo_password.clone(),
            login_latency: Duration::from_millis(self.auth.login_latency_ms),
            ..AuthConfig::default()
        }
    }

    pub fn catalog_config(&self) -> MockCatalogConfig {
        MockCatalogConfig {
            product_count: self.catalog.product_count,
            products_latency: Duration::from_millis(self.catalog.products_latency_ms),
            sales_latency: Duration::from_millis(self.catalog.sales_latency_ms),
            ..MockCatalogConfig::default()
        }
    }
}
