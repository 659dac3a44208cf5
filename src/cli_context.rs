use std::sync::Arc;

use crate::client::TeamsClient;
use crate::config::{get_base_url, load_config, normalize_base_url, save_config, Config};
use crate::error::TeamResult;

/// Central context for CLI operations, managing configuration and the HTTP client
pub struct CliContext {
    config: Config,
    base_url: String,
    client: Option<Arc<TeamsClient>>,
}

impl CliContext {
    /// Load context from saved configuration and the environment
    pub fn load() -> TeamResult<Self> {
        let config = load_config()?;
        let base_url = get_base_url(&config);
        Ok(Self {
            config,
            base_url,
            client: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get or create the client for the configured service
    pub fn client(&mut self) -> TeamResult<Arc<TeamsClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(TeamsClient::new(&self.base_url)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Persist a new service URL
    pub fn set_base_url(&mut self, url: &str) -> TeamResult<()> {
        let url = normalize_base_url(url);
        self.config.base_url = Some(url.clone());
        save_config(&self.config)?;
        self.base_url = url;
        self.client = None;
        Ok(())
    }

    pub fn save(&self) -> TeamResult<()> {
        save_config(&self.config)
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}

/// Builder for contexts that override saved settings for a single run
pub struct CliContextBuilder {
    base_url: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self { base_url: None }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(normalize_base_url(base_url));
        self
    }

    pub fn build(self) -> TeamResult<CliContext> {
        let mut context = CliContext::load()?;
        if let Some(base_url) = self.base_url {
            context.base_url = base_url;
            context.client = None;
        }
        Ok(context)
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
