use serde::Serialize;

use crate::config::{self, SiteConfig};

/// The record a page template consumes at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    /// Production deployment URL, empty when none is configured.
    pub url: String,
}

/// Build the page context from resolved configuration.
///
/// Invoked once per render request by the framework. Stateless, idempotent,
/// and side-effect free; cannot fail under any configuration.
pub fn load(config: &SiteConfig) -> PageContext {
    PageContext {
        url: config.production_url.clone(),
    }
}

/// Ambient-read variant: take the production URL straight from the process
/// environment, substituting the empty string when the variable is unset.
pub fn load_from_env() -> PageContext {
    PageContext {
        url: config::production_url_from_env().unwrap_or_default(),
    }
}
