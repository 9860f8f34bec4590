//! Shared application state

use crate::config::SiteConfig;
use chrono::Datelike;
use std::sync::Arc;
use vitreo_catalog::{DashboardParams, ReferenceCatalog};

/// State shared by every handler. The catalog is immutable, so no locking.
#[derive(Clone)]
pub struct AppState {
    /// Reference catalog
    pub catalog: Arc<dyn ReferenceCatalog>,

    /// Site content settings
    pub site: Arc<SiteConfig>,

    /// Hub version
    pub version: String,

    /// Start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new app state
    pub fn new(catalog: Arc<dyn ReferenceCatalog>, site: SiteConfig) -> Self {
        Self {
            catalog,
            site: Arc::new(site),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Dashboard settings for today
    pub fn dashboard_params(&self) -> DashboardParams {
        DashboardParams {
            founding_year: self.site.founding_year,
            current_year: chrono::Utc::now().year(),
            recent_since_year: self.site.recent_since_year,
            recent_limit: self.site.recent_limit,
        }
    }

    /// Get uptime as a human-readable string
    pub fn uptime(&self) -> String {
        let duration = chrono::Utc::now() - self.started_at;
        let secs = duration.num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else if secs < 86400 {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitreo_catalog::InMemoryCatalog;

    #[test]
    fn test_dashboard_params_follow_site_config() {
        let site = SiteConfig {
            recent_since_year: 2020,
            recent_limit: 2,
            ..SiteConfig::default()
        };
        let state = AppState::new(Arc::new(InMemoryCatalog::builtin()), site);
        let params = state.dashboard_params();
        assert_eq!(params.recent_since_year, 2020);
        assert_eq!(params.recent_limit, 2);
        assert_eq!(params.founding_year, 1970);
        assert!(params.current_year >= 2024);
    }

    #[test]
    fn test_uptime_starts_in_seconds() {
        let state = AppState::new(Arc::new(InMemoryCatalog::builtin()), SiteConfig::default());
        assert!(state.uptime().ends_with('s'));
    }
}
