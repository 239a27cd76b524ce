// Session configuration - route naming supplied by the embedding app
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub routes: RouteSettings,
}

/// Route-table wiring lives outside this crate, so the names the guard
/// matches against are configuration, not code.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RouteSettings {
    /// Name of the canonical dashboard route; destinations whose name
    /// starts with this are sub-routes of the session.
    pub dashboard_route: String,
    /// Route parameter carrying the dashboard id.
    pub dashboard_id_param: String,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            dashboard_route: "dashboards.dashboard".to_string(),
            dashboard_id_param: "dashboard_id".to_string(),
        }
    }
}

pub fn load_session_config() -> anyhow::Result<SessionConfig> {
    let defaults = RouteSettings::default();
    let settings = config::Config::builder()
        .set_default("routes.dashboard_route", defaults.dashboard_route)?
        .set_default("routes.dashboard_id_param", defaults.dashboard_id_param)?
        .add_source(config::File::with_name("config/session").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RouteSettings::default();
        assert_eq!(settings.dashboard_route, "dashboards.dashboard");
        assert_eq!(settings.dashboard_id_param, "dashboard_id");
    }

    #[test]
    fn test_load_session_config() {
        let config = load_session_config().unwrap();
        assert_eq!(config.routes.dashboard_route, "dashboards.dashboard");
    }
}
