// Persistence gateway trait - session side of the backing object store
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::dashboard::{Dashboard, Widget};
use crate::domain::user::User;

#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Fetch a dashboard aggregate by its route id.
    async fn find_dashboard(&self, dashboard_id: &str) -> anyhow::Result<Option<Dashboard>>;

    /// Persist the dashboard aggregate (attributes, filters, layout).
    /// Widget content is persisted separately via `save_widget`.
    async fn save_dashboard(&self, dashboard: &Dashboard) -> anyhow::Result<()>;

    /// Persist one widget's content record.
    async fn save_widget(&self, widget: &Widget) -> anyhow::Result<()>;

    /// Persist the user record, including its favorites.
    async fn save_user(&self, user: &User) -> anyhow::Result<()>;
}

/// Errors surfaced when entering a session. Save and toggle failures are
/// converted to notifications at the orchestration boundary and never
/// reach the caller as errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("dashboard {0} not found")]
    DashboardNotFound(String),

    #[error(transparent)]
    Gateway(#[from] anyhow::Error),
}
