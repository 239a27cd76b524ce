// Dashboard edit session - layout reconciliation, save and revert
use std::collections::HashMap;
use std::sync::Arc;

use futures::future;
use serde::Deserialize;

use crate::application::persistence::{PersistenceGateway, SessionError};
use crate::application::transition::RouteTarget;
use crate::domain::dashboard::Dashboard;
use crate::domain::user::User;
use crate::infrastructure::config::RouteSettings;
use crate::infrastructure::notifier::{Notification, NotificationTimeout, Notifier, Severity};

const SAVE_FAILED_MESSAGE: &str = "An error occurred while trying to save your dashboard.";

/// One entry of a layout update event, as emitted by the grid UI.
/// `x` maps to column and `y` to row.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutUpdate {
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl LayoutUpdate {
    /// Numeric coercion of the event id. Ids that do not parse are
    /// treated like ids of departed widgets.
    fn widget_id(&self) -> Option<u64> {
        self.id.trim().parse().ok()
    }
}

/// The editing session for one dashboard aggregate.
///
/// Holds the aggregate and the current user, mutates both in place, and
/// talks to the store and the notification sink through injected
/// collaborators. All mutation is `&mut self`; one session per dashboard
/// per client.
pub struct DashboardEditSession {
    dashboard: Dashboard,
    user: User,
    gateway: Arc<dyn PersistenceGateway>,
    notifier: Arc<dyn Notifier>,
    routes: RouteSettings,
    query_cache: Option<HashMap<String, String>>,
}

impl DashboardEditSession {
    pub fn new(
        dashboard: Dashboard,
        user: User,
        gateway: Arc<dyn PersistenceGateway>,
        notifier: Arc<dyn Notifier>,
        routes: RouteSettings,
    ) -> Self {
        Self {
            dashboard,
            user,
            gateway,
            notifier,
            routes,
            query_cache: None,
        }
    }

    /// Fetch the aggregate and open a clean session on it.
    pub async fn load(
        gateway: Arc<dyn PersistenceGateway>,
        notifier: Arc<dyn Notifier>,
        routes: RouteSettings,
        user: User,
        dashboard_id: &str,
    ) -> Result<Self, SessionError> {
        let dashboard = gateway
            .find_dashboard(dashboard_id)
            .await?
            .ok_or_else(|| SessionError::DashboardNotFound(dashboard_id.to_string()))?;
        Ok(Self::new(dashboard, user, gateway, notifier, routes))
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    pub fn routes(&self) -> &RouteSettings {
        &self.routes
    }

    /// Query parameters cached for breadcrumb restoration.
    pub fn cached_query(&self) -> Option<&HashMap<String, String>> {
        self.query_cache.as_ref()
    }

    pub(crate) fn set_cached_query(&mut self, query: Option<HashMap<String, String>>) {
        self.query_cache = query;
    }

    pub fn is_dirty(&self) -> bool {
        self.dashboard.has_unsaved_changes()
    }

    pub fn can_user_edit(&self) -> bool {
        self.dashboard.can_user_edit(&self.user.id)
    }

    /// Apply a batch of layout updates to the aggregate in place.
    ///
    /// Entries are independent and commute. An entry whose widget is no
    /// longer a member of the dashboard (deleted concurrently, or an id
    /// that does not coerce to a number) is dropped without error.
    pub fn apply_layout_update(&mut self, updates: &[LayoutUpdate]) {
        for update in updates {
            let Some(widget_id) = update.widget_id() else {
                continue;
            };
            if let Some(entry) = self.dashboard.layout_entry_mut(widget_id) {
                entry.column = update.x;
                entry.row = update.y;
                entry.width = update.width;
                entry.height = update.height;
            }
        }
    }

    /// Update the dashboard title. Empty input is a no-op.
    pub fn update_title(&mut self, title: &str) {
        if title.is_empty() {
            return;
        }
        self.dashboard.set_title(title);
    }

    /// Persist the aggregate, then every dirty widget.
    ///
    /// The dashboard save strictly precedes the widget batch; if it
    /// fails, no widget save is issued and the aggregate stays dirty for
    /// retry. Widget saves run concurrently with no ordering among them.
    /// Every failure in the chain lands in the same catch: one generic
    /// danger notification, and whatever is still unsaved stays dirty.
    /// Widget-batch failures are not distinguished from success beyond
    /// that notification.
    pub async fn save(&mut self) {
        if let Err(error) = self.try_save().await {
            tracing::warn!("saving dashboard {} failed: {:#}", self.dashboard.id, error);
            self.notifier.notify(Notification::new(
                SAVE_FAILED_MESSAGE,
                Severity::Danger,
                NotificationTimeout::Short,
            ));
        }
    }

    async fn try_save(&mut self) -> anyhow::Result<()> {
        self.gateway.save_dashboard(&self.dashboard).await?;
        self.dashboard.mark_saved();

        let gateway = &self.gateway;
        let saves = self
            .dashboard
            .widgets()
            .iter()
            .filter(|widget| widget.is_dirty())
            .map(|widget| async move { (widget.id, gateway.save_widget(widget).await) });
        let results = future::join_all(saves).await;

        let mut failed = 0;
        for (widget_id, result) in results {
            match result {
                Ok(()) => {
                    if let Some(widget) = self.dashboard.widget_mut(widget_id) {
                        widget.mark_saved();
                    }
                }
                Err(error) => {
                    failed += 1;
                    tracing::debug!("saving widget {} failed: {:#}", widget_id, error);
                }
            }
        }
        if failed > 0 {
            anyhow::bail!("{} widget save(s) failed", failed);
        }
        Ok(())
    }

    /// Discard local edits: every widget first, then the aggregate.
    /// Purely local; no persistence I/O.
    pub fn revert(&mut self) {
        for widget in self.dashboard.widgets_mut() {
            widget.rollback();
        }
        self.dashboard.rollback();
    }

    /// Remove a widget and its layout entry from the in-memory
    /// collections, and hand back the canonical dashboard route for the
    /// caller's router to navigate to. Backing deletion is delegated to
    /// the persistence layer.
    pub fn delete_widget(&mut self, widget_id: u64) -> RouteTarget {
        self.dashboard.remove_widget(widget_id);
        self.dashboard.remove_layout_entries(widget_id);

        RouteTarget {
            route: self.routes.dashboard_route.clone(),
            dashboard_id: self.dashboard.id.clone(),
        }
    }

    /// Session teardown on route exit: anything unsaved is rolled back to
    /// the last-persisted state.
    pub fn deactivate(&mut self) {
        if self.is_dirty() || self.dashboard.widgets().iter().any(|w| w.is_dirty()) {
            tracing::debug!("discarding unsaved changes on dashboard {}", self.dashboard.id);
        }
        self.revert();
    }
}
