// Favorites service - optimistic favorite toggle with rollback
use std::sync::Arc;

use crate::application::persistence::PersistenceGateway;
use crate::domain::dashboard::Dashboard;
use crate::domain::user::User;
use crate::infrastructure::notifier::{Notification, NotificationTimeout, Notifier, Severity};

const TOGGLE_FAILED_MESSAGE: &str = "An error occurred while updating favorite dashboards";

/// The forward membership operation and, via `inverse`, its exact undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FavoriteOp {
    Add,
    Remove,
}

impl FavoriteOp {
    fn inverse(self) -> Self {
        match self {
            FavoriteOp::Add => FavoriteOp::Remove,
            FavoriteOp::Remove => FavoriteOp::Add,
        }
    }

    fn apply(self, user: &mut User, dashboard_id: &str) {
        match self {
            FavoriteOp::Add => user.add_favorite(dashboard_id),
            FavoriteOp::Remove => user.remove_favorite(dashboard_id),
        }
    }
}

#[derive(Clone)]
pub struct FavoritesService {
    gateway: Arc<dyn PersistenceGateway>,
    notifier: Arc<dyn Notifier>,
}

impl FavoritesService {
    pub fn new(gateway: Arc<dyn PersistenceGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self { gateway, notifier }
    }

    /// Toggle a dashboard in the user's favorites.
    ///
    /// The membership change is applied before the save is in flight, so
    /// readers see it immediately. If the save fails, the inverse
    /// operation restores the prior membership exactly and a notification
    /// is raised. Once the future settles, membership reflects the last
    /// durable outcome. The exclusive borrow of `user` rules out
    /// overlapping toggles within a session.
    pub async fn toggle_favorite(&self, user: &mut User, dashboard: &Dashboard) {
        let forward = if user.is_favorite(&dashboard.id) {
            FavoriteOp::Remove
        } else {
            FavoriteOp::Add
        };
        forward.apply(user, &dashboard.id);

        if let Err(error) = self.gateway.save_user(user).await {
            tracing::warn!(
                "favorite toggle for dashboard {} failed: {:#}",
                dashboard.id,
                error
            );
            forward.inverse().apply(user, &dashboard.id);
            self.notifier.notify(Notification::new(
                TOGGLE_FAILED_MESSAGE,
                Severity::Danger,
                NotificationTimeout::Medium,
            ));
        }
    }
}
