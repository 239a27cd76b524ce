// User domain model - favorites kept by dashboard id
use serde::{Deserialize, Serialize};

/// A user record with its set of favorited dashboards.
///
/// Membership is by dashboard id; insertion order is preserved so the
/// favorites list renders in the order dashboards were starred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    favorite_dashboards: Vec<String>,
}

impl User {
    pub fn new(id: String) -> Self {
        Self {
            id,
            favorite_dashboards: Vec::new(),
        }
    }

    pub fn with_favorites(id: String, favorite_dashboards: Vec<String>) -> Self {
        Self {
            id,
            favorite_dashboards,
        }
    }

    pub fn is_favorite(&self, dashboard_id: &str) -> bool {
        self.favorite_dashboards.iter().any(|id| id == dashboard_id)
    }

    /// Add a dashboard to the favorites. Adding an existing member is a
    /// no-op, so the at-most-once invariant holds.
    pub fn add_favorite(&mut self, dashboard_id: &str) {
        if !self.is_favorite(dashboard_id) {
            self.favorite_dashboards.push(dashboard_id.to_string());
        }
    }

    pub fn remove_favorite(&mut self, dashboard_id: &str) {
        self.favorite_dashboards.retain(|id| id != dashboard_id);
    }

    pub fn favorite_dashboards(&self) -> &[String] {
        &self.favorite_dashboards
    }
}
