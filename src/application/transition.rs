// Transition guard - gates navigation away from a dirty session
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::edit_session::DashboardEditSession;
use crate::infrastructure::confirmation::ConfirmationPrompt;

const UNSAVED_CHANGES_MESSAGE: &str = "You have unsaved changes, are you sure you want to exit?";

/// One endpoint of a navigation: route name plus its route and query
/// parameters.
#[derive(Debug, Clone, Default)]
pub struct RouteInfo {
    pub name: String,
    pub params: HashMap<String, String>,
    pub query_params: HashMap<String, String>,
}

/// A navigation attempt as handed to the guard by the router.
/// `from` is absent on the initial transition into the app.
#[derive(Debug, Clone)]
pub struct Transition {
    pub from: Option<RouteInfo>,
    pub to: RouteInfo,
}

/// A navigation request issued by this core for the router to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
    pub route: String,
    pub dashboard_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Abort,
}

/// Consulted on every attempted navigation away from the session.
///
/// Sub-routes of the dashboard route pass through unconditionally. For
/// anything else, a dirty session whose user can edit blocks on an
/// awaited confirmation; declining aborts the transition before any
/// persistence happens. Viewers without edit permission are never
/// prompted; their local changes are discarded.
pub struct TransitionGuard {
    prompt: Arc<dyn ConfirmationPrompt>,
}

impl TransitionGuard {
    pub fn new(prompt: Arc<dyn ConfirmationPrompt>) -> Self {
        Self { prompt }
    }

    pub async fn will_transition(
        &self,
        session: &mut DashboardEditSession,
        transition: &Transition,
    ) -> GuardOutcome {
        // Sub-route of the current dashboard: cache the query string for
        // breadcrumbs and continue without a dirty check.
        if transition
            .to
            .name
            .starts_with(&session.routes().dashboard_route)
        {
            self.cache_query(session, transition);
            return GuardOutcome::Allow;
        }

        if session.is_dirty()
            && session.can_user_edit()
            && !self.prompt.confirm(UNSAVED_CHANGES_MESSAGE).await
        {
            return GuardOutcome::Abort;
        }
        GuardOutcome::Allow
    }

    /// Cache `from`'s query parameters on the session when navigating
    /// between two instances of the dashboard route (same
    /// `dashboard_id` route parameter on both ends); otherwise clear the
    /// cache. Independent of the allow/abort decision.
    pub fn cache_query(&self, session: &mut DashboardEditSession, transition: &Transition) {
        let id_param = session.routes().dashboard_id_param.clone();
        if let Some(from) = &transition.from {
            let from_id = from.params.get(&id_param);
            let to_id = transition.to.params.get(&id_param);
            if from_id.is_some() && from_id == to_id {
                session.set_cached_query(Some(from.query_params.clone()));
                return;
            }
        }
        session.set_cached_query(None);
    }
}
