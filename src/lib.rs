// Dashboard edit-session core - library root
pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::authorization::{
    AuthorizationPipeline, CheckPhase, OwnedRecord, Principal, RequestContext, same_user,
};
pub use application::edit_session::{DashboardEditSession, LayoutUpdate};
pub use application::favorites::FavoritesService;
pub use application::persistence::{PersistenceGateway, SessionError};
pub use application::transition::{GuardOutcome, RouteInfo, RouteTarget, Transition, TransitionGuard};
pub use infrastructure::config::{RouteSettings, SessionConfig, load_session_config};
pub use infrastructure::confirmation::{AutoConfirm, ConfirmationPrompt};
pub use infrastructure::notifier::{
    Notification, NotificationTimeout, Notifier, Severity, TracingNotifier,
};
