// Shared fakes for orchestration tests
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use crate::application::persistence::PersistenceGateway;
use crate::domain::dashboard::{Dashboard, Presentation, Widget, WidgetLayoutEntry};
use crate::domain::user::User;
use crate::infrastructure::confirmation::ConfirmationPrompt;
use crate::infrastructure::notifier::{Notification, Notifier};

/// Gateway that records every call and fails where told to.
pub(crate) struct RecordingGateway {
    pub dashboard: Mutex<Option<Dashboard>>,
    pub fail_dashboard_save: bool,
    pub failing_widget_ids: Vec<u64>,
    pub fail_user_save: bool,
    pub dashboard_saves: AtomicUsize,
    pub widget_saves: Mutex<Vec<u64>>,
    pub user_saves: AtomicUsize,
    /// Favorites as seen by each `save_user` call, in call order.
    pub user_snapshots: Mutex<Vec<Vec<String>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self {
            dashboard: Mutex::new(None),
            fail_dashboard_save: false,
            failing_widget_ids: Vec::new(),
            fail_user_save: false,
            dashboard_saves: AtomicUsize::new(0),
            widget_saves: Mutex::new(Vec::new()),
            user_saves: AtomicUsize::new(0),
            user_snapshots: Mutex::new(Vec::new()),
        }
    }

    pub fn with_dashboard(dashboard: Dashboard) -> Self {
        let gateway = Self::new();
        *gateway.dashboard.lock().unwrap() = Some(dashboard);
        gateway
    }

    pub fn failing_dashboard_save() -> Self {
        Self {
            fail_dashboard_save: true,
            ..Self::new()
        }
    }

    pub fn failing_widgets(failing_widget_ids: Vec<u64>) -> Self {
        Self {
            failing_widget_ids,
            ..Self::new()
        }
    }

    pub fn failing_user_save() -> Self {
        Self {
            fail_user_save: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl PersistenceGateway for RecordingGateway {
    async fn find_dashboard(&self, dashboard_id: &str) -> anyhow::Result<Option<Dashboard>> {
        Ok(self
            .dashboard
            .lock()
            .unwrap()
            .clone()
            .filter(|dashboard| dashboard.id == dashboard_id))
    }

    async fn save_dashboard(&self, _dashboard: &Dashboard) -> anyhow::Result<()> {
        self.dashboard_saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_dashboard_save {
            anyhow::bail!("store rejected dashboard save");
        }
        Ok(())
    }

    async fn save_widget(&self, widget: &Widget) -> anyhow::Result<()> {
        self.widget_saves.lock().unwrap().push(widget.id);
        if self.failing_widget_ids.contains(&widget.id) {
            anyhow::bail!("store rejected widget {} save", widget.id);
        }
        Ok(())
    }

    async fn save_user(&self, user: &User) -> anyhow::Result<()> {
        self.user_saves.fetch_add(1, Ordering::SeqCst);
        self.user_snapshots
            .lock()
            .unwrap()
            .push(user.favorite_dashboards().to_vec());
        if self.fail_user_save {
            anyhow::bail!("store rejected user save");
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// Prompt that answers with a fixed response and counts invocations.
pub(crate) struct ScriptedPrompt {
    pub accept: bool,
    pub calls: AtomicUsize,
}

impl ScriptedPrompt {
    pub fn accepting(accept: bool) -> Self {
        Self {
            accept,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ConfirmationPrompt for ScriptedPrompt {
    async fn confirm(&self, _message: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.accept
    }
}

/// A dashboard with one layout entry and one widget per id, clean.
pub(crate) fn sample_dashboard(id: &str, owner_id: &str, widget_ids: &[u64]) -> Dashboard {
    let layout = widget_ids
        .iter()
        .enumerate()
        .map(|(index, &widget_id)| WidgetLayoutEntry {
            widget_id,
            column: 0,
            row: index as u32 * 4,
            width: 12,
            height: 4,
        })
        .collect();
    let widgets = widget_ids
        .iter()
        .map(|&widget_id| Widget::new(widget_id, json!({ "metric": "adClicks" })))
        .collect();
    Dashboard::new(
        id.to_string(),
        owner_id.to_string(),
        "Kpi Dashboard".to_string(),
        Presentation { layout },
        widgets,
        Vec::new(),
    )
}
