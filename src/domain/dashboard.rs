// Dashboard aggregate domain model
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tracking::Tracked;

/// Position and size of one widget within a dashboard's layout.
/// At most one entry exists per `widget_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetLayoutEntry {
    pub widget_id: u64,
    pub column: u32,
    pub row: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Presentation {
    pub layout: Vec<WidgetLayoutEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub operator: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardAttributes {
    pub title: String,
}

/// A widget's editable content record.
///
/// Content is an opaque payload to this core; only identity and dirtiness
/// matter here. Content semantics are validated elsewhere.
#[derive(Debug, Clone)]
pub struct Widget {
    pub id: u64,
    content: Tracked<Value>,
}

impl Widget {
    pub fn new(id: u64, content: Value) -> Self {
        Self {
            id,
            content: Tracked::new(content),
        }
    }

    pub fn content(&self) -> &Value {
        self.content.get()
    }

    pub fn set_content(&mut self, content: Value) {
        *self.content.get_mut() = content;
    }

    pub fn is_dirty(&self) -> bool {
        self.content.is_dirty()
    }

    /// Mark the current content as persisted.
    pub fn mark_saved(&mut self) {
        self.content.commit();
    }

    /// Discard local edits, restoring the last-persisted content.
    pub fn rollback(&mut self) {
        self.content.rollback();
    }
}

/// The dashboard aggregate root loaded into an edit session.
///
/// Attribute, filter and presentation records each carry their
/// last-persisted snapshot; aggregate dirtiness is derived from those
/// three. Widget dirtiness is tracked per widget and does not count
/// toward aggregate dirtiness.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub id: String,
    pub owner_id: String,
    attributes: Tracked<DashboardAttributes>,
    presentation: Tracked<Presentation>,
    filters: Tracked<Vec<Filter>>,
    widgets: Vec<Widget>,
}

impl Dashboard {
    pub fn new(
        id: String,
        owner_id: String,
        title: String,
        presentation: Presentation,
        widgets: Vec<Widget>,
        filters: Vec<Filter>,
    ) -> Self {
        Self {
            id,
            owner_id,
            attributes: Tracked::new(DashboardAttributes { title }),
            presentation: Tracked::new(presentation),
            filters: Tracked::new(filters),
            widgets,
        }
    }

    pub fn title(&self) -> &str {
        &self.attributes.get().title
    }

    pub fn set_title(&mut self, title: &str) {
        self.attributes.get_mut().title = title.to_string();
    }

    pub fn layout(&self) -> &[WidgetLayoutEntry] {
        &self.presentation.get().layout
    }

    /// Find the layout entry for a widget, if it is still a member of
    /// this dashboard's layout.
    pub fn layout_entry_mut(&mut self, widget_id: u64) -> Option<&mut WidgetLayoutEntry> {
        self.presentation
            .get_mut()
            .layout
            .iter_mut()
            .find(|entry| entry.widget_id == widget_id)
    }

    /// Drop every layout entry referencing the given widget id.
    pub fn remove_layout_entries(&mut self, widget_id: u64) {
        self.presentation
            .get_mut()
            .layout
            .retain(|entry| entry.widget_id != widget_id);
    }

    pub fn filters(&self) -> &[Filter] {
        self.filters.get()
    }

    pub fn filters_mut(&mut self) -> &mut Vec<Filter> {
        self.filters.get_mut()
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut [Widget] {
        &mut self.widgets
    }

    pub fn widget_mut(&mut self, widget_id: u64) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|widget| widget.id == widget_id)
    }

    /// Remove a widget from the in-memory collection. Backing deletion is
    /// the persistence layer's job.
    pub fn remove_widget(&mut self, widget_id: u64) -> Option<Widget> {
        let index = self.widgets.iter().position(|widget| widget.id == widget_id)?;
        Some(self.widgets.remove(index))
    }

    /// Derived dirty predicate over the aggregate's tracked records.
    pub fn has_unsaved_changes(&self) -> bool {
        self.attributes.is_dirty() || self.filters.is_dirty() || self.presentation.is_dirty()
    }

    pub fn can_user_edit(&self, user_id: &str) -> bool {
        self.owner_id == user_id
    }

    /// Mark attributes, filters and presentation as persisted.
    pub fn mark_saved(&mut self) {
        self.attributes.commit();
        self.filters.commit();
        self.presentation.commit();
    }

    /// Restore attributes, filters and presentation from their
    /// last-persisted snapshots.
    pub fn rollback(&mut self) {
        self.attributes.rollback();
        self.filters.rollback();
        self.presentation.rollback();
    }
}
