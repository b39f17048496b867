use std::sync::RwLock;

use widgets_api::Widget;

/// Persistence for the widget collection.
///
/// Implementations own identity and concurrency; the resource only ever
/// reads a snapshot or hands over a new widget.
pub trait WidgetStore: Send + Sync {
    /// Snapshot of the collection, `None` if the store was never provisioned.
    fn fetch(&self) -> Option<Vec<Widget>>;

    fn save(&self, widget: Widget) -> Result<(), StoreError>;
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Widget collection is not provisioned")]
    Unprovisioned,
    #[error("Widget store lock poisoned")]
    Poisoned,
}

/// Widgets held in process memory, in insertion order.
pub struct MemoryStore {
    widgets: RwLock<Option<Vec<Widget>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_widgets(Vec::new())
    }

    pub fn with_widgets(widgets: impl IntoIterator<Item = Widget>) -> Self {
        MemoryStore {
            widgets: RwLock::new(Some(widgets.into_iter().collect())),
        }
    }

    /// A store with no collection behind it.
    pub fn unprovisioned() -> Self {
        MemoryStore {
            widgets: RwLock::new(None),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetStore for MemoryStore {
    fn fetch(&self) -> Option<Vec<Widget>> {
        self.widgets.read().ok()?.clone()
    }

    fn save(&self, widget: Widget) -> Result<(), StoreError> {
        let mut guard = self.widgets.write().map_err(|_| StoreError::Poisoned)?;
        let widgets = guard.as_mut().ok_or(StoreError::Unprovisioned)?;
        widgets.push(widget);
        Ok(())
    }
}
