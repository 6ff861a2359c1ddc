//! Dashboard filter
//!
//! Selects one dashboard from the catalog and lists its tiles.

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::store::StateStore;
use crate::view::ViewFragment;
use crate::widgets::Widget;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const KEY: &str = "dashboards";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardsState {
    pub selected: usize,
}

#[derive(Debug, Clone)]
pub enum DashboardsEvent {
    Select(usize),
}

pub struct Dashboards {
    store: StateStore,
    catalog: Arc<Catalog>,
    state: DashboardsState,
}

impl Dashboards {
    pub fn load(store: StateStore, catalog: Arc<Catalog>) -> Self {
        let state = store.get(KEY, DashboardsState::default());
        Self {
            store,
            catalog,
            state,
        }
    }

    pub fn handle(&mut self, event: DashboardsEvent) -> Result<ViewFragment, AppError> {
        match event {
            DashboardsEvent::Select(index) => {
                if index < self.catalog.dashboards.len() {
                    self.state.selected = index;
                }
            }
        }
        self.store.set(KEY, &self.state)?;
        Ok(self.render())
    }
}

impl Widget for Dashboards {
    fn widget_id(&self) -> &'static str {
        KEY
    }

    fn render(&self) -> ViewFragment {
        let Some(dashboard) = self.catalog.dashboards.get(self.state.selected) else {
            return ViewFragment::new(KEY, "Dashboards").status("No dashboards available");
        };

        let mut fragment = ViewFragment::new(KEY, dashboard.name);
        for tile in &dashboard.tiles {
            fragment = fragment.line(*tile);
        }
        fragment.status(format!("{} tiles", dashboard.tiles.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_first_dashboard() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path().join("state.sled")).expect("open");
        let catalog = Arc::new(Catalog::builtin().expect("catalog"));

        let dashboards = Dashboards::load(store, catalog.clone());
        assert_eq!(dashboards.render().title, catalog.dashboards[0].name);
    }

    #[test]
    fn test_selection_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path().join("state.sled")).expect("open");
        let catalog = Arc::new(Catalog::builtin().expect("catalog"));

        let mut dashboards = Dashboards::load(store.clone(), catalog.clone());
        dashboards.handle(DashboardsEvent::Select(2)).expect("select");

        let reloaded = Dashboards::load(store, catalog.clone());
        assert_eq!(reloaded.render().title, catalog.dashboards[2].name);
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path().join("state.sled")).expect("open");
        let catalog = Arc::new(Catalog::builtin().expect("catalog"));

        let mut dashboards = Dashboards::load(store, catalog.clone());
        dashboards.handle(DashboardsEvent::Select(99)).expect("select");
        assert_eq!(dashboards.render().title, catalog.dashboards[0].name);
    }
}
