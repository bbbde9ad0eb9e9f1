//! Catalog screen state: the selected tab and a cursor over the visible
//! entries.

use crate::workout::{catalog, filter_catalog, CatalogEntry, CategoryFilter};

#[derive(Debug, Clone, Default)]
pub struct CatalogScreen {
    pub filter: CategoryFilter,
    pub selected: usize,
}

impl CatalogScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> Vec<&'static CatalogEntry> {
        filter_catalog(catalog(), self.filter)
    }

    pub fn selected_entry(&self) -> Option<&'static CatalogEntry> {
        self.visible().get(self.selected).copied()
    }

    pub fn select_tab(&mut self, filter: CategoryFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.selected = 0;
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.filter.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.filter.prev());
    }

    pub fn next(&mut self) {
        let count = self.visible().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn previous(&mut self) {
        let count = self.visible().len();
        if count > 0 {
            if self.selected > 0 {
                self.selected -= 1;
            } else {
                self.selected = count - 1;
            }
        }
    }
}
