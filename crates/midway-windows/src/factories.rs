//! Lookup tables from classes, views and details to the functions that
//! open them.

use std::collections::HashMap;

use crate::class::{WindowClass, WindowDetail, WindowView};
use crate::manager::WindowManager;
use crate::registry::WindowHandle;
use crate::stock;

/// Opens a window that needs no arguments. Receives the requested class so
/// one function can serve several classes.
pub type ClassFactory = fn(&mut WindowManager, WindowClass) -> Option<WindowHandle>;
/// Opens a page of some window.
pub type ViewFactory = fn(&mut WindowManager) -> Option<WindowHandle>;
/// Opens a window keyed by one numeric id.
pub type DetailFactory = fn(&mut WindowManager, u32) -> Option<WindowHandle>;

#[derive(Clone, Default)]
pub struct WindowFactories {
    classes: HashMap<WindowClass, ClassFactory>,
    views: HashMap<WindowView, ViewFactory>,
    details: HashMap<WindowDetail, DetailFactory>,
}

impl WindowFactories {
    /// An empty table: every request is unroutable.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in windows.
    pub fn stock() -> Self {
        let mut factories = Self::new();
        stock::register(&mut factories);
        factories
    }

    pub fn register_class(&mut self, class: WindowClass, factory: ClassFactory) {
        self.classes.insert(class, factory);
    }

    pub fn register_view(&mut self, view: WindowView, factory: ViewFactory) {
        self.views.insert(view, factory);
    }

    pub fn register_detail(&mut self, detail: WindowDetail, factory: DetailFactory) {
        self.details.insert(detail, factory);
    }

    pub fn class(&self, class: WindowClass) -> Option<ClassFactory> {
        self.classes.get(&class).copied()
    }

    pub fn view(&self, view: WindowView) -> Option<ViewFactory> {
        self.views.get(&view).copied()
    }

    pub fn detail(&self, detail: WindowDetail) -> Option<DetailFactory> {
        self.details.get(&detail).copied()
    }

    /// Classes that can only be opened with arguments.
    pub fn classes_without_factory(&self) -> Vec<WindowClass> {
        WindowClass::ALL
            .iter()
            .copied()
            .filter(|c| !self.classes.contains_key(c))
            .collect()
    }
}

impl std::fmt::Debug for WindowFactories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowFactories")
            .field("classes", &self.classes.len())
            .field("views", &self.views.len())
            .field("details", &self.details.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_covers_every_view_and_detail() {
        let factories = WindowFactories::stock();
        for view in WindowView::ALL {
            assert!(factories.view(*view).is_some(), "missing view {view:?}");
        }
        for detail in WindowDetail::ALL {
            assert!(factories.detail(*detail).is_some(), "missing detail {detail:?}");
        }
    }

    #[test]
    fn parameterised_classes_have_no_factory() {
        let missing = WindowFactories::stock().classes_without_factory();
        assert!(missing.contains(&WindowClass::Ride));
        assert!(missing.contains(&WindowClass::LoadSave));
        assert!(missing.contains(&WindowClass::Dropdown));
        assert!(!missing.contains(&WindowClass::Options));
        assert!(!missing.contains(&WindowClass::MainWindow));
    }

    #[test]
    fn empty_table_routes_nothing() {
        let factories = WindowFactories::new();
        assert!(factories.class(WindowClass::Map).is_none());
        assert_eq!(factories.classes_without_factory().len(), WindowClass::ALL.len());
    }
}
