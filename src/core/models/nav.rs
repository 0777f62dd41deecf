use serde::{Deserialize, Serialize};

/// Views reachable from the navigation bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppView {
    Board,
    List,
    Calendar,
    Settings,
}

impl AppView {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppView::Board => "board",
            AppView::List => "list",
            AppView::Calendar => "calendar",
            AppView::Settings => "settings",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavItem {
    pub id: AppView,
    pub label: String,
    pub icon: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl NavItem {
    pub fn new(id: AppView, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            icon: icon.into(),
            active: false,
            badge: None,
        }
    }
}

/// Navigation entries plus the selected view. Exactly one entry is active,
/// and it is always the one matching `current`.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    items: Vec<NavItem>,
    current: AppView,
}

impl NavState {
    pub fn new(items: Vec<NavItem>, initial: AppView) -> Self {
        let mut state = Self { items, current: initial };
        state.mark_active(initial);
        state
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn current(&self) -> AppView {
        self.current
    }

    /// Switches to `view`. Returns the selected entry, or `None` if no entry exists for it.
    pub fn select(&mut self, view: AppView) -> Option<&NavItem> {
        if !self.items.iter().any(|item| item.id == view) {
            return None;
        }
        self.mark_active(view);
        self.current = view;
        self.items.iter().find(|item| item.id == view)
    }

    pub fn set_badge(&mut self, view: AppView, badge: Option<String>) {
        self.items = self
            .items
            .iter()
            .cloned()
            .map(|item| if item.id == view { NavItem { badge: badge.clone(), ..item } } else { item })
            .collect();
    }

    fn mark_active(&mut self, view: AppView) {
        self.items = self
            .items
            .iter()
            .cloned()
            .map(|item| NavItem { active: item.id == view, ..item })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> NavState {
        NavState::new(
            vec![
                NavItem::new(AppView::Board, "Kanban Board", "📋"),
                NavItem::new(AppView::List, "List View", "📝"),
                NavItem::new(AppView::Settings, "Settings", "⚙️"),
            ],
            AppView::Board,
        )
    }

    fn active_ids(state: &NavState) -> Vec<AppView> {
        state.items().iter().filter(|i| i.active).map(|i| i.id).collect()
    }

    #[test]
    fn exactly_one_active_after_construction_and_selection() {
        let mut state = nav();
        assert_eq!(active_ids(&state), vec![AppView::Board]);

        let selected = state.select(AppView::List).map(|item| item.label.clone());
        assert_eq!(selected.as_deref(), Some("List View"));
        assert_eq!(active_ids(&state), vec![AppView::List]);
        assert_eq!(state.current(), AppView::List);
    }

    #[test]
    fn selecting_a_missing_view_changes_nothing() {
        let mut state = nav();
        let before = state.clone();
        assert!(state.select(AppView::Calendar).is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn badge_only_touches_the_named_entry() {
        let mut state = nav();
        state.set_badge(AppView::Board, Some("4".to_string()));
        assert_eq!(state.items()[0].badge.as_deref(), Some("4"));
        assert!(state.items()[1].badge.is_none());
        assert_eq!(active_ids(&state), vec![AppView::Board]);
    }
}
