use crate::route_pattern::{RoutePattern, RoutePatternError};
use leptos::prelude::*;
use std::sync::LazyLock;

/// Router-style form of the POS detail route, e.g. `/pos/123`.
pub const POS_DETAIL_PATTERN: &str = "/pos/:id";

static POS_DETAIL: LazyLock<RoutePattern> = LazyLock::new(|| {
    RoutePattern::parse(POS_DETAIL_PATTERN).expect("POS detail pattern is a valid route pattern")
});

/// Returns `true` when `path` is a POS detail page: `/pos/` followed by
/// exactly one non-empty segment and nothing else.
pub fn is_pos_detail_page(path: Option<&str>) -> bool {
    path.is_some_and(|p| POS_DETAIL.matches(p))
}

/// Whether the layout renders its sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarVisibility {
    #[default]
    Shown,
    Hidden,
}

impl SidebarVisibility {
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }

    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Routes on which the protected layout drops its sidebar.
///
/// The default set holds only [`POS_DETAIL_PATTERN`]. Rules are consulted in
/// order and the first match hides the sidebar; a missing path never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarRules {
    hidden: Vec<RoutePattern>,
}

impl Default for SidebarRules {
    fn default() -> Self {
        Self {
            hidden: vec![POS_DETAIL.clone()],
        }
    }
}

impl SidebarRules {
    /// A rule set that never hides the sidebar.
    pub fn empty() -> Self {
        Self { hidden: Vec::new() }
    }

    pub fn with_hidden(mut self, pattern: RoutePattern) -> Self {
        self.hidden.push(pattern);
        self
    }

    /// Adds a router-style pattern such as `/kiosk/:station`.
    pub fn with_hidden_path(self, pattern: &str) -> Result<Self, RoutePatternError> {
        Ok(self.with_hidden(RoutePattern::parse(pattern)?))
    }

    pub fn hidden_patterns(&self) -> &[RoutePattern] {
        &self.hidden
    }

    /// Returns the first pattern matching `path`, if any.
    pub fn matching(&self, path: Option<&str>) -> Option<&RoutePattern> {
        let path = path?;
        self.hidden.iter().find(|pattern| pattern.matches(path))
    }

    pub fn visibility(&self, path: Option<&str>) -> SidebarVisibility {
        match self.matching(path) {
            Some(_) => SidebarVisibility::Hidden,
            None => SidebarVisibility::Shown,
        }
    }
}

/// Makes `rules` the active [`SidebarRules`] for every layout below the
/// current owner.
pub fn provide_sidebar_rules(rules: SidebarRules) {
    provide_context(rules);
}

/// The nearest provided [`SidebarRules`], or the default set.
pub fn use_sidebar_rules() -> SidebarRules {
    use_context::<SidebarRules>().unwrap_or_default()
}
