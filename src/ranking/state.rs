//! View state for the ranking section.
//!
//! The state is a small `Copy` value. Every user interaction maps to one
//! [`Interaction`], and [`ViewState::apply`] returns the next state without
//! touching the old one.

use super::filters::{CategoryFilter, TargetFilter};
use serde::Serialize;

/// Label on the toggle while the list is collapsed.
pub const SHOW_MORE_LABEL: &str = "더보기";
/// Label on the toggle while the list is expanded.
pub const COLLAPSE_LABEL: &str = "접기";

/// A single user interaction with the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    SelectTarget(TargetFilter),
    SelectCategory(CategoryFilter),
    ToggleExpanded,
    /// Click on the card at this index of the displayed slice.
    ClickProduct(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub target: TargetFilter,
    pub category: CategoryFilter,
    pub expanded: bool,
}

impl ViewState {
    /// State at mount: all audiences, first category, collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_target(self, target: TargetFilter) -> Self {
        Self { target, ..self }
    }

    #[must_use]
    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self { category, ..self }
    }

    #[must_use]
    pub fn with_expanded(self, expanded: bool) -> Self {
        Self { expanded, ..self }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        self.with_expanded(!self.expanded)
    }

    /// Next state after `interaction`. Product clicks leave the state as is.
    #[must_use]
    pub fn apply(self, interaction: Interaction) -> Self {
        match interaction {
            Interaction::SelectTarget(target) => self.with_target(target),
            Interaction::SelectCategory(category) => self.with_category(category),
            Interaction::ToggleExpanded => self.toggled(),
            Interaction::ClickProduct(_) => self,
        }
    }

    pub fn is_target_active(self, target: TargetFilter) -> bool {
        self.target == target
    }

    pub fn is_category_active(self, category: CategoryFilter) -> bool {
        self.category == category
    }

    pub const fn toggle_label(self) -> &'static str {
        if self.expanded {
            COLLAPSE_LABEL
        } else {
            SHOW_MORE_LABEL
        }
    }
}
