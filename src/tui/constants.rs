//! Named constants for TUI layout and navigation.

/// Smallest terminal the section can be drawn in.
pub(crate) const MIN_WIDTH: u16 = 48;
pub(crate) const MIN_HEIGHT: u16 = 20;

/// Rows taken by one product card.
pub(crate) const CARD_HEIGHT: u16 = 5;

/// Heading row.
pub(crate) const TITLE_HEIGHT: u16 = 1;

/// Profile icon row plus label row.
pub(crate) const TARGET_TAB_HEIGHT: u16 = 2;

/// Padding row, button row, padding row.
pub(crate) const SORT_STRIP_HEIGHT: u16 = 3;

/// Bordered button.
pub(crate) const TOGGLE_HEIGHT: u16 = 3;

/// Share of the section width taken by the toggle button.
pub(crate) const TOGGLE_WIDTH_PERCENT: u16 = 70;

/// Width of the profile icon box.
pub(crate) const PROFILE_ICON_WIDTH: u16 = 7;

/// Grid rows moved per page-up/page-down.
pub(crate) const PAGE_ROWS: usize = 2;

/// Width used by the static renderer when none is given.
pub const DEFAULT_RENDER_WIDTH: u16 = 96;
