//! Target-audience and category filters.
//!
//! Both are closed sets with a fixed tab order. [`CycleFilter`] gives the
//! keyboard bindings a uniform way to step through either of them.

use crate::error::RankingError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Icon token shown for a target label that is not one of the known tabs.
pub const FALLBACK_ICON: &str = "ALL";

/// Trait for filter types that can cycle through options.
///
/// ```ignore
/// use gift_ranking::ranking::{CycleFilter, TargetFilter};
///
/// assert_eq!(TargetFilter::Teens.next(), TargetFilter::All);
/// ```
pub trait CycleFilter: Clone + Copy + Default {
    /// Get the next filter in the cycle.
    #[must_use]
    fn next(&self) -> Self;

    /// Get the previous filter in the cycle.
    #[must_use]
    fn prev(&self) -> Self;

    /// Get a display name for the filter.
    fn display_name(&self) -> &str;
}

/// Audience segment tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetFilter {
    #[default]
    All,
    Women,
    Men,
    Teens,
}

impl TargetFilter {
    /// Tabs in display order.
    pub const ORDERED: [Self; 4] = [Self::All, Self::Women, Self::Men, Self::Teens];

    /// Korean tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "전체",
            Self::Women => "여성이",
            Self::Men => "남성이",
            Self::Teens => "청소년이",
        }
    }

    /// Profile icon token drawn above the label.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Women => "👩🏻",
            Self::Men => "👨🏻",
            Self::Teens => "👦🏻",
        }
    }

    /// Stable key used on the command line and in JSON output.
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Women => "women",
            Self::Men => "men",
            Self::Teens => "teens",
        }
    }

    pub const fn position(self) -> usize {
        match self {
            Self::All => 0,
            Self::Women => 1,
            Self::Men => 2,
            Self::Teens => 3,
        }
    }

    pub fn from_position(index: usize) -> Option<Self> {
        Self::ORDERED.get(index).copied()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ORDERED.into_iter().find(|f| f.label() == label)
    }
}

/// Resolve the icon for a raw tab label, falling back to [`FALLBACK_ICON`].
pub fn icon_for_label(label: &str) -> &'static str {
    TargetFilter::from_label(label).map_or(FALLBACK_ICON, TargetFilter::icon)
}

impl CycleFilter for TargetFilter {
    fn next(&self) -> Self {
        match self {
            Self::All => Self::Women,
            Self::Women => Self::Men,
            Self::Men => Self::Teens,
            Self::Teens => Self::All,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Self::All => Self::Teens,
            Self::Women => Self::All,
            Self::Men => Self::Women,
            Self::Teens => Self::Men,
        }
    }

    fn display_name(&self) -> &str {
        self.label()
    }
}

impl fmt::Display for TargetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TargetFilter {
    type Err = RankingError;

    /// Accepts either the key (`women`) or the Korean label (`여성이`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ORDERED
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(needle) || f.label() == needle)
            .ok_or_else(|| {
                RankingError::validation(format!(
                    "unknown target '{s}' (expected one of: all, women, men, teens)"
                ))
            })
    }
}

/// Sort/category tab. Selecting one only changes which tab is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    #[default]
    MostWanted,
    MostGifted,
    MostWished,
}

impl CategoryFilter {
    /// Buttons in display order.
    pub const ORDERED: [Self; 3] = [Self::MostWanted, Self::MostGifted, Self::MostWished];

    pub const fn label(self) -> &'static str {
        match self {
            Self::MostWanted => "받고 싶어한",
            Self::MostGifted => "많이 선물한",
            Self::MostWished => "위시로 받은",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::MostWanted => "most-wanted",
            Self::MostGifted => "most-gifted",
            Self::MostWished => "most-wished",
        }
    }

    pub const fn position(self) -> usize {
        match self {
            Self::MostWanted => 0,
            Self::MostGifted => 1,
            Self::MostWished => 2,
        }
    }

    pub fn from_position(index: usize) -> Option<Self> {
        Self::ORDERED.get(index).copied()
    }
}

impl CycleFilter for CategoryFilter {
    fn next(&self) -> Self {
        match self {
            Self::MostWanted => Self::MostGifted,
            Self::MostGifted => Self::MostWished,
            Self::MostWished => Self::MostWanted,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Self::MostWanted => Self::MostWished,
            Self::MostGifted => Self::MostWanted,
            Self::MostWished => Self::MostGifted,
        }
    }

    fn display_name(&self) -> &str {
        self.label()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ORDERED
            .into_iter()
            .find(|c| {
                c.key().eq_ignore_ascii_case(needle)
                    || c.key().replace('-', "_").eq_ignore_ascii_case(needle)
                    || c.label() == needle
            })
            .ok_or_else(|| {
                RankingError::validation(format!(
                    "unknown category '{s}' (expected one of: most-wanted, most-gifted, most-wished)"
                ))
            })
    }
}
