//! View modes and the breakpoint rule.

use std::str::FromStr;

use crate::attrs;
use crate::error::Error;

/// How a group presents its panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// One panel open at a time.
    Tab,
    /// Panels open independently.
    Accordion,
}

impl View {
    /// Both views, in the order buckets are walked.
    pub const ALL: [View; 2] = [View::Tab, View::Accordion];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tab => "tab",
            Self::Accordion => "accordion",
        }
    }

    /// ARIA attribute that flags an open item of this view.
    pub fn aria_state(&self) -> &'static str {
        match self {
            Self::Tab => attrs::ARIA_SELECTED,
            Self::Accordion => attrs::ARIA_EXPANDED,
        }
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" => Ok(Self::Tab),
            "accordion" => Ok(Self::Accordion),
            other => Err(Error::UnknownView(other.to_string())),
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the view for a viewport width.
///
/// A fixed view always wins. Otherwise widths strictly below the breakpoint
/// get the accordion.
pub fn check_view(fixed: Option<View>, width: u32, breakpoint: u32) -> View {
    match fixed {
        Some(view) => view,
        None if width < breakpoint => View::Accordion,
        None => View::Tab,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("tab".parse::<View>().unwrap(), View::Tab);
        assert_eq!("accordion".parse::<View>().unwrap(), View::Accordion);
        assert!(matches!(
            "Tab".parse::<View>(),
            Err(Error::UnknownView(name)) if name == "Tab"
        ));
    }

    #[test]
    fn test_check_view_breakpoint_edges() {
        assert_eq!(check_view(None, 959, 960), View::Accordion);
        assert_eq!(check_view(None, 960, 960), View::Tab);
        assert_eq!(check_view(None, 2000, 960), View::Tab);
        assert_eq!(check_view(None, 0, 960), View::Accordion);
    }

    #[test]
    fn test_check_view_fixed_wins() {
        assert_eq!(check_view(Some(View::Tab), 320, 960), View::Tab);
        assert_eq!(check_view(Some(View::Accordion), 4000, 960), View::Accordion);
    }

    #[test]
    fn test_aria_state() {
        assert_eq!(View::Tab.aria_state(), "aria-selected");
        assert_eq!(View::Accordion.aria_state(), "aria-expanded");
    }
}
