//! Markup contract: data attribute keys (without the `data-` prefix) and the
//! ARIA attributes written by controllers.

/// Marks a trigger and names its group.
pub const GROUP: &str = "tabby-group";

/// Names the panel a trigger controls, by element id.
pub const PANEL: &str = "tabby-panel";

/// Forces a trigger's classification to `tab` or `accordion`.
pub const TRIGGER_TYPE: &str = "tabby-trigger-type";

pub const ARIA_CONTROLS: &str = "aria-controls";
pub const ARIA_SELECTED: &str = "aria-selected";
pub const ARIA_EXPANDED: &str = "aria-expanded";
// Spelling is part of the published markup contract.
pub const ARIA_LABELEDBY: &str = "aria-labeledby";
pub const ROLE: &str = "role";
pub const ROLE_TABPANEL: &str = "tabpanel";

/// Key of the per-group settings attribute, `data-tabby-group-<group>`.
pub fn group_settings_key(group: &str) -> String {
    format!("{GROUP}-{group}")
}

/// Id given to a tab trigger so its panel can point back at it.
pub fn tab_id(panel_id: &str) -> String {
    format!("{panel_id}-tab")
}
