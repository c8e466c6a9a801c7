//! Group settings

use log::warn;
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::view::View;

/// Settings for one group.
///
/// Fixed once a controller has been built from them.
///
/// # Example
///
/// ```
/// use tabby::{Settings, View};
///
/// let settings = Settings::default()
///     .with_breakpoint(720)
///     .with_view(View::Accordion);
/// assert!(settings.hide_panels);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Class added to the trigger of an open panel.
    ///
    /// Default: `active`
    pub active_trigger_class: String,

    /// Class added to an open panel.
    ///
    /// Default: `active`
    pub active_content_class: String,

    /// Mirror the open panel in the location hash and restore it on load.
    ///
    /// Default: true
    pub deep_linking: bool,

    /// Drive panel visibility through inline `display`.
    ///
    /// Default: true
    pub hide_panels: bool,

    /// Hide tab triggers while in accordion view.
    ///
    /// Default: true
    pub hide_tabs: bool,

    /// Hide accordion triggers while in tab view.
    ///
    /// Default: true
    pub hide_accordions: bool,

    /// Viewport width in px below which the accordion view is used.
    ///
    /// Default: 960
    pub breakpoint: u32,

    /// Pin the group to one view and stop listening for resizes.
    ///
    /// Default: unset (responsive)
    pub view: Option<View>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            active_trigger_class: "active".to_string(),
            active_content_class: "active".to_string(),
            deep_linking: true,
            hide_panels: true,
            hide_tabs: true,
            hide_accordions: true,
            breakpoint: 960,
            view: None,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active_trigger_class(mut self, class: impl Into<String>) -> Self {
        self.active_trigger_class = class.into();
        self
    }

    pub fn with_active_content_class(mut self, class: impl Into<String>) -> Self {
        self.active_content_class = class.into();
        self
    }

    pub fn with_deep_linking(mut self, enabled: bool) -> Self {
        self.deep_linking = enabled;
        self
    }

    pub fn with_hide_panels(mut self, enabled: bool) -> Self {
        self.hide_panels = enabled;
        self
    }

    pub fn with_hide_tabs(mut self, enabled: bool) -> Self {
        self.hide_tabs = enabled;
        self
    }

    pub fn with_hide_accordions(mut self, enabled: bool) -> Self {
        self.hide_accordions = enabled;
        self
    }

    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }

    /// Whether the view follows the viewport width.
    pub fn is_responsive(&self) -> bool {
        self.view.is_none()
    }

    /// Apply overrides field by field. Present values win.
    pub fn merged(&self, overrides: &SettingsOverrides) -> Settings {
        Settings {
            active_trigger_class: overrides
                .active_trigger_class
                .clone()
                .unwrap_or_else(|| self.active_trigger_class.clone()),
            active_content_class: overrides
                .active_content_class
                .clone()
                .unwrap_or_else(|| self.active_content_class.clone()),
            deep_linking: overrides.deep_linking.unwrap_or(self.deep_linking),
            hide_panels: overrides.hide_panels.unwrap_or(self.hide_panels),
            hide_tabs: overrides.hide_tabs.unwrap_or(self.hide_tabs),
            hide_accordions: overrides.hide_accordions.unwrap_or(self.hide_accordions),
            breakpoint: overrides.breakpoint.unwrap_or(self.breakpoint),
            view: overrides.view.or(self.view),
        }
    }
}

/// Per-group overrides as written in the `data-tabby-group-<group>` attribute.
///
/// Every field is optional; unknown keys are ignored. `"type": false` and
/// `"type": null` both mean "no override".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub active_trigger_class: Option<String>,
    pub active_content_class: Option<String>,
    pub deep_linking: Option<bool>,
    pub hide_panels: Option<bool>,
    pub hide_tabs: Option<bool>,
    pub hide_accordions: Option<bool>,
    pub breakpoint: Option<u32>,
    pub view: Option<View>,
}

impl SettingsOverrides {
    /// Parse the JSON carried by a group settings attribute.
    ///
    /// Keys are read one by one: a key holding a value of the wrong type is
    /// logged and left unset, the others still apply. Only JSON that does not
    /// parse, or is not an object, is an error.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let map = match serde_json::from_str(raw)? {
            Value::Object(map) => map,
            other => return Err(Error::not_an_object(&other)),
        };

        Ok(Self {
            active_trigger_class: field(&map, "activeTriggerClass"),
            active_content_class: field(&map, "activeContentClass"),
            deep_linking: field(&map, "deepLinking"),
            hide_panels: field(&map, "hidePanels"),
            hide_tabs: field(&map, "hideTabs"),
            hide_accordions: field(&map, "hideAccordions"),
            breakpoint: field(&map, "breakpoint"),
            view: map.get("type").and_then(|value| {
                deserialize_view(value)
                    .inspect_err(|e| warn!("ignoring setting \"type\": {e}"))
                    .ok()
                    .flatten()
            }),
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Option<T> {
    let value = map.get(key)?;
    match Option::<T>::deserialize(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("ignoring setting {key:?}: {e}");
            None
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ViewSetting {
    Flag(bool),
    Name(String),
}

fn deserialize_view<'de, D>(deserializer: D) -> Result<Option<View>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<ViewSetting>::deserialize(deserializer)? {
        None | Some(ViewSetting::Flag(false)) => Ok(None),
        Some(ViewSetting::Flag(true)) => Err(D::Error::custom(
            "`type` must be \"tab\", \"accordion\" or false",
        )),
        Some(ViewSetting::Name(name)) if name.is_empty() => Ok(None),
        Some(ViewSetting::Name(name)) => name.parse().map(Some).map_err(D::Error::custom),
    }
}
