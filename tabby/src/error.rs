//! Error types
//!
//! Controllers never surface these to their callers: a bad settings string
//! or an unknown trigger type is logged and replaced by the default. They
//! exist so the parsing helpers can be used and tested on their own.

/// Errors raised while reading group markup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The settings attribute is not valid JSON.
    #[error("invalid settings JSON: {0}")]
    InvalidSettings(#[from] serde_json::Error),

    /// The settings attribute is valid JSON but not an object.
    #[error("settings must be a JSON object, got {found}")]
    SettingsNotAnObject { found: &'static str },

    /// A view name other than `tab` or `accordion`.
    #[error("unknown view type: {0:?}")]
    UnknownView(String),
}

impl Error {
    pub(crate) fn not_an_object(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        };
        Self::SettingsNotAnObject { found }
    }
}
