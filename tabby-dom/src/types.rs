/// Inline `display` value of an element.
///
/// `Unset` means no inline style was written, so visibility is left to
/// whatever stylesheet the host applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Unset,
    Block,
    None,
}

impl Display {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}
