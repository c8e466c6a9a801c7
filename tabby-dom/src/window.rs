/// Viewport and location state of the host window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub width: u32,
    pub height: u32,
    /// Location fragment, stored the way `location.hash` reports it:
    /// empty, or `#` followed by the fragment.
    hash: String,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            hash: String::new(),
        }
    }
}

impl Window {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_hash(mut self, hash: impl AsRef<str>) -> Self {
        self.set_hash(hash);
        self
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Assign the fragment. A leading `#` is optional, an empty value clears it.
    pub fn set_hash(&mut self, hash: impl AsRef<str>) {
        let fragment = hash.as_ref();
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        self.hash = if fragment.is_empty() {
            String::new()
        } else {
            format!("#{fragment}")
        };
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_hash_normalizes_marker() {
        let mut window = Window::default();

        window.set_hash("panel-2");
        assert_eq!(window.hash(), "#panel-2");

        window.set_hash("#panel-3");
        assert_eq!(window.hash(), "#panel-3");

        window.set_hash("#");
        assert_eq!(window.hash(), "");
    }

    #[test]
    fn test_resize() {
        let mut window = Window::new(1024, 768);
        window.resize(600, 900);
        assert_eq!((window.width, window.height), (600, 900));
    }
}
