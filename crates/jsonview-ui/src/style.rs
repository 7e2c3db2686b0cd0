use crate::theme::Color;
use smallvec::SmallVec;
use smartstring::alias::String as SmartString;

/// Presentation pass-through for a rendered label.
///
/// The widget never interprets the entries; they travel to the host (or
/// to a custom renderer) untouched. Only `color` participates in the
/// merge the override bundle requires.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelStyle {
    pub color: Option<Color>,
    entries: SmallVec<[(SmartString, SmartString); 4]>,
}

impl LabelStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a style entry, replacing any existing value for the key.
    pub fn set(&mut self, key: impl Into<SmartString>, value: impl Into<SmartString>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(SmartString, SmartString)] {
        &self.entries
    }

    /// Apply the node's color prop on top of the base style.
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        if color.is_some() {
            self.color = color;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_existing_key() {
        let mut style = LabelStyle::new();
        style.set("font-weight", "bold");
        style.set("font-weight", "normal");
        assert_eq!(style.get("font-weight"), Some("normal"));
        assert_eq!(style.entries().len(), 1);
    }

    #[test]
    fn test_color_merge() {
        let mut style = LabelStyle::new();
        style.color = Some(Color::rgb(1, 2, 3));

        let merged = style.clone().with_color(Some(Color::rgb(9, 9, 9)));
        assert_eq!(merged.color, Some(Color::rgb(9, 9, 9)));

        // No color prop keeps the base style's color.
        let kept = style.with_color(None);
        assert_eq!(kept.color, Some(Color::rgb(1, 2, 3)));
    }
}
