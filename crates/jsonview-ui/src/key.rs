use smartstring::alias::String as SmartString;
use std::fmt;

/// The key a label is bound to: an object member name or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyName {
    Str(SmartString),
    Index(usize),
}

impl KeyName {
    /// The unformatted key, as handed to custom renderers as `label`.
    pub fn raw(&self) -> SmartString {
        match self {
            KeyName::Str(name) => name.clone(),
            KeyName::Index(index) => index.to_string().into(),
        }
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyName::Str(name) => write!(f, "{name}"),
            KeyName::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for KeyName {
    fn from(name: &str) -> Self {
        KeyName::Str(name.into())
    }
}

impl From<usize> for KeyName {
    fn from(index: usize) -> Self {
        KeyName::Index(index)
    }
}

/// Displayed text for a key: string keys wrap in the quote string, array
/// indices render bare. Quote characters inside the key are left as-is.
pub fn format_key(key: &KeyName, quotes: &str) -> SmartString {
    match key {
        KeyName::Str(name) => format!("{quotes}{name}{quotes}").into(),
        KeyName::Index(index) => index.to_string().into(),
    }
}
