use crate::key::KeyName;
use crate::style::LabelStyle;
use crate::theme::Color;
use jsonview_types::JsonValue;
use smallvec::SmallVec;
use smartstring::alias::String as SmartString;

/// Identity of one mounted key label across re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

/// Fully assembled props handed to a custom renderer.
#[derive(Debug, Clone)]
pub struct LabelBundle {
    pub class_name: SmartString,
    /// Base style with the node's color merged in.
    pub style: LabelStyle,
    /// The formatted label text.
    pub children: SmartString,
    /// The raw key name, unquoted.
    pub label: SmartString,
    pub key_name: KeyName,
    pub quotes: SmartString,
    pub namespace: SmallVec<[KeyName; 4]>,
    /// Key of the enclosing container, if any.
    pub parent_name: Option<KeyName>,
    pub value: Option<JsonValue>,
}

/// Output of a custom renderer, passed back to the caller verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomRender {
    pub text: SmartString,
    pub style: LabelStyle,
}

/// How a node's label gets rendered.
pub enum RenderStrategy {
    /// Built-in label rendering with the flash wiring attached.
    Default,
    /// Caller-supplied renderer. Receives the assembled [`LabelBundle`]
    /// and fully replaces built-in rendering, flash included.
    Custom(Box<dyn Fn(&LabelBundle) -> CustomRender>),
}

impl Default for RenderStrategy {
    fn default() -> Self {
        RenderStrategy::Default
    }
}

/// Configuration surface for one key label.
pub struct KeyLabelProps {
    pub key_name: KeyName,
    /// The value being rendered; drives classification when present.
    pub value: Option<JsonValue>,
    /// Master switch for the flash feature.
    pub highlight_updates: bool,
    /// Quote string wrapped around string keys.
    pub quotes: SmartString,
    /// Ancestor key path; pass-through for custom renderers only.
    pub namespace: SmallVec<[KeyName; 4]>,
    /// Key of the enclosing container; pass-through for custom renderers.
    pub parent_name: Option<KeyName>,
    pub color: Option<Color>,
    pub style: LabelStyle,
    pub class_name: SmartString,
    pub strategy: RenderStrategy,
}

impl KeyLabelProps {
    pub fn new(key_name: impl Into<KeyName>) -> Self {
        Self {
            key_name: key_name.into(),
            value: None,
            highlight_updates: false,
            quotes: "\"".into(),
            namespace: SmallVec::new(),
            parent_name: None,
            color: None,
            style: LabelStyle::default(),
            class_name: "jv-object-key".into(),
            strategy: RenderStrategy::Default,
        }
    }

    pub fn with_value(mut self, value: JsonValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_highlight(mut self, enabled: bool) -> Self {
        self.highlight_updates = enabled;
        self
    }

    pub fn with_quotes(mut self, quotes: impl Into<SmartString>) -> Self {
        self.quotes = quotes.into();
        self
    }

    pub fn with_parent(mut self, parent_name: impl Into<KeyName>) -> Self {
        self.parent_name = Some(parent_name.into());
        self
    }

    pub fn with_render(
        mut self,
        callback: impl Fn(&LabelBundle) -> CustomRender + 'static,
    ) -> Self {
        self.strategy = RenderStrategy::Custom(Box::new(callback));
        self
    }
}
