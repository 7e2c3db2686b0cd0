use smartstring::alias::String as SmartString;
use std::rc::Rc;

/// Coarse category of a value, used for type-change detection.
///
/// `Null`, arrays and objects all report [`TypeTag::Object`], so a
/// container draining to null is not treated as a type change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Number,
    String,
    Bool,
    Object,
    Func,
}

/// An opaque callable surfaced in a live value feed.
///
/// Only the signature is ever rendered; contents are never inspected.
#[derive(Debug)]
pub struct FuncValue {
    pub signature: SmartString,
}

/// A snapshot of one rendered value.
///
/// Containers and functions sit behind `Rc`, so snapshots are cheap to
/// clone and identity is pointer identity. Deep comparison is never
/// attempted anywhere in this crate.
#[derive(Debug, Clone)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(SmartString),
    Array(Rc<Vec<JsonValue>>),
    Object(Rc<Vec<(SmartString, JsonValue)>>),
    Func(Rc<FuncValue>),
}

impl JsonValue {
    pub fn str(value: impl Into<SmartString>) -> Self {
        Self::Str(value.into())
    }

    pub fn array(items: Vec<JsonValue>) -> Self {
        Self::Array(Rc::new(items))
    }

    pub fn object(members: Vec<(SmartString, JsonValue)>) -> Self {
        Self::Object(Rc::new(members))
    }

    pub fn func(signature: impl Into<SmartString>) -> Self {
        Self::Func(Rc::new(FuncValue {
            signature: signature.into(),
        }))
    }

    pub fn type_tag(&self) -> TypeTag {
        match self {
            JsonValue::Int(_) | JsonValue::Float(_) => TypeTag::Number,
            JsonValue::Str(_) => TypeTag::String,
            JsonValue::Bool(_) => TypeTag::Bool,
            JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => TypeTag::Object,
            JsonValue::Func(_) => TypeTag::Func,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Compare values for change detection.
    ///
    /// Numbers compare numerically across `Int`/`Float`, and two NaNs
    /// count as equal. Containers and functions compare by reference
    /// only.
    pub fn eq_value(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
            (JsonValue::Int(a), JsonValue::Int(b)) => a == b,
            (JsonValue::Int(a), JsonValue::Float(b)) | (JsonValue::Float(b), JsonValue::Int(a)) => {
                (*a as f64) == *b
            }
            (JsonValue::Float(a), JsonValue::Float(b)) => {
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (JsonValue::Str(a), JsonValue::Str(b)) => a == b,
            (JsonValue::Array(a), JsonValue::Array(b)) => Rc::ptr_eq(a, b),
            (JsonValue::Object(a), JsonValue::Object(b)) => Rc::ptr_eq(a, b),
            (JsonValue::Func(a), JsonValue::Func(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Memo-key equality: decides whether a snapshot counts as "the same
    /// input" for cached recomputation. Coincides with [`eq_value`] for
    /// this model but serves a different contract, so it has its own
    /// name.
    ///
    /// [`eq_value`]: JsonValue::eq_value
    pub fn same_snapshot(&self, other: &Self) -> bool {
        self.eq_value(other)
    }

    /// Convert to string for display.
    pub fn to_display_string(&self) -> SmartString {
        match self {
            JsonValue::Null => "null".into(),
            JsonValue::Bool(b) => if *b { "true" } else { "false" }.into(),
            JsonValue::Int(i) => i.to_string().into(),
            JsonValue::Float(f) => f.to_string().into(),
            JsonValue::Str(s) => s.clone(),
            JsonValue::Array(items) => format!("[{} items]", items.len()).into(),
            JsonValue::Object(members) => format!("{{{} keys}}", members.len()).into(),
            JsonValue::Func(f) => f.signature.clone(),
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Int(i)
                } else {
                    JsonValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => JsonValue::Str(s.into()),
            serde_json::Value::Array(items) => {
                JsonValue::Array(Rc::new(items.into_iter().map(Into::into).collect()))
            }
            serde_json::Value::Object(members) => JsonValue::Object(Rc::new(
                members
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            )),
        }
    }
}
