use jsonview_types::{JsonValue, TypeTag};
use tracing::trace;

/// Decide whether a value update warrants a flash.
///
/// Disabled highlighting or a first render (no previous snapshot) never
/// highlights. A coarse type change always does — absence counts as its
/// own coarse type here, so a defined value draining away is a type
/// change, while an absent previous snapshot is indistinguishable from
/// no prior render and stays silent. An array/object shape change also
/// highlights. Containers and functions otherwise never do: deep
/// comparison would be slow, so content changes behind an unchanged
/// reference stay invisible on purpose. Everything else highlights on
/// value inequality, with two NaNs counting as equal.
pub fn should_highlight(
    current: Option<&JsonValue>,
    previous: Option<&JsonValue>,
    enabled: bool,
) -> bool {
    if !enabled {
        return false;
    }
    let Some(previous) = previous else {
        return false;
    };
    let Some(current) = current else {
        // Previous was defined, current is not: a type change.
        return true;
    };

    let tag = current.type_tag();
    if tag != previous.type_tag() {
        return true;
    }
    if tag == TypeTag::Number {
        // eq_value treats NaN == NaN as equal.
        return !current.eq_value(previous);
    }
    if current.is_array() != previous.is_array() {
        return true;
    }
    if matches!(tag, TypeTag::Object | TypeTag::Func) {
        return false;
    }
    !current.eq_value(previous)
}

struct Cached {
    enabled: bool,
    current: Option<JsonValue>,
    verdict: bool,
}

fn same_input(a: Option<&JsonValue>, b: Option<&JsonValue>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same_snapshot(b),
        _ => false,
    }
}

/// Cached verdict keyed by `(enabled, current)`.
///
/// The previous snapshot is read lazily at recompute time and is not an
/// invalidation trigger: it only ever advances in lockstep with the
/// current value, so keying on it would recompute every verdict twice.
#[derive(Default)]
pub struct HighlightMemo {
    cached: Option<Cached>,
}

impl HighlightMemo {
    pub fn new() -> Self {
        Self { cached: None }
    }

    /// Return the verdict for `current`, recomputing only when `enabled`
    /// or `current` differs from the cached key.
    pub fn check(
        &mut self,
        current: Option<&JsonValue>,
        enabled: bool,
        previous: Option<&JsonValue>,
    ) -> bool {
        if let Some(cached) = &self.cached {
            if cached.enabled == enabled && same_input(cached.current.as_ref(), current) {
                return cached.verdict;
            }
        }

        let verdict = should_highlight(current, previous, enabled);
        trace!(verdict, enabled, "classified value update");
        self.cached = Some(Cached {
            enabled,
            current: current.cloned(),
            verdict,
        });
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_never_highlights() {
        let prev = JsonValue::Int(5);
        assert!(!should_highlight(Some(&JsonValue::Int(6)), Some(&prev), false));
        assert!(!should_highlight(Some(&JsonValue::str("x")), Some(&prev), false));
    }

    #[test]
    fn test_first_render_never_highlights() {
        assert!(!should_highlight(Some(&JsonValue::Int(6)), None, true));
    }

    #[test]
    fn test_numeric_change() {
        let prev = JsonValue::Int(5);
        assert!(should_highlight(Some(&JsonValue::Int(6)), Some(&prev), true));
        assert!(!should_highlight(Some(&JsonValue::Int(5)), Some(&prev), true));
    }

    #[test]
    fn test_both_nan_is_not_a_change() {
        let prev = JsonValue::Float(f64::NAN);
        assert!(!should_highlight(
            Some(&JsonValue::Float(f64::NAN)),
            Some(&prev),
            true
        ));
        assert!(should_highlight(Some(&JsonValue::Float(1.0)), Some(&prev), true));
    }

    #[test]
    fn test_type_change_always_highlights() {
        let prev = JsonValue::str("5");
        assert!(should_highlight(Some(&JsonValue::Int(5)), Some(&prev), true));

        let prev = JsonValue::Bool(true);
        assert!(should_highlight(Some(&JsonValue::Int(1)), Some(&prev), true));
    }

    #[test]
    fn test_array_object_shape_change() {
        let prev = JsonValue::object(vec![]);
        assert!(should_highlight(Some(&JsonValue::array(vec![])), Some(&prev), true));

        let prev = JsonValue::array(vec![]);
        assert!(should_highlight(
            Some(&JsonValue::object(vec![])),
            Some(&prev),
            true
        ));
    }

    #[test]
    fn test_defined_to_absent_is_a_type_change() {
        let prev = JsonValue::Int(5);
        assert!(should_highlight(None, Some(&prev), true));
        assert!(!should_highlight(None, Some(&prev), false));

        // Both absent: nothing to compare.
        assert!(!should_highlight(None, None, true));
    }

    #[test]
    fn test_container_contents_never_highlight() {
        let prev = JsonValue::object(vec![("a".into(), JsonValue::Int(1))]);
        let next = JsonValue::object(vec![("a".into(), JsonValue::Int(2))]);
        assert!(!should_highlight(Some(&next), Some(&prev), true));

        // Array length changes do not count as a shape change either.
        let prev = JsonValue::array(vec![JsonValue::Int(1)]);
        let next = JsonValue::array(vec![JsonValue::Int(1), JsonValue::Int(2)]);
        assert!(!should_highlight(Some(&next), Some(&prev), true));

        let prev = JsonValue::func("fn a()");
        let next = JsonValue::func("fn b()");
        assert!(!should_highlight(Some(&next), Some(&prev), true));
    }

    #[test]
    fn test_null_to_object_is_not_a_type_change() {
        let prev = JsonValue::object(vec![]);
        assert!(!should_highlight(Some(&JsonValue::Null), Some(&prev), true));
    }

    #[test]
    fn test_string_and_bool_changes() {
        let prev = JsonValue::str("a");
        assert!(should_highlight(Some(&JsonValue::str("b")), Some(&prev), true));
        assert!(!should_highlight(Some(&JsonValue::str("a")), Some(&prev), true));

        let prev = JsonValue::Bool(true);
        assert!(should_highlight(Some(&JsonValue::Bool(false)), Some(&prev), true));
    }

    #[test]
    fn test_idempotent() {
        let prev = JsonValue::Int(5);
        let current = JsonValue::Int(6);
        for _ in 0..3 {
            assert!(should_highlight(Some(&current), Some(&prev), true));
        }
    }

    #[test]
    fn test_memo_caches_until_key_changes() {
        let mut memo = HighlightMemo::new();
        let five = JsonValue::Int(5);
        let six = JsonValue::Int(6);

        // First render: no previous snapshot.
        assert!(!memo.check(Some(&five), true, None));

        // The tracker has advanced but the (enabled, current) key has not:
        // the cached verdict stands, the previous snapshot is not a
        // recompute trigger.
        assert!(!memo.check(Some(&five), true, Some(&JsonValue::Int(4))));

        // Changing the current value invalidates.
        assert!(memo.check(Some(&six), true, Some(&five)));

        // Toggling the flag invalidates.
        assert!(!memo.check(Some(&six), false, Some(&five)));
        assert!(memo.check(Some(&six), true, Some(&five)));

        // A value draining away is a fresh key and a type change.
        assert!(memo.check(None, true, Some(&six)));
        assert!(memo.check(None, true, Some(&six)));
    }

    #[test]
    fn test_memo_container_identity_key() {
        let mut memo = HighlightMemo::new();
        let obj = JsonValue::object(vec![("a".into(), JsonValue::Int(1))]);
        assert!(!memo.check(Some(&obj), true, None));

        // Same reference: cache hit.
        assert!(!memo.check(Some(&obj.clone()), true, Some(&obj)));

        // Fresh allocation with equal contents: recompute (still false,
        // container contents never highlight).
        let rebuilt = JsonValue::object(vec![("a".into(), JsonValue::Int(1))]);
        assert!(!memo.check(Some(&rebuilt), true, Some(&obj)));
    }
}
