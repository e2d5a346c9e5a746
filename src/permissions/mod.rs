//! The Permission Resolver.
//!
//! Decides whether an actor may run an action, from the action's base
//! `allowed`/`denied` role lists plus its ordered field-matching
//! overrides. The ordering contract matters because several overrides can
//! match the same field snapshot (e.g. a card that is already face-up):
//! overrides are evaluated in declaration order and the **last** matching
//! override wins, superseding the base decision and all earlier matches.
//! Within any single rule, an explicit deny beats an allow.

use std::collections::BTreeMap;

use crate::config::PermissionRule;
use crate::core::RoleId;

/// Field values relevant to an action's override conditions, e.g.
/// `{"isFaceUp": "true", "containerId": "field3"}`.
pub type FieldSnapshot = BTreeMap<String, String>;

/// Which rule produced a denial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleSource {
    /// The action's base allow/deny lists.
    Base,
    /// The override at this declaration index.
    Override { index: usize },
}

/// The outcome of permission resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied { source: RuleSource },
}

impl Decision {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

fn holds_any(roles: &[RoleId], list: &[RoleId]) -> bool {
    roles.iter().any(|role| list.contains(role))
}

/// Resolve an action attempt against a permission rule.
///
/// Deterministic: the same role set and field snapshot always yield the
/// same decision.
#[must_use]
pub fn resolve(rule: &PermissionRule, roles: &[RoleId], fields: &FieldSnapshot) -> Decision {
    let mut allowed = holds_any(roles, &rule.allowed) && !holds_any(roles, &rule.denied);
    let mut source = RuleSource::Base;

    for (index, over) in rule.overrides.iter().enumerate() {
        let applies = over.condition.iter().all(|(field, pattern)| {
            fields.get(field).is_some_and(|value| pattern.matches(value))
        });
        if applies {
            allowed = holds_any(roles, &over.allowed) && !holds_any(roles, &over.denied);
            source = RuleSource::Override { index };
        }
    }

    if allowed {
        Decision::Allowed
    } else {
        Decision::Denied { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rule(value: serde_json::Value) -> PermissionRule {
        serde_json::from_value(value).unwrap()
    }

    fn roles(names: &[&str]) -> Vec<RoleId> {
        names.iter().map(|n| RoleId::new(*n)).collect()
    }

    fn fields(pairs: &[(&str, &str)]) -> FieldSnapshot {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_base_allow_and_deny() {
        let rule = rule(json!({"allowed": ["currentPlayer"], "denied": ["spectator"]}));

        assert!(resolve(&rule, &roles(&["currentPlayer"]), &fields(&[])).is_allowed());
        assert_eq!(
            resolve(&rule, &roles(&["other"]), &fields(&[])),
            Decision::Denied { source: RuleSource::Base }
        );

        // Explicit deny wins over allow when both match.
        assert_eq!(
            resolve(&rule, &roles(&["currentPlayer", "spectator"]), &fields(&[])),
            Decision::Denied { source: RuleSource::Base }
        );
    }

    #[test]
    fn test_empty_rule_denies() {
        let rule = rule(json!({}));
        assert!(!resolve(&rule, &roles(&["currentPlayer"]), &fields(&[])).is_allowed());
    }

    #[test]
    fn test_override_supersedes_base() {
        // Flipping an already-face-up card is forbidden for everyone.
        let rule = rule(json!({
            "allowed": ["currentPlayer"],
            "overrides": [
                {"condition": {"isFaceUp": "true"}, "denied": ["currentPlayer"]}
            ]
        }));
        let actor = roles(&["currentPlayer"]);

        assert!(resolve(&rule, &actor, &fields(&[("isFaceUp", "false")])).is_allowed());
        assert_eq!(
            resolve(&rule, &actor, &fields(&[("isFaceUp", "true")])),
            Decision::Denied { source: RuleSource::Override { index: 0 } }
        );
    }

    #[test]
    fn test_override_requires_all_condition_fields() {
        let rule = rule(json!({
            "allowed": ["currentPlayer"],
            "overrides": [
                {
                    "condition": {"isFaceUp": "true", "containerId": "^field"},
                    "denied": ["currentPlayer"]
                }
            ]
        }));
        let actor = roles(&["currentPlayer"]);

        // One field matches, the other is absent from the snapshot.
        assert!(resolve(&rule, &actor, &fields(&[("isFaceUp", "true")])).is_allowed());

        assert!(!resolve(
            &rule,
            &actor,
            &fields(&[("isFaceUp", "true"), ("containerId", "field3")])
        )
        .is_allowed());
    }

    #[test]
    fn test_last_matching_override_wins() {
        let forward = rule(json!({
            "overrides": [
                {"condition": {"isFaceUp": "true"}, "denied": ["currentPlayer"]},
                {"condition": {"isFaceUp": ".*"}, "allowed": ["currentPlayer"]}
            ]
        }));
        let actor = roles(&["currentPlayer"]);
        let snapshot = fields(&[("isFaceUp", "true")]);

        // Both overrides match; the later allow supersedes the earlier deny.
        assert!(resolve(&forward, &actor, &snapshot).is_allowed());

        // Reversed declaration order flips the outcome.
        let reversed = rule(json!({
            "overrides": [
                {"condition": {"isFaceUp": ".*"}, "allowed": ["currentPlayer"]},
                {"condition": {"isFaceUp": "true"}, "denied": ["currentPlayer"]}
            ]
        }));
        assert_eq!(
            resolve(&reversed, &actor, &snapshot),
            Decision::Denied { source: RuleSource::Override { index: 1 } }
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let rule = rule(json!({
            "allowed": ["currentPlayer"],
            "overrides": [
                {"condition": {"isFaceUp": "true"}, "denied": ["currentPlayer"]},
                {"condition": {"containerId": "^field"}, "allowed": ["observer"]}
            ]
        }));

        let snapshot = fields(&[("isFaceUp", "true"), ("containerId", "field1")]);
        let actor = roles(&["currentPlayer", "observer"]);

        let first = resolve(&rule, &actor, &snapshot);
        for _ in 0..100 {
            assert_eq!(resolve(&rule, &actor, &snapshot), first);
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_roles() -> impl Strategy<Value = Vec<RoleId>> {
            proptest::collection::vec("[a-c]{1,2}".prop_map(RoleId::new), 0..4)
        }

        fn arb_fields() -> impl Strategy<Value = FieldSnapshot> {
            proptest::collection::btree_map("[a-b]{1}", "(true|false)", 0..3)
        }

        proptest! {
            #[test]
            fn repeated_evaluation_is_stable(actor in arb_roles(), snapshot in arb_fields()) {
                let rule: PermissionRule = serde_json::from_value(serde_json::json!({
                    "allowed": ["a"],
                    "denied": ["b"],
                    "overrides": [
                        {"condition": {"a": "true"}, "allowed": ["c"]},
                        {"condition": {"b": "false"}, "denied": ["a", "c"]}
                    ]
                })).unwrap();

                let first = resolve(&rule, &actor, &snapshot);
                prop_assert_eq!(resolve(&rule, &actor, &snapshot), first);
            }
        }
    }
}
