//! Reference statement emission.

use crate::codegen::primitives::{format_expanded_node_id, format_node_id};
use crate::model::Reference;

/// Emits the statement that wires one directed reference.
///
/// Forward and inverse references name the same three operands in the same
/// order; only the trailing boolean differs.
pub fn emit_reference(reference: &Reference) -> String {
    let direction = if reference.is_forward { "true" } else { "false" };
    format!(
        "UA_Server_addReference(server, {}, {}, {}, {});",
        format_node_id(&reference.source),
        format_node_id(&reference.reference_type),
        format_expanded_node_id(&reference.target),
        direction
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ns0, NodeId};

    fn reference(is_forward: bool) -> Reference {
        Reference {
            source: NodeId::numeric(1, 5001),
            reference_type: ns0::HAS_COMPONENT,
            target: NodeId::numeric(1, 6001).into(),
            is_forward,
        }
    }

    #[test]
    fn test_forward_reference() {
        assert_eq!(
            emit_reference(&reference(true)),
            "UA_Server_addReference(server, UA_NODEID_NUMERIC(1, 5001), \
             UA_NODEID_NUMERIC(0, 47), UA_EXPANDEDNODEID_NUMERIC(1, 6001), true);"
        );
    }

    #[test]
    fn test_inverse_reference() {
        assert_eq!(
            emit_reference(&reference(false)),
            "UA_Server_addReference(server, UA_NODEID_NUMERIC(1, 5001), \
             UA_NODEID_NUMERIC(0, 47), UA_EXPANDEDNODEID_NUMERIC(1, 6001), false);"
        );
    }

    #[test]
    fn test_forms_differ_only_in_trailing_boolean() {
        let forward = emit_reference(&reference(true));
        let inverse = emit_reference(&reference(false));
        assert_eq!(
            forward.strip_suffix("true);").unwrap(),
            inverse.strip_suffix("false);").unwrap()
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn node_id_strategy() -> impl Strategy<Value = NodeId> {
            prop_oneof![
                (any::<u16>(), any::<u32>()).prop_map(|(ns, n)| NodeId::numeric(ns, n)),
                (any::<u16>(), "[A-Za-z0-9 ._-]{0,24}")
                    .prop_map(|(ns, s)| NodeId::string(ns, s)),
            ]
        }

        proptest! {
            #[test]
            fn forward_and_inverse_share_a_prefix(
                source in node_id_strategy(),
                reference_type in node_id_strategy(),
                target in node_id_strategy(),
            ) {
                let forward = emit_reference(&Reference {
                    source: source.clone(),
                    reference_type: reference_type.clone(),
                    target: target.clone().into(),
                    is_forward: true,
                });
                let inverse = emit_reference(&Reference {
                    source,
                    reference_type,
                    target: target.into(),
                    is_forward: false,
                });
                prop_assert_eq!(
                    forward.strip_suffix("true);").unwrap(),
                    inverse.strip_suffix("false);").unwrap()
                );
            }
        }
    }
}
