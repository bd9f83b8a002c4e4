use crate::ast::Index;
use crate::ast::Node;
use crate::ast::NodeKind;

#[test]
fn nodes_accumulate_under_a_name_in_insertion_order() {
    let mut index = Index::new();
    let base = Node::new(NodeKind::ObjectTypeDefinition, 0);
    let extension = Node::new(NodeKind::ObjectTypeExtension, 0);
    index.add_node(b"User", base);
    index.add_node(b"Query", Node::new(NodeKind::ObjectTypeDefinition, 1));
    index.add_node(b"User", extension);

    assert_eq!(index.len(), 2);
    assert_eq!(index.first_node_by_name(b"User"), Some(base));
    assert_eq!(index.first_node_by_name_str("User"), Some(base));
    assert_eq!(index.nodes_by_name(b"User"), &[base, extension]);
    assert_eq!(index.names().collect::<Vec<_>>(), vec![b"User".as_slice(), b"Query"]);
}

#[test]
fn missing_names_yield_nothing() {
    let index = Index::new();
    assert!(index.is_empty());
    assert_eq!(index.first_node_by_name(b"Nope"), None);
    assert!(index.nodes_by_name(b"Nope").is_empty());
}

#[test]
fn remove_drops_every_node_for_a_name() {
    let mut index = Index::new();
    index.add_node(b"A", Node::new(NodeKind::EnumTypeDefinition, 0));
    index.add_node(b"A", Node::new(NodeKind::EnumTypeExtension, 0));
    index.add_node(b"B", Node::new(NodeKind::ScalarTypeDefinition, 0));
    index.remove_node_by_name(b"A");
    assert_eq!(index.first_node_by_name(b"A"), None);
    assert_eq!(index.names().collect::<Vec<_>>(), vec![b"B".as_slice()]);
}

#[test]
fn root_type_names_round_trip_and_reset() {
    let mut index = Index::new();
    assert_eq!(index.query_type_name(), None);

    index.set_query_type_name(b"Root");
    index.set_mutation_type_name(b"Mut");
    index.set_subscription_type_name(b"Sub");
    index.set_query_type_name(b"Query");
    assert_eq!(index.query_type_name(), Some(b"Query".as_slice()));
    assert_eq!(index.mutation_type_name(), Some(b"Mut".as_slice()));
    assert_eq!(index.subscription_type_name(), Some(b"Sub".as_slice()));

    index.add_node(b"Query", Node::new(NodeKind::ObjectTypeDefinition, 0));
    index.reset();
    assert!(index.is_empty());
    assert_eq!(index.query_type_name(), None);
    assert_eq!(index.subscription_type_name(), None);
}
