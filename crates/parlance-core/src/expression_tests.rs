use proptest::prelude::*;

use crate::{Edge, EdgeTarget, Expression, NodeId, Relation};

fn node(i: u32) -> NodeId {
    NodeId::from_raw(i)
}

fn edges(expression: &Expression, i: u32) -> Vec<Edge> {
    expression.iter_edges(node(i)).cloned().collect()
}

fn to_node(relation: &str, i: u32) -> Edge {
    Edge {
        relation: Relation::from(relation),
        target: EdgeTarget::Node(node(i)),
    }
}

fn to_literal(relation: &str, value: &str) -> Edge {
    Edge {
        relation: Relation::from(relation),
        target: EdgeTarget::Literal(value.to_owned()),
    }
}

#[test]
fn new_is_single_head_without_edges() {
    let e = Expression::new();
    assert_eq!(e.node_count(), 1);
    assert_eq!(e.edge_count(), 0);
    assert_eq!(e.head(), node(0));
    assert!(!e.has_edges(e.head()));
}

#[test]
fn decapitate_links_old_head_to_new_head() {
    let mut e = Expression::new();
    e.decapitate("isType", false);

    assert_eq!(e.head(), node(1));
    assert_eq!(edges(&e, 0), vec![to_node("isType", 1)]);
    assert!(edges(&e, 1).is_empty());
}

#[test]
fn decapitate_reversed_links_new_head_to_old_head() {
    let mut e = Expression::new();
    e.decapitate("isType", true);

    assert_eq!(e.head(), node(1));
    assert!(edges(&e, 0).is_empty());
    assert_eq!(edges(&e, 1), vec![to_node("isType", 0)]);
}

#[test]
fn add_data_attaches_literal_to_head() {
    let mut e = Expression::new();
    e.decapitate("a", false);
    e.add_data("name", "Y");
    e.add_data("name", "Z");

    assert_eq!(
        edges(&e, 1),
        vec![to_literal("name", "Y"), to_literal("name", "Z")]
    );
}

#[test]
fn merge_identifies_heads_and_allocates_fresh_nodes() {
    let mut a = Expression::new();
    a.add_data("label", "A");
    a.decapitate("r", false);

    // b: 0 -s-> 1 (head), 1 -label-> "B"
    let mut b = Expression::new();
    b.decapitate("s", false);
    b.add_data("label", "B");

    a.merge(&b);

    assert_eq!(a.node_count(), 3);
    assert_eq!(a.head(), node(1));
    // b's node 0 became a's node 2, b's head folded into a's head.
    assert_eq!(edges(&a, 2), vec![to_node("s", 1)]);
    assert_eq!(edges(&a, 1), vec![to_literal("label", "B")]);
    assert_eq!(edges(&a, 0), vec![to_literal("label", "A"), to_node("r", 1)]);

    assert_eq!(b.node_count(), 2);
    assert_eq!(b.head(), node(1));
}

#[test]
fn merge_with_non_zero_head_in_other() {
    let mut a = Expression::new();

    let mut b = Expression::new();
    b.decapitate("p", true);
    b.decapitate("q", false);

    a.merge(&b);

    // b: 1 -p-> 0, 1 -q-> 2 (head). Translation 0->1, 1->2, 2->0.
    assert_eq!(a.node_count(), 3);
    assert_eq!(edges(&a, 2), vec![to_node("p", 1), to_node("q", 0)]);
}

#[test]
fn add_leaves_operands_untouched() {
    let mut a = Expression::new();
    a.add_data("x", "1");
    let mut b = Expression::new();
    b.add_data("y", "2");

    let sum = &a + &b;

    assert_eq!(sum.node_count(), 1);
    assert_eq!(sum.edge_count(), 2);
    assert_eq!(a.edge_count(), 1);
    assert_eq!(b.edge_count(), 1);
}

#[test]
fn add_assign_merges_in_place() {
    let mut a = Expression::new();
    a.add_data("x", "1");
    let mut b = Expression::new();
    b.decapitate("y", false);

    a += &b;
    a += Expression::new();

    assert_eq!(a.node_count(), 2);
    assert_eq!(a.edge_count(), 2);
    assert_eq!(a.head(), node(0));
}

#[test]
fn raw_equality_is_index_sensitive() {
    let mut a = Expression::new();
    a.add_data("x", "1");
    let mut b = Expression::new();
    b.add_data("y", "2");

    assert_ne!(&a + &b, &b + &a);
    assert_eq!((&a + &b).canonical(), (&b + &a).canonical());
}

#[test]
fn anonymous_relation_is_distinct_from_named() {
    let mut e = Expression::new();
    e.decapitate(Relation::Anonymous, false);

    let edge = e.iter_edges(node(0)).next().unwrap();
    assert!(edge.relation.is_anonymous());
    assert_eq!(edge.relation.as_named(), None);
}

#[test]
#[should_panic(expected = "node x7 not found")]
fn iter_edges_on_foreign_node_panics() {
    let e = Expression::new();
    let _ = e.iter_edges(node(7));
}

#[test]
fn walk_starts_at_head_and_crosses_reversed_edges() {
    let mut e = Expression::new();
    e.decapitate("a", false);
    e.decapitate("b", true);

    assert_eq!(e.walk(), vec![node(2), node(1), node(0)]);
}

#[test]
fn display_lists_edges() {
    let mut e = Expression::new();
    e.add_data("rdf:type", "Person");
    e.decapitate("name", false);

    assert_eq!(
        e.to_string(),
        r#"head=x1; x0 -rdf:type-> "Person"; x0 -name-> x1"#
    );
}

pub(crate) fn arb_relation() -> impl Strategy<Value = Relation> {
    prop_oneof![
        4 => "[a-d]".prop_map(Relation::from),
        1 => Just(Relation::Anonymous),
    ]
}

pub(crate) fn arb_expression() -> impl Strategy<Value = Expression> {
    let leaf = prop_oneof![
        Just(Expression::new()),
        (arb_relation(), "[xyz]{1,2}").prop_map(|(relation, value)| {
            let mut e = Expression::new();
            e.add_data(relation, value);
            e
        }),
    ];
    leaf.prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            (inner.clone(), arb_relation(), any::<bool>()).prop_map(
                |(mut e, relation, reverse)| {
                    e.decapitate(relation, reverse);
                    e
                }
            ),
            (inner.clone(), arb_relation(), "[xyz]{1,2}").prop_map(
                |(mut e, relation, value)| {
                    e.add_data(relation, value);
                    e
                }
            ),
            (inner.clone(), inner).prop_map(|(a, b)| a + b),
        ]
    })
}

proptest! {
    #[test]
    fn walk_visits_every_node_once(e in arb_expression()) {
        let mut seen = e.walk();
        prop_assert_eq!(seen[0], e.head());
        seen.sort();
        let all: Vec<NodeId> = e.iter_nodes().collect();
        prop_assert_eq!(seen, all);
    }

    #[test]
    fn tree_has_one_node_edge_fewer_than_nodes(e in arb_expression()) {
        let node_edges = e
            .iter_nodes()
            .flat_map(|n| e.iter_edges(n))
            .filter(|edge| edge.target.as_node().is_some())
            .count();
        prop_assert_eq!(node_edges + 1, e.node_count());
    }

    #[test]
    fn merge_commutes_up_to_isomorphism(a in arb_expression(), b in arb_expression()) {
        prop_assert_eq!((&a + &b).canonical(), (&b + &a).canonical());
    }

    #[test]
    fn merge_associates_up_to_isomorphism(
        a in arb_expression(),
        b in arb_expression(),
        c in arb_expression(),
    ) {
        let left = &(&a + &b) + &c;
        let right = &a + &(&b + &c);
        prop_assert_eq!(left.canonical(), right.canonical());
    }

    #[test]
    fn decapitate_adds_one_node_and_one_edge(
        mut e in arb_expression(),
        relation in arb_relation(),
        reverse in any::<bool>(),
    ) {
        let old_head = e.head();
        let old_nodes = e.node_count();
        let old_edges = e.edge_count();
        let old_head_edges = e.iter_edges(old_head).count();

        e.decapitate(relation.clone(), reverse);

        let new_head = e.head();
        prop_assert_eq!(e.node_count(), old_nodes + 1);
        prop_assert_eq!(e.edge_count(), old_edges + 1);
        prop_assert_eq!(new_head.index(), old_nodes);

        let expected = Edge { relation, target: EdgeTarget::Node(if reverse { old_head } else { new_head }) };
        if reverse {
            prop_assert_eq!(e.iter_edges(old_head).count(), old_head_edges);
            prop_assert_eq!(e.iter_edges(new_head).cloned().collect::<Vec<_>>(), vec![expected]);
        } else {
            prop_assert_eq!(e.iter_edges(old_head).count(), old_head_edges + 1);
            prop_assert_eq!(e.iter_edges(old_head).last(), Some(&expected));
            prop_assert_eq!(e.iter_edges(new_head).count(), 0);
        }
    }
}
