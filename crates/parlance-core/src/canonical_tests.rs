use crate::{CanonicalTarget, Expression, Orientation, Relation};

fn chain(relations: &[&str]) -> Expression {
    let mut e = Expression::new();
    for relation in relations {
        e.decapitate(*relation, false);
    }
    e
}

#[test]
fn empty_expression_has_empty_canonical_form() {
    assert!(Expression::new().canonical().edges().is_empty());
}

#[test]
fn edges_are_sorted_independent_of_insertion() {
    let mut a = Expression::new();
    a.add_data("b", "2");
    a.add_data("a", "1");
    let mut b = Expression::new();
    b.add_data("a", "1");
    b.add_data("b", "2");

    assert_ne!(a, b);
    assert_eq!(a.canonical(), b.canonical());
    assert_eq!(a.canonical().to_string(), r#"(a "1" b "2")"#);
}

#[test]
fn direction_is_part_of_the_form() {
    let mut forward = Expression::new();
    forward.decapitate("r", false);
    let mut backward = Expression::new();
    backward.decapitate("r", true);

    let forward = forward.canonical();
    let backward = backward.canonical();
    assert_ne!(forward, backward);

    // Seen from the head, a forward decapitation is an incoming edge.
    assert_eq!(forward.edges()[0].orientation, Orientation::Backward);
    assert_eq!(backward.edges()[0].orientation, Orientation::Forward);
}

#[test]
fn head_position_is_part_of_the_form() {
    let mut a = chain(&["r"]);
    a.add_data("name", "X");

    let mut b = Expression::new();
    b.add_data("name", "X");
    b.decapitate("r", false);

    assert_ne!(a.canonical(), b.canonical());
}

#[test]
fn nested_subtrees_are_compared_structurally() {
    let mut left = chain(&["p"]);
    left.add_data("k", "v");
    let left = &left + &chain(&["q"]);

    let mut right = chain(&["q"]);
    right += &{
        let mut e = chain(&["p"]);
        e.add_data("k", "v");
        e
    };

    assert_eq!(left.canonical(), right.canonical());
    assert_eq!(left.canonical().to_string(), r#"(k "v" <-p () <-q ())"#);
}

#[test]
fn anonymous_relation_survives_canonicalization() {
    let mut e = Expression::new();
    e.add_data("kw", "x");
    e.decapitate(Relation::Anonymous, true);

    let form = e.canonical();
    let edge = &form.edges()[0];
    assert!(edge.relation.is_anonymous());
    let CanonicalTarget::Node(child) = &edge.target else {
        panic!("expected node target");
    };
    assert_eq!(child.to_string(), r#"(kw "x")"#);
}
