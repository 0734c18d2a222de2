use super::*;
use crate::printer::{show, shows};

// =============================================================================
// PRINTER FORMAT
// =============================================================================
//
// The rendering is compared byte for byte by external tooling, so these
// tests pin exact strings.

#[test]
fn compound_with_variable_field() {
    // Third variable from a fresh registry has id 2.
    let (_registry, vs) = vars(3);
    let t = Term::compound(5, vec![Term::int(1), vs[2].clone()]);
    assert_eq!(show(&t), "C5((1)(<v2>))");
}

#[test]
fn nested_compound_rendering() {
    let t = Term::compound(
        1,
        vec![
            Term::compound(0, vec![]),
            Term::string("x"),
            Term::float_array(vec![0.5]),
        ],
    );
    assert_eq!(show(&t), "C1((C0())(str:x)([|0.5; |]))");
}

#[test]
fn unification_result_rendering() {
    let (_registry, vs) = vars(2);
    let t1 = Term::tuple(vec![vs[0].clone(), vs[1].clone()]);
    let t2 = Term::tuple(vec![Term::string("a"), Term::list(vec![Term::int(7)])]);
    let sigma = unify(&t1, &t2).expect("should unify");
    assert_eq!(shows(&sigma), "<v1> / C0((7)(0)) , <v0> / str:a");
    assert_eq!(sigma.to_string(), shows(&sigma));
}

#[test]
fn variable_to_variable_binding_rendering() {
    let (_registry, vs) = vars(2);
    let sigma = unify(&vs[1], &vs[0]).expect("should bind");
    assert_eq!(shows(&sigma), "<v1> / <v0>");
}

#[test]
fn circular_binding_renders_finitely() {
    let (_registry, vs) = vars(1);
    let cyclic = Term::compound(4, vec![vs[0].clone()]);
    let sigma = unify(&vs[0], &cyclic).expect("no occurs check");
    assert_eq!(shows(&sigma), "<v0> / C4((<v0>))");
}
