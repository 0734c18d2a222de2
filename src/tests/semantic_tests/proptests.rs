use super::*;
use proptest::prelude::*;

// =============================================================================
// PROPERTY-BASED TESTS
// =============================================================================
//
// These use proptest to check the unifier on arbitrary terms. Variables are
// drawn from a small fixed pool so that shared variables are common.

const VAR_POOL: u64 = 4;

fn pool_var(index: u64) -> Term {
    Term::var(Var::from_id(1_000_000 + index))
}

fn arb_atomic() -> impl Strategy<Value = Term> {
    prop_oneof![
        (-3i64..3).prop_map(Term::int),
        any::<bool>().prop_map(Term::bool),
        prop::char::range('\0', 'c').prop_map(Term::char),
        "[a-c]{0,2}".prop_map(|s| Term::string(s)),
        (-2i32..2).prop_map(|n| Term::float(f64::from(n) / 2.0)),
        (0u64..2).prop_map(Term::abstract_handle),
    ]
}

fn arb_ground_term() -> impl Strategy<Value = Term> {
    arb_atomic().prop_recursive(3, 24, 3, |inner| {
        (0u8..3, prop::collection::vec(inner, 0..=3))
            .prop_map(|(tag, fields)| Term::compound(tag, fields))
    })
}

fn arb_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        3 => arb_atomic(),
        1 => (0..VAR_POOL).prop_map(pool_var),
    ];
    leaf.prop_recursive(3, 24, 3, |inner| {
        (0u8..3, prop::collection::vec(inner, 0..=3))
            .prop_map(|(tag, fields)| Term::compound(tag, fields))
    })
}

// -------------------------------------------------------------------------
// Self-unification of ground terms needs no bindings
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn ground_self_unification_is_empty(term in arb_ground_term()) {
        let sigma = unify(&term, &term.clone());
        prop_assert_eq!(sigma, Ok(Substitution::empty()));
    }
}

// -------------------------------------------------------------------------
// Any term, variables included, unifies with a copy of itself
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn self_unification_succeeds(term in arb_term()) {
        let sigma = unify(&term, &term.clone());
        prop_assert!(sigma.is_ok());
    }
}

// -------------------------------------------------------------------------
// Success and failure do not depend on argument order
//
// The right side is ground: with variables on both sides, circular bindings
// can make one order run into the depth limit while the other succeeds.
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn unification_outcome_is_symmetric(a in arb_term(), b in arb_ground_term()) {
        let forward = unify(&a, &b);
        let backward = unify(&b, &a);
        prop_assert_eq!(forward.is_ok(), backward.is_ok());
    }
}

// -------------------------------------------------------------------------
// After success, both sides resolve to structurally equal terms
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn unifier_equates_resolved_terms(a in arb_term(), b in arb_ground_term()) {
        if let Ok(sigma) = unify(&a, &b) {
            let ra = sigma.resolve(&a);
            let rb = sigma.resolve(&b);
            prop_assert!(
                ra.structurally_equal(&rb),
                "{} and {} should resolve equal under {}",
                a,
                b,
                sigma
            );
        }
    }
}

// -------------------------------------------------------------------------
// Walk is idempotent under any substitution the unifier builds
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn walk_is_idempotent(a in arb_term(), b in arb_term()) {
        let unifier = Unifier::new(UnifyConfig::default().with_max_depth(32));
        if let Ok(sigma) = unifier.unify(&a, &b) {
            for i in 0..VAR_POOL {
                let v = pool_var(i);
                let once = sigma.walk(&v);
                prop_assert_eq!(sigma.walk(once), once);
            }
        }
    }
}

// -------------------------------------------------------------------------
// Compounds of different shape always fail with SizeOrTagMismatch
// -------------------------------------------------------------------------
proptest! {
    #[test]
    fn shape_mismatch_is_detected(
        fields_a in prop::collection::vec(arb_term(), 0..=3),
        fields_b in prop::collection::vec(arb_term(), 0..=3),
        tag in 0u8..3,
    ) {
        let a = Term::compound(tag, fields_a.clone());
        let b = Term::compound(tag + 1, fields_b.clone());
        let is_size_or_tag_mismatch =
            matches!(unify(&a, &b), Err(UnifyError::SizeOrTagMismatch { .. }));
        prop_assert!(is_size_or_tag_mismatch);
        if fields_a.len() != fields_b.len() {
            let c = Term::compound(tag, fields_b);
            let is_size_or_tag_mismatch =
                matches!(unify(&a, &c), Err(UnifyError::SizeOrTagMismatch { .. }));
            prop_assert!(is_size_or_tag_mismatch);
        }
    }
}
