use num_bigint::BigUint;
use proptest::prelude::*;
use whilelang::{
    ast::{CmpMode, Node},
    error::NumericError,
    get_result,
    interpreter::{evaluator::core::Outcome, value::{core::Value, namespace::Namespace}},
    numeric::{arith_from_num, bool_from_num, phi, phi_prime, stmt_from_num},
};

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![(0u32..20).prop_map(|n| Node::constant(i64::from(n))),
                prop::sample::select(vec!["x", "y", "z"]).prop_map(Node::variable),]
}

/// Arithmetic trees whose left operands are leaves. Nesting on the right
/// keeps the pairing exponents small.
fn arith_tree() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(4, 8, 1, |inner| {
              (leaf(), inner, 0u8..3).prop_map(|(lhs, rhs, op)| match op {
                                         0 => Node::add(lhs, rhs),
                                         1 => Node::sub(lhs, rhs),
                                         _ => Node::mul(lhs, rhs),
                                     })
          })
}

fn small_arith() -> impl Strategy<Value = Node> {
    prop_oneof![(0u32..3).prop_map(|n| Node::constant(i64::from(n))),
                prop::sample::select(vec!["x", "y", "z"]).prop_map(Node::variable),]
}

fn comparison() -> impl Strategy<Value = Node> {
    prop_oneof![any::<bool>().prop_map(Node::constant),
                (small_arith(), small_arith()).prop_map(|(l, r)| Node::equal(l, r)),
                (small_arith(), small_arith()).prop_map(|(l, r)| {
                                                  Node::cmp(CmpMode::LessEqual, l, r)
                                              }),]
}

/// Conditions whose operands are never bare variables, so `&` stays
/// encodable.
fn condition() -> impl Strategy<Value = Node> {
    prop_oneof![comparison(),
                (any::<bool>(), comparison()).prop_map(|(b, rhs)| {
                                                 Node::and(Node::constant(b), rhs)
                                             }),]
}

fn statement_tree() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![Just(Node::Skip),
                           (prop::sample::select(vec!["x", "y", "z"]), small_arith())
                               .prop_map(|(name, value)| Node::assign(name, value)),];
    leaf.prop_recursive(3, 12, 4, |inner| {
            prop_oneof![(condition(), inner.clone()).prop_map(|(c, body)| Node::while_loop(c, body)),
                        (condition(), inner.clone()).prop_map(|(c, then_branch)| {
                                                        Node::if_then(c, then_branch, None)
                                                    }),
                        prop::collection::vec(inner, 2..5).prop_map(Node::Suite),]
        })
}

fn eval_var(source: &str, name: &str) -> Value {
    match get_result(source, Namespace::new()) {
        Ok((namespace, Outcome::Completed(_))) => namespace.get_or_default(name),
        Ok((_, outcome)) => panic!("{source:?} did not complete: {outcome:?}"),
        Err(e) => panic!("{source:?} did not parse: {e}"),
    }
}

proptest! {
    #[test]
    fn phi_prime_inverts_phi(n in 0u32..64, m in any::<u64>()) {
        let x = phi(&BigUint::from(n), &BigUint::from(m)).unwrap();
        prop_assert_eq!(phi_prime(&x), (BigUint::from(n), BigUint::from(m)));
    }

    #[test]
    fn phi_inverts_phi_prime(x in any::<u64>()) {
        let (n, m) = phi_prime(&BigUint::from(x));
        prop_assert_eq!(phi(&n, &m).unwrap(), BigUint::from(x));
    }

    #[test]
    fn decoded_arithmetic_encodes_back(num in 0u32..200_000) {
        let num = BigUint::from(num);
        if let Ok(tree) = arith_from_num(&num) {
            prop_assert_eq!(tree.numeric().unwrap(), num);
        }
    }

    #[test]
    fn decoded_booleans_encode_back(num in 0u32..200_000) {
        let num = BigUint::from(num);
        if let Ok(tree) = bool_from_num(&num) {
            prop_assert_eq!(tree.numeric().unwrap(), num);
        }
    }

    #[test]
    fn decoded_statements_encode_back(num in 0u32..200_000) {
        let num = BigUint::from(num);
        if let Ok(tree) = stmt_from_num(&num) {
            prop_assert_eq!(tree.numeric().unwrap(), num);
        }
    }

    #[test]
    fn arithmetic_trees_survive_numbering(tree in arith_tree()) {
        let num = tree.numeric().unwrap();
        prop_assert_eq!(arith_from_num(&num).unwrap(), tree);
    }

    #[test]
    fn assignments_survive_numbering(name in prop::sample::select(vec!["x", "y", "z"]),
                                     value in arith_tree()) {
        let tree = Node::assign(name, value);
        let num = tree.numeric().unwrap();
        prop_assert_eq!(stmt_from_num(&num).unwrap(), tree);
    }

    #[test]
    fn statements_render_the_same_after_numbering(tree in statement_tree()) {
        let num = match tree.numeric() {
            Ok(num) => num,
            Err(NumericError::TooLarge) => return Ok(()),
            Err(e) => panic!("{tree} failed to encode: {e}"),
        };
        let decoded = stmt_from_num(&num).unwrap();
        prop_assert_eq!(decoded.to_string(), tree.to_string());
    }

    #[test]
    fn less_equal_survives_numbering(lhs in leaf(), rhs in arith_tree()) {
        let tree = Node::not(Node::cmp(CmpMode::LessEqual, lhs, rhs));
        let num = tree.numeric().unwrap();
        prop_assert_eq!(bool_from_num(&num).unwrap(), tree);
    }

    #[test]
    fn evaluation_matches_machine_arithmetic(a in 0i64..10_000, b in 0i64..1_000, c in 0i64..1_000) {
        let source = format!("x := {a} - {b} * {c}");
        prop_assert_eq!(eval_var(&source, "x"), Value::from(a - b * c));
    }

    #[test]
    fn division_truncates_toward_zero(a in 0i64..10_000, b in 1i64..100) {
        let source = format!("x := (0 - {a}) / {b}; y := {a} / {b}");
        prop_assert_eq!(eval_var(&source, "x"), Value::from(-a / b));
        prop_assert_eq!(eval_var(&source, "y"), Value::from(a / b));
    }

    #[test]
    fn encoding_through_the_language_matches_the_library(value in 0u32..1_000) {
        let source = format!("n := (@numeric (y := {value}))");
        let expected = Node::assign("y", Node::constant(i64::from(value))).numeric().unwrap();
        prop_assert_eq!(eval_var(&source, "n"), Value::Integer(expected.into()));
    }
}

#[test]
fn longer_suites_render_flat_after_numbering() {
    let sources = ["x := 1; y := 2; z := 3",
                   "while x <= 1 do (x := 0)",
                   "(while true do (skip)); x := 0",
                   "x := 0; y := x; skip; (if true & 1 = y then z := 2)"];
    for source in sources {
        let tree = whilelang::parse(source).unwrap();
        let decoded = stmt_from_num(&tree.numeric().unwrap()).unwrap();
        assert_eq!(decoded.to_string(), tree.to_string(), "{source}");
    }
}

#[test]
fn constants_and_variables_have_fixed_numbers() {
    assert_eq!(Node::constant(3).numeric().unwrap(), BigUint::from(15u32));
    assert_eq!(Node::variable("z").numeric().unwrap(), BigUint::from(11u32));
    assert_eq!(Node::assign("x", Node::constant(1)).numeric().unwrap(), BigUint::from(42u32));
}

#[test]
fn bare_variables_cannot_be_combined_logically() {
    assert!(Node::and(Node::variable("x"), Node::constant(true)).numeric().is_err());
    assert!(Node::or(Node::constant(true), Node::variable("y")).numeric().is_err());
}

#[test]
fn deep_left_nesting_is_too_large() {
    let mut tree = Node::constant(1);
    for _ in 0..4 {
        tree = Node::add(tree, Node::constant(1));
    }
    assert!(tree.numeric().is_err());
}
