#![cfg(all(feature = "serde", feature = "tree"))]
//! Serialization tests for the value types.

use lambars_foldable::fold::to_vec;
use lambars_foldable::tree::Tree;
use lambars_foldable::typeclass::{Identity, Max, Min, Product, Sum};
use rstest::rstest;

#[rstest]
fn tree_round_trips_through_json() {
    let tree = Tree::new(1, vec![Tree::new(2, vec![Tree::leaf(3)]), Tree::leaf(4)]);
    let json = serde_json::to_string(&tree).unwrap();
    let restored: Tree<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, tree);
    assert_eq!(to_vec(restored), vec![1, 2, 3, 4]);
}

#[rstest]
fn leaf_serializes_with_empty_forest() {
    let json = serde_json::to_value(Tree::leaf("x")).unwrap();
    assert_eq!(json, serde_json::json!({ "value": "x", "forest": [] }));
}

#[rstest]
fn tree_deserializes_from_hand_written_json() {
    let json = r#"{"value":"a","forest":[{"value":"b","forest":[]}]}"#;
    let tree: Tree<String> = serde_json::from_str(json).unwrap();
    assert_eq!(to_vec(tree), vec!["a".to_string(), "b".to_string()]);
}

#[rstest]
fn wrappers_are_transparent() {
    assert_eq!(serde_json::to_string(&Sum(3)).unwrap(), "3");
    assert_eq!(serde_json::to_string(&Product(4)).unwrap(), "4");
    assert_eq!(serde_json::to_string(&Max(5)).unwrap(), "5");
    assert_eq!(serde_json::to_string(&Min(-6)).unwrap(), "-6");

    let restored: Sum<i64> = serde_json::from_str("42").unwrap();
    assert_eq!(restored, Sum(42));
}

#[rstest]
fn identity_round_trips() {
    let value = Identity::new(vec![1, 2, 3]);
    let json = serde_json::to_string(&value).unwrap();
    let restored: Identity<Vec<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}
