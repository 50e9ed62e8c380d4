//! Argument normalization for multi-value operators.
//!
//! Every operator that accepts "one or more values" takes a single `impl Args<T>`
//! parameter. The call shapes below all flatten to the same ordered `Vec<T>`:
//!
//! - one bare value: `of_op(EntityOp::QueryAll)`
//! - several values as an array literal: `of_op([EntityOp::QueryAll, EntityOp::QueryMany])`
//! - one collection: `of_op(ops)` / `of_op(&ops)` with `ops: Vec<EntityOp>`
//! - values spread from an existing collection: `of_op(&ops[..])`
//!
//! String-valued operators also take `&str` elements in each shape.

use actionbus_core::EntityOp;

/// One or more values of `T`, in any supported call shape.
pub trait Args<T> {
    /// Flatten into one ordered collection.
    fn flatten_args(self) -> Vec<T>;
}

/// Free-function form of [`Args::flatten_args`].
pub fn flatten_args<T>(args: impl Args<T>) -> Vec<T> {
    args.flatten_args()
}

impl Args<EntityOp> for EntityOp {
    fn flatten_args(self) -> Vec<EntityOp> {
        vec![self]
    }
}

impl Args<EntityOp> for &EntityOp {
    fn flatten_args(self) -> Vec<EntityOp> {
        vec![self.clone()]
    }
}

impl Args<String> for String {
    fn flatten_args(self) -> Vec<String> {
        vec![self]
    }
}

impl Args<String> for &String {
    fn flatten_args(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl Args<String> for &str {
    fn flatten_args(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl<T> Args<T> for Vec<T> {
    fn flatten_args(self) -> Vec<T> {
        self
    }
}

impl<T: Clone> Args<T> for &Vec<T> {
    fn flatten_args(self) -> Vec<T> {
        self.clone()
    }
}

impl<T: Clone> Args<T> for &[T] {
    fn flatten_args(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T, const N: usize> Args<T> for [T; N] {
    fn flatten_args(self) -> Vec<T> {
        self.into()
    }
}

impl<T: Clone, const N: usize> Args<T> for &[T; N] {
    fn flatten_args(self) -> Vec<T> {
        self.to_vec()
    }
}

impl Args<String> for Vec<&str> {
    fn flatten_args(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl Args<String> for &Vec<&str> {
    fn flatten_args(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl Args<String> for &[&str] {
    fn flatten_args(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> Args<String> for [&str; N] {
    fn flatten_args(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl<const N: usize> Args<String> for &[&str; N] {
    fn flatten_args(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bare_value_is_a_one_element_collection() {
        assert_eq!(flatten_args(EntityOp::QueryAll), vec![EntityOp::QueryAll]);
        assert_eq!(flatten_args::<String>("Hero"), vec!["Hero".to_string()]);
        assert_eq!(flatten_args(String::from("Hero")), vec!["Hero".to_string()]);
    }

    #[test]
    fn op_call_shapes_flatten_identically() {
        let ops = vec![EntityOp::QueryAll, EntityOp::QueryMany];

        let separate = flatten_args([EntityOp::QueryAll, EntityOp::QueryMany]);
        let collection = flatten_args(&ops);
        let spread = flatten_args(&ops[..]);

        assert_eq!(separate, ops);
        assert_eq!(collection, ops);
        assert_eq!(spread, ops);
        assert_eq!(flatten_args(ops.clone()), ops);
    }

    #[test]
    fn str_and_string_shapes_flatten_identically() {
        let expected = vec!["Hero".to_string(), "Villain".to_string()];
        let names = vec!["Hero", "Villain"];
        let owned: Vec<String> = expected.clone();

        assert_eq!(flatten_args::<String>(["Hero", "Villain"]), expected);
        assert_eq!(flatten_args::<String>(&names), expected);
        assert_eq!(flatten_args::<String>(&names[..]), expected);
        assert_eq!(flatten_args::<String>(names.clone()), expected);
        assert_eq!(flatten_args(&owned[..]), expected);
        assert_eq!(flatten_args(owned), expected);
    }

    #[test]
    fn empty_collection_flattens_to_nothing() {
        assert!(flatten_args(Vec::<EntityOp>::new()).is_empty());
        assert!(flatten_args::<String>(&[] as &[&str]).is_empty());
    }

    proptest! {
        /// Property: array, collection and spread shapes carry the same values in the same order.
        #[test]
        fn shapes_preserve_order(names in prop::collection::vec("[A-Za-z]{1,8}", 0..8)) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();

            prop_assert_eq!(flatten_args::<String>(&refs[..]), names.clone());
            prop_assert_eq!(flatten_args::<String>(&refs), names.clone());
            prop_assert_eq!(flatten_args(&names), names.clone());
            prop_assert_eq!(flatten_args(names.clone()), names);
        }
    }
}
