//! Linearisation.

use crate::typeclass::Foldable;

/// Collects the elements of `container` into a `Vec`, in the order
/// [`Foldable::reduce`] visits them.
///
/// # Examples
///
/// ```rust
/// use lambars_foldable::fold::to_vec;
/// use lambars_foldable::tree::Tree;
///
/// let tree = Tree::new(1, vec![Tree::leaf(2), Tree::leaf(3), Tree::leaf(4)]);
/// assert_eq!(to_vec(tree), vec![1, 2, 3, 4]);
/// assert_eq!(to_vec(None::<i32>), Vec::<i32>::new());
/// ```
#[doc(alias = "to_list")]
pub fn to_vec<C: Foldable>(container: C) -> Vec<C::Inner> {
    container.reduce(Vec::new(), |mut elements, element| {
        elements.push(element);
        elements
    })
}
