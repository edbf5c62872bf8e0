//! Parameter and group ordering.
//!
//! Explicit orders are honoured as given. Entries without one take the
//! smallest positive integer no other entry uses yet, in declaration order.

use std::collections::BTreeSet;

/// Assigns an order to every entry.
///
/// `explicit[i]` is the order declared for entry `i`, if any. The result has
/// the same length; explicit entries keep their value.
///
/// ```
/// use extmodel_enricher::resolve::layout::assign_orders;
///
/// // P2 declares order 2; P1 and P3 fill the gaps around it.
/// assert_eq!(assign_orders(&[Some(2), None, None]), vec![2, 1, 3]);
/// ```
#[must_use]
pub fn assign_orders(explicit: &[Option<u32>]) -> Vec<u32> {
    let mut taken: BTreeSet<u32> = explicit.iter().flatten().copied().collect();
    let mut next = 1;
    explicit
        .iter()
        .map(|order| match order {
            Some(order) => *order,
            None => {
                while taken.contains(&next) {
                    next += 1;
                }
                taken.insert(next);
                next
            }
        })
        .collect()
}

/// Returns the indices of `explicit` sorted by assigned order. Ties keep
/// declaration order.
#[must_use]
pub fn sorted_indices(explicit: &[Option<u32>]) -> Vec<(usize, u32)> {
    let mut indexed: Vec<(usize, u32)> =
        assign_orders(explicit).into_iter().enumerate().collect();
    indexed.sort_by_key(|&(index, order)| (order, index));
    indexed
}
