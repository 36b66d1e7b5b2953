//! Recipe batch calculator
//!
//! Given the per-batch amount of each ingredient a recipe needs and the
//! amounts on hand, computes how many whole batches can be made: the
//! scarcest ingredient sets the limit.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Number of whole batches the stock supports
///
/// Takes the minimum over shared ingredient names of
/// `available / required` (integer floor division). Returns 0 when the
/// recipe names more distinct ingredients than the stock has entries, or
/// when the recipe is empty. Per-batch amounts must be positive.
///
/// # Example
///
/// ```rust
/// use rucksack::recipes::batches;
/// use rustc_hash::FxHashMap;
///
/// let recipe: FxHashMap<_, _> = [("milk", 100), ("butter", 50)].into_iter().collect();
/// let stock: FxHashMap<_, _> = [("milk", 350), ("butter", 120)].into_iter().collect();
///
/// // milk allows 3 batches, butter only 2
/// assert_eq!(batches(&recipe, &stock), 2);
/// ```
pub fn batches<K: Eq + Hash>(recipe: &FxHashMap<K, u64>, stock: &FxHashMap<K, u64>) -> u64 {
    if recipe.len() > stock.len() {
        return 0;
    }

    recipe
        .iter()
        .filter_map(|(name, &required)| stock.get(name).map(|&available| available / required))
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&'static str, u64)]) -> FxHashMap<&'static str, u64> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_scarcest_ingredient_limits() {
        let recipe = map(&[("milk", 100), ("butter", 50), ("flour", 5)]);
        let stock = map(&[("milk", 132), ("butter", 48), ("flour", 51)]);

        // butter: 48 / 50 = 0 batches
        assert_eq!(batches(&recipe, &stock), 0);
    }

    #[test]
    fn test_whole_batches_only() {
        let recipe = map(&[("milk", 100), ("flour", 5)]);
        let stock = map(&[("milk", 290), ("flour", 51)]);

        // milk allows 2.9 batches, floored to 2
        assert_eq!(batches(&recipe, &stock), 2);
    }

    #[test]
    fn test_more_ingredients_than_stock_entries() {
        let recipe = map(&[("milk", 100), ("butter", 50), ("flour", 5)]);
        let stock = map(&[("milk", 1000), ("flour", 1000)]);

        assert_eq!(batches(&recipe, &stock), 0);
    }

    #[test]
    fn test_empty_recipe() {
        let recipe = map(&[]);
        let stock = map(&[("milk", 1000)]);

        assert_eq!(batches(&recipe, &stock), 0);
    }

    #[test]
    fn test_exact_multiples() {
        let recipe = map(&[("sugar", 25), ("eggs", 2)]);
        let stock = map(&[("sugar", 100), ("eggs", 8)]);

        assert_eq!(batches(&recipe, &stock), 4);
    }
}
