//! Memoized 0/1 knapsack solver.

use super::types::{Catalog, InterventionItem};
use tracing::trace;

/// Result of a knapsack selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Best achievable total benefit.
    pub max_benefit: u64,

    /// Catalog indices of the chosen items, strictly increasing.
    pub chosen_indices: Vec<usize>,

    /// Number of (item, capacity) states solved.
    ///
    /// Never exceeds `n_items × (capacity + 1)`.
    pub states_evaluated: usize,
}

impl Selection {
    fn empty() -> Self {
        Self {
            max_benefit: 0,
            chosen_indices: Vec::new(),
            states_evaluated: 0,
        }
    }

    /// Total time cost of the chosen items.
    pub fn total_time(&self, catalog: &Catalog) -> u32 {
        self.chosen_indices
            .iter()
            .filter_map(|&i| catalog.get(i))
            .map(|item| item.time_cost)
            .sum()
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    value: u64,
    take: bool,
}

/// Per-call memo over (item index, remaining capacity).
struct Memo<'a> {
    items: &'a [InterventionItem],
    width: usize,
    table: Vec<Option<Entry>>,
    solved: usize,
}

impl<'a> Memo<'a> {
    fn new(items: &'a [InterventionItem], capacity: usize) -> Self {
        let width = capacity + 1;
        Self {
            items,
            width,
            table: vec![None; items.len() * width],
            solved: 0,
        }
    }

    fn solve(&mut self, i: usize, cap: usize) -> u64 {
        if i == self.items.len() || cap == 0 {
            return 0;
        }
        let slot = i * self.width + cap;
        if let Some(entry) = self.table[slot] {
            return entry.value;
        }

        let skip = self.solve(i + 1, cap);
        let item = &self.items[i];
        let cost = item.time_cost as usize;
        let entry = if cost > cap {
            Entry {
                value: skip,
                take: false,
            }
        } else {
            let take = self.solve(i + 1, cap - cost) + u64::from(item.benefit);
            // Strict: equal benefit keeps the exclude branch.
            if take > skip {
                Entry {
                    value: take,
                    take: true,
                }
            } else {
                Entry {
                    value: skip,
                    take: false,
                }
            }
        };

        self.table[slot] = Some(entry);
        self.solved += 1;
        entry.value
    }

    fn chosen(&self, capacity: usize) -> Vec<usize> {
        let mut chosen = Vec::new();
        let mut cap = capacity;
        for (i, item) in self.items.iter().enumerate() {
            if cap == 0 {
                break;
            }
            let take = self.table[i * self.width + cap].is_some_and(|e| e.take);
            if take {
                chosen.push(i);
                cap -= item.time_cost as usize;
            }
        }
        chosen
    }
}

/// Clamps `capacity` to `[0, total cost of items]`.
///
/// Every benefit is positive, so any capacity past the total cost takes
/// every item and yields the same selection.
fn clamp_capacity(items: &[InterventionItem], capacity: i64) -> usize {
    let total: u64 = items.iter().map(|item| u64::from(item.time_cost)).sum();
    let cap = u64::try_from(capacity.max(0)).unwrap_or(0).min(total);
    usize::try_from(cap).unwrap_or(usize::MAX)
}

/// Selects the benefit-maximizing subset of `catalog` within `capacity`
/// minutes, using top-down recursion over a per-call memo table.
///
/// Negative capacity behaves as zero. Capacity beyond the total time cost
/// of the catalog behaves as that total.
///
/// # Examples
///
/// ```
/// use u_wellness::knapsack::{select, Catalog, InterventionItem};
///
/// let catalog = Catalog::new(vec![
///     InterventionItem::new("walk", 10, 5),
///     InterventionItem::new("nap", 20, 9),
///     InterventionItem::new("tea", 5, 3),
/// ]).unwrap();
///
/// let sel = select(&catalog, 25);
/// assert_eq!(sel.max_benefit, 12);
/// assert_eq!(sel.chosen_indices, vec![1, 2]);
/// ```
pub fn select(catalog: &Catalog, capacity: i64) -> Selection {
    let items = catalog.items();
    let cap = clamp_capacity(items, capacity);
    if cap == 0 || items.is_empty() {
        return Selection::empty();
    }

    let mut memo = Memo::new(items, cap);
    let max_benefit = memo.solve(0, cap);
    let selection = Selection {
        max_benefit,
        chosen_indices: memo.chosen(cap),
        states_evaluated: memo.solved,
    };
    trace!(
        capacity = cap,
        max_benefit,
        states = selection.states_evaluated,
        "knapsack selection"
    );
    selection
}

/// Bottom-up table form of [`select`].
///
/// Fills every (item, capacity) state from the last item backwards and
/// applies the same exclude-on-tie rule, so it returns the same indices.
/// `states_evaluated` is always `n_items × capacity`, with capacity
/// clamped as in [`select`].
pub fn select_iterative(catalog: &Catalog, capacity: i64) -> Selection {
    let items = catalog.items();
    let cap = clamp_capacity(items, capacity);
    let n = items.len();
    if cap == 0 || n == 0 {
        return Selection::empty();
    }

    let width = cap + 1;
    let mut value = vec![0u64; (n + 1) * width];
    let mut take = vec![false; n * width];

    for i in (0..n).rev() {
        let cost = items[i].time_cost as usize;
        let benefit = u64::from(items[i].benefit);
        for c in 1..=cap {
            let skip = value[(i + 1) * width + c];
            let mut best = skip;
            if cost <= c {
                let with = value[(i + 1) * width + c - cost] + benefit;
                if with > skip {
                    best = with;
                    take[i * width + c] = true;
                }
            }
            value[i * width + c] = best;
        }
    }

    let mut chosen = Vec::new();
    let mut c = cap;
    for (i, item) in items.iter().enumerate() {
        if c > 0 && take[i * width + c] {
            chosen.push(i);
            c -= item.time_cost as usize;
        }
    }

    Selection {
        max_benefit: value[cap],
        chosen_indices: chosen,
        states_evaluated: n * cap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Exhaustive maximum over all 2^n subsets.
    fn brute_force(catalog: &Catalog, capacity: i64) -> u64 {
        let items = catalog.items();
        let cap = capacity.max(0) as u64;
        (0u32..(1 << items.len()))
            .filter_map(|mask| {
                let (cost, benefit) = items
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| mask & (1 << i) != 0)
                    .fold((0u64, 0u64), |(c, b), (_, it)| {
                        (c + u64::from(it.time_cost), b + u64::from(it.benefit))
                    });
                (cost <= cap).then_some(benefit)
            })
            .max()
            .unwrap_or(0)
    }

    fn catalog(pairs: &[(u32, u32)]) -> Catalog {
        Catalog::new(
            pairs
                .iter()
                .enumerate()
                .map(|(i, &(c, b))| InterventionItem::new(format!("item{i}"), c, b))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_default_catalog_capacity_30() {
        let catalog = Catalog::default_interventions();
        let sel = select(&catalog, 30);
        assert_eq!(sel.max_benefit, brute_force(&catalog, 30));
        assert_eq!(sel.max_benefit, 19);
        assert_eq!(sel.chosen_indices, vec![0, 2, 5, 6, 8]);
        assert_eq!(sel.total_time(&catalog), 30);
    }

    #[test]
    fn test_default_catalog_capacity_40() {
        let catalog = Catalog::default_interventions();
        let sel = select(&catalog, 40);
        assert_eq!(sel.max_benefit, brute_force(&catalog, 40));
        assert!(sel.total_time(&catalog) <= 40);
    }

    #[test]
    fn test_zero_capacity_is_empty() {
        let catalog = Catalog::default_interventions();
        let sel = select(&catalog, 0);
        assert_eq!(sel.max_benefit, 0);
        assert!(sel.chosen_indices.is_empty());
        assert_eq!(sel.states_evaluated, 0);
    }

    #[test]
    fn test_negative_capacity_behaves_as_zero() {
        let catalog = Catalog::default_interventions();
        assert_eq!(select(&catalog, -15), select(&catalog, 0));
    }

    #[test]
    fn test_huge_capacity_takes_everything() {
        let catalog = Catalog::default_interventions();
        let total_benefit: u64 = catalog.items().iter().map(|i| u64::from(i.benefit)).sum();
        let total_time: u32 = catalog.items().iter().map(|i| i.time_cost).sum();

        for sel in [select(&catalog, i64::MAX), select_iterative(&catalog, i64::MAX)] {
            assert_eq!(sel.max_benefit, total_benefit);
            assert_eq!(sel.chosen_indices, (0..catalog.len()).collect::<Vec<_>>());
            assert_eq!(sel.total_time(&catalog), total_time);
        }
        assert_eq!(
            select(&catalog, i64::from(u32::MAX)),
            select(&catalog, i64::from(total_time))
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert_eq!(select(&catalog, 30).max_benefit, 0);
    }

    #[test]
    fn test_tie_prefers_exclusion() {
        // Identical items: excluding the first and taking the second ties,
        // and the exclude branch wins.
        let catalog = catalog(&[(5, 3), (5, 3)]);
        let sel = select(&catalog, 5);
        assert_eq!(sel.max_benefit, 3);
        assert_eq!(sel.chosen_indices, vec![1]);
    }

    #[test]
    fn test_item_larger_than_capacity_is_skipped() {
        let catalog = catalog(&[(50, 100), (10, 1)]);
        let sel = select(&catalog, 20);
        assert_eq!(sel.chosen_indices, vec![1]);
        assert_eq!(sel.max_benefit, 1);
    }

    #[test]
    fn test_state_count_is_bounded() {
        let catalog = Catalog::default_interventions();
        let cap = 60;
        let sel = select(&catalog, cap);
        assert!(sel.states_evaluated <= catalog.len() * (cap as usize + 1));
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let catalog = Catalog::default_interventions();
        let a = select(&catalog, 30);
        let _ = select(&catalog, 40);
        assert_eq!(select(&catalog, 30), a);
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(
            pairs in proptest::collection::vec((1u32..=20, 1u32..=15), 0..=10),
            capacity in -5i64..=60,
        ) {
            let catalog = catalog(&pairs);
            let sel = select(&catalog, capacity);

            prop_assert_eq!(sel.max_benefit, brute_force(&catalog, capacity));
            prop_assert!(i64::from(sel.total_time(&catalog)) <= capacity.max(0));
            prop_assert!(sel.chosen_indices.windows(2).all(|w| w[0] < w[1]));

            let benefit: u64 = sel
                .chosen_indices
                .iter()
                .map(|&i| u64::from(catalog.items()[i].benefit))
                .sum();
            prop_assert_eq!(benefit, sel.max_benefit);
        }

        #[test]
        fn prop_iterative_agrees(
            pairs in proptest::collection::vec((1u32..=20, 1u32..=15), 0..=12),
            capacity in 0i64..=80,
        ) {
            let catalog = catalog(&pairs);
            let top_down = select(&catalog, capacity);
            let bottom_up = select_iterative(&catalog, capacity);
            prop_assert_eq!(top_down.max_benefit, bottom_up.max_benefit);
            prop_assert_eq!(top_down.chosen_indices, bottom_up.chosen_indices);
        }
    }
}
