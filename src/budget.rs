use tracing::{debug, warn};

use crate::models::{AggregatedRoad, BudgetSelection};

/// Upper bound on the day budget accepted by [`select_capped`].
pub const MAX_DAY_BUDGET: i64 = 365;

/// Budget used when the caller does not supply one.
pub const DEFAULT_DAY_BUDGET: i64 = 180;

/// Picks the subset of roads with the highest total severity whose response
/// times fit within `day_budget` days (0/1 knapsack).
///
/// Reconstruction walks from the last road backwards and only takes a road
/// when it changes the optimum, so among equally scored subsets earlier roads
/// win. Selected roads keep their input order.
///
/// The table holds `roads.len() * day_budget` cells, so callers must bound the
/// budget themselves or go through [`select_capped`].
pub fn select_within_budget(roads: &[AggregatedRoad], day_budget: i64) -> BudgetSelection {
    if day_budget <= 0 || roads.is_empty() {
        return BudgetSelection::empty(day_budget);
    }

    let capacity = day_budget as usize;
    let n = roads.len();
    debug!(roads = n, capacity, "filling knapsack table");

    let mut table = vec![vec![0u32; capacity + 1]; n + 1];
    for i in 1..=n {
        let cost = roads[i - 1].response_days as usize;
        let value = roads[i - 1].severity_score;
        for w in 0..=capacity {
            table[i][w] = if cost <= w {
                table[i - 1][w].max(table[i - 1][w - cost] + value)
            } else {
                table[i - 1][w]
            };
        }
    }

    let mut selected = Vec::new();
    let mut w = capacity;
    let mut i = n;
    while i > 0 && table[i][w] > 0 {
        if table[i][w] != table[i - 1][w] {
            selected.push(roads[i - 1].clone());
            w -= roads[i - 1].response_days as usize;
        }
        i -= 1;
    }
    selected.reverse();

    let total_days = selected.iter().map(|road| road.response_days).sum();
    BudgetSelection {
        selected,
        total_score: table[n][capacity],
        total_days,
        day_budget,
    }
}

/// Clamps the budget to `max_budget` before selecting, so malformed input
/// cannot allocate an unbounded table.
pub fn select_capped(
    roads: &[AggregatedRoad],
    day_budget: i64,
    max_budget: i64,
) -> BudgetSelection {
    let budget = if day_budget > max_budget {
        warn!(
            requested = day_budget,
            max_budget, "day budget above limit, clamping"
        );
        max_budget
    } else {
        day_budget
    };
    select_within_budget(roads, budget)
}
