use std::cmp::Ordering;

use crate::models::AggregatedRoad;

/// Priority order between two roads: higher severity first, then more reports,
/// then road identity alphabetically.
pub fn priority_order(a: &AggregatedRoad, b: &AggregatedRoad) -> Ordering {
    b.severity_score
        .cmp(&a.severity_score)
        .then_with(|| b.report_count.cmp(&a.report_count))
        .then_with(|| a.road_identity.cmp(&b.road_identity))
}

/// Orders roads into the maintenance queue with a partition-exchange sort.
///
/// The pivot is the first element of each sublist. Roads that rank strictly
/// ahead of the pivot go left, everything else goes right, and the result is
/// `left ++ [pivot] ++ right`. Sublists are processed from an explicit work
/// stack, so long runs of tied roads cost O(n^2) comparisons but never deep
/// recursion.
pub fn sort_descending_by_severity(roads: Vec<AggregatedRoad>) -> Vec<AggregatedRoad> {
    let order = quicksort_order(&roads);
    let mut slots: Vec<Option<AggregatedRoad>> = roads.into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}

fn quicksort_order(roads: &[AggregatedRoad]) -> Vec<usize> {
    enum Task {
        Sort(Vec<usize>),
        Emit(usize),
    }

    let mut order = Vec::with_capacity(roads.len());
    let mut stack = vec![Task::Sort((0..roads.len()).collect())];

    while let Some(task) = stack.pop() {
        match task {
            Task::Emit(index) => order.push(index),
            Task::Sort(sub) if sub.len() <= 1 => order.extend(sub),
            Task::Sort(sub) => {
                let pivot = sub[0];
                let (left, right): (Vec<usize>, Vec<usize>) = sub[1..]
                    .iter()
                    .partition(|i| priority_order(&roads[**i], &roads[pivot]) == Ordering::Less);

                // Popped in reverse: left, then pivot, then right.
                stack.push(Task::Sort(right));
                stack.push(Task::Emit(pivot));
                stack.push(Task::Sort(left));
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn road(name: &str, severity_score: u32, report_count: u32) -> AggregatedRoad {
        AggregatedRoad {
            road_identity: name.to_string(),
            road_type: None,
            unique_defects: Vec::new(),
            report_count,
            severity_score,
            response_days: 7,
        }
    }

    fn names(roads: &[AggregatedRoad]) -> Vec<&str> {
        roads.iter().map(|r| r.road_identity.as_str()).collect()
    }

    #[test]
    fn sorts_by_descending_severity() {
        let roads = vec![
            road("Main St", 51, 2),
            road("Highway 1", 71, 1),
            road("Rizal Ave", 31, 3),
            road("Quezon Blvd", 88, 40),
            road("Bonifacio Dr", 60, 1),
        ];
        let sorted = sort_descending_by_severity(roads);
        assert_eq!(
            names(&sorted),
            vec!["Quezon Blvd", "Highway 1", "Bonifacio Dr", "Main St", "Rizal Ave"]
        );
        for pair in sorted.windows(2) {
            assert!(pair[0].severity_score >= pair[1].severity_score);
        }
    }

    #[test]
    fn ties_break_on_report_count_then_name() {
        let roads = vec![
            road("Zamora St", 40, 1),
            road("Aguinaldo Hwy", 40, 1),
            road("Mabini St", 40, 5),
            road("Luna St", 70, 1),
        ];
        let sorted = sort_descending_by_severity(roads);
        assert_eq!(
            names(&sorted),
            vec!["Luna St", "Mabini St", "Aguinaldo Hwy", "Zamora St"]
        );
    }

    #[test]
    fn already_sorted_and_reversed_inputs_agree() {
        let ascending: Vec<AggregatedRoad> =
            (0..50).map(|i| road(&format!("Road {i:02}"), i, 1)).collect();
        let mut descending = ascending.clone();
        descending.reverse();

        let a = sort_descending_by_severity(ascending);
        let b = sort_descending_by_severity(descending);
        assert_eq!(a, b);
        assert_eq!(a[0].severity_score, 49);
        assert_eq!(a[49].severity_score, 0);
    }

    #[test]
    fn matches_comparator_sort() {
        let roads: Vec<AggregatedRoad> = (0..40u32)
            .map(|i| road(&format!("Road {}", (i * 7) % 13), (i * 37) % 23, i % 4 + 1))
            .collect();
        let mut expected = roads.clone();
        expected.sort_by(priority_order);
        let sorted = sort_descending_by_severity(roads);
        assert_eq!(names(&sorted), names(&expected));
    }

    #[test]
    fn long_tied_run_in_name_order() {
        let roads: Vec<AggregatedRoad> = (0..10_000)
            .map(|i| road(&format!("Road {i:06}"), 31, 1))
            .collect();
        let sorted = sort_descending_by_severity(roads);

        assert_eq!(sorted.len(), 10_000);
        assert_eq!(sorted[0].road_identity, "Road 000000");
        assert_eq!(sorted[9_999].road_identity, "Road 009999");
        for pair in sorted.windows(2) {
            assert_ne!(priority_order(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn handles_empty_and_single() {
        assert!(sort_descending_by_severity(Vec::new()).is_empty());
        let single = sort_descending_by_severity(vec![road("Main St", 10, 1)]);
        assert_eq!(names(&single), vec!["Main St"]);
    }
}
