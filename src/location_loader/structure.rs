use crate::domain::{LocationCategory, LocationCounts};
use serde_json::Value;

/// Shallow shape check: `candidate` is an object holding a list for every category.
///
/// Coordinates themselves are not inspected, use [`crate::load_locations`] for full validation.
pub fn is_valid_structure(candidate: &Value) -> bool {
    candidate
        .as_object()
        .is_some_and(|map| LocationCategory::ALL.iter().all(|category| map.get(category.key()).is_some_and(Value::is_array)))
}

/// Counts the entries of every category, counting a missing or non-list category as zero.
pub fn count_locations(locations: &Value) -> LocationCounts {
    let count = |category: LocationCategory| locations.get(category.key()).and_then(Value::as_array).map_or(0, Vec::len);

    LocationCounts {
        num_logistics_centers: count(LocationCategory::LogisticsCenters),
        num_sales_outlets: count(LocationCategory::SalesOutlets),
        num_customers: count(LocationCategory::Customers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::all_lists(json!({ "logistics_centers": [[0, 0]], "sales_outlets": [], "customers": [] }))]
    #[case::empty_logistics_centers(json!({ "logistics_centers": [], "sales_outlets": [], "customers": [] }))]
    #[case::contents_not_checked(json!({ "logistics_centers": ["x", {}], "sales_outlets": [[999, 999]], "customers": [] }))]
    #[case::extra_keys(json!({ "logistics_centers": [], "sales_outlets": [], "customers": [], "depots": 1 }))]
    fn accepts_a_valid_structure(#[case] candidate: Value) {
        assert!(is_valid_structure(&candidate));
    }

    #[rstest]
    #[case::not_a_list(json!({ "logistics_centers": "not-a-list", "sales_outlets": [], "customers": [] }))]
    #[case::missing_customers(json!({ "logistics_centers": [], "sales_outlets": [] }))]
    #[case::null_category(json!({ "logistics_centers": [], "sales_outlets": null, "customers": [] }))]
    #[case::empty_object(json!({}))]
    #[case::list(json!([[], [], []]))]
    #[case::null(Value::Null)]
    #[case::string(json!("locations"))]
    fn rejects_an_invalid_structure(#[case] candidate: Value) {
        assert!(!is_valid_structure(&candidate));
    }

    #[test]
    fn counts_all_categories() {
        let locations = json!({
            "logistics_centers": [[0, 0]],
            "sales_outlets": [[0, 0], [1, 1]],
            "customers": [[0, 0], [1, 1], [2, 2]]
        });

        assert_eq!(
            count_locations(&locations),
            LocationCounts {
                num_logistics_centers: 1,
                num_sales_outlets: 2,
                num_customers: 3,
            }
        );
    }

    #[rstest]
    #[case::empty_object(json!({}))]
    #[case::not_an_object(json!("locations"))]
    #[case::null(Value::Null)]
    #[case::not_lists(json!({ "logistics_centers": "abc", "sales_outlets": 3, "customers": {} }))]
    fn counts_missing_categories_as_zero(#[case] locations: Value) {
        assert_eq!(count_locations(&locations), LocationCounts::default());
    }

    #[test]
    fn counts_a_partial_mapping() {
        let locations = json!({ "customers": [[0, 0], [1, 1]] });

        assert_eq!(
            count_locations(&locations),
            LocationCounts {
                num_customers: 2,
                ..LocationCounts::default()
            }
        );
    }
}
