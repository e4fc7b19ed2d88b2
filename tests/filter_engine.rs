use indexmap::IndexSet;
use paramscope::filter::{FilterCriteria, compute_view, create_buckets};
use paramscope::model::{Bucket, Parameter, ViewResult};

fn param(i: usize, category: &str, editable: bool, tags: &[&str]) -> Parameter {
    Parameter {
        id: format!("PARAM_{i}"),
        name: format!("Parameter {i}"),
        category: category.to_string(),
        editable,
        tags: tags.iter().map(|t| t.to_string()).collect::<IndexSet<_>>(),
        description: format!("Controls behavior of {category} subsystem (parameter {i})."),
        value: serde_json::json!(i),
    }
}

fn uniform(n: usize) -> Vec<Parameter> {
    (1..=n).map(|i| param(i, "CPU", false, &["performance"])).collect()
}

#[test]
fn exactly_threshold_matches_stay_rows() {
    let params = uniform(200);
    match compute_view(&params, &FilterCriteria::default(), 200) {
        ViewResult::Rows(rows) => assert_eq!(rows.len(), 200),
        other => panic!("expected rows, got {other:?}"),
    }
}

#[test]
fn one_over_threshold_switches_to_buckets() {
    let params = uniform(201);
    let view = compute_view(&params, &FilterCriteria::default(), 200);
    assert!(view.is_buckets());
    assert!(view.rows().is_empty());
    assert_eq!(
        view.buckets(),
        [Bucket { name: "PERFORMANCE".into(), count: 201 }]
    );
}

#[test]
fn non_matching_parameters_do_not_count_toward_threshold() {
    let mut params = uniform(200);
    params.extend((201..=260).map(|i| param(i, "IO", false, &["throughput"])));
    let criteria = FilterCriteria::default().with_category("CPU");
    assert_eq!(compute_view(&params, &criteria, 200).rows().len(), 200);
}

#[test]
fn bucket_tally_over_three_parameters() {
    let params = vec![
        param(1, "CPU", false, &["a", "b"]),
        param(2, "CPU", false, &["a"]),
        param(3, "CPU", false, &["b", "c"]),
    ];
    let view = compute_view(&params, &FilterCriteria::default(), 2);
    let counts: Vec<(&str, usize)> = view.buckets().iter().map(|b| (b.name.as_str(), b.count)).collect();
    assert_eq!(counts, vec![("A", 2), ("B", 2), ("C", 1)]);
    assert_eq!(create_buckets(&params), view.buckets());
}

#[test]
fn category_filter_is_exact() {
    let params = vec![
        param(1, "CPU", false, &[]),
        param(2, "cpu", false, &[]),
        param(3, "CPU2", false, &[]),
        param(4, "Memory", false, &[]),
    ];
    let rows = compute_view(&params, &FilterCriteria::default().with_category("CPU"), 200);
    let ids: Vec<_> = rows.rows().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["PARAM_1"]);
    assert!(compute_view(&params, &FilterCriteria::default().with_category("CP"), 200)
        .rows()
        .is_empty());
}

#[test]
fn unknown_criteria_yield_empty_rows() {
    let params = uniform(10);
    let criteria = FilterCriteria::default().with_category("GPU");
    assert_eq!(compute_view(&params, &criteria, 200), ViewResult::Rows(vec![]));
    let criteria = FilterCriteria::default().with_bucket("nope");
    assert_eq!(compute_view(&params, &criteria, 200), ViewResult::Rows(vec![]));
}

#[test]
fn all_predicates_combine() {
    let params = vec![
        param(1, "CPU", true, &["latency"]),
        param(2, "CPU", false, &["latency"]),
        param(3, "CPU", true, &["capacity"]),
        param(4, "IO", true, &["latency"]),
        param(11, "CPU", true, &["latency"]),
    ];
    let criteria = FilterCriteria::default()
        .with_search("PARAMETER 1")
        .with_editable_only(true)
        .with_category("CPU")
        .with_bucket("Latency");
    let ids: Vec<_> = compute_view(&params, &criteria, 200)
        .rows()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(ids, vec!["PARAM_1", "PARAM_11"]);
}

#[test]
fn rows_keep_source_order() {
    let params: Vec<_> = (1..=5).rev().map(|i| param(i, "CPU", false, &[])).collect();
    let ids: Vec<_> = compute_view(&params, &FilterCriteria::default(), 200)
        .rows()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(ids, vec!["PARAM_5", "PARAM_4", "PARAM_3", "PARAM_2", "PARAM_1"]);
}

#[test]
fn compute_view_is_deterministic() {
    let params = uniform(250);
    let criteria = FilterCriteria::default().with_search("parameter 2");
    assert_eq!(
        compute_view(&params, &criteria, 50),
        compute_view(&params, &criteria, 50)
    );
}
