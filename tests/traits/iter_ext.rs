use result_rail::traits::IteratorRailExt;
use result_rail::RailResult;

#[test]
fn collect_rail_gathers_payloads_on_all_success() {
    let merged = vec![
        RailResult::<i32, &str>::succeed(1),
        RailResult::succeed(2),
    ]
    .into_iter()
    .collect_rail();

    assert_eq!(merged.succeeded_with(), vec![1, 2]);
}

#[test]
fn collect_rail_accumulates_all_failures() {
    let merged = vec![
        RailResult::<i32, &str>::succeed(1),
        RailResult::fail_with("bad"),
        RailResult::fail_with("worse"),
    ]
    .into_iter()
    .collect_rail();

    assert_eq!(merged.failed_with().as_slice(), &["bad", "worse"]);
}
