use result_rail::RailResult;
use smallvec::SmallVec;

#[test]
fn collect_all_success_keeps_payload_and_message_order() {
    let merged: RailResult<Vec<i32>, &str> = vec![
        RailResult::succeed_with(1, "one"),
        RailResult::succeed(2),
        RailResult::succeed_with(3, "three"),
    ]
    .into_iter()
    .collect();

    assert_eq!(merged.value(), Some(&vec![1, 2, 3]));
    assert_eq!(merged.messages(), &["one", "three"]);
}

#[test]
fn collect_without_messages_yields_empty_message_list() {
    let merged: RailResult<Vec<i32>, &str> =
        vec![RailResult::succeed(1), RailResult::succeed(2)]
            .into_iter()
            .collect();

    assert_eq!(merged.value(), Some(&vec![1, 2]));
    assert!(merged.messages().is_empty());
}

#[test]
fn collect_accumulates_every_failing_element_in_order() {
    let merged: RailResult<Vec<i32>, &str> = vec![
        RailResult::succeed(1),
        RailResult::fail_with("Too old!"),
        RailResult::fail_with("Smarten up!"),
        RailResult::fail_with("Sober up!"),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        merged.failed_with().as_slice(),
        &["Too old!", "Smarten up!", "Sober up!"]
    );
}

#[test]
fn collect_discards_success_messages_once_failed() {
    let merged: RailResult<Vec<i32>, &str> = vec![
        RailResult::succeed_with(1, "kept nowhere"),
        RailResult::fail_with("broke"),
        RailResult::succeed_with(3, "also dropped"),
    ]
    .into_iter()
    .collect();

    assert_eq!(merged.failed_with().as_slice(), &["broke"]);
}

#[test]
fn collect_empty_input_succeeds_empty() {
    let merged: RailResult<Vec<i32>, &str> = std::iter::empty().collect();
    assert_eq!(merged.value(), Some(&Vec::new()));
    assert!(merged.messages().is_empty());
}

#[test]
fn collect_into_custom_collection_type() {
    let merged: RailResult<SmallVec<[i32; 4]>, &str> =
        vec![RailResult::succeed(1), RailResult::succeed(2)]
            .into_iter()
            .collect();

    assert_eq!(merged.into_value().unwrap().as_slice(), &[1, 2]);
}

#[test]
fn collect_direct_form_matches_from_iterator() {
    let merged = RailResult::collect([
        RailResult::<i32, &str>::succeed(1),
        RailResult::fail_with("bad"),
        RailResult::fail_with("worse"),
    ]);
    assert_eq!(merged.failed_with().as_slice(), &["bad", "worse"]);
}
