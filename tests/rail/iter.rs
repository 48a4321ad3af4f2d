use result_rail::RailResult;

#[test]
fn iter_yields_payload_once_on_success() {
    let r = RailResult::<i32, &str>::succeed(7);
    let collected: Vec<_> = r.iter().collect();
    assert_eq!(collected, vec![&7]);
}

#[test]
fn iter_is_empty_on_failure() {
    let r = RailResult::<i32, &str>::fail_with("no");
    assert_eq!(r.iter().count(), 0);
}

#[test]
fn iter_mut_allows_in_place_update() {
    let mut r = RailResult::<i32, &str>::succeed(3);
    if let Some(value) = r.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(r.into_value(), Some(4));
}

#[test]
fn into_iterator_consumes_the_payload() {
    let r = RailResult::<i32, &str>::succeed(5);
    let collected: Vec<_> = r.into_iter().collect();
    assert_eq!(collected, vec![5]);

    let r = RailResult::<i32, &str>::fail_with("no");
    assert_eq!(r.into_iter().count(), 0);
}

#[test]
fn iter_messages_covers_both_tracks() {
    let r = RailResult::succeed_with_all(1, ["w1", "w2"]);
    let collected: Vec<_> = r.iter_messages().cloned().collect();
    assert_eq!(collected, vec!["w1", "w2"]);

    let r = RailResult::<i32, &str>::fail_with_all(["e1", "e2"]);
    let collected: Vec<_> = r.iter_messages().cloned().collect();
    assert_eq!(collected, vec!["e1", "e2"]);
}
