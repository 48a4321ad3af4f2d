use result_rail::traits::OptionRailExt;

#[test]
fn to_rail_on_some_succeeds() {
    let r = Some(42).to_rail("error");
    assert_eq!(r.succeeded_with(), 42);
}

#[test]
fn to_rail_on_none_fails_with_message() {
    let r = None::<i32>.to_rail("error");
    assert_eq!(r.failed_with().as_slice(), &["error"]);
}

#[test]
fn to_rail_with_defers_message_construction() {
    let key = "timeout";
    let r = None::<u64>.to_rail_with(|| format!("missing config key '{key}'"));
    assert_eq!(
        r.failed_with().as_slice(),
        &["missing config key 'timeout'".to_string()]
    );
}
