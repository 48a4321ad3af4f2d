use result_rail::convert::{
    option_to_rail, option_to_rail_with, rail_to_option, rail_to_result, result_to_rail,
};
use result_rail::RailResult;

#[test]
fn option_with_value_becomes_messageless_success() {
    let r = option_to_rail(Some(42), "error");
    r.fold(
        |value, msgs| {
            assert_eq!(value, 42);
            assert!(msgs.is_empty());
        },
        |_| panic!("should not fail"),
    );
}

#[test]
fn absent_option_becomes_single_message_failure() {
    let r = option_to_rail(None::<i32>, "error");
    assert_eq!(r.failed_with().as_slice(), &["error"]);
}

#[test]
fn lazy_message_is_not_built_on_present_value() {
    let mut built = false;
    let r = option_to_rail_with(Some(1), || {
        built = true;
        "error"
    });
    assert!(r.is_success());
    assert!(!built);
}

#[test]
fn lazy_message_is_built_on_absence() {
    let r = option_to_rail_with(None::<i32>, || "error");
    assert_eq!(r.failed_with().as_slice(), &["error"]);
}

#[test]
fn ok_result_converts_to_success() {
    let r = result_to_rail(Ok::<_, &str>(42));
    assert_eq!(r.succeeded_with(), 42);
}

#[test]
fn err_result_converts_to_failure() {
    let r = result_to_rail(Err::<i32, _>("boom"));
    assert_eq!(r.failed_with().as_slice(), &["boom"]);
}

#[test]
fn rail_to_result_drops_success_messages() {
    let r = RailResult::<i32, &str>::succeed_with(42, "warn");
    assert_eq!(rail_to_result(r), Ok(42));
}

#[test]
fn rail_to_result_keeps_all_failure_messages() {
    let r = RailResult::<i32, &str>::fail_with_all(["a", "b"]);
    let err = rail_to_result(r).unwrap_err();
    assert_eq!(err.as_slice(), &["a", "b"]);
}

#[test]
fn rail_to_option_discards_messages_entirely() {
    assert_eq!(rail_to_option(RailResult::<i32, &str>::succeed_with(1, "w")), Some(1));
    assert_eq!(rail_to_option(RailResult::<i32, &str>::fail_with("e")), None);
}
