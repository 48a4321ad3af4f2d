use result_rail::{chain, RailResult};

type R = RailResult<String, String>;

fn concat3(r1: R, r2: R, r3: R) -> R {
    chain! {
        a <- r1;
        b <- r2;
        c <- r3;
        => format!("{a}{b}{c}")
    }
}

fn succeed(s: &str) -> R {
    RailResult::succeed(s.to_string())
}

fn succeed_noting(s: &str, msg: &str) -> R {
    RailResult::succeed_with(s.to_string(), msg.to_string())
}

fn fail(msg: &str) -> R {
    RailResult::fail_with(msg.to_string())
}

#[test]
fn chain_of_successes_combines_payloads() {
    let r = concat3(succeed("1"), succeed("2"), succeed("3"));
    assert_eq!(r.succeeded_with(), "123");
}

#[test]
fn chain_of_successes_gathers_all_messages() {
    let r = concat3(
        succeed_noting("1", "msg1"),
        succeed_noting("2", "msg2"),
        succeed_noting("3", "msg3"),
    );
    r.fold(
        |value, msgs| {
            assert_eq!(value, "123");
            assert_eq!(msgs.as_slice(), &["msg1", "msg2", "msg3"]);
        },
        |_| panic!("should not fail"),
    );
}

#[test]
fn chain_stops_at_failing_first_step() {
    let r = concat3(fail("fail"), succeed("2"), succeed("3"));
    assert_eq!(r.failed_with().as_slice(), &["fail"]);
}

#[test]
fn chain_stops_at_failing_middle_step() {
    let r = concat3(succeed("1"), fail("fail"), succeed("3"));
    assert_eq!(r.failed_with().as_slice(), &["fail"]);
}

#[test]
fn chain_never_reaches_second_failure() {
    let r = concat3(succeed("1"), fail("fail1"), fail("fail2"));
    assert_eq!(r.failed_with().as_slice(), &["fail1"]);
}

#[test]
fn pure_bindings_do_not_touch_the_tracks() {
    let r: RailResult<i32, String> = chain! {
        a <- RailResult::succeed(2);
        doubled = a * 2;
        b <- RailResult::succeed_with(doubled + 1, "bumped".to_string());
        => b
    };
    r.fold(
        |value, msgs| {
            assert_eq!(value, 5);
            assert_eq!(msgs.as_slice(), &["bumped"]);
        },
        |_| panic!("should not fail"),
    );
}
