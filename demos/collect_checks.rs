use result_rail::RailResult;

fn check_positive(n: i32) -> RailResult<i32, String> {
    if n > 0 {
        RailResult::succeed(n)
    } else {
        RailResult::fail_with(format!("{n} must be positive"))
    }
}

fn check_even(n: i32) -> RailResult<i32, String> {
    if n % 2 == 0 {
        RailResult::succeed(n)
    } else {
        RailResult::fail_with(format!("{n} must be even"))
    }
}

fn check_number(n: i32) -> RailResult<i32, String> {
    check_positive(n).join(check_even(n), |m| m, |m| m, |a, _| a)
}

fn main() {
    let inputs = [2, 4, -3, 7];

    let combined: RailResult<Vec<i32>, String> =
        inputs.into_iter().map(check_number).collect();

    combined.fold(
        |values, _| println!("all inputs valid: {values:?}"),
        |errors| {
            for error in errors {
                println!("validation error: {error}");
            }
        },
    );
}
