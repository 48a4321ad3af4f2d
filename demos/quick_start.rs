use result_rail::{chain, RailResult};

fn parse_port(raw: &str) -> RailResult<u16, String> {
    match raw.parse::<u16>() {
        Ok(port) => RailResult::succeed(port),
        Err(_) => RailResult::fail_with(format!("'{raw}' is not a port number")),
    }
}

fn reserve(port: u16) -> RailResult<u16, String> {
    if port < 1024 {
        RailResult::fail_with(format!("port {port} is privileged"))
    } else if port == 8080 {
        RailResult::succeed_with(port, "8080 is popular, expect neighbors".to_string())
    } else {
        RailResult::succeed(port)
    }
}

fn main() {
    for raw in ["8080", "80", "not-a-port"] {
        let outcome = chain! {
            port <- parse_port(raw);
            bound <- reserve(port);
            => format!("listening on {bound}")
        };

        outcome.fold(
            |summary, warnings| {
                println!("{summary}");
                for warning in warnings {
                    println!("  note: {warning}");
                }
            },
            |errors| {
                for error in errors {
                    println!("rejected '{raw}': {error}");
                }
            },
        );
    }
}
