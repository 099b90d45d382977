//! `ctl`: parse controller expressions from the command line.

use ctlc::commands::{explain_error, list_factories, parse_options, run_demo, run_parse, SETUPS};

fn main() {
    ctlc::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: ctl parse <expression> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --element=<kind>     Target element: audio (default) or video");
                eprintln!("  --attribute=<name>   Attribute to bind (default: freq / foreground-color)");
                std::process::exit(1);
            }
            match parse_options(&args[2..]) {
                Ok((expression, options)) => run_parse(&expression, &options),
                Err(message) => Err(format!("error: {message}")),
            }
        }
        "demo" => run_demo(args.get(2).map(String::as_str)),
        "factories" => Ok(list_factories()),
        "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: ctl explain <code>");
                std::process::exit(1);
            }
            explain_error(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("ctl - controller expression parser");
    println!();
    println!("Usage: ctl <command> [args]");
    println!();
    println!("Commands:");
    println!("  parse <expression>   Attach an expression to a test element and print the graph");
    println!("  demo [index]         Run a stock setup (0-{})", SETUPS.len() - 1);
    println!("  factories            List registered bindings and sources");
    println!("  explain <code>       Describe a syntax error code");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging (e.g. RUST_LOG=ctl_parse=debug)");
    println!("  CTL_TRACE_TREE       Show parser traces as a tree");
}
