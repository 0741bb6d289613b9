//! Lion CLI

use lionc::commands::{eval_inline, parse_file, parse_run_options, run_file};

fn main() {
    lionc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: lion run <file.lion> [--max-depth=N] [--combinators]");
                std::process::exit(1);
            }
            let (options, rest) = parse_run_options_or_exit(&args[2..]);
            let [path] = rest.as_slice() else {
                eprintln!("error: expected exactly one file path");
                std::process::exit(1);
            };
            exit_on_error(run_file(path, &options));
        }
        "eval" => {
            let (options, rest) = parse_run_options_or_exit(&args[2..]);
            if rest.is_empty() {
                eprintln!("Usage: lion eval <source> [--max-depth=N] [--combinators]");
                std::process::exit(1);
            }
            exit_on_error(eval_inline(&rest.join(" "), &options));
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: lion parse <file.lion>");
                std::process::exit(1);
            }
            exit_on_error(parse_file(&args[2]));
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("lion {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_run_options_or_exit(args: &[String]) -> (lionc::commands::RunOptions, Vec<String>) {
    match parse_run_options(args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

fn exit_on_error(result: Result<(), String>) {
    if let Err(msg) = result {
        eprintln!("error: {msg}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Lion - a concatenative stack language");
    println!();
    println!("Usage: lion <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>      Evaluate a file and print the final stack");
    println!("  eval <source>   Evaluate inline source and print the final stack");
    println!("  parse <file>    Print the parsed program");
    println!("  help            Show this message");
    println!("  version         Show version information");
    println!();
    println!("Options (run, eval):");
    println!("  --max-depth=N   Limit nested quote applications (default 10000)");
    println!("  --combinators   Enable dup, drop, swap, dip, call, cat, cons, uncons,");
    println!("                  eq? and ifte");
    println!();
    println!("Environment:");
    println!("  LION_LOG        Log filter, e.g. lion_eval=trace (falls back to RUST_LOG)");
    println!("  LION_LOG_TREE   Set to 1 to show nested evaluation as a tree");
}
