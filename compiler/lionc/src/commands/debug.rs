//! The `parse` command: show how a file reads without evaluating it.

use lion_parse::parse;

use super::read_file;

/// Parse a file and print the resulting program, one top-level value per
/// line.
pub fn parse_file(path: &str) -> Result<(), String> {
    let content = read_file(path)?;
    let program = parse(&content).map_err(|err| format!("{path}: {err}"))?;

    println!("Parse result for '{path}' ({} values):", program.len());
    for value in &program {
        println!("  {:<8} {value}", value.type_name());
    }
    Ok(())
}
