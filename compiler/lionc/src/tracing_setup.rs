//! Logging setup for the `lion` binary.
//!
//! Library crates only emit `tracing` events; nothing is printed until a
//! subscriber is installed here.
//!
//! - `LION_LOG` (or `RUST_LOG` when `LION_LOG` is unset) selects what is
//!   shown, e.g. `LION_LOG=lion_eval=trace`.
//! - `LION_LOG_TREE=1` renders nested `apply` spans as an indented tree.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, registry::Registry, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber if a filter is configured.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = filter_from_env() else {
            return;
        };
        let tree = std::env::var("LION_LOG_TREE").is_ok_and(|v| v == "1");
        let result = if tree {
            let layer = tracing_tree::HierarchicalLayer::default()
                .with_writer(std::io::stderr)
                .with_indent_lines(true)
                .with_indent_amount(2)
                .with_targets(true);
            Registry::default().with(layer).with(filter).try_init()
        } else {
            Registry::default()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init()
        };
        if let Err(err) = result {
            eprintln!("warning: could not install logger: {err}");
        }
    });
}

fn filter_from_env() -> Option<EnvFilter> {
    let directives = std::env::var("LION_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()?;
    match EnvFilter::try_new(&directives) {
        Ok(filter) => Some(filter),
        Err(err) => {
            eprintln!("warning: ignoring invalid log filter '{directives}': {err}");
            None
        }
    }
}
