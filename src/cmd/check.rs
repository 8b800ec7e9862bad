//! CLI handler for the check command.

use crate::callstack::{Callstack, CallstackItem};
use crate::render::load_template;
use std::path::PathBuf;

pub fn run(template: Option<String>, file: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let template = match (template, file) {
        (Some(t), _) => t,
        (None, Some(path)) => load_template(&path)?,
        (None, None) => anyhow::bail!("Pass a TEMPLATE argument or --file"),
    };

    let callstack = Callstack::build(&template)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&callstack)?);
    } else {
        print_callstack(&callstack);
    }

    let dangling = callstack.dangling_ordinals();
    if !dangling.is_empty() {
        eprintln!("\nWarning: ordinals that do not point to an earlier placeholder:");
        for (position, reference) in dangling {
            eprintln!(
                "  #{} references #{} - every write will fail",
                position, reference
            );
        }
    }

    Ok(())
}

fn print_callstack(callstack: &Callstack) {
    println!(
        "Template compiled: {} items, {} placeholders",
        callstack.items().len(),
        callstack.generator_count()
    );
    for item in callstack.items() {
        match item {
            CallstackItem::Literal { text } => println!("  literal  {:?}", text),
            CallstackItem::Generator {
                position,
                placeholder,
            } => match placeholder.ordinal {
                Some(reference) => println!(
                    "  #{:<6} {:<8} {}  (replays #{})",
                    position,
                    placeholder.kind(),
                    placeholder,
                    reference
                ),
                None => println!(
                    "  #{:<6} {:<8} {}",
                    position,
                    placeholder.kind(),
                    placeholder
                ),
            },
        }
    }
}
