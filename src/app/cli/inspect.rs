use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_inspect(manifest: PathBuf, json: bool) -> Result<(), AppError> {
    let report = crate::inspect(&manifest)?;

    if json {
        let rendered = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        println!("{}", rendered);
        return Ok(());
    }

    for summary in &report.kinds {
        let state = if summary.predefined { "predefined" } else { "not declared" };
        println!("{}: {}", summary.kind, state);
    }

    if report.stores.is_empty() {
        println!("No stores declared in {}", manifest.display());
        return Ok(());
    }

    println!();
    for store in &report.stores {
        println!("{}.{}", store.kind, store.name);
        if let Some(description) = &store.description {
            println!("  {}", description);
        }
        for entry in &store.entries {
            let source = if entry.has_value { "manifest value" } else { "prompt" };
            println!("  • {} ({})", entry.name, source);
            if let Some(description) = &entry.description {
                println!("    {}", description);
            }
        }
    }
    Ok(())
}
