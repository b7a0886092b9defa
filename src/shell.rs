//! Interactive front-end.
//!
//! Owns the console conversation: the rescan-or-search menu, statistics
//! printout, and the repeating post-run search prompt. Everything below
//! this layer returns `Result`; only the binary decides exit codes.

use std::fs;
use std::path::Path;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

use crate::cli::Args;
use crate::error::Result;
use crate::pipeline;
use crate::search::search_output;

/// Runs one full session. Clean early exits — nothing to process, the
/// operator declined at the menu — are `Ok`, not errors.
pub fn run(args: &Args) -> Result<()> {
    println!(
        "{} v{}",
        "chatscribe".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );

    if let Some(term) = &args.search {
        print_search_results(term.trim(), &args.output_dir);
        return Ok(());
    }

    if existing_html_count(&args.output_dir) > 0 && !resolve_existing_output(args)? {
        return Ok(());
    }

    let inputs = pipeline::discover_inputs(&args.input_dir)?;
    if inputs.is_empty() {
        println!(
            "{}",
            format!("No JSON files found in {}.", args.input_dir.display()).yellow()
        );
        return Ok(());
    }

    let settings = args.settings();
    let stats = pipeline::run(&inputs, &args.output_dir, &settings)?;

    println!("\n{}", stats.summary());
    println!(
        "\nStatistics written to {}",
        args.output_dir.join("stats.txt").display()
    );

    if !args.batch {
        search_loop(&args.output_dir)?;
    }
    Ok(())
}

/// Counts `.html` files directly inside `dir`; a missing directory counts
/// as empty.
fn existing_html_count(dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    entries
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|x| x.to_str())
                .is_some_and(|x| x.eq_ignore_ascii_case("html"))
        })
        .count()
}

/// Handles an output directory that already holds transcripts. Returns
/// `true` when the caller should go on and reprocess, `false` when the
/// session is finished here.
fn resolve_existing_output(args: &Args) -> Result<bool> {
    if args.batch {
        fs::remove_dir_all(&args.output_dir)?;
        return Ok(true);
    }

    let count = existing_html_count(&args.output_dir);
    println!(
        "{}",
        format!(
            "Output folder {} already contains {count} HTML file(s).",
            args.output_dir.display()
        )
        .yellow()
    );

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What do you want to do?")
        .items(&[
            "Rescan (delete the output folder and reprocess)",
            "Search the existing output",
            "Quit",
        ])
        .default(0)
        .interact()?;

    match choice {
        0 => {
            fs::remove_dir_all(&args.output_dir)?;
            Ok(true)
        }
        1 => {
            let term: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Search term")
                .interact_text()?;
            print_search_results(term.trim(), &args.output_dir);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// The repeating post-run search prompt: ask, search, and loop until the
/// operator declines or a search hits.
fn search_loop(output_dir: &Path) -> Result<()> {
    loop {
        let again = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Search the output folder for a term?")
            .default(false)
            .interact()?;
        if !again {
            return Ok(());
        }

        let term: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Search term")
            .interact_text()?;
        if print_search_results(term.trim(), output_dir) {
            return Ok(());
        }
    }
}

/// Prints search results; returns `true` when anything matched.
fn print_search_results(term: &str, output_dir: &Path) -> bool {
    let results = search_output(term, output_dir);
    if results.is_empty() {
        println!("{}", "No matches found in the output folder.".yellow());
        return false;
    }
    println!("\nSearch term found in the following file(s):");
    for name in &results {
        println!("- {name}");
    }
    true
}
