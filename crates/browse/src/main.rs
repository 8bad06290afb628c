//! Thin terminal shell over the catalog filter engine: load a catalog JSON
//! file, apply filter settings from the command line, print the matching
//! records as JSON. Rendering proper lives elsewhere; this prints raw data.

use anyhow::{Context, bail};

use storefront_catalog::{BrowseSession, FilterCommand, dataset};

const USAGE: &str = "usage: storefront-browse <catalog.json> [--category C] [--min N] [--max N]";

#[derive(Debug)]
struct CliArgs {
    path: String,
    category: Option<String>,
    min: Option<String>,
    max: Option<String>,
}

/// Parse command-line settings. `Ok(None)` means help was requested.
///
/// Exactly one positional argument (the catalog path) is accepted; anything
/// else starting with `-` that isn't a known option is an error rather than
/// being mistaken for a path.
fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Option<CliArgs>> {
    let mut path: Option<String> = None;
    let mut category: Option<String> = None;
    let mut min: Option<String> = None;
    let mut max: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--category" => category = args.next(),
            "--min" => min = args.next(),
            "--max" => max = args.next(),
            "--help" | "-h" => return Ok(None),
            flag if flag.starts_with('-') => {
                bail!("unknown option {flag}\n{USAGE}");
            }
            _ => {
                if path.is_some() {
                    bail!("unexpected extra argument {arg}\n{USAGE}");
                }
                path = Some(arg);
            }
        }
    }

    let path = path.context(USAGE)?;
    Ok(Some(CliArgs {
        path,
        category,
        min,
        max,
    }))
}

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let Some(args) = parse_args(std::env::args().skip(1))? else {
        eprintln!("{USAGE}");
        return Ok(());
    };

    let bytes = std::fs::read(&args.path)
        .with_context(|| format!("reading catalog {}", args.path))?;
    let records = dataset::from_json_slice(&bytes)?;

    let mut session = BrowseSession::new(records).context("starting browse session")?;

    if let Some(category) = args.category {
        session.apply(FilterCommand::SelectCategory(category));
    }
    if let Some(min) = args.min {
        session.apply(FilterCommand::SetMinPrice(min));
    }
    if let Some(max) = args.max {
        session.apply(FilterCommand::SetMaxPrice(max));
    }

    tracing::info!(
        total = session.records().len(),
        matched = session.filtered().len(),
        "catalog filtered"
    );

    println!("{}", serde_json::to_string_pretty(&session.filtered())?);
    Ok(())
}
