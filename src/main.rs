use anyhow::Result;
use clap::Parser;
use recurra::{
    append,
    cli::{Cli, OutputFormat},
    json_output, reader, report,
    sequence::{self, PatternConfig},
    summary,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Mine and print the top-K description sequences
fn run_sequences(records: &[recurra::event::EventRecord], args: &Cli) -> Result<()> {
    let descriptions = reader::descriptions(records);
    let table = sequence::mine_sequences(&descriptions);
    let ranked = sequence::top_sequences(&table, args.top);

    match args.format {
        OutputFormat::Text => print!("{}", report::render_top_sequences(&ranked, args.top)),
        OutputFormat::Json => {
            let json = json_output::JsonSequenceReport::from_ranked(&ranked, args.top);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

/// Detect and print repeating category patterns
fn run_patterns(records: &[recurra::event::EventRecord], args: &Cli) -> Result<()> {
    let config = PatternConfig {
        category: args.category.clone(),
        pattern_length: args.pattern_length,
    };
    let patterns = sequence::detect_patterns(records, &config)?;
    let ranked = report::rank_patterns(&patterns);

    match args.format {
        OutputFormat::Text => print!("{}", report::render_patterns(&ranked)),
        OutputFormat::Json => {
            let json = json_output::JsonPatternReport::from_ranked(
                &ranked,
                &args.category,
                args.pattern_length,
            );
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

/// Print per-category event counts
fn run_summary(records: &[recurra::event::EventRecord], args: &Cli) -> Result<()> {
    let counts = summary::count_by_category(records);

    match args.format {
        OutputFormat::Text => print!("{}", report::render_summary(&counts)),
        OutputFormat::Json => {
            let json = json_output::JsonSummary::from_counts(&counts);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

/// Print events matching a keyword
fn run_search(records: &[recurra::event::EventRecord], keyword: &str, args: &Cli) -> Result<()> {
    let matches = summary::search(records, keyword);

    match args.format {
        OutputFormat::Text => print!("{}", report::render_events(&matches)),
        OutputFormat::Json => {
            let json = json_output::JsonSearchReport {
                keyword: keyword.to_string(),
                matches: matches.into_iter().cloned().collect(),
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    // Appending validates before touching the file and runs alone.
    if let Some(spec) = &args.add {
        let event = append::NewEvent::from_spec(spec)?;
        append::append_event(&args.log_file, &event)?;
        println!("Appended: {}", event.record().to_line());
        return Ok(());
    }

    let records = reader::read_log(&args.log_file)?;

    if args.summary {
        run_summary(&records, &args)?;
    }
    if args.timestamps {
        for ts in summary::timestamps(&records) {
            println!("{ts}");
        }
    }
    if let Some(keyword) = &args.search {
        run_search(&records, keyword, &args)?;
    }
    if args.patterns {
        run_patterns(&records, &args)?;
    }

    // Sequence mining is the default action when nothing else was asked.
    let nothing_else = !args.summary && !args.timestamps && args.search.is_none() && !args.patterns;
    if args.sequences || nothing_else {
        run_sequences(&records, &args)?;
    }

    Ok(())
}
