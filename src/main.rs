use std::error::Error;
use std::io::{self, BufRead};
use std::path::Path;
use std::time::{Duration, Instant};

use clap::Parser;
use prefixrank::{vocab, Autocomplete, LinearScan, PrefixIndex, Term, Vocabulary};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, format_bytes, print_matches, row, section_bot, section_top};
use cli::{Cli, Commands};

type CliResult<T> = Result<T, Box<dyn Error>>;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Query {
            file,
            prefix,
            k,
            exact,
            verify,
        } => run_query(&file, &prefix, k, exact, verify),
        Commands::Stats { file } => run_stats(&file),
        Commands::Interactive { file, k } => run_interactive(&file, k),
    };

    if let Err(e) = result {
        eprintln!("{}", display::error_line(&e.to_string()));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("prefixrank={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load a vocabulary file and index it, timing the build.
fn load_index(file: &str) -> CliResult<(Vocabulary, PrefixIndex, Duration)> {
    let vocab = vocab::load(Path::new(file))?;
    let start = Instant::now();
    let index = vocab.to_index()?;
    let elapsed = start.elapsed();
    info!(file, terms = vocab.len(), ?elapsed, "index ready");
    Ok((vocab, index, elapsed))
}

fn run_query(file: &str, prefix: &str, k: usize, exact: bool, verify: bool) -> CliResult<()> {
    let (vocab, index, _) = load_index(file)?;

    let matches: Vec<&Term> = if exact {
        index.top_matches_exact(prefix, k)
    } else {
        index.top_matches(prefix, k).iter().collect()
    };
    print_matches(prefix, matches.iter().copied());

    if verify {
        verify_against_scan(&vocab, &index, prefix, k, &matches)?;
    }
    Ok(())
}

/// Compare an answer with the brute-force scan over the same vocabulary.
///
/// The loose lookup only promises exact prefix semantics up to
/// `max_prefix` characters, so longer prefixes are compared via the
/// exact lookup.
fn verify_against_scan(
    vocab: &Vocabulary,
    index: &PrefixIndex,
    prefix: &str,
    k: usize,
    matches: &[&Term],
) -> CliResult<()> {
    let scan = LinearScan::build(&vocab.terms, &vocab.weights)?;
    let expected = scan.top_matches(prefix, k);

    let exact;
    let actual: &[&Term] = if prefixrank::char_len(prefix) > index.max_prefix() {
        warn!(
            prefix,
            max_prefix = index.max_prefix(),
            "prefix longer than indexed length, verifying the exact lookup"
        );
        exact = index.top_matches_exact(prefix, k);
        &exact
    } else {
        matches
    };

    let agrees = actual.len() == expected.len()
        && actual.iter().zip(&expected).all(|(a, e)| *a == e);
    if !agrees {
        return Err(format!(
            "index returned {} matches for {:?} but a full scan returned {}",
            actual.len(),
            prefix,
            expected.len()
        )
        .into());
    }
    eprintln!("✓ verified {} matches against a full scan", actual.len());
    Ok(())
}

fn run_stats(file: &str) -> CliResult<()> {
    let (_, index, elapsed) = load_index(file)?;

    section_top("INDEX");
    row(&format!(" terms        {}", index.term_count()));
    row(&format!(" buckets      {}", index.bucket_count()));
    row(&format!(" max prefix   {} chars", index.max_prefix()));
    row(&format!(
        " size         {} ({} bytes)",
        format_bytes(index.size_in_bytes()),
        index.size_in_bytes()
    ));
    row(&format!(" build time   {:.2?}", elapsed));
    section_bot();
    Ok(())
}

fn run_interactive(file: &str, k: usize) -> CliResult<()> {
    let (_, index, elapsed) = load_index(file)?;
    eprintln!(
        "indexed {} terms in {:.2?}; enter prefixes, one per line",
        index.term_count(),
        elapsed
    );

    for line in io::stdin().lock().lines() {
        let line = line?;
        let prefix = line.trim_end_matches('\r');
        print_matches(prefix, index.top_matches(prefix, k));
    }
    Ok(())
}
