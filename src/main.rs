use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use lexical_trie::{InputFormat, Result, SortConfig, Wordlist};
use structopt::StructOpt;
use tracing::Level;

/// Sort words by a custom alphabet.
///
/// The first token of the input is the alphabet, every following token a word
/// to sort, e.g. `echo "bac a b c" | lexical-sort` prints b, a, c.
#[derive(StructOpt)]
#[structopt(name = "lexical-sort")]
struct Cli {
    /// The path to the file to read, standard input when omitted
    #[structopt(parse(from_os_str))]
    path: Option<PathBuf>,
    /// Sort by this alphabet instead of reading it from the input
    #[structopt(short, long)]
    alphabet: Option<String>,
    /// Keep words in first-seen order, no alphabet is read
    #[structopt(short, long, conflicts_with = "alphabet")]
    unordered: bool,
    /// Read one word per line from a delimited column
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Column holding the word when a delimiter is given
    #[structopt(short = "c", long, requires = "delimiter")]
    column: Option<usize>,
    /// Print a JSON report instead of one word per line
    #[structopt(long)]
    json: bool,
    /// Log progress to stderr (repeat for more detail)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn run(args: &Cli) -> Result<()> {
    let config = SortConfig::builder()
        .alphabet(args.alphabet.clone())
        .unordered(args.unordered)
        .format(
            InputFormat::builder()
                .delimiter(args.delimiter)
                .word_column(args.column)
                .build(),
        )
        .build();

    let wl = match &args.path {
        Some(path) => Wordlist::from_file(path, &config)?,
        None => Wordlist::from_reader(io::stdin().lock(), &config)?,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.json {
        serde_json::to_writer_pretty(&mut out, &wl.report())?;
        writeln!(out)?;
    } else {
        for word in wl.sorted() {
            writeln!(out, "{}", word)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Cli::from_args();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("lexical-sort: {}", e);
        process::exit(1);
    }
}
