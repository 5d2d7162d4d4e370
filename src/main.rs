//! nucleoseq - nucleotide sequence statistics
//!
//! Builds a nucleotide sequence (random or from a base string) and prints
//! its composition, its bases or its FASTQ record.
//!
//! ## Usage
//!
//! ```bash
//! nucleoseq                          # stats for 10,000,000 random bases
//! nucleoseq 1000 --seed 42 -f fastq  # reproducible FASTQ body
//! nucleoseq -s ACGTU -c -f bases     # complementary strand
//! ```
//!
//! Set `RUST_LOG=debug` for cache diagnostics.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use nucleoseq::formats::fastq::fastq_record;
use nucleoseq::formats::{parse_str_with_options, SequenceFormat};
use nucleoseq::report::SequenceReport;
use nucleoseq::sequence::NucleotideSequence;

/// Output selection for the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Base, percentage and quality distributions
    Stats,
    /// Base symbols only
    Bases,
    /// FASTQ body (or full record with --id)
    Fastq,
}

/// Input format of --sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormatArg {
    /// Plain base symbols
    Plain,
    /// FASTQ body, optionally with an '@ID' header
    Fastq,
    /// Detect from content
    Auto,
}

impl From<InputFormatArg> for Option<SequenceFormat> {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Plain => Some(SequenceFormat::Plain),
            InputFormatArg::Fastq => Some(SequenceFormat::Fastq),
            InputFormatArg::Auto => None,
        }
    }
}

/// nucleoseq - composition statistics for nucleotide sequences
///
/// Without --sequence, a random DNA sequence of LENGTH bases is generated.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Length of the random sequence
    #[arg(default_value_t = 10_000_000)]
    length: usize,

    /// Use this sequence instead of a random one (bases or a FASTQ record)
    #[arg(short = 's', long = "sequence", conflicts_with = "seed")]
    sequence: Option<String>,

    /// Format of --sequence
    #[arg(short = 'i', long = "input-format", value_enum, default_value = "auto")]
    input_format: InputFormatArg,

    /// Seed for reproducible random sequences
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// What to print
    #[arg(short = 'f', long = "format", value_enum, default_value = "stats")]
    format: FormatArg,

    /// Work on the complementary strand
    #[arg(short = 'c', long = "complement")]
    complement: bool,

    /// Record identifier; adds an '@ID' header line to FASTQ output
    #[arg(long = "id")]
    id: Option<String>,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: PathBuf,
}

/// Builds the sequence described by the arguments.
fn build_sequence(args: &Args) -> Result<NucleotideSequence> {
    let sequence = match &args.sequence {
        Some(text) => parse_str_with_options(text, args.input_format.into())
            .with_context(|| format!("Cannot parse --sequence {:?}", text))?,
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            log::info!("Generating {} random nucleotides", args.length);
            NucleotideSequence::random_sequence(args.length, &mut rng)
        }
    };

    if args.complement {
        log::info!("Using the complementary strand");
        Ok(sequence.complementary_sequence())
    } else {
        Ok(sequence)
    }
}

/// Renders the requested output into `writer`.
fn write_output<W: Write>(
    writer: &mut W,
    sequence: &mut NucleotideSequence,
    format: FormatArg,
    id: Option<&str>,
) -> Result<()> {
    match format {
        FormatArg::Stats => {
            let report = SequenceReport::from_sequence(sequence)?;
            write!(writer, "{}", report)?;
        }
        FormatArg::Bases => sequence.write_nucleobases(writer)?,
        FormatArg::Fastq => match id {
            Some(id) => write!(writer, "{}", fastq_record(id, sequence))?,
            None => writeln!(writer, "{}", sequence.fastq())?,
        },
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let mut sequence = build_sequence(args)?;

    if args.output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_output(&mut handle, &mut sequence, args.format, args.id.as_deref())?;
    } else {
        let mut file = std::fs::File::create(&args.output)
            .with_context(|| format!("Cannot create {}", args.output.display()))?;
        write_output(&mut file, &mut sequence, args.format, args.id.as_deref())?;
        log::info!(
            "Wrote {} nucleotides to {}",
            sequence.len(),
            args.output.display()
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.sequence.is_none() && args.length == 0 {
        anyhow::bail!("Length must be at least 1 (got 0)");
    }
    if let Some(id) = &args.id {
        if args.format != FormatArg::Fastq {
            anyhow::bail!("--id only applies to FASTQ output");
        }
        if id.chars().any(char::is_whitespace) || id.is_empty() {
            anyhow::bail!("Record identifier must be non-empty and contain no whitespace");
        }
    }

    run(&args)
}
