//! recordfile binary
//!
//! Writes the built-in records to a file and/or reads them back, applying
//! the score override and printing each record.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use recordfile::{Config, Record, RecordFile};
use tracing_subscriber::{fmt, EnvFilter};

/// Fixed-size binary record file tool
#[derive(Parser, Debug)]
#[command(name = "recordfile")]
#[command(about = "Write and read fixed-size binary record files")]
#[command(version)]
struct Args {
    /// Record file path
    #[arg(short, long, default_value = "data.bin")]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the built-in records, then read them back (default)
    Demo,

    /// Write the built-in records
    Write,

    /// Read records and apply the score override
    Read {
        /// Number of record slots to read
        #[arg(short, long, default_value = "4")]
        count: usize,

        /// Identifier whose score is overridden
        #[arg(short, long, default_value = "2", allow_hyphen_values = true)]
        target_id: i32,

        /// Score written into matching records
        #[arg(short, long, default_value = "100.0", allow_hyphen_values = true)]
        score: f32,
    },
}

fn seed_records() -> [Record; 4] {
    [
        Record::new("Ann", 1, 90.5),
        Record::new("Bo", 2, 17.4),
        Record::new("Cy", 3, 67.2),
        Record::new("Di", 4, 81.3),
    ]
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,recordfile=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder().path(&args.file);
    if let Some(Commands::Read {
        count,
        target_id,
        score,
    }) = &args.command
    {
        builder = builder
            .read_count(*count)
            .target_id(*target_id)
            .override_score(*score);
    }
    let store = RecordFile::new(builder.build());

    match args.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            write(&store);
            read(&store);
        }
        Commands::Write => write(&store),
        Commands::Read { .. } => read(&store),
    }
}

// Errors are part of the report: printed to stderr, not logged, so RUST_LOG
// cannot silence them.
fn write(store: &RecordFile) {
    match store.write(&seed_records()) {
        Ok(count) => println!("Records written to file: {}", count),
        Err(e) => eprintln!("Error while writing file: {}", e),
    }
}

fn read(store: &RecordFile) {
    let (records, report) = match store.load_and_update(store.config().read_count) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error while reading file: {}", e);
            return;
        }
    };

    for record in &records {
        println!("{}", record.describe());
    }
    println!("{}", report.summary());
}
