//! cgstats-verify - compares a collected cgroup statistics snapshot against
//! an expected one.
//!
//! Both snapshots are JSON files. Every differing field is logged, and the
//! exit code tells whether the snapshots matched.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

use cgstats_core::Report;
use cgstats_core::compare::{
    expect_blkio_stats_equals, expect_hugetlb_stats_equals, expect_memory_stats_equals,
    expect_stats_equals, expect_throttling_data_equals,
};
use cgstats_core::snapshot::{SnapshotError, load_category};

/// Statistics category stored in the snapshot files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Category {
    /// Full snapshot with every category.
    All,
    /// Block I/O entry sequences.
    Blkio,
    /// CPU throttling data.
    Cpu,
    /// Huge-page usage of a single page size.
    Hugetlb,
    /// Memory usage, NUMA breakdown and memory.stat counters.
    Memory,
}

/// Cgroup statistics snapshot verifier.
#[derive(Parser)]
#[command(name = "cgstats-verify", about = "Compare cgroup statistics snapshots", version)]
struct Args {
    /// Snapshot with the expected values.
    expected: PathBuf,

    /// Snapshot to verify.
    actual: PathBuf,

    /// Category both files contain.
    #[arg(short, long, value_enum, default_value_t = Category::All)]
    category: Category,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is INFO. Use -q for quiet mode (errors only).
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    for target in ["cgstats_verify", "cgstats_core"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn compare_files<T: DeserializeOwned>(
    expected: &Path,
    actual: &Path,
    compare: fn(&mut Report, &T, &T),
) -> Result<Report, SnapshotError> {
    let expected: T = load_category(expected)?;
    let actual: T = load_category(actual)?;

    let mut report = Report::new();
    compare(&mut report, &expected, &actual);
    Ok(report)
}

fn verify(args: &Args) -> Result<Report, SnapshotError> {
    let (expected, actual) = (args.expected.as_path(), args.actual.as_path());
    match args.category {
        Category::All => compare_files(expected, actual, expect_stats_equals),
        Category::Blkio => compare_files(expected, actual, expect_blkio_stats_equals),
        Category::Cpu => compare_files(expected, actual, expect_throttling_data_equals),
        Category::Hugetlb => compare_files(expected, actual, expect_hugetlb_stats_equals),
        Category::Memory => compare_files(expected, actual, expect_memory_stats_equals),
    }
}

/// Maps the outcome of a verification run to the process exit status:
/// 0 when the snapshots match, 1 on discrepancies, 2 when a file failed to load.
fn exit_code(result: &Result<Report, SnapshotError>) -> u8 {
    match result {
        Ok(report) if report.is_failed() => {
            error!("{} discrepancies found", report.len());
            1
        }
        Ok(_) => {
            info!("Snapshots match");
            0
        }
        Err(e) => {
            error!("{}", e);
            2
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    info!(
        "Comparing {} against {} ({:?})",
        args.actual.display(),
        args.expected.display(),
        args.category
    );

    ExitCode::from(exit_code(&verify(&args)))
}
