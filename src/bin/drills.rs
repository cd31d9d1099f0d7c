use std::path::PathBuf;

use algo_drills::bench::{
    bench_container_ops, bench_sparse_vs_dense, bench_two_sum, ContainerTimings, SparseTimings,
    TwoSumTiming,
};
use algo_drills::frequency::top_k_frequent;
use algo_drills::pairs::{PairedSumSolver, Strategy};
use algo_drills::reference::{big_o_notes, container_notes, memory_tips};
use algo_drills::streaming::column_sum_path;
use algo_drills::windows::{moving_average, sliding_window_max, sliding_window_min};
use algo_drills::BenchConfig;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::debug;

#[derive(Parser, Debug)]
#[command(
    name = "drills",
    version,
    about = "Algorithm drills: paired sums, windows, top-k and friends"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct TargetedInput {
    /// Sum to look for
    #[arg(short, long, allow_negative_numbers = true)]
    target: i64,
    /// Input sequence
    #[arg(required = true, allow_negative_numbers = true)]
    nums: Vec<i64>,
}

#[derive(Args, Debug)]
struct WindowedInput {
    #[arg(short, long)]
    window: usize,
    #[arg(required = true, allow_negative_numbers = true)]
    nums: Vec<i64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// First pair of indices summing to the target
    Pair {
        /// brute-force, hashing, two-pointer or all
        #[arg(short, long, default_value = "all")]
        strategy: String,
        #[command(flatten)]
        input: TargetedInput,
    },
    /// Every index pair summing to the target
    AllPairs {
        #[command(flatten)]
        input: TargetedInput,
    },
    /// Distinct value pairs summing to the target
    ValuePairs {
        #[command(flatten)]
        input: TargetedInput,
    },
    /// Unique value triplets summing to the target
    Triplets {
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        target: i64,
        #[arg(required = true, allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Maximum of every sliding window
    WindowMax {
        #[command(flatten)]
        input: WindowedInput,
    },
    /// Minimum of every sliding window
    WindowMin {
        #[command(flatten)]
        input: WindowedInput,
    },
    /// Moving average over a window
    MovingAverage {
        #[arg(short, long)]
        window: usize,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Most frequent values
    TopK {
        #[arg(short, long)]
        k: usize,
        #[arg(required = true, allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Sum one numeric column of a CSV file in chunks
    CsvSum {
        path: PathBuf,
        #[arg(short, long)]
        column: String,
        #[arg(long, default_value_t = 100_000)]
        chunk_size: usize,
        #[arg(long)]
        json: bool,
    },
    /// Collection complexity cheat sheet
    Notes,
    /// Time the pair strategies, container operations and sparse storage
    Bench {
        /// TOML file with sizes, reps and seed
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    let env = env_logger::Env::new()
        .filter_or("DRILLS_LOG", "warn")
        .write_style("DRILLS_LOG_STYLE");
    env_logger::init_from_env(env);
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    debug!("{:?}", cli.command);

    match cli.command {
        Command::Pair { strategy, input } => run_pair(&strategy, &input)?,
        Command::AllPairs { input } => {
            let pairs = PairedSumSolver::new(&input.nums).all_index_pairs(input.target);
            print_list("index pairs", pairs.iter());
        }
        Command::ValuePairs { input } => {
            let pairs = PairedSumSolver::new(&input.nums).unique_value_pairs(input.target);
            print_list("value pairs", pairs.iter());
        }
        Command::Triplets { target, nums } => {
            let triplets = PairedSumSolver::new(&nums).triplets(target);
            print_list("triplets", triplets.iter());
        }
        Command::WindowMax { input } => {
            println!("{:?}", sliding_window_max(&input.nums, input.window));
        }
        Command::WindowMin { input } => {
            println!("{:?}", sliding_window_min(&input.nums, input.window));
        }
        Command::MovingAverage { window, values } => {
            println!("{:?}", moving_average(values, window));
        }
        Command::TopK { k, nums } => {
            for (value, count) in top_k_frequent(nums, k) {
                println!("  {value}: {count}");
            }
        }
        Command::CsvSum {
            path,
            column,
            chunk_size,
            json,
        } => {
            let summary = column_sum_path(&path, &column, chunk_size)
                .with_context(|| format!("summing column '{column}' of {}", path.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{} = {} ({} values, {} skipped, {} chunks)",
                    summary.column.bold(),
                    summary.total,
                    summary.parsed,
                    summary.skipped,
                    summary.chunks
                );
            }
        }
        Command::Notes => print_notes(),
        Command::Bench { config, json } => run_bench(config, json)?,
    }
    Ok(())
}

fn run_pair(strategy: &str, input: &TargetedInput) -> Result<()> {
    let solver = PairedSumSolver::new(&input.nums);
    let results = if strategy.eq_ignore_ascii_case("all") {
        solver.first_pair_by_each(input.target)
    } else {
        let strategy: Strategy = strategy.parse()?;
        vec![(strategy, solver.first_pair(strategy, input.target))]
    };

    for (strategy, found) in results {
        let label = format!("{:<12}", strategy.name());
        match found {
            Some(pair) => println!(
                "  {} {} {}",
                label.cyan(),
                pair.to_string().green(),
                strategy.complexity().dimmed()
            ),
            None => println!("  {} {}", label.cyan(), "not found".yellow()),
        }
    }
    Ok(())
}

fn print_list<T: std::fmt::Display>(what: &str, items: impl ExactSizeIterator<Item = T>) {
    if items.len() == 0 {
        println!("{}", format!("no {what}").yellow());
        return;
    }
    println!("{} {what}:", items.len().to_string().bold());
    for item in items {
        println!("  {item}");
    }
}

fn print_notes() {
    println!("{}", "Collections".bold().underline());
    for note in container_notes() {
        println!("  {:<16} {}", note.name.cyan(), note.summary);
    }
    println!();
    println!("{}", "Big-O".bold().underline());
    let mut last_category = "";
    for note in big_o_notes() {
        if note.category != last_category {
            println!("  {}", note.category.bold());
            last_category = note.category;
        }
        println!("    {:<40} {}", note.operation, note.cost.green());
    }
    println!();
    println!("{}", "Memory".bold().underline());
    for tip in memory_tips() {
        println!("  - {tip}");
    }
}

fn run_bench(config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let config = match config_path {
        Some(path) => BenchConfig::from_file(&path)?,
        None => BenchConfig::default(),
    };

    let rows = bench_two_sum(&config);
    let containers = bench_container_ops(
        config.container_size,
        config.container_trials,
        config.seed,
    );
    let sparse = bench_sparse_vs_dense(
        config.sparse_rows,
        config.sparse_cols,
        config.sparse_density,
        config.seed,
    )
    .context("running the sparse vs dense experiment")?;

    if json {
        let report = serde_json::json!({
            "two_sum": rows,
            "containers": containers,
            "sparse_vs_dense": sparse,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_two_sum_table(&rows);
        println!();
        print_container_table(&containers);
        println!();
        print_sparse_table(&sparse);
    }
    Ok(())
}

fn format_seconds(seconds: Option<f64>) -> String {
    seconds.map_or_else(|| "skipped".to_string(), |s| format!("{s:.6}"))
}

fn print_two_sum_table(rows: &[TwoSumTiming]) {
    println!("{}", "Two-sum timings (seconds)".bold());
    for row in rows {
        let cells: Vec<String> = row
            .strategies
            .iter()
            .map(|t| format!("{}={}", t.strategy.name(), format_seconds(t.seconds)))
            .collect();
        println!(
            "  n={:>6} | {} | all-pairs={:.6} ({} pairs)",
            row.n,
            cells.join(" | "),
            row.all_pairs_seconds,
            row.all_pairs_found
        );
    }
}

fn print_container_table(timings: &ContainerTimings) {
    let title = format!(
        "Container timings, n={} (avg seconds over {} trials)",
        timings.n, timings.trials
    );
    println!("{}", title.bold());
    println!("  {:<20} : {:.6}", "vec membership", timings.vec_membership_s);
    println!("  {:<20} : {:.6}", "set membership", timings.set_membership_s);
    println!("  {:<20} : {:.6}", "vec push back", timings.vec_push_back_s);
    println!("  {:<20} : {:.6}", "vec insert front", timings.vec_insert_front_s);
}

fn print_sparse_table(timings: &SparseTimings) {
    let title = format!(
        "Sparse vs dense, {}x{} at density {} ({} non-zeros)",
        timings.rows, timings.cols, timings.density, timings.nnz
    );
    println!("{}", title.bold());
    println!("  {:<10} {:>14} {:>12} {:>12} {:>14}", "", "bytes", "build s", "sum s", "sum");
    println!(
        "  {:<10} {:>14} {:>12.6} {:>12.6} {:>14.4}",
        "dense",
        timings.dense_bytes,
        timings.dense_build_s,
        timings.dense_sum_s,
        timings.dense_sum
    );
    println!(
        "  {:<10} {:>14} {:>12.6} {:>12.6} {:>14.4}",
        "sparse".green(),
        timings.sparse_bytes,
        timings.sparse_build_s,
        timings.sparse_sum_s,
        timings.sparse_sum
    );
}
