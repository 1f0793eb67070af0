use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use line_order_sort::algorithm::SortAlgorithm;
use line_order_sort::error::{SortError, EXIT_FAILURE};
use line_order_sort::order::Order;
use line_order_sort::sort::Sort;
use line_order_sort::sort_job::SortJob;

/// Sort the lines of every file in a directory by three ordering rules, single and multi threaded
#[derive(Parser, Debug)]
#[command(name = "line-order-sort", version, about)]
struct Cli {
    /// Directory with the input files, subdirectories are ignored
    #[arg(default_value = "InputFiles")]
    input_dir: PathBuf,

    /// Directory for the Single*.txt and Multi*.txt outputs, created when missing
    #[arg(short, long, default_value = "MyOutputFiles")]
    output: PathBuf,

    /// Ordering rule to run: ascending, descending or last-letter. Repeat for several, all three
    /// run by default
    #[arg(long = "order")]
    orders: Vec<Order>,

    /// Sort algorithm: partition or merge
    #[arg(long, default_value = "partition")]
    algorithm: SortAlgorithm,

    /// Only run the single threaded strategy
    #[arg(long, conflicts_with = "multi_only")]
    single_only: bool,

    /// Only run the multi threaded strategy
    #[arg(long)]
    multi_only: bool,

    /// Sort the single threaded result once after the last file instead of after every file
    #[arg(long)]
    sort_once: bool,

    /// Skip sorting the merged multi threaded result once more
    #[arg(long)]
    no_final_resort: bool,

    /// Only use input files whose name matches this regular expression
    #[arg(long)]
    include: Option<String>,

    /// Check that FILE is ordered by every --order (ascending by default) and exit
    #[arg(long, value_name = "FILE")]
    check: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = SimpleLogger::new().with_level(cli.log_level).init() {
        eprintln!("line-order-sort: failed to initialize logging: {}", e);
    }

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("line-order-sort: {:#}", e);
            let exit_code = e
                .downcast_ref::<SortError>()
                .map(|e| e.exit_code())
                .unwrap_or(EXIT_FAILURE);
            process::exit(exit_code);
        }
    }
}

fn run(cli: Cli) -> Result<i32, anyhow::Error> {
    if let Some(path) = &cli.check {
        return check(path, &cli.orders);
    }

    let mut line_sort = Sort::new(cli.input_dir.clone(), cli.output.clone());
    if !cli.orders.is_empty() {
        line_sort.with_jobs(cli.orders.iter().map(|order| SortJob::for_order(*order)).collect());
    }
    line_sort.with_algorithm(cli.algorithm);
    line_sort.with_single_threaded(!cli.multi_only);
    line_sort.with_multi_threaded(!cli.single_only);
    line_sort.with_resort_each_file(!cli.sort_once);
    line_sort.with_final_resort(!cli.no_final_resort);
    if let Some(include) = &cli.include {
        let r = regex::Regex::new(include).with_context(|| format!("--include {}", include))?;
        line_sort.with_file_filter(r);
    }

    let reports = line_sort
        .sort()
        .with_context(|| format!("sorting files in {}", cli.input_dir.display()))?;

    let mut previous_multi = false;
    for report in &reports {
        let multi = report.name().starts_with("Multi");
        if multi && !previous_multi {
            println!();
        }
        previous_multi = multi;
        println!("{}", report);
        for skipped in report.skipped() {
            eprintln!("warning: {} skipped {}", report.name(), skipped.display());
        }
    }
    println!();
    println!("Finished...");
    Ok(0)
}

/// Exit code 0 when `path` is ordered by all `orders`, ascending when none are given
fn check(path: &Path, orders: &[Order]) -> Result<i32, anyhow::Error> {
    let orders = if orders.is_empty() { &[Order::Ascending][..] } else { orders };
    let mut exit_code = 0;
    for order in orders {
        if Sort::check_file(path, *order)? {
            println!("{} is ordered by {}", path.display(), order);
        } else {
            println!("{} is not ordered by {}", path.display(), order);
            exit_code = EXIT_FAILURE;
        }
    }
    Ok(exit_code)
}
