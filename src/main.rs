use std::path::PathBuf;

use bin_packer::reader::{BinppReader, DatasetReader, JburkardtReader};
use bin_packer::render;
use bin_packer::{Algorithm, Solution, WeightSet};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "bin_packer", about = "Greedy one-dimensional bin packing")]
struct Cli {
    /// Packing algorithm (e.g. online-first-fit, offline-best-fit, gnp)
    #[arg(long, default_value = "offline-first-fit", value_parser = parse_algorithm)]
    algorithm: Algorithm,

    /// Bin capacity (overrides the dataset's capacity)
    #[arg(long)]
    capacity: Option<u32>,

    /// Item weights, in arrival order (e.g. 32 6 37 43)
    #[arg(long, num_args = 1.., conflicts_with_all = ["binpp", "jburkardt"])]
    weights: Vec<u32>,

    /// Read a BinPP dataset file
    #[arg(long, conflicts_with = "jburkardt")]
    binpp: Option<PathBuf>,

    /// Read a Jburkardt dataset by file prefix (e.g. data/p01_)
    #[arg(long)]
    jburkardt: Option<PathBuf>,

    /// Number of bins, for fixed-bin-count algorithms
    #[arg(long)]
    bins: Option<usize>,

    /// Show a bar for each bin
    #[arg(long)]
    layout: bool,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse()
}

fn load_input(cli: &Cli) -> Result<WeightSet, String> {
    let mut set = if let Some(path) = &cli.binpp {
        BinppReader::new(path)
            .and_then(|r| r.offline())
            .map_err(|e| e.to_string())?
    } else if let Some(prefix) = &cli.jburkardt {
        JburkardtReader::new(prefix)
            .and_then(|r| r.offline())
            .map_err(|e| e.to_string())?
    } else if !cli.weights.is_empty() {
        WeightSet::new(cli.capacity.unwrap_or(0), cli.weights.clone())
    } else {
        return Err("no input, use --weights, --binpp or --jburkardt".to_string());
    };
    if let Some(capacity) = cli.capacity {
        set.capacity = capacity;
    }
    Ok(set)
}

fn print_solution(cli: &Cli, solution: &Solution) {
    for (i, bin) in solution.bins.iter().enumerate() {
        println!("Bin {}: {} (load {})", i + 1, bin, bin.load());
    }
    if cli.layout {
        println!();
        print!("{}", render::render_solution(solution));
    }
    println!();

    let count = solution.bin_count();
    match solution.waste_percent() {
        Some(waste) => println!(
            "Summary: {} bin{} used, {:.1}% waste",
            count,
            if count == 1 { "" } else { "s" },
            waste,
        ),
        None => println!(
            "Summary: {} bin{}, load std dev {:.2}",
            count,
            if count == 1 { "" } else { "s" },
            solution.load_std_dev(),
        ),
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let set = load_input(&cli).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let solution = cli
        .algorithm
        .run(set.capacity, &set.weights, cli.bins)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    if cli.json {
        match serde_json::to_string_pretty(&solution) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print_solution(&cli, &solution);
}
