use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pmtree::{get_all_perms, get_perm1, get_perm2, PermutationTree, TreeError};

/// Print every permutation of a set of symbols and look up selected ones.
#[derive(Debug, Parser)]
#[command(name = "pmtree", version)]
struct Args {
    /// Symbols to permute, one per character
    #[arg(default_value = "123")]
    symbols: String,

    /// 1-based permutation indices to look up
    #[arg(short, long = "index", default_values_t = [1, 2], allow_negative_numbers = true)]
    indices: Vec<i64>,

    /// Fail when a symbol appears more than once
    #[arg(long)]
    strict: bool,

    /// Draw the tree
    #[arg(long)]
    tree: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pmtree=warn"));
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn render(perm: &[char]) -> String {
    if perm.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        perm.iter().collect()
    }
}

fn run(args: Args) -> Result<(), TreeError> {
    let tree = PermutationTree::builder()
        .symbols(args.symbols.chars())
        .reject_duplicates(args.strict)
        .build()?;

    if args.tree {
        println!("{}", tree);
    }

    println!("{}", "All permutations:".bold());
    for perm in get_all_perms(&tree) {
        println!("{}", render(&perm));
    }

    println!("\n{}", "Specific permutations:".bold());
    for num in args.indices {
        let traversal = get_perm1(&tree, num);
        let navigation = get_perm2(&tree, num);
        println!(
            "Permutation {}: {} (traversal) {} (navigation)",
            num.to_string().cyan(),
            render(&traversal),
            render(&navigation)
        );
    }

    Ok(())
}

fn main() {
    init_tracing();

    if let Err(error) = run(Args::parse()) {
        eprintln!("{} {}", "error:".red().bold(), error);
        std::process::exit(1);
    }
}
