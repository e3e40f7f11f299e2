use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use inventory_avl::{Inventory, ProductCode};

const DEFAULT_CODES: [ProductCode; 11] = [50, 30, 70, 20, 40, 60, 80, 10, 25, 35, 45];
const DEFAULT_SEARCHES: [ProductCode; 5] = [50, 25, 100, 80, 15];

#[derive(Parser, Debug)]
#[command(
    name = "inventory",
    about = "Product code inventory kept in a self-balancing AVL tree"
)]
struct Cli {
    /// Product codes to insert, in insertion order.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = DEFAULT_CODES
    )]
    codes: Vec<ProductCode>,
    /// Product codes to look up after all insertions.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = DEFAULT_SEARCHES
    )]
    search: Vec<ProductCode>,
    /// Start from an empty inventory, ignoring --codes.
    #[arg(long)]
    empty: bool,
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let codes = cli.codes();
    let inventory = build_inventory(codes);
    info!(
        requested = codes.len(),
        stored = inventory.len(),
        height = inventory.height(),
        "inventory built"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&mut out, codes, &cli.search, &inventory)
        .context("failed to write report to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

impl Cli {
    fn codes(&self) -> &[ProductCode] {
        if self.empty {
            &[]
        } else {
            &self.codes
        }
    }
}

fn build_inventory(codes: &[ProductCode]) -> Inventory {
    let mut inventory = Inventory::new();
    for &code in codes {
        if !inventory.insert(code) {
            debug!(code, "code already stored, skipping");
        }
    }
    inventory
}

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter {default_filter:?}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn report(
    out: &mut impl Write,
    codes: &[ProductCode],
    searches: &[ProductCode],
    inventory: &Inventory,
) -> io::Result<()> {
    writeln!(out, "=== INVENTORY DEMO ===")?;
    writeln!(out)?;
    print_codes(out, "Inserting codes", codes.iter())?;
    writeln!(out)?;

    writeln!(out, "=== STATISTICS ===")?;
    writeln!(out, "{}", inventory.stats())?;
    writeln!(out)?;

    print_codes(out, "=== ASCENDING ===", inventory.ascending())?;
    print_codes(out, "=== DESCENDING ===", inventory.descending())?;
    print_codes(out, "=== HIERARCHICAL (parent -> children) ===", inventory.hierarchical())?;
    if inventory.is_empty() {
        writeln!(out, "=== BY LEVELS ===")?;
        writeln!(out, "Empty tree")?;
    } else {
        print_codes(out, "=== BY LEVELS ===", inventory.level_order())?;
    }
    writeln!(out)?;

    writeln!(out, "=== SEARCH ===")?;
    for code in searches {
        let found = inventory.search(code);
        debug!(code, found, "searched code");
        let outcome = if found { "FOUND" } else { "NOT FOUND" };
        writeln!(out, "Code {code}: {outcome}")?;
    }
    Ok(())
}

fn print_codes<'a>(
    out: &mut impl Write,
    title: &str,
    codes: impl Iterator<Item = &'a ProductCode>,
) -> io::Result<()> {
    writeln!(out, "{title}")?;
    let line: Vec<String> = codes.map(ToString::to_string).collect();
    writeln!(out, "{}", line.join(" "))
}
