//! KPL symbol table inspector
//!
//! Usage: kplsem [OPTIONS]

use anyhow::Context;
use clap::Parser as ClapParser;
use kpl_semantics::driver::declare_reference_program;
use kpl_semantics::symtab::{DEFAULT_MAX_IDENT_LEN, SymTab, SymTabConfig};

#[derive(ClapParser, Debug)]
#[command(name = "kplsem")]
#[command(author = "KPL Toolchain Team")]
#[command(version = "0.1.0")]
#[command(about = "Build and dump a KPL symbol table", long_about = None)]
struct Args {
    /// Only dump the predeclared global environment
    #[arg(long)]
    builtins: bool,

    /// Longest accepted identifier
    #[arg(long, default_value_t = DEFAULT_MAX_IDENT_LEN)]
    max_ident_len: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    run(&args)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut table = SymTab::with_config(SymTabConfig {
        max_ident_len: args.max_ident_len,
    });

    log::debug!(
        "identifiers limited to {} characters",
        table.config().max_ident_len
    );

    if args.builtins {
        print!("{}", table.dump_globals());
    } else {
        declare_reference_program(&mut table).context("failed to declare the reference program")?;
        print!("{}", table.dump_program());
    }

    let report = table.clean().context("symbol table teardown failed")?;
    if args.verbose {
        eprintln!(
            "Released {} objects, {} scopes, {} type nodes, {} constants",
            report.objects, report.scopes, report.type_nodes, report.constants
        );
    }

    Ok(())
}
