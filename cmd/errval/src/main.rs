//! errval - decode packed error values
//!
//! Prints, for each VALUE, its source and code as numbers, identifiers
//! and descriptions:
//!
//!   $ errval 0x05000011 gpg/timeout
//!   83886097 = (5, 17) = (PINENTRY, NO_SECKEY) = (Pinentry, No secret key)
//!   33554494 = (2, 62) = (GPG, TIMEOUT) = (GnuPG, Timeout)
//!
//! Run: errval --help

mod parse;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use errval::log::LogLevel;
use errval::{code_from_errno, code_to_errno, Catalog, Config, ErrorValue, Messages};

#[derive(Parser)]
#[command(name = "errval")]
#[command(author, version, about = "Decode and list packed error values")]
struct Cli {
    /// Values to decode: decimal, 0xHEX, SOURCE/CODE or CODE
    values: Vec<String>,

    /// List every known code
    #[arg(short, long)]
    list: bool,

    /// List every known source
    #[arg(short, long)]
    sources: bool,

    /// Map platform errno values to codes
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    errno: Vec<i32>,

    /// Replacement source table
    #[arg(long, value_name = "PATH", env = "ERRVAL_SOURCE_TABLE")]
    source_table: Option<PathBuf>,

    /// Replacement code table
    #[arg(long, value_name = "PATH", env = "ERRVAL_CODE_TABLE")]
    code_table: Option<PathBuf>,

    /// Replacement system-error name table
    #[arg(long, value_name = "PATH", env = "ERRVAL_SYSTEM_TABLE")]
    system_table: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        let mut cfg = Config::new();
        cfg.source_table = self.source_table.clone();
        cfg.code_table = self.code_table.clone();
        cfg.system_table = self.system_table.clone();
        if self.verbose {
            cfg = cfg.log_level(LogLevel::Debug);
        }
        cfg
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("errval: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` if some value could not be parsed.
fn run(cli: &Cli) -> Result<bool> {
    errval::init_from_config(&cli.config()).context("loading error tables")?;
    let catalog = errval::init::catalog();
    let mut msgs = Messages::new();

    if cli.sources {
        for entry in catalog.sources().iter() {
            println!("{:3} {:<12} {}", entry.slot, entry.name, entry.description);
        }
    }

    if cli.list {
        for entry in catalog.codes().iter() {
            println!("{:5} {:<22} {}", entry.slot, entry.name, entry.description);
        }
        for entry in catalog.system().iter() {
            let code = errval::ErrorCode::system(entry.slot);
            let value = ErrorValue::make_default(code);
            println!(
                "{:5} {:<22} {} (errno {})",
                code.raw(),
                entry.name,
                msgs.strerror(value),
                code_to_errno(code)
            );
        }
    }

    for &errno in &cli.errno {
        let code = code_from_errno(errno);
        let name = catalog.code_name(code).unwrap_or("?");
        let text = msgs.strerror(ErrorValue::make_default(code));
        println!("errno {} = {} ({}) = {}", errno, name, code.raw(), text);
    }

    let mut all_ok = true;
    for arg in &cli.values {
        match parse::parse_value(arg, catalog) {
            Ok(value) => println!("{}", describe(value, catalog, &mut msgs)),
            Err(e) => {
                eprintln!("errval: {}: {:#}", arg, e);
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

fn describe(value: ErrorValue, catalog: &Catalog, msgs: &mut Messages) -> String {
    let src = value.source();
    let code = value.code();
    let src_name = catalog.source(src).map_or("?", |e| e.name.as_ref());
    let code_name = catalog.code_name(code).unwrap_or("?");
    let src_text = errval::strsource(value);
    let code_text = msgs.strerror(value);
    format!(
        "{} = ({}, {}) = ({}, {}) = ({}, {})",
        value.raw(),
        src.slot(),
        code.raw(),
        src_name,
        code_name,
        src_text,
        code_text
    )
}
