use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use log::{debug, LevelFilter};
use tth::{Block, Digest, RoundTrace, TthError};

/// Toy Tetragraph Hash: 4-letter pedagogical digest (not cryptographic)
#[derive(Parser)]
#[command(name = "tth", version)]
#[command(group(ArgGroup::new("input").required(true).args(["message", "hex", "file"])))]
struct Cli {
    /// Message to hash
    message: Option<String>,

    /// Hash UTF-8 text given as a hex string
    #[arg(long, value_name = "HEX")]
    hex: Option<String>,

    /// Hash the UTF-8 contents of a file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print every block, its shifted form and the running hash
    #[arg(long)]
    steps: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .env()
        .init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logger: {err}"))
}

/// Raw message bytes from whichever input flag was given
fn read_input(cli: &Cli) -> Result<Vec<u8>> {
    if let Some(hex) = &cli.hex {
        return hex::decode(hex.trim()).context("Invalid hex input");
    }
    if let Some(path) = &cli.file {
        return fs::read(path).with_context(|| format!("Failed to read {}", path.display()));
    }
    Ok(cli.message.clone().unwrap_or_default().into_bytes())
}

fn format_row(row: &[u8; 4]) -> String {
    row.iter()
        .map(|v| format!("{v:>2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_block(label: &str, block: &Block) {
    println!("  {label}");
    for row in block {
        println!("    {}", format_row(row));
    }
}

/// Show each compression round
fn print_steps(rounds: &[RoundTrace]) {
    for (i, round) in rounds.iter().enumerate() {
        println!("block {i}");
        print_block("letters", &round.block);
        println!("  hash  {}  {}", format_row(&round.pre_shift), tth::encode(&round.pre_shift));
        print_block("shifted", &round.shifted);
        println!("  hash  {}  {}", format_row(&round.post_shift), tth::encode(&round.post_shift));
    }
}

fn run(cli: Cli) -> Result<Digest> {
    let input = read_input(&cli)?;
    debug!("hashing {} input bytes", input.len());

    let text = String::from_utf8(input)
        .map_err(|err| TthError::from(err.utf8_error()))
        .context("Input is not text")?;
    debug!("sanitized: {}", tth::sanitize(&text));

    if cli.steps {
        print_steps(&tth::trace(&text));
    }

    Ok(Digest::of(&text))
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_logger(cli.verbose) {
        eprintln!("{err:#}");
    }

    match run(cli) {
        Ok(digest) => println!("{digest}"),
        Err(err) => {
            eprintln!("tth: {err:#}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tth").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_message_argument() {
        let digest = run(parse(&["ABCDEFGHIJKLMNOP"])).unwrap();
        assert_eq!(digest.to_string(), "FHJL");
    }

    #[test]
    fn test_hex_input_decodes() {
        assert_eq!(read_input(&parse(&["--hex", "6869"])).unwrap(), b"hi");
        assert_eq!(run(parse(&["--hex", "6869"])).unwrap(), Digest::of("hi"));
    }

    #[test]
    fn test_invalid_hex_errors() {
        let err = read_input(&parse(&["--hex", "zz"])).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid hex input"), "{err:#}");
        assert!(run(parse(&["--hex", "zz"])).is_err());
    }

    #[test]
    fn test_missing_file_errors() {
        let err = run(parse(&["--file", "/nonexistent/tth-input.txt"])).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read"), "{err:#}");
    }

    #[test]
    fn test_file_input() {
        let path = std::env::temp_dir().join(format!("tth-cli-{}.txt", std::process::id()));
        fs::write(&path, "hello, World!").unwrap();
        let digest = run(parse(&["--file", path.to_str().unwrap()]));
        fs::remove_file(&path).unwrap();
        assert_eq!(digest.unwrap().to_string(), "YQBF");
    }

    #[test]
    fn test_non_utf8_input_errors() {
        let err = run(parse(&["--hex", "ff"])).unwrap_err();
        assert!(format!("{err:#}").contains("Input is not text"), "{err:#}");
        assert!(err.downcast_ref::<TthError>().is_some());
    }

    #[test]
    fn test_input_required_and_exclusive() {
        assert!(Cli::try_parse_from(["tth"]).is_err());
        assert!(Cli::try_parse_from(["tth", "hello", "--hex", "6869"]).is_err());
        assert!(Cli::try_parse_from(["tth", "--hex", "6869", "--file", "x"]).is_err());
    }
}
