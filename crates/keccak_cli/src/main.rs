//! Keccak-256 checksum CLI.
//!
//! Hashes files (or stdin when no files are given) with Keccak-256 — the
//! original Keccak with `0x01` padding as used by Ethereum, not FIPS-202
//! SHA3-256 — and prints sum-style `<digest>  <path>` lines.
//!
//! Files are streamed through a bounded read buffer, so arbitrarily large
//! inputs hash in constant memory.
//!
//! # Examples
//!
//! ```bash
//! # Hash files
//! keccak256 genesis.json block.rlp
//!
//! # Hash stdin
//! printf 'abc' | keccak256
//!
//! # Structured output
//! keccak256 --json genesis.json
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use keccak_core::streaming::{StreamingConfig, StreamingHasher};

/// Keccak-256 checksums (original 0x01 padding, Ethereum-compatible).
#[derive(Parser)]
#[command(name = "keccak256")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Files to hash; reads stdin when none are given.
    files: Vec<PathBuf>,

    /// Emit a JSON array instead of sum-style lines.
    #[arg(long)]
    json: bool,

    /// Read-buffer size in bytes (1 KiB - 1 MiB).
    #[arg(long, default_value = "65536")]
    chunk_size: usize,
}

/// One hashed input, as rendered in both output modes.
#[derive(Serialize)]
struct HashEntry {
    /// File path, or `-` for stdin.
    input: String,
    /// Lowercase hex digest (64 characters).
    digest: String,
    /// Bytes consumed from the input.
    bytes: u64,
}

/// Stream one reader through the hasher with the configured buffer size.
fn hash_reader<R: io::Read>(
    reader: R,
    config: &StreamingConfig,
) -> Result<([u8; 32], u64), Box<dyn std::error::Error>> {
    let mut hasher = StreamingHasher::with_config(config.clone());
    hasher.update_reader(reader)?;
    let bytes = hasher.bytes_processed();
    Ok((hasher.finalize(), bytes))
}

fn run(cli: &Cli) -> Result<Vec<HashEntry>, Box<dyn std::error::Error>> {
    let config = StreamingConfig::with_chunk_size(cli.chunk_size)?;
    let mut entries = Vec::new();

    if cli.files.is_empty() {
        let stdin = io::stdin();
        let (digest, bytes) = hash_reader(stdin.lock(), &config)?;
        entries.push(HashEntry {
            input: "-".to_string(),
            digest: hex::encode(digest),
            bytes,
        });
        return Ok(entries);
    }

    for path in &cli.files {
        let file = File::open(path)
            .map_err(|e| format!("cannot open {}: {}", path.display(), e))?;
        let (digest, bytes) = hash_reader(BufReader::new(file), &config)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        entries.push(HashEntry {
            input: path.display().to_string(),
            digest: hex::encode(digest),
            bytes,
        });
    }

    Ok(entries)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(entries) => {
            if cli.json {
                match serde_json::to_string_pretty(&entries) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: JSON serialization failed: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                for entry in &entries {
                    println!("{}  {}", entry.digest, entry.input);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if cli.json {
                #[derive(Serialize)]
                struct JsonError {
                    error: String,
                }
                match serde_json::to_string_pretty(&JsonError {
                    error: e.to_string(),
                }) {
                    Ok(json) => println!("{}", json),
                    Err(json_err) => {
                        eprintln!("Error: {} (JSON serialization failed: {})", e, json_err)
                    }
                }
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}
