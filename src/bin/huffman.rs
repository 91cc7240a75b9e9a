//! huffman CLI - static Huffman compression tool
//!
//! Compresses an ASCII file into a packed data file plus a code-book text
//! file, and reverses the process.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use static_huffman::{Alphabet, CodeBook, FrequencyTable, HuffmanCodec, HuffmanTree};

/// Static Huffman coder with a separate code-book file.
#[derive(Parser, Debug)]
#[command(name = "huffman")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every stage at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file into packed data and a code book
    Encode {
        /// File to compress
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Packed data output (defaults to INPUT.dat)
        #[arg(short, long, value_name = "PATH")]
        data: Option<PathBuf>,

        /// Code book output (defaults to INPUT.tab)
        #[arg(short, long, value_name = "PATH")]
        table: Option<PathBuf>,

        #[command(flatten)]
        alphabet: AlphabetArg,
    },
    /// Rebuild the original file from packed data and its code book
    Decode {
        /// Packed data file
        #[arg(value_name = "DATA")]
        data: PathBuf,

        /// Code book file
        #[arg(value_name = "TABLE")]
        table: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        alphabet: AlphabetArg,
    },
    /// Print the frequency table, tree and code book for a file
    Inspect {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[command(flatten)]
        alphabet: AlphabetArg,
    },
}

#[derive(Args, Debug)]
struct AlphabetArg {
    /// Accept all 256 byte values instead of 7-bit ASCII
    #[arg(long)]
    full_byte: bool,
}

impl AlphabetArg {
    fn alphabet(&self) -> Alphabet {
        if self.full_byte {
            Alphabet::Byte
        } else {
            Alphabet::Ascii
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn with_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Encode {
            input,
            data,
            table,
            alphabet,
        } => {
            let data = data.unwrap_or_else(|| with_extension(&input, "dat"));
            let table = table.unwrap_or_else(|| with_extension(&input, "tab"));

            let start = Instant::now();
            let codec = HuffmanCodec::with_alphabet(alphabet.alphabet());
            let meta = codec.encode_file(&input, &data, &table)?;
            eprintln!(
                "{} -> {} bytes ({:.1}% of original, {:.2} bits/symbol, {} symbols) in {:.2?}",
                meta.original_length,
                meta.packed_length,
                meta.compression_ratio() * 100.0,
                meta.bits_per_symbol(),
                meta.distinct_symbols,
                start.elapsed()
            );
        }
        Command::Decode {
            data,
            table,
            output,
            alphabet,
        } => {
            let codec = HuffmanCodec::with_alphabet(alphabet.alphabet());
            match output {
                Some(output) => {
                    let written = codec.decode_file(&data, &table, &output)?;
                    eprintln!("wrote {} bytes to {}", written, output.display());
                }
                None => {
                    let decoded = codec.decode_from_files(&data, &table)?;
                    std::io::stdout().lock().write_all(&decoded)?;
                }
            }
        }
        Command::Inspect { input, alphabet } => {
            let bytes = fs::read(&input)?;
            let table = FrequencyTable::from_bytes(&bytes, alphabet.alphabet())?;

            println!("Frequencies ({} bytes, {} symbols):", table.total(), table.distinct_symbols());
            for (symbol, weight) in table.iter() {
                println!(
                    "  {:>3} {:?}: count {} weight {}",
                    symbol,
                    symbol as char,
                    table.count(symbol),
                    weight
                );
            }

            let tree = HuffmanTree::from_frequencies(&table)?;
            println!("Huffman Tree Structure (depth {}):", tree.depth());
            print!("{}", tree.render());

            let book = CodeBook::from_tree(tree);
            println!("Code book:");
            println!("{}", book);
        }
    }

    Ok(())
}
