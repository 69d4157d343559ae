use anyhow::Context;
use clap::{CommandFactory, Parser, ValueHint};
use clap_complete::{generate as generate_completion, Shell};
use std::path::PathBuf;
use unicode_blocks::{source, PointInput, QueryEngine};

mod logging;
mod render;

#[derive(Debug, Parser)]
#[command(
    about = "Print characters in UTF-32BE, UTF-16LE and UTF-8, and unicode ranges",
    version
)]
pub struct Opt {
    /// Print the list of unicode blocks
    #[arg(long, short = 'l')]
    list: bool,

    /// Print all characters inside a specific unicode BLOCK
    #[arg(long, short = 'b', value_name = "BLOCK")]
    block: Option<usize>,

    /// Print the hexadecimal UNICODE code point in decimal,
    /// UTF-32BE, UTF-8 and UTF-16LE
    #[arg(long, short = 'u', value_name = "UNICODE")]
    unicode: Option<String>,

    /// Print the DECIMAL code point in UTF-32BE, UTF-8 and UTF-16LE
    #[arg(long, short = 'd', value_name = "DECIMAL")]
    decimal: Option<u32>,

    /// Where to find Blocks.txt.  It will be downloaded to this
    /// location if it does not exist yet.
    #[arg(long, value_parser, value_hint = ValueHint::FilePath)]
    blocks_file: Option<PathBuf>,

    /// Where to download Blocks.txt from
    #[arg(long, default_value = source::BLOCKS_URL, value_hint = ValueHint::Url)]
    blocks_url: String,

    /// Generate shell completion information and exit
    #[arg(long, value_name = "SHELL", value_parser)]
    shell_completion: Option<Shell>,

    /// Print the input CHARACTERS as decimal, UTF-32BE, UTF-8 and UTF-16LE
    #[arg(value_name = "CHARACTERS")]
    characters: Vec<String>,
}

impl Opt {
    /// The point lookups that were requested, in the order that
    /// they are reported
    fn point_inputs(&self) -> Vec<PointInput> {
        let mut inputs = vec![];
        if let Some(hex) = &self.unicode {
            inputs.push(PointInput::Hex(hex.clone()));
        }
        if let Some(decimal) = self.decimal {
            inputs.push(PointInput::Decimal(decimal));
        }
        for chars in &self.characters {
            inputs.push(PointInput::Characters(chars.clone()));
        }
        inputs
    }

    fn blocks_path(&self) -> PathBuf {
        self.blocks_file
            .clone()
            .unwrap_or_else(source::default_blocks_path)
    }
}

fn terminate_with_error_message(err: &str) -> ! {
    log::error!("{}; terminating", err);
    std::process::exit(1);
}

fn terminate_with_error(err: anyhow::Error) -> ! {
    terminate_with_error_message(&format!("{:#}", err));
}

fn main() {
    if let Err(e) = run() {
        terminate_with_error(e);
    }
}

fn run() -> anyhow::Result<()> {
    logging::setup_logger();

    let opts = Opt::parse();

    if let Some(shell) = opts.shell_completion {
        let mut cmd = Opt::command();
        let name = cmd.get_name().to_string();
        generate_completion(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let inputs = opts.point_inputs();
    if !opts.list && opts.block.is_none() && inputs.is_empty() {
        Opt::command().print_help()?;
        return Ok(());
    }

    let path = opts.blocks_path();
    let table = source::load(&path, &opts.blocks_url)
        .with_context(|| format!("loading unicode blocks from {}", path.display()))?;
    let engine = QueryEngine::new(&table);

    let stdout = std::io::stdout();

    if opts.list {
        render::write_block_list(stdout.lock(), engine.list_blocks())?;
    }

    if let Some(index) = opts.block {
        let (block, records) = engine.expand_block(index)?;
        render::write_block(stdout.lock(), block, records)?;
    }

    if !inputs.is_empty() {
        let records = engine.lookup(&inputs)?;
        render::write_lookup(stdout.lock(), &records)?;
    }

    Ok(())
}
