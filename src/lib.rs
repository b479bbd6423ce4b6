use std::io::Write;
use std::path::PathBuf;

use accelerator::ThreadPoolAccelerator;
pub use cli::CLIParser;
pub use error::Error;
use input::InputSource;
use pipeline::{Pipeline, PipelineReport};

pub mod accelerator;
mod cli;
mod error;
pub mod huffman;
pub mod input;
mod logger;
pub mod pipeline;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: Option<PathBuf>,
    random_length: usize,
    seed: Option<u64>,
    number_of_threads: usize,
    work_group_size: usize,
    print_encoded: bool,
    print_tree: bool,
}

/// Runs the pipeline on the input selected by `arguments`.
pub fn compress(arguments: &Arguments) -> Result<PipelineReport> {
    let input = InputSource::from(arguments).load()?;
    let accelerator =
        ThreadPoolAccelerator::acquire(arguments.number_of_threads, arguments.work_group_size)?;
    Pipeline::new(&accelerator).run(&input)
}

/// Runs the pipeline and writes the human readable report to `output`.
pub fn compress_and_report<W: Write>(arguments: &Arguments, output: &mut W) -> Result<()> {
    let report = compress(arguments)?;
    write_report(arguments, &report, output).map_err(Error::FailedToWriteReport)
}

fn write_report<W: Write>(
    arguments: &Arguments,
    report: &PipelineReport,
    output: &mut W,
) -> std::io::Result<()> {
    writeln!(output, "{}", report)?;
    if arguments.print_tree {
        if let Some(tree) = &report.tree {
            writeln!(output, "Huffman tree:")?;
            write!(output, "{}", tree)?;
        }
    }
    if arguments.print_encoded {
        writeln!(output, "Encoded output (binary):")?;
        report.write_encoded_bits(output)?;
    }
    output.flush()
}
