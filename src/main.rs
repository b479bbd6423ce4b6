use std::env::args_os;
use std::io::{stdout, BufWriter};
use std::process::ExitCode;

use parallel_huffman::{compress_and_report, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let mut output = BufWriter::new(stdout().lock());
    match compress_and_report(&arguments, &mut output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Compression failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
