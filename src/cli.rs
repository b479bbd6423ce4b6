use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub const DEFAULT_RANDOM_LENGTH: usize = 2_000_000;
pub const DEFAULT_WORK_GROUP_SIZE: usize = 4096;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_length_argument(command);
        let command = Self::register_seed_argument(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_work_group_size_argument(command);
        let command = Self::register_print_encoded_argument(command);
        Self::register_print_tree_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_length_argument(command: Command) -> Command {
        command.arg(Self::create_length_argument())
    }

    fn register_seed_argument(command: Command) -> Command {
        command.arg(Self::create_seed_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_work_group_size_argument(command: Command) -> Command {
        command.arg(Self::create_work_group_size_argument())
    }

    fn register_print_encoded_argument(command: Command) -> Command {
        command.arg(Self::create_print_encoded_argument())
    }

    fn register_print_tree_argument(command: Command) -> Command {
        command.arg(Self::create_print_tree_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("File to compress; random text is generated when omitted")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_length_argument() -> Arg {
        arg!(length: -n --length <LENGTH> "Length of the generated random text")
            .default_value(DEFAULT_RANDOM_LENGTH.to_string())
            .value_parser(value_parser!(usize))
            .conflicts_with("input_file")
    }

    fn create_seed_argument() -> Arg {
        arg!(seed: -s --seed <SEED> "Seed of the random text generator")
            .required(false)
            .value_parser(value_parser!(u64))
            .conflicts_with("input_file")
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of accelerator worker threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_work_group_size_argument() -> Arg {
        arg!(work_group_size: -w --work_group_size <SIZE> "Elements processed per work group")
            .default_value(DEFAULT_WORK_GROUP_SIZE.to_string())
            .value_parser(value_parser!(usize))
    }

    fn create_print_encoded_argument() -> Arg {
        arg!(print_encoded: -e --print_encoded "Print the encoded output as bit string")
            .action(ArgAction::SetTrue)
    }

    fn create_print_tree_argument() -> Arg {
        arg!(print_tree: --print_tree "Print the huffman tree").action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            random_length: Self::extract_length_argument(matches),
            seed: Self::extract_seed_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            work_group_size: Self::extract_work_group_size_argument(matches),
            print_encoded: Self::extract_print_encoded_argument(matches),
            print_tree: Self::extract_print_tree_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("input_file").cloned()
    }

    fn extract_length_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("length")
            .expect("Length must be provided, but was unset.")
            .to_owned()
    }

    fn extract_seed_argument(matches: &ArgMatches) -> Option<u64> {
        matches.get_one::<u64>("seed").copied()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_work_group_size_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("work_group_size")
            .expect("Work group size must be provided, but was unset.")
            .to_owned()
    }

    fn extract_print_encoded_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("print_encoded")
    }

    fn extract_print_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("print_tree")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, DEFAULT_RANDOM_LENGTH, DEFAULT_WORK_GROUP_SIZE};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "testfile.txt";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches).unwrap();
        assert_eq!(input_file.file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_missing_input_file_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        assert!(CLIParser::extract_input_file_argument(&matches).is_none());
    }

    #[test]
    fn parse_length_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let command = CLIParser::register_length_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--length", "1234"]);
        assert_eq!(CLIParser::extract_length_argument(&matches), 1234);
    }

    #[test]
    fn parse_illegal_length_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let command = CLIParser::register_length_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-n", "many"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        } else {
            panic!("Illegal value for length not detected");
        }
    }

    #[test]
    fn parse_seed_conflicts_with_input_file() {
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let command = CLIParser::register_seed_argument(command);
        let result =
            command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "input.txt", "--seed", "3"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
        } else {
            panic!("Conflict between seed and input file not detected");
        }
    }

    #[test]
    fn parse_number_of_threads_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threads_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--threads", "5"]);
        let actual = CLIParser::extract_threads_argument(&matches);
        let expected = 5;
        assert_eq!(actual, expected);
    }

    #[test]
    fn parse_work_group_size_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_work_group_size_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-w", "256"]);
        assert_eq!(CLIParser::extract_work_group_size_argument(&matches), 256);
    }

    #[test]
    fn parse_print_flags() {
        let command = Command::new("test");
        let command = CLIParser::register_print_encoded_argument(command);
        let command = CLIParser::register_print_tree_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-e"]);
        assert!(CLIParser::extract_print_encoded_argument(&matches));
        assert!(!CLIParser::extract_print_tree_argument(&matches));
    }

    #[test]
    fn parse_defaults_only() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, "-t", "8"]);
        assert!(arguments.input_file.is_none(), "input file does not match");
        assert_eq!(
            arguments.random_length, DEFAULT_RANDOM_LENGTH,
            "random_length does not match"
        );
        assert_eq!(arguments.seed, None, "seed does not match");
        assert_eq!(
            arguments.number_of_threads, 8,
            "number_of_threads does not match"
        );
        assert_eq!(
            arguments.work_group_size, DEFAULT_WORK_GROUP_SIZE,
            "work_group_size does not match"
        );
        assert!(!arguments.print_encoded, "print_encoded does not match");
        assert!(!arguments.print_tree, "print_tree does not match");
    }

    #[test]
    fn parse_input_file_with_options() {
        let input_file_name = "inputfile.txt";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            &input_file_path,
            "--print_tree",
            "-w",
            "64",
        ]);
        assert_eq!(
            arguments.input_file.unwrap().file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert_eq!(arguments.work_group_size, 64);
        assert!(arguments.print_tree);
    }
}
