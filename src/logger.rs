use crate::huffman::{display_symbol, CodeTable, FrequencyTable};

const LOG_CONFIGURATION_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    // without a configuration file logging simply stays disabled
    let _ = log4rs::init_file(LOG_CONFIGURATION_FILE, Default::default());
}

pub fn log_frequency_table(frequencies: &FrequencyTable) {
    log::debug!(
        "{} symbols present, {} elements counted: {:?}",
        frequencies.used(),
        frequencies.total(),
        frequencies
    );
}

pub fn log_code_table(code_table: &CodeTable) {
    fn get_code_strings(code_table: &CodeTable) -> Vec<String> {
        code_table
            .iter()
            .map(|(symbol, code_word)| format!("{}={}", display_symbol(symbol), code_word))
            .collect()
    }
    log::debug!(
        "Code table with {} entries\n{:?}",
        code_table.len(),
        get_code_strings(code_table)
    );
}
