use parallel_huffman::huffman::{encode_sequential, CodeTable, FrequencyTable, HuffmanTree};

fn main() -> Result<(), parallel_huffman::Error> {
    let input = b"AABCBAD";
    let frequencies = FrequencyTable::count_sequential(input);
    println!("frequencies\n{:?}", frequencies);

    let Some(tree) = HuffmanTree::new(&frequencies) else {
        println!("empty input, no tree");
        return Ok(());
    };
    println!("huffman tree\n{}", tree);

    let code_table = CodeTable::from(&tree);
    for (symbol, code_word) in code_table.iter() {
        println!("'{}': {}", symbol as char, code_word);
    }

    let records = encode_sequential(input, &code_table)?;
    println!("sequence to encode\n{:?}", input);
    println!("encoded records\n{:?}", records);
    Ok(())
}
