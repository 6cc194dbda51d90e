use anyhow::Result;

fn main() -> Result<()> {
    wordsearch_cli::main_entry()
}
