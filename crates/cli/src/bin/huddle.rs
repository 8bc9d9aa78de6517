use anyhow::Result;

fn main() -> Result<()> {
    huddle_cli::main_entry()
}
