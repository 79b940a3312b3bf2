//! The `trivia init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = Path::new("trivia.toml");
    if path.exists() {
        println!("trivia.toml already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created trivia.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust the number of questions in trivia.toml");
    println!("  2. Run: trivia");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# trivia configuration

# Open Trivia Database endpoint. TRIVIA_API_URL overrides this.
api_url = "https://opentdb.com"

# Questions per game (1-50).
amount = 10
"#;
