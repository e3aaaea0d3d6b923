//! Genres command implementation

use anyhow::Result;
use bookai_core::Genre;

/// List the supported genres
pub fn genres(json: bool) -> Result<()> {
    if json {
        let table: Vec<_> = Genre::catalog().collect();
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    for info in Genre::catalog() {
        println!("{:<10} {:<12} {}", info.key, info.name, info.icon);
    }
    Ok(())
}
