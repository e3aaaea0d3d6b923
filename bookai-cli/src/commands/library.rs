//! Library command implementation

use anyhow::Result;
use bookai_core::{Session, SimulatedProvider};

/// Show the library
pub async fn library(json: bool, empty: bool) -> Result<()> {
    let session = Session::simulated(super::starting_catalog(empty), SimulatedProvider::instant());
    let view = session.view().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        super::print_view(&view);
    }
    Ok(())
}
