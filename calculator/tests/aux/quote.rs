use std::path::PathBuf;

use calculator::EnhancementRequest;
use serde::Deserialize;

/// A request together with the price it is expected to produce.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteFixture {
    pub name: String,
    pub expected: Option<u32>,
    pub request: EnhancementRequest,
}

#[allow(unused)]
pub fn read_quote(path: &PathBuf) -> Result<QuoteFixture, Box<dyn std::error::Error>> {
    let quote_str = std::fs::read_to_string(path)?;
    let fixture = toml::from_str::<QuoteFixture>(&quote_str)?;
    Ok(fixture)
}
