//! JSON import and export

use std::fs;
use std::path::Path;

use anyhow::Context as _;

use quotebook::core::ports::Presenter;

use super::Context;

/// Import quotes from a JSON file
pub fn import(ctx: &Context, file: &Path) -> anyhow::Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mut book = ctx.open_book()?;
    let imported = book.import_json(&raw)?;
    ctx.presenter().notify(&format!("Quotes imported successfully! ({imported} added)"));
    Ok(())
}

/// Export quotes to a JSON file, or stdout for "-"
pub fn export(ctx: &Context, file: &str) -> anyhow::Result<()> {
    let book = ctx.open_book()?;
    let document = book.export_json();

    if file == "-" {
        println!("{document}");
        return Ok(());
    }

    fs::write(file, format!("{document}\n")).with_context(|| format!("Failed to write {file}"))?;
    ctx.presenter()
        .notify(&format!("Exported {} quote(s) to {file}", book.quotes().len()));
    Ok(())
}
