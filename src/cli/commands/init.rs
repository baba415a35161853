//! Initialize quotebook with demonstration quotes

use quotebook::config::Config;
use quotebook::core::ports::Presenter;
use quotebook::paths;

use super::Context;

/// Seed the quote store and write a default config if none exists
pub fn init(ctx: &Context, force: bool) -> anyhow::Result<()> {
    let presenter = ctx.presenter();
    let mut book = ctx.open_book()?;

    if !paths::config_file(&ctx.home).exists() {
        Config::default().save(&ctx.home)?;
        log::info!("Created {}", paths::config_file(&ctx.home).display());
    }

    let written = book.seed(force)?;
    if written == 0 {
        presenter.notify(&format!(
            "Already initialized ({} quote(s) stored). Use --force to reset.",
            book.quotes().len()
        ));
    } else {
        presenter.notify(&format!("Initialized with {written} quote(s)."));
    }

    Ok(())
}
