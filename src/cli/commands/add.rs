//! Add command - store a new quote

use quotebook::Quote;
use quotebook::core::ports::Presenter;

use super::Context;

/// Add a quote, then offer it to the server
///
/// The upload is best-effort: the quote is stored locally first and
/// stays stored whatever the server says.
pub fn add(ctx: &Context, text: &str, category: &str) -> anyhow::Result<()> {
    let mut book = ctx.open_book()?;
    let quote = book.add(text, category)?;
    ctx.presenter().notify("Quote added!");

    if ctx.remote_enabled() {
        upload(ctx, &quote);
    }
    Ok(())
}

#[cfg(feature = "remote")]
fn upload(ctx: &Context, quote: &Quote) {
    let Some(remote) = super::sync::remote_source(ctx) else {
        return;
    };

    match tokio::runtime::Runtime::new() {
        Ok(runtime) => {
            runtime.block_on(quotebook::sync::push_quote(&remote, quote));
        },
        Err(err) => log::error!("Error posting quote: {err}"),
    }
}

#[cfg(not(feature = "remote"))]
fn upload(_ctx: &Context, _quote: &Quote) {
    log::debug!("Built without remote support, not posting quote");
}
