//! Browsing commands: random quote, filter, list, categories

use anyhow::bail;

use quotebook::CategoryFilter;
use quotebook::adapters::ThreadRandom;
use quotebook::core::ports::Presenter;

use super::Context;

/// Show a random quote from the given category or the active filter
pub fn random(ctx: &Context, category: Option<&str>) -> anyhow::Result<()> {
    let presenter = ctx.presenter();
    let book = ctx.open_book()?;

    let filter = match category {
        Some(category) => CategoryFilter::parse(category),
        None => book.active_filter()?,
    };

    match book.show_random(&filter, &mut ThreadRandom::new())? {
        Some(quote) => presenter.quote(&quote),
        None => presenter.no_quotes(),
    }
    Ok(())
}

/// Show the last quote displayed in this session
pub fn last(ctx: &Context) -> anyhow::Result<()> {
    let presenter = ctx.presenter();
    let book = ctx.open_book()?;

    match book.last_viewed()? {
        Some(line) => presenter.notify(&line),
        None => presenter.notify("No quote shown yet in this session."),
    }
    Ok(())
}

/// List quotes passing the active filter
pub fn list(ctx: &Context) -> anyhow::Result<()> {
    let book = ctx.open_book()?;
    let active = book.active_filter()?;
    ctx.presenter().quote_list(&book.filtered(&active));
    Ok(())
}

/// Persist a new active filter and list its quotes
pub fn filter(ctx: &Context, category: &str) -> anyhow::Result<()> {
    let book = ctx.open_book()?;
    let filter = CategoryFilter::parse(category);

    if let CategoryFilter::Category(wanted) = &filter
        && !book.categories().iter().any(|c| book.matching().matches(wanted, c))
    {
        bail!("Unknown category: {wanted}. Run 'quotebook categories' to see the options");
    }

    let quotes = book.select_filter(&filter)?;
    ctx.presenter().quote_list(&quotes);
    Ok(())
}

/// List categories with the active filter marked
pub fn categories(ctx: &Context) -> anyhow::Result<()> {
    let book = ctx.open_book()?;
    ctx.presenter().category_options(&book.category_options()?);
    Ok(())
}
