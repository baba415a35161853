//! Server sync commands

use super::Context;

#[cfg(feature = "remote")]
mod remote {
    use std::sync::Arc;
    use std::time::Duration;

    use quotebook::adapters::HttpRemoteSource;
    use quotebook::core::ports::{Presenter, RemoteSource};
    use quotebook::sync::{SyncTask, share, sync_once};

    use super::Context;

    /// Build the HTTP source, or `None` when it cannot be created
    pub fn remote_source(ctx: &Context) -> Option<HttpRemoteSource> {
        let settings = &ctx.config.sync;
        match HttpRemoteSource::new(&settings.endpoint, settings.limit, &settings.category) {
            Ok(source) => Some(source),
            Err(err) => {
                log::error!("{err}");
                None
            },
        }
    }

    /// Fetch once and merge
    pub fn sync(ctx: &Context) -> anyhow::Result<()> {
        let presenter = ctx.presenter();
        if !ctx.remote_enabled() {
            presenter.notify("Sync is disabled.");
            return Ok(());
        }
        let Some(remote) = remote_source(ctx) else {
            return Ok(());
        };

        let book = share(ctx.open_book()?);
        let runtime = tokio::runtime::Runtime::new()?;

        match runtime.block_on(sync_once(&book, &remote)) {
            Ok(report) if report.added > 0 => presenter.notify("Quotes synced with server!"),
            Ok(_) => presenter.notify("Already up to date."),
            Err(err) => log::error!("Failed to fetch from server: {err}"),
        }
        Ok(())
    }

    /// Poll until Ctrl-C
    pub fn watch(ctx: &Context, interval: Option<u64>) -> anyhow::Result<()> {
        let presenter = ctx.presenter();
        if !ctx.remote_enabled() {
            presenter.notify("Sync is disabled.");
            return Ok(());
        }
        let Some(remote) = remote_source(ctx) else {
            return Ok(());
        };

        let secs = interval.unwrap_or(ctx.config.sync.interval_secs);
        let book = share(ctx.open_book()?);
        let remote: Arc<dyn RemoteSource> = Arc::new(remote);
        let runtime = tokio::runtime::Runtime::new()?;

        runtime.block_on(async {
            let mut task = SyncTask::spawn(book, remote, Duration::from_secs(secs));
            log::info!("Syncing every {secs}s, press Ctrl-C to stop");

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    report = task.next_report() => match report {
                        Some(report) => presenter.notify(&format!(
                            "Quotes synced with server! ({} new)",
                            report.added
                        )),
                        None => break,
                    },
                }
            }

            task.stop().await;
        });
        Ok(())
    }
}

#[cfg(feature = "remote")]
pub use remote::{remote_source, sync, watch};

/// Fetch once and merge
#[cfg(not(feature = "remote"))]
pub fn sync(_ctx: &Context) -> anyhow::Result<()> {
    anyhow::bail!("quotebook was built without remote support")
}

/// Poll until Ctrl-C
#[cfg(not(feature = "remote"))]
pub fn watch(_ctx: &Context, _interval: Option<u64>) -> anyhow::Result<()> {
    anyhow::bail!("quotebook was built without remote support")
}
