//! Command line interface.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Args, Parser, Subcommand};
use slackweb_application::{
    ApiTransport, CancellationReceiver, CollectStarredItems, CollectStarredItemsInput, StarsApi,
};
use slackweb_domain::{DEFAULT_COUNT, DEFAULT_PAGE, ListStarsRequest, StarTarget, StarredItem};

/// Manage stars through the Web API.
#[derive(Debug, Parser)]
#[command(name = "slackweb", version, about)]
pub struct Cli {
    /// TOML configuration file; `SLACKWEB_*` variables override it.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Star a file, file comment, channel or message.
    Add(TargetArgs),
    /// Remove a star from a file, file comment, channel or message.
    Remove(TargetArgs),
    /// List starred items as JSON lines.
    List(ListArgs),
}

/// Identifies what to star. `--channel` with `--ts` targets a message.
#[derive(Debug, Clone, Args)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .multiple(false)
        .args(["file", "file_comment", "channel"])
))]
pub struct TargetArgs {
    /// File ID.
    #[arg(long)]
    pub file: Option<String>,

    /// File comment ID.
    #[arg(long)]
    pub file_comment: Option<String>,

    /// Conversation ID.
    #[arg(long)]
    pub channel: Option<String>,

    /// Message timestamp within `--channel`.
    #[arg(long, requires = "channel")]
    pub ts: Option<String>,
}

impl TargetArgs {
    /// Converts the flags into a target.
    ///
    /// # Errors
    ///
    /// Returns an error if no target flag is set.
    pub fn into_target(self) -> anyhow::Result<StarTarget> {
        match (self.file, self.file_comment, self.channel, self.ts) {
            (Some(id), ..) => Ok(StarTarget::file(id)),
            (None, Some(id), ..) => Ok(StarTarget::file_comment(id)),
            (None, None, Some(channel), Some(ts)) => Ok(StarTarget::message(channel, ts)),
            (None, None, Some(channel), None) => Ok(StarTarget::channel(channel)),
            (None, None, None, _) => {
                anyhow::bail!("one of --file, --file-comment or --channel is required")
            }
        }
    }
}

/// Paging flags for `list`.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Items per page.
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: u32,

    /// Page number.
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    pub page: u32,

    /// Continuation cursor from a previous listing.
    #[arg(long)]
    pub cursor: Option<String>,

    /// Follow cursors until every item was fetched.
    #[arg(long)]
    pub all: bool,

    /// Stop following cursors after this many pages.
    #[arg(long, requires = "all")]
    pub max_pages: Option<usize>,
}

impl ListArgs {
    fn to_request(&self) -> ListStarsRequest {
        ListStarsRequest {
            count: self.count,
            page: self.page,
            cursor: self.cursor.clone(),
        }
    }
}

/// Runs a subcommand, writing listings to `out`.
///
/// # Errors
///
/// Returns the transport error of a failed call, or an I/O error writing
/// output.
pub async fn run<T: ApiTransport>(
    stars: &StarsApi<T>,
    command: Command,
    cancel: CancellationReceiver,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Add(target) => {
            let target = target.into_target()?;
            stars
                .add(&target, Some(cancel))
                .await
                .with_context(|| format!("adding star to {target:?}"))?;
            tracing::info!(?target, "star added");
        }
        Command::Remove(target) => {
            let target = target.into_target()?;
            stars
                .remove(&target, Some(cancel))
                .await
                .with_context(|| format!("removing star from {target:?}"))?;
            tracing::info!(?target, "star removed");
        }
        Command::List(args) if args.all => {
            let input = CollectStarredItemsInput {
                first_page: args.to_request(),
                max_pages: args.max_pages,
            };
            let output = CollectStarredItems::new(stars.clone())
                .execute(input, Some(cancel))
                .await
                .context("listing stars")?;
            write_items(out, &output.items)?;
            tracing::info!(items = output.items.len(), pages = output.pages, "listing complete");
            if let Some(cursor) = output.next_cursor {
                tracing::info!(%cursor, "more items available");
            }
        }
        Command::List(args) => {
            let response = stars
                .list(&args.to_request(), Some(cancel))
                .await
                .context("listing stars")?;
            write_items(out, &response.items)?;
            if let Some(cursor) = response.next_cursor() {
                tracing::info!(%cursor, "more items available");
            }
        }
    }
    Ok(())
}

fn write_items(out: &mut impl Write, items: &[StarredItem]) -> anyhow::Result<()> {
    for item in items {
        serde_json::to_writer(&mut *out, item)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
