use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use scraper::Html;
use tracing::info;

use super::fetch::fetch_page;
use super::wrap::wrap;
use super::{PageSelectors, ReferenceStripper, ResolvedSummary, summarize};
use crate::cli::SummaryArgs;
use crate::model::SummaryReport;
use crate::util::{article_url, normalize_title};

pub fn run(args: SummaryArgs) -> Result<()> {
    let title = normalize_title(&args.title)?;
    let url = article_url(&args.base_url, &title);

    info!(title = %title, "fetching summary");
    let selectors = PageSelectors::new()?;
    let stripper = ReferenceStripper::new()?;

    let body = fetch_page(&url, Duration::from_secs(args.timeout_secs))?;
    let document = Html::parse_document(&body);
    let resolved = summarize(&document, &title, &args.base_url, &selectors, &stripper)?;

    if args.json {
        write_json_report(title, url, resolved)
    } else {
        write_text_summary(&resolved.text, &url, usize::from(args.width))
    }
}

fn write_json_report(title: String, url: String, resolved: ResolvedSummary) -> Result<()> {
    let report = SummaryReport {
        title,
        url,
        summary: resolved.text,
        disambiguation: !resolved.listing.is_empty(),
        entries: resolved.listing.entries,
    };

    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, &report)
        .context("failed to serialize summary json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn write_text_summary(summary: &str, url: &str, width: usize) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    writeln!(output, "{}", wrap(summary.trim_end(), width))?;
    writeln!(output)?;
    writeln!(output, "{url}")?;
    output.flush()?;
    Ok(())
}
