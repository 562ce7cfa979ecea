use clap::{Args, Parser};

use crate::util::{DEFAULT_ARTICLE_BASE_URL, DEFAULT_WRAP_WIDTH};

#[derive(Parser, Debug)]
#[command(
    name = "wikitak",
    version,
    about = "wikitak is a cli tool for getting wikipedia article summaries."
)]
pub struct Cli {
    #[command(flatten)]
    pub summary: SummaryArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Article title, e.g. "New York City"
    #[arg(value_name = "PAGE")]
    pub title: String,

    #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    #[arg(long, default_value = DEFAULT_ARTICLE_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}
