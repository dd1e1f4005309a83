use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use encoding_rs::Encoding;
use log::info;

use autos_eda::data::model::Listing;
use autos_eda::data::{aggregate, coerce, filter, loader, schema};
use autos_eda::report;

#[derive(Parser)]
#[command(name = "autos-eda")]
#[command(about = "Analyze a used-car listings CSV snapshot", long_about = None)]
struct Cli {
    /// Path to the listings snapshot
    #[arg(value_name = "CSV", default_value = "autos.csv")]
    input: PathBuf,

    /// Character encoding label of the input file
    #[arg(short, long, default_value = "latin1")]
    encoding: String,

    /// Minimum relative frequency for a brand to appear in the report
    #[arg(short, long, default_value_t = aggregate::MIN_BRAND_SHARE)]
    min_share: f64,
}

/// Date columns whose daily distribution the report shows.
const DATE_COLUMNS: [(&str, fn(&Listing) -> &str); 3] = [
    ("date_crawled", |l| &l.date_crawled),
    ("ad_created", |l| &l.ad_created),
    ("last_seen", |l| &l.last_seen),
];

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let encoding = Encoding::for_label(cli.encoding.as_bytes())
        .with_context(|| format!("unknown encoding label {:?}", cli.encoding))?;

    let table = loader::load_table(&cli.input, encoding)
        .with_context(|| format!("loading {}", cli.input.display()))?;
    let table = schema::normalize(table).context("normalizing schema")?;
    let listings = coerce::to_listings(table).context("coercing numeric columns")?;
    info!("{} listings loaded", listings.len());

    let listings = filter::filter_price(listings);
    let listings = filter::filter_registration_year(listings);
    info!("{} listings after plausibility filters", listings.len());

    for (title, column) in DATE_COLUMNS {
        let distribution = aggregate::date_distribution(&listings, column);
        println!("{}", report::render_date_distribution(title, &distribution));
    }

    let summaries = aggregate::brand_summaries(&listings, cli.min_share);
    print!("{}", report::render_brand_table(&summaries));

    Ok(())
}
