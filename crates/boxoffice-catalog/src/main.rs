//! `boxoffice` - browse event and venue listings from the terminal.
//!
//! Each option maps onto one view operation, the same way the storefront's
//! search box, filter inputs, sort headers and pager do.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use boxoffice_catalog::{load_events, load_venues, presets, Event, Venue, VenueStore};
use boxoffice_view::{Dir, FilterValue, ListView, Number, Record, ViewConfig, ViewState};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "boxoffice", version, about = "Browse event and venue listings")]
struct Cli {
    #[command(subcommand)]
    listing: Listing,
}

#[derive(Subcommand, Debug)]
enum Listing {
    /// Upcoming events (requires --file).
    Events(ViewArgs),
    /// Venues (defaults to the stock venue list).
    Venues(ViewArgs),
    /// The three-card featured events carousel (requires --file).
    Featured(ViewArgs),
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// JSON array of listings, as returned by the API.
    #[arg(long)]
    file: Option<PathBuf>,

    /// YAML or JSON view config overriding the page preset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Free-text search.
    #[arg(short, long)]
    search: Option<String>,

    /// Substring filter.
    #[arg(long = "filter", value_name = "FIELD=TEXT")]
    filters: Vec<String>,

    /// Same-day date filter.
    #[arg(long = "date", value_name = "FIELD=YYYY-MM-DD")]
    dates: Vec<String>,

    /// Inclusive numeric range filter; either bound may be omitted.
    #[arg(long = "range", value_name = "FIELD=MIN..MAX")]
    ranges: Vec<String>,

    /// Sort field with an optional direction.
    #[arg(long, value_name = "FIELD[:asc|desc]")]
    sort: Option<String>,

    /// 1-based page to show.
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Records per page.
    #[arg(long)]
    page_size: Option<usize>,

    /// Print the view state and records as JSON.
    #[arg(long)]
    json: bool,
}

/// One-line rendering of a listing row.
trait Line {
    fn line(&self) -> String;
}

impl Line for Event {
    fn line(&self) -> String {
        format!(
            "{:<32} {:<20} {:<16} {} {}",
            self.title,
            self.artist_name.as_deref().unwrap_or("-"),
            self.venue_city.as_deref().unwrap_or("-"),
            self.date,
            self.time
        )
    }
}

impl Line for Venue {
    fn line(&self) -> String {
        format!(
            "{:<28} {:<16} {:>7}  {}{}",
            self.name,
            self.location,
            self.capacity,
            if self.is_indoor { "indoor" } else { "outdoor" },
            if self.has_parking { ", parking" } else { "" }
        )
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.listing {
        Listing::Events(args) => {
            let path = require_file(&args, "events")?;
            let events = load_events(&path)?;
            let config = view_config(&args, presets::events_view())?;
            run(&args, config, events)
        }
        Listing::Featured(args) => {
            let path = require_file(&args, "featured")?;
            let events = load_events(&path)?;
            let config = view_config(&args, presets::featured_view())?;
            run(&args, config, events)
        }
        Listing::Venues(args) => {
            let venues = match &args.file {
                Some(path) => load_venues(path)?,
                None => VenueStore::seeded().snapshot(),
            };
            let config = view_config(&args, presets::venues_view())?;
            run(&args, config, venues)
        }
    }
}

fn require_file(args: &ViewArgs, listing: &str) -> Result<PathBuf> {
    match &args.file {
        Some(path) => Ok(path.clone()),
        None => bail!("`{listing}` needs --file with the API's JSON payload"),
    }
}

fn view_config(args: &ViewArgs, preset: ViewConfig) -> Result<ViewConfig> {
    let mut config = match &args.config {
        Some(path) => presets::load_config(path, preset)?,
        None => preset,
    };
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }
    Ok(config)
}

fn run<R>(args: &ViewArgs, config: ViewConfig, records: Vec<R>) -> Result<()>
where
    R: Record + Serialize + Line,
{
    let mut view = presets::open_view(config, records).context("invalid view settings")?;
    apply(&mut view, args)?;
    debug!(state = ?view.state(), "view ready");

    let state = view.state();
    let visible = view.visible();
    let mut out = std::io::stdout().lock();

    if args.json {
        #[derive(Serialize)]
        struct Page<'a, R> {
            state: &'a ViewState,
            records: &'a [&'a R],
        }
        let page = Page {
            state: &state,
            records: &visible,
        };
        serde_json::to_writer_pretty(&mut out, &page)?;
        writeln!(out)?;
        return Ok(());
    }

    for record in &visible {
        writeln!(out, "{}", record.line())?;
    }
    writeln!(out, "{}", summary(&state))?;
    Ok(())
}

fn apply<R: Record>(view: &mut ListView<R>, args: &ViewArgs) -> Result<()> {
    if let Some(query) = &args.search {
        view.set_search(query.as_str());
    }
    for spec in &args.filters {
        let (field, text) = split_pair(spec)?;
        view.set_filter(field, text);
    }
    for spec in &args.dates {
        let (field, day) = split_pair(spec)?;
        let value = FilterValue::date(day).with_context(|| format!("--date {spec}"))?;
        view.set_filter(field, value);
    }
    for spec in &args.ranges {
        let (field, range) = split_pair(spec)?;
        view.set_filter(field, parse_range(range).with_context(|| format!("--range {spec}"))?);
    }
    if let Some(sort) = &args.sort {
        let (field, dir) = match sort.split_once(':') {
            Some((field, dir)) => (field, dir.parse::<Dir>().map_err(anyhow::Error::msg)?),
            None => (sort.as_str(), Dir::Asc),
        };
        view.set_sort(field, dir);
    }
    if args.page > 1 {
        view.advance_window((args.page - 1) as isize);
    }
    Ok(())
}

fn split_pair(spec: &str) -> Result<(&str, &str)> {
    match spec.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field, value)),
        _ => bail!("expected FIELD=VALUE, got '{spec}'"),
    }
}

fn parse_range(range: &str) -> Result<FilterValue> {
    let Some((min, max)) = range.split_once("..") else {
        bail!("expected MIN..MAX, got '{range}'");
    };
    Ok(FilterValue::Range {
        min: parse_bound(min)?,
        max: parse_bound(max)?,
    })
}

fn parse_bound(bound: &str) -> Result<Option<Number>> {
    let bound = bound.trim();
    if bound.is_empty() {
        return Ok(None);
    }
    if let Ok(n) = bound.parse::<i64>() {
        return Ok(Some(Number::I64(n)));
    }
    let n: f64 = bound
        .parse()
        .with_context(|| format!("'{bound}' is not a number"))?;
    Ok(Some(Number::F64(n)))
}

fn summary(state: &ViewState) -> String {
    match state.showing() {
        None => "no matching listings".to_string(),
        Some((first, last)) => {
            let mut line = format!(
                "showing {first}-{last} of {} (page {}/{})",
                state.matched, state.page, state.page_count
            );
            if state.matched != state.total {
                line.push_str(&format!(", {} total", state.total));
            }
            if let Some(sort) = &state.sort {
                line.push_str(&format!(", sorted by {} {}", sort.field, sort.dir.arrow()));
            }
            line
        }
    }
}
