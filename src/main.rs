// Day Timeline
// Lays out a day's events from JSON and prints the computed frames

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use day_timeline::models::event::{Event, EventDescriptor};
use day_timeline::services::layout::TimelineLayout;
use day_timeline::services::settings::StyleService;

const DEFAULT_WIDTH: f32 = 400.0;

const USAGE: &str = "usage: day-timeline <events.json> [style.toml] [--width PX] [--day YYYY-MM-DD]";

struct CliArgs {
    events_path: PathBuf,
    style_path: Option<PathBuf>,
    width: f32,
    day: Option<NaiveDate>,
}

impl CliArgs {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Self> {
        let mut positional = Vec::new();
        let mut width = DEFAULT_WIDTH;
        let mut day = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--width" => {
                    let value = args.next().ok_or_else(|| anyhow!("--width needs a value"))?;
                    width = value
                        .parse()
                        .with_context(|| format!("Invalid width {:?}", value))?;
                }
                "--day" => {
                    let value = args.next().ok_or_else(|| anyhow!("--day needs a value"))?;
                    day = Some(
                        NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                            .with_context(|| format!("Invalid day {:?}", value))?,
                    );
                }
                "-h" | "--help" => bail!(USAGE),
                _ => positional.push(PathBuf::from(arg)),
            }
        }

        let mut positional = positional.into_iter();
        let events_path = positional.next().ok_or_else(|| anyhow!(USAGE))?;
        let style_path = positional.next();
        if positional.next().is_some() {
            bail!(USAGE);
        }

        Ok(Self {
            events_path,
            style_path,
            width,
            day,
        })
    }
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    id: i64,
    title: &'a str,
    all_day: bool,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

/// Decode an event batch entry by entry, skipping malformed entries.
fn parse_events(contents: &str) -> Result<Vec<Event>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(contents)?;
    let total = entries.len();

    let events: Vec<Event> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Event>(entry) {
            Ok(event) => Some(event),
            Err(e) => {
                log::warn!("Skipping event #{}: {}", index, e);
                None
            }
        })
        .collect();

    if events.len() < total {
        log::warn!("Skipped {} of {} events", total - events.len(), total);
    }

    Ok(events)
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = CliArgs::parse(std::env::args().skip(1))?;

    let style = match args.style_path.as_deref() {
        Some(path) => StyleService::load(path)?,
        None => match StyleService::default_path() {
            Some(path) => StyleService::load(&path)?,
            None => Default::default(),
        },
    };

    let contents = fs::read_to_string(&args.events_path)
        .with_context(|| format!("Failed to read events from {}", args.events_path.display()))?;
    let events = parse_events(&contents)
        .with_context(|| format!("Failed to parse events in {}", args.events_path.display()))?;

    let day = match args.day {
        Some(day) => day,
        None => events
            .iter()
            .find(|event| !event.all_day)
            .or(events.first())
            .map(|event| event.interval().start().date())
            .ok_or_else(|| anyhow!("No events and no --day given"))?,
    };

    log::info!(
        "Laying out {} events for {} at width {}",
        events.len(),
        day,
        args.width
    );

    let mut layout = TimelineLayout::new(style, day);
    layout.set_events(events);
    layout.relayout(args.width);

    let records: Vec<FrameRecord> = layout
        .attributes()
        .iter()
        .map(|attributes| {
            let event = attributes.descriptor();
            let frame = attributes.frame();
            FrameRecord {
                id: event.id(),
                title: event.title(),
                all_day: event.is_all_day(),
                x: frame.min.x,
                y: frame.min.y,
                width: frame.width(),
                height: frame.height(),
            }
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
