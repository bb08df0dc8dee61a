// Squad Scheduler
// Command-line preview of a composed availability grid

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::Utc;

use squad_scheduler::models::poll::PollOption;
use squad_scheduler::scenario::Scenario;
use squad_scheduler::services::grid::GridModel;
use squad_scheduler::services::overlay::{HourRange, OverlayCompositor};
use squad_scheduler::services::recurrence;
use squad_scheduler::services::settings::SettingsService;
use squad_scheduler::services::suggestion::{
    candidates_from_heatmap, fallback_candidates, SuggestionSource, TimeSuggestionRanker,
};
use squad_scheduler::views::{render_grid, GridViewOptions};

const FALLBACK_DAYS: u32 = 7;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(scenario_path) = args.next().map(PathBuf::from) else {
        bail!("usage: squad-scheduler <scenario.json> [settings.toml]");
    };
    let settings_service = match args.next() {
        Some(path) => SettingsService::new(path),
        None => SettingsService::with_default_path(),
    };

    log::info!("Starting Squad Scheduler preview for {}", scenario_path.display());

    let settings = settings_service.get()?;
    let scenario = Scenario::load(&scenario_path)?;

    let grid = GridModel::from_slots(&scenario.slots).context("scenario contains an invalid slot")?;
    let hour_range = HourRange::new(settings.hour_range_start, settings.hour_range_end)?;
    let composed = OverlayCompositor::new(&grid)
        .with_heatmap(&scenario.heatmap)
        .with_events(&scenario.events)
        .with_previews(&scenario.previews)
        .with_hour_range(hour_range)
        .with_today(scenario.today_index)
        .compose();

    print!(
        "{}",
        render_grid(
            &composed,
            GridViewOptions {
                first_day_of_week: settings.first_day_of_week,
                show_heatmap: !scenario.heatmap.is_empty(),
            },
        )
    );

    if let Some(ref request) = scenario.recurrence {
        if request.until < request.start {
            log::warn!("Recurrence ends before it starts; only the first date is created");
        }
        let dates = recurrence::generate(request.start, request.frequency, request.until);
        println!(
            "\n{} ({}): {} occurrence(s)",
            request.frequency.label(),
            request.frequency.as_str(),
            dates.len()
        );
        for date in &dates {
            println!("  {}", date.format("%Y-%m-%d %H:%M UTC"));
        }
    }

    if let Some(ref source) = scenario.suggestions {
        let ranker = TimeSuggestionRanker::from_settings(&settings);
        let now = Utc::now();
        let candidates = match source {
            SuggestionSource::Fallback => {
                fallback_candidates(now, FALLBACK_DAYS, &settings.fallback_hours, ranker.timezone())
            }
            SuggestionSource::GameInterest { .. } => {
                candidates_from_heatmap(&scenario.heatmap, now, ranker.timezone())
            }
        };

        let suggestions = ranker.rank(source, &candidates);
        println!();
        if suggestions.is_empty() {
            println!("No suggested times yet");
        }
        for suggestion in &suggestions {
            let option = PollOption::from(suggestion);
            println!(
                "  {:<28} {:>3} available  {}",
                option.label, suggestion.available_count, option.date
            );
        }
        let json = serde_json::to_string_pretty(&suggestions)
            .map_err(|err| anyhow!("failed to encode suggestions: {}", err))?;
        log::debug!("Suggestions payload: {}", json);
    }

    Ok(())
}
