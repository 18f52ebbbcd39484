use anyhow::Result;
use colored::Colorize;
use comfy_table::{Cell, Color, Table};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::cli::TopArgs;
use crate::render::{
    bar, genres_cell, heading, hour_label, optional_cell, percent_label, played_cell, print_json,
    table, trend_label,
};
use tunestats_client::{ClientError, Completion, StatsClient, View, ViewState};
use tunestats_types::models::{
    Analytics, DailyListening, HourlyDistribution, PlayHistoryItem, RecentlyPlayedResponse,
    WeekdayDistribution,
};
use tunestats_types::{capitalize, format_duration, format_duration_long};

const BAR_WIDTH: usize = 24;

pub async fn show_profile(client: &StatsClient, json: bool) -> Result<()> {
    let user = client.current_user().await?;

    if json {
        return print_json(&user);
    }

    heading(user.name());
    println!("  ID: {}", user.id);
    println!("  Email: {}", optional_cell(user.email.as_deref()));
    println!(
        "  Plan: {}",
        user.product.as_deref().map(capitalize).unwrap_or_else(|| "-".to_string())
    );
    println!("  Followers: {}", optional_cell(user.followers.map(|f| f.total)));
    Ok(())
}

pub async fn top_artists(client: &StatsClient, args: TopArgs, json: bool) -> Result<()> {
    let top = client.top_artists(args.range, args.limit).await?;

    if json {
        return print_json(&top);
    }

    heading(&format!("Top artists · {}", args.range.label()));
    let mut table = table(&["#", "Artist", "Genres", "Popularity"]);
    for (rank, artist) in top.items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&artist.name).fg(Color::Green),
            Cell::new(genres_cell(&artist.genres)),
            Cell::new(optional_cell(artist.popularity)),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn top_tracks(client: &StatsClient, args: TopArgs, json: bool) -> Result<()> {
    let top = client.top_tracks(args.range, args.limit).await?;

    if json {
        return print_json(&top);
    }

    heading(&format!("Top tracks · {}", args.range.label()));
    let mut table = table(&["#", "Track", "Artist", "Album", "Length"]);
    for (rank, track) in top.items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&track.name).fg(Color::Green),
            Cell::new(track.artist_names()),
            Cell::new(&track.album.name),
            Cell::new(format_duration(track.duration_ms)),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn top_albums(client: &StatsClient, args: TopArgs, json: bool) -> Result<()> {
    let top = client.top_albums(args.range, args.limit).await?;

    if json {
        return print_json(&top);
    }

    heading(&format!("Top albums · {}", args.range.label()));
    let mut table = table(&["#", "Album", "Artist", "Year", "Tracks in top"]);
    for (rank, album) in top.items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&album.name).fg(Color::Green),
            Cell::new(album.artist_names()),
            Cell::new(optional_cell(album.release_year())),
            Cell::new(album.track_count_in_top),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn recently_played(client: &StatsClient, limit: u32, json: bool) -> Result<()> {
    let recent = client.recently_played(limit).await?;

    if json {
        return print_json(&recent);
    }
    print_recent(&recent);
    Ok(())
}

/// Re-fetch recently played on an interval until Ctrl-C.
///
/// Each refresh runs as its own task. A refresh that finishes after a newer
/// one started is dropped instead of repainting older data.
pub async fn watch_recently_played(
    client: Arc<StatsClient>,
    limit: u32,
    interval_secs: u64,
    json: bool,
) -> Result<()> {
    let mut view: View<RecentlyPlayedResponse, ClientError> = View::new();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let ticket = view.begin();
                let client = client.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = client.recently_played(limit).await;
                    let _ = tx.send((ticket, result));
                });
            }
            Some((ticket, result)) = rx.recv() => {
                if view.complete(ticket, result) == Completion::Superseded {
                    continue;
                }
                match view.state() {
                    ViewState::Loaded(recent) if json => print_json(recent)?,
                    ViewState::Loaded(recent) => print_recent(recent),
                    ViewState::Failed(e) if e.needs_login() => {
                        return Err(ClientError::Unauthorized.into());
                    }
                    ViewState::Failed(e) => {
                        eprintln!("{} {}", "Refresh failed:".red(), e);
                    }
                    ViewState::Idle | ViewState::Loading => {}
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!("Watch stopped");
                return Ok(());
            }
        }
    }
}

fn print_recent(recent: &RecentlyPlayedResponse) {
    heading(&format!("Recently played ({})", recent.items.len()));
    let mut table = table(&["Track", "Artist", "Length", "Played"]);
    for PlayHistoryItem { track, played_at } in &recent.items {
        table.add_row(vec![
            Cell::new(&track.name).fg(Color::Green),
            Cell::new(track.artist_names()),
            Cell::new(format_duration(track.duration_ms)),
            Cell::new(played_cell(played_at)),
        ]);
    }
    println!("{table}");
}

pub async fn tracking_stats(client: &StatsClient, days: u32, json: bool) -> Result<()> {
    let stats = client.tracking_stats(days).await?;

    if json {
        return print_json(&stats);
    }

    heading(&period_title("Listening stats", stats.period_days));
    println!("  Plays: {}", stats.total_plays);
    println!("  Time: {}", format_duration_long(stats.total_time_ms));
    println!("  Daily average: {}", format_duration_long(stats.average_daily_time_ms));
    println!(
        "  Unique: {} tracks, {} artists, {} albums",
        stats.unique_tracks, stats.unique_artists, stats.unique_albums
    );

    if !stats.top_tracks.is_empty() {
        let mut table = table(&["#", "Track", "Artist", "Plays", "Time"]);
        for (rank, t) in stats.top_tracks.iter().enumerate() {
            table.add_row(vec![
                Cell::new(rank + 1),
                Cell::new(&t.track_name).fg(Color::Green),
                Cell::new(&t.artist_name),
                Cell::new(t.play_count),
                Cell::new(format_duration_long(t.total_time_ms)),
            ]);
        }
        println!("\n{table}");
    }

    if !stats.top_artists.is_empty() {
        let mut table = table(&["#", "Artist", "Plays", "Time"]);
        for (rank, a) in stats.top_artists.iter().enumerate() {
            table.add_row(vec![
                Cell::new(rank + 1),
                Cell::new(&a.artist_name).fg(Color::Green),
                Cell::new(a.play_count),
                Cell::new(format_duration_long(a.total_time_ms)),
            ]);
        }
        println!("\n{table}");
    }

    if !stats.top_albums.is_empty() {
        let mut table = table(&["#", "Album", "Artist", "Plays", "Time"]);
        for (rank, a) in stats.top_albums.iter().enumerate() {
            table.add_row(vec![
                Cell::new(rank + 1),
                Cell::new(&a.album_name).fg(Color::Green),
                Cell::new(&a.artist_name),
                Cell::new(a.play_count),
                Cell::new(format_duration_long(a.total_time_ms)),
            ]);
        }
        println!("\n{table}");
    }
    Ok(())
}

pub async fn tracking_history(
    client: &StatsClient,
    days: u32,
    limit: u32,
    offset: u32,
    json: bool,
) -> Result<()> {
    let history = client.tracking_history(days, limit, offset).await?;

    if json {
        return print_json(&history);
    }

    if history.items.is_empty() {
        println!("{}", "No recorded plays in this period.".yellow());
        return Ok(());
    }

    let mut table = table(&["Track", "Artist", "Album", "Length", "Played"]);
    for play in &history.items {
        table.add_row(vec![
            Cell::new(&play.track_name).fg(Color::Green),
            Cell::new(&play.artist_name),
            Cell::new(&play.album_name),
            Cell::new(format_duration(play.duration_ms)),
            Cell::new(played_cell(&play.played_at)),
        ]);
    }
    println!("{table}");

    let first = u64::from(history.offset) + 1;
    let last = u64::from(history.offset) + history.items.len() as u64;
    println!("\n{}-{} of {}", first, last, history.total);
    if history.has_more() {
        println!("Next page: --offset {}", last);
    }
    Ok(())
}

pub async fn analytics(client: &StatsClient, days: u32, months: u32, json: bool) -> Result<()> {
    let overview = client.analytics_overview(days, months).await;

    // Either half may fail on its own; the view shows whatever arrived.
    let analytics = match overview.analytics {
        Ok(analytics) => Some(analytics),
        Err(e) if e.needs_login() => return Err(e.into()),
        Err(e) => {
            tracing::warn!("Analytics request failed: {}", e);
            None
        }
    };
    let monthly = match overview.monthly {
        Ok(monthly) => monthly,
        Err(e) if e.needs_login() => return Err(e.into()),
        Err(e) => {
            tracing::warn!("Monthly summary request failed: {}", e);
            Vec::new()
        }
    };

    if json {
        return print_json(&serde_json::json!({ "analytics": analytics, "monthly": monthly }));
    }

    heading(&period_title("Listening analytics", days));

    match analytics.as_ref().filter(|a| !a.is_empty()) {
        None => {
            println!("{}", "No data to analyse yet.".yellow());
            println!("Keep listening and it will show up here automatically.");
        }
        Some(a) => {
            for line in summary_lines(a) {
                println!("  {}", line);
            }

            println!("\n{}", daily_table(&a.daily_listening));
            if !a.hourly_distribution.is_empty() {
                println!("\n{}", hourly_table(&a.hourly_distribution));
            }
            if !a.weekday_distribution.is_empty() {
                println!("\n{}", weekday_table(&a.weekday_distribution));
            }

            if !a.new_artists.is_empty() {
                let mut table = table(&["New artist", "First heard", "Plays", "Time"]);
                for artist in &a.new_artists {
                    table.add_row(vec![
                        Cell::new(&artist.artist_name).fg(Color::Green),
                        Cell::new(played_cell(&artist.first_listen)),
                        Cell::new(artist.total_plays),
                        Cell::new(format_duration_long(artist.total_time_ms)),
                    ]);
                }
                println!("\n{table}");
            }
        }
    }

    if !monthly.is_empty() {
        let mut table =
            table(&["Month", "Plays", "Time", "Artists", "Tracks", "Top artist", "Top track"]);
        for m in &monthly {
            table.add_row(vec![
                Cell::new(&m.month),
                Cell::new(m.total_plays),
                Cell::new(format_duration_long(m.total_time_ms)),
                Cell::new(m.unique_artists),
                Cell::new(m.unique_tracks),
                Cell::new(optional_cell(m.top_artist.as_deref())),
                Cell::new(optional_cell(m.top_track.as_deref())),
            ]);
        }
        println!("\n{table}");
    }
    Ok(())
}

fn summary_lines(a: &Analytics) -> Vec<String> {
    vec![
        format!(
            "Current streak: {} days (record: {} days)",
            a.streak.current_streak, a.streak.longest_streak
        ),
        format!("Listening time: {}", format_duration_long(a.total_time_ms())),
        format!("Trend: {}", trend_label(&a.trend.trend, a.trend.change_percentage)),
        format!("Most active hour: {}", hour_label(a.most_played_hour)),
        format!("Most active day: {}", a.most_played_day),
        format!("Average track: {}", format_duration(a.average_track_length_ms)),
        format!("New tracks: {}", a.new_tracks_count),
        // Already a percentage on the wire.
        format!("Variety: {}%", a.listening_variety_score),
    ]
}

fn daily_table(days: &[DailyListening]) -> Table {
    let max = days.iter().map(|d| d.time_ms).max().unwrap_or(0);
    let mut table = table(&["Date", "Plays", "Time", ""]);
    for d in days {
        table.add_row(vec![
            Cell::new(&d.date),
            Cell::new(d.plays),
            Cell::new(format_duration_long(d.time_ms)),
            Cell::new(bar(d.time_ms, max, BAR_WIDTH)).fg(Color::Green),
        ]);
    }
    table
}

fn hourly_table(hours: &[HourlyDistribution]) -> Table {
    let max = hours.iter().map(|h| u64::from(h.plays)).max().unwrap_or(0);
    let mut table = table(&["Hour", "Plays", "Share", ""]);
    for h in hours {
        table.add_row(vec![
            Cell::new(hour_label(h.hour)),
            Cell::new(h.plays),
            Cell::new(percent_label(h.percentage)),
            Cell::new(bar(u64::from(h.plays), max, BAR_WIDTH)).fg(Color::Green),
        ]);
    }
    table
}

fn weekday_table(weekdays: &[WeekdayDistribution]) -> Table {
    let max = weekdays.iter().map(|w| u64::from(w.plays)).max().unwrap_or(0);
    let mut table = table(&["Day", "Plays", "Share", ""]);
    for w in weekdays {
        table.add_row(vec![
            Cell::new(&w.day),
            Cell::new(w.plays),
            Cell::new(percent_label(w.percentage)),
            Cell::new(bar(u64::from(w.plays), max, BAR_WIDTH)).fg(Color::Green),
        ]);
    }
    table
}

fn period_title(title: &str, days: u32) -> String {
    if days == 0 {
        format!("{} · all time", title)
    } else {
        format!("{} · last {} days", title, days)
    }
}
