// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tracklist::config::{Settings, TrackListFile};
use tracklist::player::{
    ImportRequest, Importer, LoggingPlayback, PlayerController, PlaylistView, TrackCard,
};
use tracklist::playlist::{Playlist, TrackId};

/// Prints the playlist to stdout
struct ConsoleView;

impl PlaylistView for ConsoleView {
    fn render(&mut self, cards: &[TrackCard]) {
        if cards.is_empty() {
            println!("  (playlist is empty)");
            return;
        }
        for (i, card) in cards.iter().enumerate() {
            let marker = if card.active { ">" } else { " " };
            println!("{} {:>2}. {} - {}", marker, i + 1, card.artist, card.title);
        }
    }

    fn highlight(&mut self, id: Option<TrackId>) {
        match id {
            Some(id) => println!("Now selected: {}", id),
            None => println!("Nothing selected"),
        }
    }
}

type Controller = PlayerController<LoggingPlayback, ConsoleView>;

fn print_usage() {
    println!("tracklist - playlist sequencer");
    println!();
    println!("Usage: tracklist [--config <FILE>] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --list <FILE>   Print the tracks in a YAML track list");
    println!("  --play <FILE>   Play a YAML track list once through (simulated clock)");
    println!("  --demo          Walk a built-in playlist through next/previous/remove");
    println!("  --help          Show this help message");
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn controller_for(playlist: Playlist, settings: &Settings) -> Controller {
    PlayerController::new(playlist, LoggingPlayback::new(), ConsoleView, &settings.player)
}

fn list_tracks(path: &str) -> Result<()> {
    let list = TrackListFile::load(path)?;
    println!("{} ({} tracks)", list.name, list.tracks.len());
    for entry in &list.tracks {
        println!("  [{}] {} - {} ({})", entry.id, entry.artist, entry.title, entry.duration);
    }
    Ok(())
}

fn play_through(path: &str, settings: &Settings) -> Result<()> {
    let list = TrackListFile::load(path)?;
    info!(name = %list.name, "loaded track list");
    let mut controller = controller_for(list.into_playlist(), settings);

    let played = controller.play_through(1.0);
    if played == 0 {
        println!("Nothing to play");
        return Ok(());
    }
    if let Some(progress) = controller.progress() {
        println!("Last track finished at {} / {}", progress.elapsed, progress.total);
    }

    println!("Played {} tracks", played);
    Ok(())
}

fn run_demo(settings: &Settings) -> Result<()> {
    let mut importer = Importer::new(&settings.import);
    let mut controller = controller_for(Playlist::new(), settings);

    let requests = [
        ImportRequest::new("Song A", "Artist A").with_media("demo://a").with_duration(184.0),
        ImportRequest::new("Song B", "Artist B").with_media("demo://b").with_duration(215.0),
        ImportRequest::new("Song C", "Artist C").with_media("demo://c").with_duration(143.0),
    ];
    let mut ids = Vec::new();
    for request in requests {
        let track = importer.import(request)?;
        ids.push(controller.add_track(track));
    }

    controller.play();
    println!("-- next");
    controller.next();
    println!("-- next");
    controller.next();
    println!("-- next (wraps)");
    controller.next();
    println!("-- previous (wraps)");
    controller.previous();

    let inserted = importer.import(
        ImportRequest::new("Song D", "Artist D").with_media("demo://d").with_duration(98.0),
    )?;
    println!("-- insert at 1");
    controller.insert_track_at(1, inserted)?;

    println!("-- remove current");
    if let Some(current) = controller.current_track().map(|track| track.id()) {
        controller.remove_track(current);
    }

    println!("-- select first imported");
    controller.play_by_id(ids[0])?;

    println!("-- seek to 50%");
    controller.seek_percent(50.0);
    if let Some(progress) = controller.progress() {
        println!("Progress: {:.0}% ({} / {})", progress.percent, progress.elapsed, progress.total);
    }

    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let settings = if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            eprintln!("Error: --config requires a file path");
            std::process::exit(1);
        }
        let path = args.remove(1);
        args.remove(0);
        Settings::load(&path)?
    } else {
        Settings::default()
    };
    settings.validate().context("Invalid settings")?;
    init_logging(&settings);

    let Some(command) = args.first() else {
        println!("tracklist - playlist sequencer");
        println!("Run with --help for usage information");
        return Ok(());
    };

    match command.as_str() {
        "--list" | "--play" => {
            let Some(path) = args.get(1) else {
                eprintln!("Error: {} requires a track list file", command);
                std::process::exit(1);
            };
            if command == "--list" {
                list_tracks(path)?;
            } else {
                play_through(path, &settings)?;
            }
        }
        "--demo" => {
            run_demo(&settings)?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
