//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notepad_core` wiring without a
//!   UI runtime: seed an in-memory store and print grouped sections.
//! - Keep output deterministic enough for quick local sanity checks.

use notepad_core::db::open_db_in_memory;
use notepad_core::{
    group_by_recency_now, note_snippet, Group, LayoutMode, NewSchedule, Note, NoteDraft,
    NoteService, ScheduleService, SqliteNoteRepository, SqliteScheduleRepository,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("notepad_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let layout = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<LayoutMode>()?,
        None => LayoutMode::default(),
    };

    println!(
        "notepad_core version={} layout={layout}",
        notepad_core::core_version()
    );

    let conn = open_db_in_memory()?;

    let notes = NoteService::new(SqliteNoteRepository::new(&conn));
    notes.create_note(NoteDraft {
        title: "Welcome".to_string(),
        content: "This **note** was created by the CLI probe.".to_string(),
        ..NoteDraft::default()
    })?;

    let schedules = ScheduleService::new(SqliteScheduleRepository::new(&conn));
    schedules.create_schedule(NewSchedule {
        title: "Smoke check".to_string(),
        description: "Verify schedule plumbing".to_string(),
        date: "2025-06-10".to_string(),
        time: "09:00".to_string(),
    })?;

    println!("-- notes --");
    for group in group_by_recency_now(notes.list_notes()?) {
        print_note_group(&group, layout);
    }

    println!("-- schedules --");
    for group in group_by_recency_now(schedules.list_schedules()?) {
        println!("{}", group.label);
        for schedule in group.members {
            println!("  {} @ {} {}", schedule.title, schedule.date, schedule.time);
        }
    }

    Ok(())
}

fn print_note_group(group: &Group<Note>, layout: LayoutMode) {
    println!("{}", group.label);
    match layout {
        LayoutMode::List => {
            for note in &group.members {
                println!("  {}", note.title);
            }
        }
        LayoutMode::Card => {
            for note in &group.members {
                let snippet = note_snippet(&note.content).unwrap_or_default();
                println!("  {} | {snippet}", note.title);
            }
        }
        LayoutMode::Grid => {
            for pair in group.members.chunks(2) {
                let titles: Vec<&str> = pair.iter().map(|note| note.title.as_str()).collect();
                println!("  {}", titles.join("  |  "));
            }
        }
    }
}
