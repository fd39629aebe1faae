//! CLI tool for songsheet - runs song sheet operations on a JSON document
//!
//! Usage:
//!   songsheet_cli <doc.json> print                    # Render the print sheet
//!   songsheet_cli <doc.json> transpose <semitones>    # Transpose every chord
//!   songsheet_cli <doc.json> sections                 # List detected sections
//!   songsheet_cli <doc.json> stamp                    # Stamp lyrics indexes
//!   songsheet_cli <doc.json> sync                     # Replay structural edits
//!   songsheet_cli <doc.json> edit <sheet> <A1:B2>     # Replay a content edit
//!
//! Options:
//!   --config <config.json>   Sheet and range names, print defaults
//!   -o <out.json>            Write the resulting document to a file
//!
//! Set `RUST_LOG=debug` for detailed logs.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use songsheet::cell_ref::parse_range;
use songsheet::sections::detect_sections;
use songsheet::space::Space;
use songsheet::{Config, EditEvent, MemoryDocument, SongSheet, SongsheetError};

const USAGE: &str = "Usage: songsheet_cli <doc.json> <print|transpose <n>|sections|stamp|sync|edit <sheet> <range>> [--config config.json] [-o output.json]";

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let config_path = take_option(&mut args, "--config");
    let output_path = take_option(&mut args, "-o");

    if args.len() < 2 {
        fail(USAGE);
    }

    let input_path = &args[0];
    let json = match fs::read_to_string(input_path) {
        Ok(j) => j,
        Err(e) => fail(format!("Error reading {input_path}: {e}")),
    };
    let mut doc = match MemoryDocument::from_json(&json) {
        Ok(d) => d,
        Err(e) => fail(format!("Error parsing document: {e}")),
    };

    let config = match config_path {
        Some(path) => {
            let json = match fs::read_to_string(&path) {
                Ok(j) => j,
                Err(e) => fail(format!("Error reading {path}: {e}")),
            };
            match Config::from_json(&json) {
                Ok(c) => c,
                Err(e) => fail(format!("Error parsing config: {e}")),
            }
        }
        None => Config::default(),
    };
    let song = SongSheet::new(config);

    if let Err(e) = run(&song, &mut doc, &args[1..]) {
        fail(format!("Error: {e}"));
    }

    for notice in &doc.notices {
        eprintln!("[{:?}] {}: {}", notice.level, notice.title, notice.message);
    }

    let json = match doc.to_json() {
        Ok(j) => j,
        Err(e) => fail(format!("Error serializing JSON: {e}")),
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                fail(format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}

/// Remove `flag <value>` from `args`, returning the value.
fn take_option(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    if pos + 1 >= args.len() {
        fail(format!("{flag} needs a value\n{USAGE}"));
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Some(value)
}

fn run(song: &SongSheet, doc: &mut MemoryDocument, command: &[String]) -> Result<(), SongsheetError> {
    match command[0].as_str() {
        "print" => {
            let summary = song.render_print_sheet(doc)?;
            eprintln!(
                "Printed {} sections on {} pages",
                summary.sections.len(),
                summary.pages
            );
        }
        "transpose" => {
            let Some(semitones) = command.get(1).and_then(|n| n.parse::<i64>().ok()) else {
                fail(format!("transpose needs a number of semitones\n{USAGE}"));
            };
            song.transpose_all(doc, semitones, true)?;
        }
        "sections" => {
            let main = song.chords.main().area(&*doc)?;
            let rows = song.chords.sheet().last_row_with_content(&*doc)?;
            let values = song.chords.sheet().region(main.rows(rows)).values(&*doc)?;
            for section in detect_sections(&values) {
                eprintln!(
                    "rows {}..{}  column {}  width {}",
                    section.start_row, section.end_row, section.column, section.width
                );
            }
        }
        "stamp" => {
            song.stamp_indexes(doc)?;
        }
        "sync" => {
            let changes = song.sync_structure(doc)?;
            eprintln!("{}", serde_json::to_string(&changes)?);
        }
        "edit" => {
            let (Some(sheet), Some(area)) = (command.get(1), command.get(2).and_then(|r| parse_range(r))) else {
                fail(format!("edit needs a sheet name and an A1 range\n{USAGE}"));
            };
            let event = EditEvent {
                sheet: sheet.clone(),
                area,
                old_value: None,
            };
            song.on_edit(doc, &event);
        }
        other => fail(format!("Unknown command: {other}\n{USAGE}")),
    }
    Ok(())
}
