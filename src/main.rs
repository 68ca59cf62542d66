// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Context, Result};
use largo::config::TheoryFile;
use largo::music::{Key, Note, Pitch, Scale, ScaleType, Seventh, SeventhType};
use std::env;

fn print_usage() {
    println!("LARGO - Twelve-tone music theory toolkit");
    println!();
    println!("Usage: largo [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --scale <NOTE> [TYPE]    Print a scale from a root note (default major)");
    println!("  --key <PITCH>            Print the diatonic chords of a major key");
    println!("  --chord <NOTE> <TYPE>    Print a seventh chord (maj7, m7, 7, dim7, m7b5, ...)");
    println!("  --frequency <NOTE>       Print the frequency of a note at A4 = 440 Hz");
    println!("  --config <FILE>          Print the session described by a YAML or TOML file");
    println!("  --help                   Show this help message");
    println!();
    println!("Notes are written as letter, accidental and octave: C4, F#3, Bb2");
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_notes(notes: &[Note]) {
    println!("  {}", join(notes));
}

fn show_scale(root: &str, scale_name: &str) -> Result<()> {
    let tonic: Note = root.parse()?;
    let scale_type = ScaleType::parse(scale_name)
        .ok_or_else(|| anyhow!("Unknown scale type: {}", scale_name))?;

    let scale = Scale::of_type(tonic, scale_type);
    println!("{} {}", tonic, scale_type);
    print_notes(&scale.degrees()?);
    Ok(())
}

fn show_key(tonic: &str) -> Result<()> {
    let tonic: Pitch = tonic.parse()?;
    let key = Key::new(tonic);

    println!("{}", key);
    println!("  Scale:      {}", join(&key.spelled_scale()?));
    println!("  Major:      {}", join(&key.major()));
    println!("  Minor:      {}", join(&key.minor()));
    println!("  Diminished: {}", join(&key.diminished()));

    println!();
    for triad in key.triads(4)? {
        println!("  {}", triad);
    }
    Ok(())
}

fn show_chord(root: &str, chord_name: &str) -> Result<()> {
    let root: Note = root.parse()?;
    let seventh_type = SeventhType::parse(chord_name)
        .ok_or_else(|| anyhow!("Unknown seventh chord: {}", chord_name))?;

    let chord = Seventh::from_pattern(root, seventh_type)?;
    println!("{}{}", root.pitch, seventh_type.symbol());
    print_notes(&chord.notes());
    Ok(())
}

fn show_frequency(note: &str) -> Result<()> {
    let note: Note = note.parse()?;
    println!("{}: {:.3} Hz", note, note.frequency());
    Ok(())
}

fn show_config(path: &str) -> Result<()> {
    let file = TheoryFile::load(path).with_context(|| format!("Loading {}", path))?;
    let scale = file.scale()?;

    println!(
        "Tuning: {} = {} Hz",
        file.tuning.reference_note(),
        file.tuning.concert_pitch
    );
    println!("Session: {}", scale);
    print_notes(&scale.degrees()?);

    let key = file.key()?;
    println!("Key: {}", key);
    println!("  Chords: {}", join(&key.chords()));

    let available = file.registry().available_scales();
    println!("Scales: {}", available.join(", "));
    Ok(())
}

/// Fetch the argument after a flag or exit with a usage hint
fn required_arg<'a>(args: &'a [String], flag: &str, what: &str) -> &'a str {
    match args.get(2) {
        Some(arg) => arg,
        None => {
            eprintln!("Error: {} requires {}", flag, what);
            eprintln!("Run with --help for usage information");
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("LARGO - Twelve-tone music theory toolkit");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--scale" => {
            let root = required_arg(&args, "--scale", "a root note");
            let scale_name = args.get(3).map(String::as_str).unwrap_or("major");
            show_scale(root, scale_name)?;
        }
        "--key" => {
            let tonic = required_arg(&args, "--key", "a tonic pitch");
            show_key(tonic)?;
        }
        "--chord" => {
            let root = required_arg(&args, "--chord", "a root note");
            let chord_name = args
                .get(3)
                .ok_or_else(|| anyhow!("--chord requires a chord type after the root"))?;
            show_chord(root, chord_name)?;
        }
        "--frequency" => {
            let note = required_arg(&args, "--frequency", "a note");
            show_frequency(note)?;
        }
        "--config" => {
            let path = required_arg(&args, "--config", "a file path");
            show_config(path)?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
