use crate::types::OutputFormat;
use anyhow::Result;
use grasshunt_types::{GrassRecord, GrassState, Report};
use is_terminal::IsTerminal;
use owo_colors::AnsiColors;

use super::paint;

pub fn handle(report: &Report, format: OutputFormat, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!(
            "{} players reporting, {} scenes, {} grass locations",
            report.players.len(),
            report.scenes.len(),
            report.grass.len()
        );
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Plain => {
            super::players::print_players(&report.players);
            println!();
            super::scenes::print_scenes(&report.scenes);
            println!();
            print_grass(&report.grass);
        }
    }
    Ok(())
}

fn print_grass(grass: &[GrassRecord]) {
    let color = std::io::stdout().is_terminal();

    println!("=== Grass ({} locations) ===", grass.len());
    for record in grass {
        // pad before painting so the escape codes don't skew the column
        let cell = format!("{:<13}", record.state.name());
        let state = match record.state {
            GrassState::Cut => paint(&cell, AnsiColors::Green, color),
            GrassState::ShouldBeCut => paint(&cell, AnsiColors::Yellow, color),
            GrassState::Uncut => cell,
        };
        println!("  {} {}", state, record.address);
    }
}
