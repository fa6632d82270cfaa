use crate::types::OutputFormat;
use anyhow::Result;
use grasshunt_types::{PlayerSummary, Report};
use is_terminal::IsTerminal;
use owo_colors::AnsiColors;

use super::paint;

pub fn handle(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.players)?),
        OutputFormat::Plain => print_players(&report.players),
    }
    Ok(())
}

pub(crate) fn print_players(players: &[PlayerSummary]) {
    let color = std::io::stdout().is_terminal();

    println!("=== Players ({} reporting) ===", players.len());
    for player in players {
        print!(
            "  {}: {} seen, {} marked, {} cut",
            player.name,
            player.totals.grass_seen,
            player.totals.grass_should_be_cut,
            player.totals.grass_cut
        );
        if player.totals.missing_discoveries > 0 {
            let missing = format!(
                "{} missing discoveries",
                player.totals.missing_discoveries
            );
            print!(", {}", paint(&missing, AnsiColors::Red, color));
        }
        println!();
    }
}
