use crate::types::OutputFormat;
use anyhow::Result;
use grasshunt_types::{Report, SceneSummary};
use is_terminal::IsTerminal;
use owo_colors::AnsiColors;

use super::paint;

pub fn handle(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report.scenes)?),
        OutputFormat::Plain => print_scenes(&report.scenes),
    }
    Ok(())
}

pub(crate) fn print_scenes(scenes: &[SceneSummary]) {
    let color = std::io::stdout().is_terminal();

    println!("=== Scenes ({} total) ===", scenes.len());
    for scene in scenes {
        let status = if scene.cleared {
            paint("cleared", AnsiColors::Green, color)
        } else {
            paint("pending", AnsiColors::Yellow, color)
        };

        print!(
            "  [{}] {}: {} seen, {} marked, {} cut",
            status,
            scene.name,
            scene.totals.grass_seen,
            scene.totals.grass_should_be_cut,
            scene.totals.grass_cut
        );
        if scene.totals.missing_discoveries > 0 {
            let missing = format!("{} missing discoveries", scene.totals.missing_discoveries);
            print!(", {}", paint(&missing, AnsiColors::Red, color));
        }
        println!();
    }
}
