use grasshunt_types::{
    GrassRecord, PlayerSummary, Report, Result, SceneCatalog, SceneSummary,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use walkdir::WalkDir;

use crate::accumulator::GrassStateAccumulator;
use crate::parser::parse_log_line;

/// Rebuild the full report from a raw log tree laid out as
/// `root/{player_name}/{log files}`.
///
/// Every call re-reads everything and recomputes from scratch; no state is
/// carried between invocations, so the run is safe to repeat on a directory
/// that grows between calls. Any I/O failure or invalid kind token aborts
/// the run; there is no partial report.
pub fn process_logs(root: &Path, catalog: &SceneCatalog) -> Result<Report> {
    // Global accumulator drives the scene and per-location rollups
    let mut global = GrassStateAccumulator::new();

    // One more accumulator per player for the per-player rollup
    let mut players: Vec<(String, GrassStateAccumulator)> = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            // the storage collaborator owns the root; stray files are not players
            continue;
        }

        let player_name = entry.file_name().to_string_lossy().into_owned();
        let mut player = GrassStateAccumulator::new();
        ingest_player_logs(&entry.path(), &mut global, &mut player)?;
        players.push((player_name, player));
    }

    Ok(assemble_report(global, players, catalog))
}

/// Feed every event in every log file under one player's directory into
/// both accumulators. Files are visited in name order so the representative
/// z of a repeated location is stable across runs.
fn ingest_player_logs(
    dir: &Path,
    global: &mut GrassStateAccumulator,
    player: &mut GrassStateAccumulator,
) -> Result<()> {
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let file = File::open(entry.path())?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            if let Some(event) = parse_log_line(&line)? {
                global.take_event(event.clone());
                player.take_event(event);
            }
        }
    }
    Ok(())
}

fn assemble_report(
    global: GrassStateAccumulator,
    players: Vec<(String, GrassStateAccumulator)>,
    catalog: &SceneCatalog,
) -> Report {
    let mut scenes: Vec<SceneSummary> = global
        .sums_by(|address| address.scene_name.clone())
        .into_iter()
        .map(|(name, totals)| SceneSummary::new(name, totals))
        .collect();

    // Catalog scenes nobody has logged yet still get a row, so the report
    // always enumerates every known scene.
    for name in catalog.scene_names() {
        if !scenes.iter().any(|scene| scene.name == name) {
            scenes.push(SceneSummary::unobserved(name));
        }
    }

    // The user-facing "what's left to do" ordering: uncleared scenes first,
    // alphabetical within each partition.
    scenes.sort_by(|a, b| a.cleared.cmp(&b.cleared).then_with(|| a.name.cmp(&b.name)));

    let mut player_rows: Vec<PlayerSummary> = players
        .into_iter()
        .filter(|(_, accumulator)| accumulator.has_data())
        .map(|(name, accumulator)| PlayerSummary {
            totals: accumulator.totals(),
            name,
        })
        .collect();
    player_rows.sort_by(|a, b| a.name.cmp(&b.name));

    let mut grass: Vec<GrassRecord> = global
        .entries()
        .map(|entry| GrassRecord {
            address: entry.address.to_string(),
            state: entry.state,
        })
        .collect();
    grass.sort_by(|a, b| a.address.cmp(&b.address));

    Report {
        players: player_rows,
        scenes,
        grass,
    }
}
