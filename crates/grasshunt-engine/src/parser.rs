use grasshunt_types::{EventKind, GrassAddress, GrassEvent, Result};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for grass hunt event lines emitted by the in-game hook.
///
/// The scene name is the lazy group, so the split lands on the first `/`
/// of the name pair and a grass name may itself contain slashes.
static EVENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^.*!grassHuntEvent (?P<kind>[^ ]+) +",
        r"(?P<scene_name>.+?)/(?P<grass_name>.+) \(",
        r"(?P<x>-?[0-9]+(?:\.[0-9]*)?), ",
        r"(?P<y>-?[0-9]+(?:\.[0-9]*)?), ",
        r"(?P<z>-?[0-9]+(?:\.[0-9]*)?)\)\s*$",
    ))
    .unwrap()
});

/// Parse one raw log line.
///
/// Returns `Ok(None)` for the (vast majority of) lines that are not grass
/// hunt events at all. A line that matches the event shape but names an
/// unknown kind is an error, not noise.
pub fn parse_log_line(line: &str) -> Result<Option<GrassEvent>> {
    let Some(caps) = EVENT_RE.captures(line) else {
        return Ok(None);
    };

    let kind = EventKind::from_token(&caps["kind"])?;
    let Some(address) = capture_address(&caps) else {
        return Ok(None);
    };

    Ok(Some(GrassEvent { kind, address }))
}

fn capture_address(caps: &Captures<'_>) -> Option<GrassAddress> {
    // the coordinate captures are a strict subset of f64 syntax
    Some(GrassAddress::new(
        &caps["scene_name"],
        &caps["grass_name"],
        caps["x"].parse().ok()?,
        caps["y"].parse().ok()?,
        caps["z"].parse().ok()?,
    ))
}
