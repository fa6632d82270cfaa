use crate::address::GrassAddress;
use crate::error::{Error, Result};

/// Kind token of a grass hunt event line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Discovered,
    PseudoCut,
    Cut,
}

impl EventKind {
    /// Resolve the raw kind token from a log line.
    ///
    /// The variant set is closed; anything else on a line that otherwise
    /// matches the event grammar is a hard error, never silently dropped.
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "discovered" => Ok(Self::Discovered),
            "pseudoCut" => Ok(Self::PseudoCut),
            "cut" => Ok(Self::Cut),
            _ => Err(Error::InvalidKind(token.to_string())),
        }
    }
}

/// One parsed grass hunt event.
#[derive(Debug, Clone)]
pub struct GrassEvent {
    pub kind: EventKind,
    pub address: GrassAddress,
}
