pub mod address;
pub mod catalog;
pub mod error;
pub mod event;
pub mod report;
pub mod state;

pub use address::{AddressKey, Coord, GrassAddress};
pub use catalog::SceneCatalog;
pub use error::{Error, Result};
pub use event::{EventKind, GrassEvent};
pub use report::{GrassRecord, GrassTotals, PlayerSummary, Report, SceneSummary};
pub use state::GrassState;
