//! Draw archive access port.

use crate::domain::draw::DrawDataset;
use crate::domain::error::RuotaError;

pub trait DrawSource {
    /// Loads the whole archive. Malformed cells are already reduced to absent
    /// slots; only structural problems are errors.
    fn load_draws(&self) -> Result<DrawDataset, RuotaError>;

    /// Human-readable name of the source, used in logs and errors.
    fn describe(&self) -> String;
}
