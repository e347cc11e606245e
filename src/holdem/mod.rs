/// Module for calculating the chance of holding the best hand on a complete
/// board by enumerating every opponent holding.
mod win_probability;
/// Export `WinProbabilityCalculator` and `ShowdownTally`
pub use self::win_probability::{win_probability, ShowdownTally, WinProbabilityCalculator};
