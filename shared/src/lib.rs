pub mod config;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod options;
pub mod presets;
pub mod random;
pub mod resolver;
pub mod session;
pub mod spin;
pub mod storage;
pub mod views;

pub use config::SpinConfig;
pub use error::{SpinError, StorageError};
pub use ledger::StatsLedger;
pub use options::OptionList;
pub use random::{FixedSource, UniformSource};
pub use resolver::resolve;
pub use session::{SpinOutcome, TickOutcome, WheelSession};
pub use spin::{ease_out_cubic, SpinAnimator, SpinFrame, SpinSession};
pub use storage::{KeyValueStore, MemoryStore, Theme};
