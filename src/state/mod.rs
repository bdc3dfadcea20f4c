//! UI-independent state of map screen controls.
//!
//! Each control keeps the values it displays here, fed by data sources that
//! are abstracted as traits.

mod answers_counter;
mod autosync;

pub use answers_counter::{
    AnswersCounter, CountUpdate, ProgressSource, StatisticsSource, UnsyncedChangesSource,
};
pub use autosync::Autosync;
