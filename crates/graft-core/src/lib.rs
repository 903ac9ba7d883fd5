pub mod error;
pub mod types;

pub use error::{GraftError, GraftResult};
pub use types::{
    Accept, ArticleDates, AttrSet, Candidate, EnhanceOutcome, Insertion, PagePatch, Placement,
    PlatformSignal, PlatformSignalKind, ToggleState,
};
