//! Photo organization module.
//!
//! Moves raw and rendered files into category folders, then stages a
//! working copy of the rendered folder for editing.

mod classifier;
mod stager;
mod types;

pub use classifier::Classifier;
pub use stager::Stager;
pub use types::*;
