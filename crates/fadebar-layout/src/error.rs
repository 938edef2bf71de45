//! Layout error taxonomy.

use thiserror::Error;

/// Errors produced by the layout engine.
///
/// The engine never partially commits: on error the caller gets no layout at
/// all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// An entry cannot fit the viewport at any scale factor: its title and
    /// value label alone, plus paddings, already exceed the available width.
    #[error("entry {entry} cannot fit: needs {required} units of {available} available")]
    Overflow {
        /// Index of the entry that overflowed
        entry: usize,
        /// Width the entry needs
        required: f32,
        /// Width the viewport offers
        available: f32,
    },

    /// An entry's value is NaN or infinite and cannot be laid out.
    #[error("entry {entry} has a non-finite value ({value})")]
    InvalidEntry {
        /// Index of the offending entry
        entry: usize,
        /// The rejected value
        value: f64,
    },
}
