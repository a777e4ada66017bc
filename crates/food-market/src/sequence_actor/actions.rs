//! Operations on a counter row.
//!
//! Counters accept no patches: the only way to change one is [`SequenceAction::Increment`],
//! which the actor applies as a single indivisible read-modify-write.

/// Custom actions for Sequence rows.
#[derive(Debug, Clone, Copy)]
pub enum SequenceAction {
    /// Adds one to the row and returns the new value.
    Increment,
}

/// Sequence rows have no patchable fields.
#[derive(Debug, Clone, Copy)]
pub enum SequencePatch {}
