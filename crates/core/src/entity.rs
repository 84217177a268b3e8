//! Identity of catalog records.

/// A record addressed by a stable key.
///
/// Stores index entities by `id()`: two records with the same id are the same
/// record even when every other field differs.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Whether `other` denotes the same record.
    fn same_identity(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}
