/// Tunables for a [`HashRatchet`](crate::HashRatchet).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RatchetConfig {
    /// Largest forward distance a single seek may cover.
    ///
    /// A receiver deriving keys for counters announced by a peer can set this
    /// to refuse jumps that would burn most of the counter space. `None`
    /// leaves seeks unbounded.
    pub max_seek_distance: Option<u32>,
}

impl RatchetConfig {
    /// A configuration that rejects seeks longer than `limit` steps.
    pub fn with_max_seek_distance(limit: u32) -> Self {
        Self {
            max_seek_distance: Some(limit),
        }
    }
}
