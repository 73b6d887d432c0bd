use crate::{error::CapacityError, types::ArtistRef};

pub const MAX_SEED_ARTISTS: usize = 5;

/// The seed artists chosen so far, built up across repeated searches.
///
/// Insertion order is preserved, ids are unique, and the set never grows past
/// [`MAX_SEED_ARTISTS`]. Both invariants are enforced here in `add` and
/// nowhere else.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    artists: Vec<ArtistRef>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a candidate to the selection.
    ///
    /// Returns `Ok(true)` if the artist was added, `Ok(false)` if its id was
    /// already present (idempotent no-op), and [`CapacityError`] when the
    /// selection is full; the set is unchanged in both non-added cases.
    pub fn add(&mut self, candidate: ArtistRef) -> Result<bool, CapacityError> {
        if self.artists.iter().any(|a| a.id == candidate.id) {
            return Ok(false);
        }
        if self.artists.len() >= MAX_SEED_ARTISTS {
            return Err(CapacityError {
                max: MAX_SEED_ARTISTS,
            });
        }
        self.artists.push(candidate);
        Ok(true)
    }

    /// Resets to empty so a new flow starts fresh.
    pub fn clear(&mut self) {
        self.artists.clear();
    }

    pub fn artists(&self) -> &[ArtistRef] {
        &self.artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.artists.len() >= MAX_SEED_ARTISTS
    }
}
