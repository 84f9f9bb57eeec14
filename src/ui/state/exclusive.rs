// SPDX-License-Identifier: MPL-2.0
//! Exclusive UI region.
//!
//! A region has at most one occupant. Acquiring it hands back the previous
//! holder so the caller can close it; there is no way to hold two occupants
//! at once.

/// Single-occupant slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusiveRegion<T> {
    holder: Option<T>,
}

impl<T> Default for ExclusiveRegion<T> {
    fn default() -> Self {
        Self { holder: None }
    }
}

impl<T: Copy + PartialEq> ExclusiveRegion<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `occupant` the holder and returns the displaced one, if it was
    /// a different occupant.
    pub fn acquire(&mut self, occupant: T) -> Option<T> {
        self.holder.replace(occupant).filter(|prev| *prev != occupant)
    }

    /// Releases the region if `occupant` holds it.
    pub fn release(&mut self, occupant: T) -> bool {
        if self.holder == Some(occupant) {
            self.holder = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn holder(&self) -> Option<T> {
        self.holder
    }

    #[must_use]
    pub fn is_held_by(&self, occupant: T) -> bool {
        self.holder == Some(occupant)
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.holder.is_none()
    }
}
