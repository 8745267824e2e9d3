//! Injected capability for specialization tier-order lookups.
//!
//! The readable format encodes a trait choice as its position within the
//! specialization tier's display order, which only an external metadata
//! source knows. The codec depends on this trait rather than any concrete
//! resolver, so it stays independently testable with a stub.

use std::fmt;

/// Resolves a specialization's major traits grouped by tier.
///
/// Implementations are expected to behave as an idempotent, side-effect-free
/// function of the ID (typically a read-through cache in front of the game
/// metadata API). A failed lookup degrades the affected tier to "no choice";
/// it never aborts the enclosing encode or decode.
pub trait TierLookup {
    /// Returns the tier ordering for a specialization.
    fn tier_order(&self, specialization: u32) -> Result<TierOrder, TierLookupError>;
}

/// A specialization's major-trait IDs, grouped by tier and ordered by the
/// stable display order within each tier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TierOrder {
    tiers: [Vec<u32>; 3],
}

impl TierOrder {
    /// Creates a tier order from the three tiers' trait IDs.
    #[must_use]
    pub fn new(tiers: [Vec<u32>; 3]) -> Self {
        Self { tiers }
    }

    /// The trait IDs of one tier (0-2), empty for an out-of-range tier.
    #[must_use]
    pub fn tier(&self, tier: usize) -> &[u32] {
        self.tiers.get(tier).map_or(&[], Vec::as_slice)
    }

    /// Position of a trait within its tier's display order.
    #[must_use]
    pub fn position_of(&self, tier: usize, trait_id: u32) -> Option<usize> {
        self.tier(tier).iter().position(|&id| id == trait_id)
    }

    /// The trait at a display-order position within a tier.
    #[must_use]
    pub fn trait_at(&self, tier: usize, position: usize) -> Option<u32> {
        self.tier(tier).get(position).copied()
    }
}

/// A tier-order lookup that produced no usable data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierLookupError {
    /// The metadata source does not know the specialization.
    NotFound {
        /// The requested specialization ID.
        specialization: u32,
    },

    /// The metadata source itself failed (network, cache miss, ...).
    Unavailable {
        /// Source-reported reason.
        reason: String,
    },
}

impl fmt::Display for TierLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { specialization } => {
                write!(f, "no tier data for specialization {specialization}")
            }
            Self::Unavailable { reason } => write!(f, "tier lookup unavailable: {reason}"),
        }
    }
}

impl std::error::Error for TierLookupError {}
