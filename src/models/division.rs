//! Division model.
//!
//! Divisions are the closed set of age/skill categories a league runs.
//! Two are recreational: the youngest (`EsK1Rec`) plays on reduced-rim
//! courts, and the older recreational tier (`Es23Rec`) uses a single
//! referee. The rest are competitive or junior-varsity tiers.

use serde::{Deserialize, Serialize};

/// An age/skill category.
///
/// The variant order is the canonical division order used when listing a
/// matchup's game requests, so it is part of the deterministic output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Division {
    /// Elementary K-1 recreational (youngest tier, reduced-rim courts).
    EsK1Rec,
    /// Elementary 2-3 recreational (single referee).
    Es23Rec,
    /// Elementary 4-5 competitive.
    Es45Comp,
    /// Middle school competitive.
    MsComp,
    /// Girls junior varsity.
    GirlsJv,
    /// Boys junior varsity.
    BoysJv,
}

impl Division {
    /// All divisions in canonical order.
    pub const ALL: [Division; 6] = [
        Division::EsK1Rec,
        Division::Es23Rec,
        Division::Es45Comp,
        Division::MsComp,
        Division::GirlsJv,
        Division::BoysJv,
    ];

    /// Whether this is one of the two recreational tiers.
    pub fn is_recreational(self) -> bool {
        matches!(self, Division::EsK1Rec | Division::Es23Rec)
    }

    /// Whether this division may play on reduced-rim courts.
    ///
    /// Reduced-rim facilities host *only* this division; the reverse
    /// direction is unrestricted (K-1 teams may play on regular courts).
    pub fn fits_reduced_rims(self) -> bool {
        matches!(self, Division::EsK1Rec)
    }

    /// Whether this division runs with a single referee.
    ///
    /// Single-referee games must sit at the first or last slot of a
    /// facility's daily sequence so they don't break the two-referee flow.
    pub fn single_referee(self) -> bool {
        matches!(self, Division::Es23Rec)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Division::EsK1Rec => "ES K-1 REC",
            Division::Es23Rec => "ES 2-3 REC",
            Division::Es45Comp => "ES 4-5 COMP",
            Division::MsComp => "MS COMP",
            Division::GirlsJv => "GIRLS JV",
            Division::BoysJv => "BOYS JV",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recreational_split() {
        assert!(Division::EsK1Rec.is_recreational());
        assert!(Division::Es23Rec.is_recreational());
        assert!(!Division::Es45Comp.is_recreational());
        assert!(!Division::MsComp.is_recreational());
        assert!(!Division::GirlsJv.is_recreational());
        assert!(!Division::BoysJv.is_recreational());
    }

    #[test]
    fn test_reduced_rim_fit() {
        assert!(Division::EsK1Rec.fits_reduced_rims());
        // The older recreational tier still uses full-height rims
        assert!(!Division::Es23Rec.fits_reduced_rims());
        assert!(!Division::BoysJv.fits_reduced_rims());
    }

    #[test]
    fn test_single_referee() {
        assert!(Division::Es23Rec.single_referee());
        assert!(!Division::EsK1Rec.single_referee());
        assert!(!Division::MsComp.single_referee());
    }

    #[test]
    fn test_canonical_order_is_total() {
        for w in Division::ALL.windows(2) {
            assert!(w[0] < w[1]);
        }
    }
}
