use crate::domain::Tier;

/// Multiplier applied to result points for members of a confederation
pub fn multiplier_of(tier: Tier) -> f64 {
    match tier {
        Tier::Supreme => 1.5,
        Tier::Diamond => 1.2,
        Tier::Platinum | Tier::Gold => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_table() {
        assert_eq!(multiplier_of(Tier::Supreme), 1.5);
        assert_eq!(multiplier_of(Tier::Diamond), 1.2);
        assert_eq!(multiplier_of(Tier::Platinum), 1.0);
        assert_eq!(multiplier_of(Tier::Gold), 1.0);
    }

    #[test]
    fn test_multiplier_never_decreases_with_tier() {
        let tiers = [Tier::Gold, Tier::Platinum, Tier::Diamond, Tier::Supreme];
        for pair in tiers.windows(2) {
            assert!(multiplier_of(pair[0]) <= multiplier_of(pair[1]));
        }
    }
}
