//! Approved palette steps and the banding function.

/// Approved color steps, ascending.
pub const APPROVED_STEPS: [u32; 6] = [50, 100, 200, 500, 700, 900];

/// Upper bound (inclusive) of each band and the step it maps to. Anything
/// above the last bound maps to 900.
const BANDS: [(u32, u32); 5] = [(75, 50), (150, 100), (350, 200), (600, 500), (800, 700)];

/// The process-wide palette rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteRuleSet;

impl PaletteRuleSet {
    /// Approved steps, ascending.
    pub fn approved_steps(&self) -> &'static [u32] {
        &APPROVED_STEPS
    }

    /// Whether `step` is an approved step.
    pub fn is_approved(&self, step: u32) -> bool {
        APPROVED_STEPS.contains(&step)
    }

    /// Nearest approved step for any step.
    pub fn suggest(&self, step: u32) -> u32 {
        suggest_step(step)
    }

    /// Approved steps joined for messages, e.g. `50, 100, 200, 500, 700, 900`.
    pub fn describe(&self) -> String {
        APPROVED_STEPS
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Map a step onto an approved one by fixed thresholds.
pub fn suggest_step(step: u32) -> u32 {
    BANDS
        .iter()
        .find(|(upper, _)| step <= *upper)
        .map(|(_, target)| *target)
        .unwrap_or(900)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(0 => 50)]
    #[test_case(75 => 50)]
    #[test_case(76 => 100)]
    #[test_case(150 => 100)]
    #[test_case(151 => 200)]
    #[test_case(350 => 200)]
    #[test_case(351 => 500)]
    #[test_case(600 => 500)]
    #[test_case(601 => 700)]
    #[test_case(800 => 700)]
    #[test_case(801 => 900)]
    #[test_case(u32::MAX => 900)]
    fn test_banding_boundaries(step: u32) -> u32 {
        suggest_step(step)
    }

    #[test]
    fn test_approved_steps_map_to_themselves() {
        let rules = PaletteRuleSet;
        for step in rules.approved_steps() {
            assert_eq!(rules.suggest(*step), *step);
            assert!(rules.is_approved(*step));
        }
        assert!(!rules.is_approved(300));
    }

    #[test]
    fn test_describe() {
        assert_eq!(PaletteRuleSet.describe(), "50, 100, 200, 500, 700, 900");
    }

    proptest! {
        #[test]
        fn suggestion_is_always_approved(step in any::<u32>()) {
            prop_assert!(PaletteRuleSet.is_approved(suggest_step(step)));
        }

        #[test]
        fn banding_is_monotonic(a in 0u32..2000, b in 0u32..2000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(suggest_step(lo) <= suggest_step(hi));
        }
    }
}
