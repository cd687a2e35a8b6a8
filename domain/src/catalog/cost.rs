//! Cost feasibility

/// Saturated cost used by older descriptions to mean "cannot do this".
pub const INFEASIBLE_SENTINEL: f64 = i32::MAX as f64;

/// Whether an agent can perform an action at this cost.
///
/// Non-finite costs and anything at or above [`INFEASIBLE_SENTINEL`] mark
/// the agent as unable to act at any price.
pub fn is_feasible(cost: f64) -> bool {
    cost.is_finite() && cost < INFEASIBLE_SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feasibility() {
        assert!(is_feasible(0.0));
        assert!(is_feasible(12.5));
        assert!(!is_feasible(f64::INFINITY));
        assert!(!is_feasible(f64::NAN));
        assert!(!is_feasible(i32::MAX as f64));
    }
}
