use log::debug;

/// The component-selection flags as given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpFlags {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
    pub extra: bool,
}

/// The resolved increment decision for one run: the effective dashed flag
/// and which of `[major, minor, patch, extra]` to step. The last position is
/// unused when `dashed` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpPlan {
    pub dashed: bool,
    pub steps: [bool; 4],
}

impl BumpFlags {
    /// Resolves the flags into a [`BumpPlan`], applying the precedence rules
    /// in order:
    ///
    /// 1. no component flag set forces `patch` (a bare invocation bumps the
    ///    patch component);
    /// 2. `extra` forces the dashed format regardless of the incoming
    ///    `dashed` value.
    ///
    /// The resulting vector is exactly the flags after forcing; nothing else
    /// is normalized.
    pub fn resolve(self, dashed: bool) -> BumpPlan {
        let mut flags = self;
        if !(flags.major || flags.minor || flags.patch || flags.extra) {
            flags.patch = true;
        }
        let dashed = dashed || flags.extra;

        let plan = BumpPlan {
            dashed,
            steps: [flags.major, flags.minor, flags.patch, flags.extra],
        };
        debug!("Resolved bump plan: {:?}", plan);
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_defaults_to_patch() {
        let plan = BumpFlags::default().resolve(false);
        assert_eq!(plan.steps, [false, false, true, false]);
        assert!(!plan.dashed);
    }

    #[test]
    fn test_explicit_flags_pass_through() {
        let flags = BumpFlags { major: true, ..Default::default() };
        let plan = flags.resolve(false);
        assert_eq!(plan.steps, [true, false, false, false]);

        let flags = BumpFlags { major: true, minor: true, ..Default::default() };
        let plan = flags.resolve(false);
        assert_eq!(plan.steps, [true, true, false, false]);
    }

    #[test]
    fn test_explicit_patch_does_not_trigger_default() {
        let flags = BumpFlags { minor: true, ..Default::default() };
        let plan = flags.resolve(false);
        assert_eq!(plan.steps, [false, true, false, false]);
    }

    #[test]
    fn test_extra_forces_dashed() {
        let flags = BumpFlags { extra: true, ..Default::default() };
        let plan = flags.resolve(false);
        assert!(plan.dashed);
        assert_eq!(plan.steps, [false, false, false, true]);
    }

    #[test]
    fn test_dashed_preserved_without_extra() {
        let flags = BumpFlags { patch: true, ..Default::default() };
        let plan = flags.resolve(true);
        assert!(plan.dashed);
        assert_eq!(plan.steps, [false, false, true, false]);
    }

    #[test]
    fn test_default_rule_runs_before_dash_forcing() {
        // A bare dashed invocation bumps patch, not extra.
        let plan = BumpFlags::default().resolve(true);
        assert!(plan.dashed);
        assert_eq!(plan.steps, [false, false, true, false]);
    }
}
