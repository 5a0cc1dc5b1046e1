//! Exit code constants for the yaml-get CLI.
//!
//! - 0: Success (including every lookup that fell back to the default)
//! - 1: Usage error (missing positional arguments, unknown flags)

/// Successful execution. Lookup failures still exit with this code.
pub const SUCCESS: i32 = 0;

/// Usage error: fewer than two positional arguments or an unrecognised flag.
pub const USAGE_ERROR: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(SUCCESS, USAGE_ERROR);
    }

    #[test]
    fn exit_codes_match_cli_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USAGE_ERROR, 1);
    }
}
