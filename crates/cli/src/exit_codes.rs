//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, missing file) |
//! | 3-9     | compare          | Reconciliation run codes                 |
//! | 10-19   | config           | Configuration codes                      |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
/// clap exits with this code on its own parse failures.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Compare (3-9)
// =============================================================================

/// Findings present (discrepancy, not found or ignored row) with `--strict-exit`.
pub const EXIT_RECON_MISMATCH: u8 = 3;

/// An input workbook could not be opened or its worksheet read.
pub const EXIT_RECON_INPUT: u8 = 4;

/// The marked-up workbook or JSON result could not be written.
pub const EXIT_RECON_OUTPUT: u8 = 5;

// =============================================================================
// Config (10-19)
// =============================================================================

/// Config file failed to parse or validate.
pub const EXIT_CONFIG_INVALID: u8 = 10;

/// Config file could not be read or written (missing, exists without --force).
pub const EXIT_CONFIG_IO: u8 = 11;
