//! Domain-level naming conventions for route controllers.
//!
//! Controllers are addressed internally by a backslash-separated module
//! path (`Acme\Api\Handler`). API callers supply the dash display form
//! (`Acme-Api-Handler`) because the separator is not URL- or
//! shell-friendly. The conversion lives here as a pure function so every
//! write path applies it identically.

/// Internal separator used in stored controller identifiers.
pub const CONTROLLER_SEPARATOR: char = '\\';

/// Convert a controller display name into its internal identifier by
/// replacing every dash with the internal separator.
///
/// The transform is idempotent: input already in internal form (no
/// dashes) is returned unchanged.
pub fn display_name_to_internal_id(display_name: &str) -> String {
    display_name.replace('-', &CONTROLLER_SEPARATOR.to_string())
}
