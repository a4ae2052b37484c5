//! Experimental field reporting.
//!
//! Fields marked `#[config(status = experimental)]` are reported by the
//! generated `validate_field_status` when set to a non-default value.

use super::FieldPath;
use crate::config::ConfigDiagnostics;

/// Record an experimental field as a grouped hint.
pub fn check_experimental(field_path: &'static str, diag: &mut ConfigDiagnostics) {
    diag.experimental_hint(FieldPath::new(field_path));
}
