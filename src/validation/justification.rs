use super::{Checks, FieldError, char_len};

pub const MIN_JUSTIFICATION_LEN: usize = 100;
pub const MAX_JUSTIFICATION_LEN: usize = 300;

/// Validate the free-text reason an organization gives when rejecting a form
pub fn validate_justification(justification: &str) -> Result<(), Vec<FieldError>> {
    let len = char_len(justification.trim());

    let mut checks = Checks::default();
    checks
        .check(
            "justificativa",
            len >= MIN_JUSTIFICATION_LEN,
            "A justificativa precisa ter pelo menos 100 caracteres.",
        )
        .check(
            "justificativa",
            len <= MAX_JUSTIFICATION_LEN,
            "A justificativa não pode exceder 300 caracteres.",
        );
    checks.finish()
}
