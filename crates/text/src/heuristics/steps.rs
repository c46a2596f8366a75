use super::{step_candidates, strip_number_marker};

/// Steps shown for an execution flow.
pub const MAX_STEPS: usize = 8;

/// Numbered steps with their `"N."` markers removed, capped at [`MAX_STEPS`].
#[must_use]
pub fn extract_steps(text: &str) -> Vec<String> {
    step_candidates(text)
        .into_iter()
        .map(|candidate| strip_number_marker(candidate).trim())
        .filter(|step| !step.is_empty())
        .take(MAX_STEPS)
        .map(str::to_string)
        .collect()
}
