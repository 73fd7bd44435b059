//! Recipe instruction assembly.

use crate::models::{MAX_MANUAL_STEPS, Recipe};

/// One assembled instruction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionStep {
    /// 1-based step number from the source field name.
    pub step: u8,
    /// Trimmed instruction text, never blank.
    pub text: String,
    /// Step image URL, absent when the source field is missing or blank.
    pub image: Option<String>,
}

/// Assemble the ordered instruction steps of a recipe.
///
/// Walks `manual01`..`manual20` in ascending numeric order and keeps only
/// the steps whose trimmed text is non-blank; gaps in the numbering are
/// skipped, not treated as terminators.
#[must_use]
pub fn instruction_steps(recipe: &Recipe) -> Vec<InstructionStep> {
    (1..=MAX_MANUAL_STEPS)
        .filter_map(|n| {
            let text = recipe.manual(n)?.trim();
            if text.is_empty() {
                return None;
            }
            let image = recipe
                .manual_img(n)
                .map(str::trim)
                .filter(|img| !img.is_empty())
                .map(str::to_owned);
            Some(InstructionStep {
                step: n,
                text: text.to_owned(),
                image,
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn recipe(fields: serde_json::Value) -> Recipe {
        let mut base = serde_json::json!({"rcpSeq": 1, "rcpNm": "테스트"});
        base.as_object_mut()
            .unwrap()
            .extend(fields.as_object().unwrap().clone());
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn test_blank_steps_omitted_order_ascending() {
        let recipe = recipe(serde_json::json!({
            "manual01": "끓인다",
            "manual02": "",
            "manual03": "식힌다"
        }));
        let steps = instruction_steps(&recipe);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].step, 1);
        assert_eq!(steps[0].text, "끓인다");
        assert_eq!(steps[1].step, 3);
        assert_eq!(steps[1].text, "식힌다");
    }

    #[test]
    fn test_no_steps_yields_empty() {
        let recipe = recipe(serde_json::json!({}));
        assert!(instruction_steps(&recipe).is_empty());
    }

    #[test]
    fn test_text_trimmed_and_whitespace_only_dropped() {
        let recipe = recipe(serde_json::json!({
            "manual01": "  재료를 손질한다.  ",
            "manual02": "   "
        }));
        let steps = instruction_steps(&recipe);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].text, "재료를 손질한다.");
    }

    #[test]
    fn test_blank_image_treated_as_absent() {
        let recipe = recipe(serde_json::json!({
            "manual01": "굽는다",
            "manualImg01": " ",
            "manual02": "찐다",
            "manualImg02": "http://example.com/2.jpg"
        }));
        let steps = instruction_steps(&recipe);
        assert_eq!(steps[0].image, None);
        assert_eq!(steps[1].image.as_deref(), Some("http://example.com/2.jpg"));
    }

    #[test]
    fn test_step_twenty_included() {
        let recipe = recipe(serde_json::json!({"manual20": "마무리한다"}));
        let steps = instruction_steps(&recipe);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].step, 20);
    }
}
