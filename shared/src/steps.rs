//! The fixed table of transformation steps.
//!
//! Order is significant: it is the execution order of the pipeline. The
//! green screen step must come first because every later step is edited
//! against a chroma-keyed image.

/// One entry of the transformation table.
///
/// `tpose` marks the pose-reset steps: they are always generated from the
/// green screen base rather than from the previous step's output, so the
/// pose change does not compound the directional-view edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformationStep {
    pub name: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
    pub tpose: bool,
}

pub const TRANSFORMATION_STEPS: [TransformationStep; 7] = [
    TransformationStep {
        name: "Green Screen",
        description: "Original pose with the background replaced by chroma key green",
        prompt: "Remove the entire background and replace it with a solid chroma key green \
                 (#00FF00). Keep the subject exactly as it is, including its outline, colors \
                 and proportions.",
        tpose: false,
    },
    TransformationStep {
        name: "Front View",
        description: "Character viewed from the front",
        prompt: "Show this character from the front, facing the camera directly. Keep the \
                 same pose, proportions, art style and solid green background.",
        tpose: false,
    },
    TransformationStep {
        name: "Side View",
        description: "Character viewed from the side",
        prompt: "Show this character in a full side profile view. Keep the same pose, \
                 proportions, art style and solid green background.",
        tpose: false,
    },
    TransformationStep {
        name: "Back View",
        description: "Character viewed from behind",
        prompt: "Show this character directly from behind. Keep the same pose, proportions, \
                 art style and solid green background.",
        tpose: false,
    },
    TransformationStep {
        name: "T-Pose Front",
        description: "T-pose reference viewed from the front",
        prompt: "Redraw this character standing upright in a T-pose (legs together, arms \
                 extended straight out to the sides), seen from the front. Remove any weapons, \
                 held items and accessories. Keep the art style and solid green background.",
        tpose: true,
    },
    TransformationStep {
        name: "T-Pose Side",
        description: "T-pose reference viewed from the side",
        prompt: "Redraw this character standing upright in a T-pose (legs together, arms \
                 extended straight out to the sides), seen in full side profile. Remove any \
                 weapons, held items and accessories. Keep the art style and solid green \
                 background.",
        tpose: true,
    },
    TransformationStep {
        name: "T-Pose Back",
        description: "T-pose reference viewed from behind",
        prompt: "Redraw this character standing upright in a T-pose (legs together, arms \
                 extended straight out to the sides), seen directly from behind. Remove any \
                 weapons, held items and accessories. Keep the art style and solid green \
                 background.",
        tpose: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_green_screen_first_and_tpose_last() {
        assert_eq!(TRANSFORMATION_STEPS.len(), 7);
        assert!(!TRANSFORMATION_STEPS[0].tpose);
        assert_eq!(TRANSFORMATION_STEPS[0].name, "Green Screen");

        let tpose_flags: Vec<bool> = TRANSFORMATION_STEPS.iter().map(|s| s.tpose).collect();
        assert_eq!(
            tpose_flags,
            vec![false, false, false, false, true, true, true]
        );
    }
}
