//! Advanced action catalog
//!
//! Static reference data for the advanced action types that can be added to a
//! recorded test. Entries are display metadata only; playback lives in the
//! UICD backend, not here.

/// Advanced action types offered by the recorder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Click,
    Swipe,
    InputText,
    CommandLine,
    ConditionClick,
    ScreenContentValidation,
    SnippetValidation,
}

/// Catalog entry describing one advanced action type
#[derive(Debug, Clone, Copy)]
pub struct ActionEntry {
    pub kind: ActionKind,
    pub name: &'static str,
    pub summary: &'static str,
    /// Longer description shown in the detail panel
    pub details: &'static [&'static str],
    /// Whether the action contributes a pass/fail result to the test run
    pub is_validator: bool,
}

/// All advanced actions, in the order they are listed in the UI
pub fn catalog() -> &'static [ActionEntry] {
    CATALOG
}

static CATALOG: &[ActionEntry] = &[
    ActionEntry {
        kind: ActionKind::Click,
        name: "Click",
        summary: "Tap the element captured at recording time",
        details: &[
            "Replays a tap on the recorded screen position. The element is",
            "relocated through its node context on playback, so small layout",
            "shifts between devices do not break the action.",
        ],
        is_validator: false,
    },
    ActionEntry {
        kind: ActionKind::Swipe,
        name: "Swipe",
        summary: "Replay a drag gesture between two recorded positions",
        details: &[
            "Performs a swipe from the recorded start position to the recorded",
            "end position. Useful for scrolling lists and dismissing overlays.",
        ],
        is_validator: false,
    },
    ActionEntry {
        kind: ActionKind::InputText,
        name: "Input Text",
        summary: "Type text into the currently focused field",
        details: &[
            "Sends the configured text to the device through the input driver.",
            "The target field must already have focus, typically from a",
            "preceding click action.",
        ],
        is_validator: false,
    },
    ActionEntry {
        kind: ActionKind::CommandLine,
        name: "Command Line",
        summary: "Run a shell or adb command and check its exit code",
        details: &[
            "Executes the configured command on the host or, for adb commands,",
            "against the connected device. The action fails when the exit code",
            "differs from the expected return code. Output capture and a",
            "per-action timeout are configurable.",
        ],
        is_validator: true,
    },
    ActionEntry {
        kind: ActionKind::ConditionClick,
        name: "Condition Click",
        summary: "Click the matched element when a screen validation passes",
        details: &[
            "First validates the current screen content, then clicks the center",
            "of the matched element. When the validation fails the click is",
            "skipped and playback continues with the next action.",
        ],
        is_validator: true,
    },
    ActionEntry {
        kind: ActionKind::ScreenContentValidation,
        name: "Screen Content Validation",
        summary: "Match text or element attributes in the current UI tree",
        details: &[
            "Dumps the device UI tree and matches the configured text or",
            "attribute against it. Supports exact and substring matching on",
            "the selected element or the whole screen.",
        ],
        is_validator: true,
    },
    ActionEntry {
        kind: ActionKind::SnippetValidation,
        name: "Snippet Validation",
        summary: "Invoke a Mobly snippet method and validate its result",
        details: &[
            "Calls an RPC method exposed by a Mobly snippet APK installed on",
            "the device and compares the return value with the expected value.",
            "Requires one-time setup on the device; press 'i' for step-by-step",
            "instructions.",
        ],
        is_validator: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contains_snippet_validation() {
        let entry = catalog()
            .iter()
            .find(|e| e.kind == ActionKind::SnippetValidation);
        assert!(entry.is_some());
        assert!(entry.unwrap().is_validator);
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let names: Vec<&str> = catalog().iter().map(|e| e.name).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn test_every_entry_has_details() {
        for entry in catalog() {
            assert!(!entry.details.is_empty(), "{} has no details", entry.name);
        }
    }
}
