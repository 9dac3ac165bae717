// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Radio-button choices for case forms.
//!
//! A choice carries a fixed set of optional decorations rather than
//! arbitrary extra attributes, so templates can rely on the shape.

use serde::Serialize;

use crate::status::{StatusCode, StatusMetadata};

/// Optional presentation details for a [`Choice`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Decorations {
    /// Overrides the generated element id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Secondary text shown under the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Content revealed when the choice is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional: Option<String>,
}

/// A single radio-button choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub text: String,
    pub checked: bool,
    #[serde(flatten)]
    pub decorations: Decorations,
}

impl Choice {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Choice {
            value: value.into(),
            text: text.into(),
            checked: false,
            decorations: Decorations::default(),
        }
    }

    /// Sets the element id (builder pattern).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.decorations.id = Some(id.into());
        self
    }

    /// Sets the hint text (builder pattern).
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.decorations.hint = Some(hint.into());
        self
    }

    /// Sets the conditional content (builder pattern).
    pub fn with_conditional(mut self, content: impl Into<String>) -> Self {
        self.decorations.conditional = Some(content.into());
        self
    }
}

/// Check the choice whose value equals `value` and uncheck the rest.
pub fn mark_checked(choices: &mut [Choice], value: &str) {
    for choice in choices {
        choice.checked = choice.value == value;
    }
}

/// One choice per known status, in ascending code order.
///
/// The Resolved status is hinted so users know it closes the case.
pub fn status_choices(statuses: &StatusMetadata, selected: Option<StatusCode>) -> Vec<Choice> {
    statuses
        .codes()
        .map(|(code, label)| {
            let mut choice = Choice::new(code.to_string(), label).with_id(format!("status-{code}"));
            if statuses.is_resolved(code) {
                choice = choice.with_hint("Closes the case");
            }
            choice.checked = selected == Some(code);
            choice
        })
        .collect()
}

#[cfg(test)]
#[path = "choices_tests.rs"]
mod tests;
