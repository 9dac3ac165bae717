// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use bt_core::{Actor, Choice, NoteItem, StatusItem, StatusMetadata, StatusState, TimelineItem};

use crate::colors;
use crate::config::Config;

/// Presentation settings for text output.
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub date_format: String,
    pub wrap_width: usize,
    pub color: bool,
}

impl DisplayOptions {
    pub fn from_config(config: &Config, color: bool) -> Self {
        DisplayOptions {
            date_format: config.date_format.clone(),
            wrap_width: config.wrap_width,
            color,
        }
    }

    fn header(&self, text: &str) -> String {
        if self.color {
            colors::header(text)
        } else {
            text.to_string()
        }
    }

    fn context(&self, text: &str) -> String {
        if self.color {
            colors::context(text)
        } else {
            text.to_string()
        }
    }
}

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.chars().count() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

fn actor_name(user: Option<&Actor>) -> &str {
    user.map_or("unknown user", |actor| actor.name.as_str())
}

fn indent_wrapped(lines: &mut Vec<String>, text: &str, width: usize) {
    for line in wrap_text(text, width).lines() {
        lines.push(format!("    {}", line));
    }
}

/// Describe a status transition with labels, e.g. `Open -> Resolved`.
///
/// A case's first status has no predecessor and shows only the target.
pub fn format_transition(state: &StatusState, statuses: &StatusMetadata) -> String {
    let to = statuses.label_or_code(state.to);
    match state.from {
        Some(from) => format!("{} -> {}", statuses.label_or_code(from), to),
        None => to,
    }
}

/// Format a note entry.
///
/// Output format:
/// ```text
///   2019-03-10 12:00  note by Ann Other [editing]
///     Content goes here, potentially
///     wrapped across multiple lines.
///     (has documents)
/// ```
pub fn format_note_item(note: &NoteItem, opts: &DisplayOptions) -> Vec<String> {
    let mut lines = Vec::new();
    let timestamp = note.date.format(&opts.date_format).to_string();
    let mut heading = format!(
        "  {}  note by {}",
        opts.context(&timestamp),
        actor_name(note.user.as_ref())
    );
    if note.edit {
        heading.push_str(" [editing]");
    }
    lines.push(heading);

    indent_wrapped(&mut lines, &note.text, opts.wrap_width);
    if note.has_documents {
        lines.push("    (has documents)".to_string());
    }
    lines
}

/// Format a status change entry.
///
/// Output format:
/// ```text
///   2019-03-07 12:00  status Resolved -> Open by Sam Smith
///     Summary text.
///     effective 2019-03-06 00:00
/// ```
pub fn format_status_item(
    status: &StatusItem,
    statuses: &StatusMetadata,
    opts: &DisplayOptions,
) -> Vec<String> {
    let mut lines = Vec::new();
    let timestamp = status.date.format(&opts.date_format).to_string();
    let mut heading = format!(
        "  {}  status {} by {}",
        opts.context(&timestamp),
        format_transition(&status.state, statuses),
        actor_name(status.user.as_ref())
    );
    if status.state.is_resolved {
        heading.push_str(" [resolved]");
    }
    lines.push(heading);

    if !status.text.is_empty() {
        indent_wrapped(&mut lines, &status.text, opts.wrap_width);
    }
    if status.state.date != status.date {
        lines.push(format!(
            "    effective {}",
            status.state.date.format(&opts.date_format)
        ));
    }
    lines
}

/// Format a whole timeline, newest entry first, blank line between entries.
pub fn format_timeline(
    items: &[TimelineItem],
    statuses: &StatusMetadata,
    opts: &DisplayOptions,
) -> String {
    let mut output = vec![opts.header("Timeline:")];
    if items.is_empty() {
        output.push("  (no activity)".to_string());
    }
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            output.push(String::new());
        }
        match item {
            TimelineItem::Note(note) => output.extend(format_note_item(note, opts)),
            TimelineItem::Status(status) => {
                output.extend(format_status_item(status, statuses, opts))
            }
        }
    }
    output.join("\n")
}

/// Format a single radio choice, e.g. `(x) 4  Resolved  - Closes the case`.
pub fn format_choice(choice: &Choice) -> String {
    let mark = if choice.checked { "(x)" } else { "( )" };
    let mut line = format!("{} {}  {}", mark, choice.value, choice.text);
    if let Some(hint) = &choice.decorations.hint {
        line.push_str(&format!("  - {}", hint));
    }
    line
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
