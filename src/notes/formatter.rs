//! Pure markdown rendering for release notes.

use std::fmt::Write;

use super::ReleaseNotes;

/// Render release notes as markdown.
///
/// Layout:
/// - `# <title>` followed by a blank line
/// - the empty notice when there are no sections
/// - otherwise one `## <section>` per section with `- <message>` bullets
///
/// Continuation lines of multi-line messages are indented so they stay
/// inside their bullet.
pub fn render(notes: &ReleaseNotes) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", notes.title);
    out.push('\n');

    if notes.is_empty() {
        let _ = writeln!(out, "{}", notes.empty_notice);
        return out;
    }

    for (i, section) in notes.sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "## {}", section.title);
        out.push('\n');
        for entry in &section.entries {
            out.push_str(&bullet(entry));
        }
    }

    out
}

fn bullet(message: &str) -> String {
    let mut lines = message.trim().lines();
    let mut out = format!("- {}\n", lines.next().unwrap_or_default());
    for line in lines {
        if line.trim().is_empty() {
            out.push('\n');
        } else {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}
