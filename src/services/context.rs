use crate::connectors::SessionFile;

/// How many prior turns are rendered into the prompt.
pub const HISTORY_WINDOW: usize = 5;
/// Per-file cap on rendered content, in characters.
pub const FILE_CONTENT_LIMIT: usize = 10_000;

const TRUNCATION_MARKER: &str = "... [content truncated]";
const MISSING_CONTENT: &str = "No content available";

/// One prior exchange, oldest-first in the slice handed to [`assemble`].
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub message: String,
    pub response: String,
}

/// Render the full prompt sent to the model from history, files and the
/// new message. Pure and deterministic; with no history and no files the
/// output is exactly the final question line.
pub fn assemble(current_message: &str, history: &[HistoryEntry], files: &[SessionFile]) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !history.is_empty() {
        lines.push("Previous conversation context:".to_string());
        let skip = history.len().saturating_sub(HISTORY_WINDOW);
        for entry in &history[skip..] {
            lines.push(format!("User: {}", entry.message));
            lines.push(format!("Assistant: {}", entry.response));
        }
        lines.push(String::new());
    }

    if !files.is_empty() {
        lines.push("Uploaded files for analysis:".to_string());
        for file in files {
            let content = file.content.as_deref().unwrap_or(MISSING_CONTENT);
            let total_chars = content.chars().count();
            lines.push(format!(
                "--- File: {} (type: {}, {} characters) ---",
                file.filename, file.content_type, total_chars
            ));
            if total_chars > FILE_CONTENT_LIMIT {
                let truncated: String = content.chars().take(FILE_CONTENT_LIMIT).collect();
                lines.push(format!("{}{}", truncated, TRUNCATION_MARKER));
            } else {
                lines.push(content.to_string());
            }
            lines.push(format!("--- End of {} ---", file.filename));
            lines.push(String::new());
        }
    }

    lines.push(format!("Current question: {}", current_message));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry {
            message: format!("question {}", n),
            response: format!("answer {}", n),
        }
    }

    fn text_file(name: &str, content: &str) -> SessionFile {
        SessionFile {
            filename: name.to_string(),
            content: Some(content.to_string()),
            content_type: ".txt".to_string(),
        }
    }

    #[test]
    fn bare_message_renders_only_the_question_line() {
        let prompt = assemble("hello", &[], &[]);
        assert_eq!(prompt, "Current question: hello");
    }

    #[test]
    fn history_window_keeps_only_the_last_five_in_order() {
        let history: Vec<HistoryEntry> = (1..=7).map(entry).collect();
        let prompt = assemble("next", &history, &[]);

        assert!(prompt.starts_with("Previous conversation context:"));
        assert!(!prompt.contains("question 1"));
        assert!(!prompt.contains("question 2"));
        for n in 3..=7 {
            assert!(prompt.contains(&format!("User: question {}", n)));
            assert!(prompt.contains(&format!("Assistant: answer {}", n)));
        }
        // oldest-first within the window
        let third = prompt.find("question 3").unwrap();
        let seventh = prompt.find("question 7").unwrap();
        assert!(third < seventh);
    }

    #[test]
    fn short_history_is_rendered_whole() {
        let history: Vec<HistoryEntry> = (1..=2).map(entry).collect();
        let prompt = assemble("next", &history, &[]);
        assert!(prompt.contains("User: question 1"));
        assert!(prompt.contains("Assistant: answer 2"));
    }

    #[test]
    fn long_file_content_is_cut_at_the_limit_with_a_marker() {
        let content = "x".repeat(FILE_CONTENT_LIMIT + 500);
        let prompt = assemble("q", &[], &[text_file("big.txt", &content)]);

        let expected = format!("{}{}", "x".repeat(FILE_CONTENT_LIMIT), TRUNCATION_MARKER);
        assert!(prompt.contains(&expected));
        assert!(!prompt.contains(&content));
        assert!(prompt.contains(&format!("{} characters", FILE_CONTENT_LIMIT + 500)));
    }

    #[test]
    fn content_at_the_limit_is_not_marked_truncated() {
        let content = "y".repeat(FILE_CONTENT_LIMIT);
        let prompt = assemble("q", &[], &[text_file("exact.txt", &content)]);
        assert!(prompt.contains(&content));
        assert!(!prompt.contains(TRUNCATION_MARKER));
    }

    #[test]
    fn missing_file_content_renders_the_placeholder() {
        let file = SessionFile {
            filename: "broken.pdf".to_string(),
            content: None,
            content_type: ".pdf".to_string(),
        };
        let prompt = assemble("q", &[], &[file]);
        assert!(prompt.contains("No content available"));
        assert!(prompt.contains("--- File: broken.pdf"));
        assert!(prompt.contains("--- End of broken.pdf ---"));
    }

    #[test]
    fn sections_appear_in_fixed_order_and_end_with_the_question() {
        let history = vec![entry(1)];
        let files = vec![text_file("notes.txt", "some notes")];
        let prompt = assemble("what now?", &history, &files);

        let history_at = prompt.find("Previous conversation context:").unwrap();
        let files_at = prompt.find("Uploaded files for analysis:").unwrap();
        let question_at = prompt.find("Current question: what now?").unwrap();
        assert!(history_at < files_at);
        assert!(files_at < question_at);
        assert!(prompt.ends_with("Current question: what now?"));
    }

    #[test]
    fn assembly_is_deterministic() {
        let history: Vec<HistoryEntry> = (1..=6).map(entry).collect();
        let files = vec![text_file("a.txt", "alpha"), text_file("b.txt", "beta")];
        let first = assemble("again", &history, &files);
        let second = assemble("again", &history, &files);
        assert_eq!(first, second);
    }
}
