//! The terminal's fixed command table and history-navigation rules.

use desktop_app_contract::PanelId;

const HELP_TEXT: &str = "Available commands:
  about     - Learn about me
  projects  - View my projects
  skills    - See my technical skills
  contact   - Get in touch
  hobbies   - My interests and activities
  files     - Open file explorer
  settings  - Customize your experience
  secret    - Are you brave enough to discover the secret?
  date      - Current date and time
  clear     - Clear the terminal
  exit      - Close the terminal";

const ABOUT_TEXT: &str = "Hello! My name is Brage and I am a developer.
I got my first computer when I was 6 years old and I fell in love with it.
Tinkering and creating things with it has been a passion of mine ever since.
Now I'm looking to make a career doing what I love.";

const PROJECTS_TEXT: &str = "Recent Projects (Details on Github):
  - Old Portfolio Website
  - Flicksy, Movie Recommendation App
  - Portfolio Website";

const SKILLS_TEXT: &str = "Technical Skills:
  Languages: Python, JavaScript, HTML
  Frontend: React, Next.js, Tailwind CSS
  Backend: Node.js
  Database: MongoDB, SPARQL, SQLite3
  Tools: Git, Docker
  Design: Figma, Photoshop";

const CONTACT_TEXT: &str = "Get in Touch:
  Email: bragestoefringshaug@gmail.com
  GitHub: https://github.com/bragestoefringshaug
  LinkedIn: https://linkedin.com/in/brage-stofringshaug
  Instagram: @bragesto";

const HOBBIES_TEXT: &str = "My Hobbies & Interests:

  Gaming with friends
  Strength Training
  Coding";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of resolving one submitted command line.
pub enum CommandOutcome {
    /// Append a literal text block.
    Text(String),
    /// Open another panel and append a confirmation line.
    OpenPanel {
        /// Panel to open.
        panel: PanelId,
        /// Confirmation text appended to the transcript.
        output: &'static str,
    },
    /// Show the video overlay.
    ShowVideo,
    /// Hide the video overlay and append a confirmation line.
    HideVideo {
        /// Confirmation text appended to the transcript.
        output: &'static str,
    },
    /// Append the current local date and time.
    Date,
    /// Atomically reset the transcript and history.
    Clear,
    /// Close the terminal window after a farewell line.
    Exit {
        /// Farewell text appended to the transcript.
        output: &'static str,
    },
    /// Unknown command; the message echoes the original (non-lowercased) input.
    NotFound {
        /// Full "command not found" message.
        message: String,
    },
}

/// Resolves a submitted line against the command table.
///
/// Lookup happens on the lowercased, trimmed input; the not-found message echoes the input as
/// typed.
pub fn evaluate_command(raw: &str) -> CommandOutcome {
    match raw.trim().to_lowercase().as_str() {
        "help" => CommandOutcome::Text(HELP_TEXT.to_string()),
        "about" => CommandOutcome::Text(ABOUT_TEXT.to_string()),
        "projects" => CommandOutcome::Text(PROJECTS_TEXT.to_string()),
        "skills" => CommandOutcome::Text(SKILLS_TEXT.to_string()),
        "contact" => CommandOutcome::Text(CONTACT_TEXT.to_string()),
        "hobbies" => CommandOutcome::Text(HOBBIES_TEXT.to_string()),
        "files" => CommandOutcome::OpenPanel {
            panel: PanelId::Explorer,
            output: "File Explorer opened! Browse and download my portfolio files.",
        },
        "settings" => CommandOutcome::OpenPanel {
            panel: PanelId::Settings,
            output: "Settings opened! Customize your experience.",
        },
        "secret" => CommandOutcome::ShowVideo,
        "closevideo" => CommandOutcome::HideVideo {
            output: "Video closed. Back to terminal!",
        },
        "date" => CommandOutcome::Date,
        "clear" => CommandOutcome::Clear,
        "exit" => CommandOutcome::Exit {
            output: "Terminal closed. Goodbye!",
        },
        _ => CommandOutcome::NotFound {
            message: format!("Command not found: {raw}. Type 'help' for available commands."),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of one Up/Down history step.
pub enum HistoryNavigation {
    /// Nothing changes (empty history, or Down with no active cursor).
    Unchanged,
    /// Move the cursor to this index and load that entry into the input.
    Select(usize),
    /// Step past the newest entry: leave history and restore an empty input.
    ClearInput,
}

/// Computes the next history cursor for a step in `direction` (-1 = older, +1 = newer).
///
/// Up floors at the oldest entry (index 0); Down past the newest entry exits history.
pub fn next_history_cursor(
    len: usize,
    cursor: Option<usize>,
    direction: i32,
) -> HistoryNavigation {
    if len == 0 {
        return HistoryNavigation::Unchanged;
    }
    match (cursor, direction) {
        (None, d) if d < 0 => HistoryNavigation::Select(len - 1),
        (Some(index), d) if d < 0 => HistoryNavigation::Select(index.saturating_sub(1)),
        (Some(index), d) if d > 0 => {
            if index + 1 >= len {
                HistoryNavigation::ClearInput
            } else {
                HistoryNavigation::Select(index + 1)
            }
        }
        _ => HistoryNavigation::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        assert_eq!(
            evaluate_command("  HELP  "),
            CommandOutcome::Text(HELP_TEXT.to_string())
        );
        assert_eq!(
            evaluate_command("Files"),
            CommandOutcome::OpenPanel {
                panel: PanelId::Explorer,
                output: "File Explorer opened! Browse and download my portfolio files.",
            }
        );
        assert_eq!(evaluate_command("clear"), CommandOutcome::Clear);
        assert_eq!(evaluate_command("secret"), CommandOutcome::ShowVideo);
    }

    #[test]
    fn unknown_commands_echo_the_original_input() {
        let outcome = evaluate_command("Frobnicate");
        assert_eq!(
            outcome,
            CommandOutcome::NotFound {
                message: "Command not found: Frobnicate. Type 'help' for available commands."
                    .to_string(),
            }
        );
    }

    #[test]
    fn up_walks_toward_older_entries_and_floors_at_the_oldest() {
        // History ["about", "skills"], no active navigation.
        assert_eq!(next_history_cursor(2, None, -1), HistoryNavigation::Select(1));
        assert_eq!(next_history_cursor(2, Some(1), -1), HistoryNavigation::Select(0));
        assert_eq!(next_history_cursor(2, Some(0), -1), HistoryNavigation::Select(0));
    }

    #[test]
    fn down_walks_toward_newer_entries_and_exits_past_the_newest() {
        assert_eq!(next_history_cursor(2, Some(0), 1), HistoryNavigation::Select(1));
        assert_eq!(next_history_cursor(2, Some(1), 1), HistoryNavigation::ClearInput);
        assert_eq!(next_history_cursor(2, None, 1), HistoryNavigation::Unchanged);
    }

    #[test]
    fn empty_history_never_navigates() {
        assert_eq!(next_history_cursor(0, None, -1), HistoryNavigation::Unchanged);
        assert_eq!(next_history_cursor(0, None, 1), HistoryNavigation::Unchanged);
    }
}
