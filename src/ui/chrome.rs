use crate::app::{Controls, WidgetAction};

/// Maps one line of console input to a widget action.
pub fn parse_action(input: &str) -> Option<WidgetAction> {
    match input.trim().to_ascii_lowercase().as_str() {
        "g" | "get" => Some(WidgetAction::GetJoke),
        "p" | "prev" | "previous" => Some(WidgetAction::Previous),
        "n" | "next" => Some(WidgetAction::Next),
        "q" | "quit" | "exit" => Some(WidgetAction::Quit),
        _ => None,
    }
}

pub struct Chrome {
    pub width: usize,
}

impl Chrome {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Builds the frame for one redraw: the joke, the control bar and an
    /// optional status line.
    pub fn build_frame(&self, display: &str, controls: Controls, status: Option<&str>) -> String {
        let rule = "-".repeat(self.width);
        let mut frame = String::new();

        frame.push_str(&rule);
        frame.push('\n');
        for line in wrap(display, self.width) {
            frame.push_str(&line);
            frame.push('\n');
        }
        frame.push_str(&rule);
        frame.push('\n');

        frame.push_str(&self.control_bar(controls));
        frame.push('\n');

        if let Some(status) = status {
            frame.push_str("! ");
            frame.push_str(status);
            frame.push('\n');
        }
        frame
    }

    pub fn control_bar(&self, controls: Controls) -> String {
        [
            button('p', "Previous", controls.previous_enabled),
            button('g', "Get Joke", true),
            button('n', "Next", controls.next_enabled),
            button('q', "Quit", true),
        ]
        .join("  ")
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self::new(60)
    }
}

// Disabled controls lose their key hint
fn button(key: char, label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{}] {}", key, label)
    } else {
        format!("[-] {}", label)
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
