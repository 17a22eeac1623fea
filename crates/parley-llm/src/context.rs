use parley_types::Turn;

/// Recent conversation handed to a responder alongside the new message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextWindow {
    pub turns: Vec<Turn>,
}

impl ContextWindow {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render as a transcript, one `User:` / `Bot:` pair per turn
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("User: {}\nBot: {}", t.message, t.response))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<Turn>> for ContextWindow {
    fn from(turns: Vec<Turn>) -> Self {
        Self::new(turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_transcript() {
        let window = ContextWindow::new(vec![Turn::new("hi", "hello"), Turn::new("how?", "fine")]);
        assert_eq!(window.render(), "User: hi\nBot: hello\nUser: how?\nBot: fine");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(ContextWindow::default().render(), "");
    }
}
