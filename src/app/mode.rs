#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Typing into the command deck
    Command,
    /// Typing into the text buffer
    Editing,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appmode_enum_exists() {
        let _mode = AppMode::Command;
        let _mode = AppMode::Editing;
        let _mode = AppMode::Quit;
    }
}
