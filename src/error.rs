use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Please enter some text to analyze.")]
    BlankInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_message() {
        assert_eq!(
            AnalyzeError::BlankInput.to_string(),
            "Please enter some text to analyze."
        );
    }
}
