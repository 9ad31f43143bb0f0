use thiserror::Error;

/// Errors surfaced by playback and its surrounding application.
///
/// `UserInterrupt` is an expected outcome, not a crash: it maps to exit
/// code 130 and a friendly message. Everything else maps to exit code 1.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Demo interrupted by user")]
    UserInterrupt,

    #[error("Renderer error: {0}")]
    Renderer(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DemoError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_INTERRUPTED: u8 = 130;

/// Check if an anyhow error is a user interrupt rather than a failure
pub fn is_interrupt_error(e: &anyhow::Error) -> bool {
    matches!(e.downcast_ref::<DemoError>(), Some(DemoError::UserInterrupt))
}

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if is_interrupt_error(e) {
        return EXIT_INTERRUPTED;
    }
    EXIT_ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_user_interrupt() {
        let err: anyhow::Error = DemoError::UserInterrupt.into();
        assert_eq!(get_exit_code(&err), EXIT_INTERRUPTED);
        assert!(is_interrupt_error(&err));
    }

    #[test]
    fn test_exit_code_renderer_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: anyhow::Error = DemoError::from(io).into();
        assert_eq!(
            get_exit_code(&err),
            EXIT_ERROR,
            "A broken output stream should yield exit code 1"
        );
        assert!(!is_interrupt_error(&err));
    }

    #[test]
    fn test_exit_code_invalid_input_and_config() {
        let cases = vec![
            DemoError::InvalidInput("script is empty".to_string()),
            DemoError::Config("width must be positive".to_string()),
        ];
        for demo_err in cases {
            let display = demo_err.to_string();
            let err: anyhow::Error = demo_err.into();
            assert_eq!(
                get_exit_code(&err),
                EXIT_ERROR,
                "'{}' should yield exit code 1",
                display
            );
        }
    }

    #[test]
    fn test_exit_code_interrupt_behind_context() {
        let err = anyhow::Error::from(DemoError::UserInterrupt).context("while playing");
        assert_eq!(get_exit_code(&err), EXIT_INTERRUPTED);
    }

    #[test]
    fn test_exit_code_plain_anyhow_default() {
        let err = anyhow::anyhow!("something completely unexpected happened");
        assert_eq!(get_exit_code(&err), EXIT_ERROR);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DemoError::UserInterrupt.to_string(),
            "Demo interrupted by user"
        );
        assert_eq!(
            DemoError::InvalidInput("script is empty".into()).to_string(),
            "Invalid input: script is empty"
        );
    }

    #[test]
    fn test_exit_code_constants() {
        assert_eq!(EXIT_SUCCESS, 0);
        assert_eq!(EXIT_ERROR, 1);
        assert_eq!(EXIT_INTERRUPTED, 130);
    }
}
