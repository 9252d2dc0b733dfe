/// Errors from the engine's ambient concerns (config and session storage).
///
/// Scoring never fails: rejected strokes are reported as
/// [`ScoreOutcome`](crate::scoring::ScoreOutcome) variants instead.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The game configuration JSON could not be parsed.
    #[error("invalid game config: {0}")]
    Config(#[from] serde_json::Error),
    /// The session store is unavailable or rejected a read/write.
    #[error("session storage failed: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_wraps_serde() {
        let err: EngineError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid game config"));
    }

    #[test]
    fn storage_error_carries_message() {
        let err = EngineError::Storage("quota exceeded".into());
        assert_eq!(err.to_string(), "session storage failed: quota exceeded");
    }
}
