use super::*;
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DiagnosticLevel {
    Warn,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warn => write!(f, "warn"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

#[derive(Debug)]
pub(crate) struct DiagnosticState {
    logs: VecDeque<Diagnostic>,
    log_limit: usize,
    to_stderr: bool,
}

impl Default for DiagnosticState {
    fn default() -> Self {
        Self {
            logs: VecDeque::new(),
            log_limit: DEFAULT_DIAGNOSTIC_LOG_LIMIT,
            // `tracing` already carries every warning.
            to_stderr: false,
        }
    }
}

impl DiagnosticState {
    pub(crate) fn warn(&mut self, message: String) {
        tracing::warn!(target: "select_swap", "{message}");
        self.push(DiagnosticLevel::Warn, message);
    }

    fn push(&mut self, level: DiagnosticLevel, message: String) {
        let diagnostic = Diagnostic { level, message };
        if self.to_stderr {
            eprintln!("{diagnostic}");
        }
        while self.logs.len() >= self.log_limit {
            self.logs.pop_front();
        }
        self.logs.push_back(diagnostic);
    }

    pub(crate) fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.logs).into()
    }

    pub(crate) fn set_stderr(&mut self, enabled: bool) {
        self.to_stderr = enabled;
    }

    pub(crate) fn set_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::InvalidArgument(
                "set_diagnostic_log_limit requires at least 1 entry".into(),
            ));
        }
        self.log_limit = max_entries;
        while self.logs.len() > self.log_limit {
            self.logs.pop_front();
        }
        Ok(())
    }
}
