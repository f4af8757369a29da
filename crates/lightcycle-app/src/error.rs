use std::io;

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Config(String),
    TerminalTooSmall {
        needed: (u16, u16),
        actual: (u16, u16),
    },
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "terminal I/O error: {e}"),
            Self::Config(m) => write!(f, "configuration error: {m}"),
            Self::TerminalTooSmall { needed, actual } => write!(
                f,
                "terminal is {}x{}, need at least {}x{} (shrink the canvas or enlarge the window)",
                actual.0, actual.1, needed.0, needed.1
            ),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
