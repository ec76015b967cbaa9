use std::io;

/// Failures while running the HTTP server
#[derive(Debug)]
pub enum ServerError {
    Bind { addr: String, source: io::Error },
    Serve(io::Error),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Bind { addr, source } => write!(f, "Failed to bind to {}: {}", addr, source),
            ServerError::Serve(e) => write!(f, "Server error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Bind { source, .. } => Some(source),
            ServerError::Serve(e) => Some(e),
        }
    }
}
