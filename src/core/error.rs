use thiserror::Error;

/// A sound could not be started. Recoverable: the rest of the page keeps working.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaybackError {
    #[error("could not create audio element for {path}: {reason}")]
    Create { path: String, reason: String },
    #[error("playback of {path} was rejected: {reason}")]
    Rejected { path: String, reason: String },
    #[error("no tile for glyph {0:?}")]
    UnknownGlyph(char),
    #[error("alphabet is empty")]
    Empty,
}

/// A persisted preference could not be understood. Never propagated past load.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PreferenceError {
    #[error("unparseable volume {0:?}")]
    Volume(String),
    #[error("unknown theme name {0:?}")]
    Theme(String),
}
