use thiserror::Error;

/// Why a resolution failed. Every variant is recoverable at the resolver
/// boundary: the caller can retry with corrected sources, fall back to the
/// defaults alone, or surface a misconfiguration message to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    #[error("merged configuration has no segments")]
    EmptySegments,

    #[error("probability must be set, and non-negative, on every segment or on none")]
    InconsistentProbability,

    #[error("invalid radii: inner {inner} must be non-negative and smaller than outer {outer}")]
    InvalidRadii { inner: f64, outer: f64 },

    #[error("malformed {shape} source: {detail}")]
    MalformedSource {
        shape: &'static str,
        detail: String,
    },
}

impl ResolutionError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            ResolutionError::EmptySegments => "EMPTY_SEGMENTS",
            ResolutionError::InconsistentProbability => "INCONSISTENT_PROBABILITY",
            ResolutionError::InvalidRadii { .. } => "INVALID_RADII",
            ResolutionError::MalformedSource { .. } => "MALFORMED_SOURCE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_codes_are_stable() {
        assert_eq!(ResolutionError::EmptySegments.code(), "EMPTY_SEGMENTS");
        assert_eq!(
            ResolutionError::InvalidRadii { inner: 100.0, outer: 50.0 }.code(),
            "INVALID_RADII"
        );
    }
}
