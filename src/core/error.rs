use std::fmt;

use thiserror::Error;

/// Which way a quote is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchDirection {
    /// Original-language quote projected onto a gateway-language text.
    OriginalToGateway,
    /// Gateway-language quote projected onto the original-language text.
    GatewayToOriginal,
}

impl MatchDirection {
    pub fn from_source(source_is_orig_lang: bool) -> Self {
        if source_is_orig_lang {
            MatchDirection::OriginalToGateway
        } else {
            MatchDirection::GatewayToOriginal
        }
    }

    pub fn source_is_orig_lang(self) -> bool {
        self == MatchDirection::OriginalToGateway
    }

    fn no_groups_message(self) -> &'static str {
        match self {
            MatchDirection::OriginalToGateway => {
                "nothing in the target text is aligned to this source quote"
            }
            MatchDirection::GatewayToOriginal => {
                "cannot find aligned words in the original-language verse"
            }
        }
    }
}

impl fmt::Display for MatchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchDirection::OriginalToGateway => write!(f, "original → gateway"),
            MatchDirection::GatewayToOriginal => write!(f, "gateway → original"),
        }
    }
}

/// Failure of a single quote resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("empty source quote (or occurrence 0)")]
    EmptySourceQuote,

    #[error("occurrence {occurrence} not found for \"{group}\" after position {position}")]
    OccurrenceNotFound {
        group: String,
        occurrence: i64,
        position: usize,
    },

    #[error("{}", .direction.no_groups_message())]
    NoTargetGroupsFound { direction: MatchDirection },

    #[error("invalid reference \"{reference}\": {reason}")]
    InvalidReference { reference: String, reason: String },
}

impl ResolveError {
    pub fn invalid_reference(reference: &str, reason: impl Into<String>) -> Self {
        ResolveError::InvalidReference {
            reference: reference.to_string(),
            reason: reason.into(),
        }
    }
}
