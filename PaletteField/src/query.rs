//! Color query endpoint - refreshes include/exclude choices for a source
//!
//! Request: `{ "source": "settings" | "custom" | "both", "nonce": "..." }`
//! Response: `{ "success": true, "data": { "colors": [{ "id", "text" }] } }`
//! or `{ "success": false, "data": { "message": "..." } }`.

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use themepalette::palette::PaletteSource;
use themepalette::theme::PaletteProvider;

use crate::field::ColorChoice;

/// The authenticated party calling the endpoint
pub trait Caller {
    /// Whether the caller may edit content
    fn can_edit_posts(&self) -> bool;
    /// Whether `nonce` is valid for this caller
    fn verify_nonce(&self, nonce: &str) -> bool;
}

/// Incoming request
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ColorQuery {
    /// Source name; `settings` when omitted
    #[serde(default)]
    pub source: Option<String>,
    /// Checked only when present
    #[serde(default)]
    pub nonce: Option<String>,
}

impl ColorQuery {
    /// Request for `source` without a nonce
    pub fn for_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            nonce: None,
        }
    }

    #[must_use]
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }
}

/// Rejections, reported to the caller as `{ "message": ... }`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Insufficient permissions")]
    Forbidden,

    #[error("Invalid nonce")]
    InvalidNonce,

    #[error("Invalid source")]
    InvalidSource(String),
}

/// Successful payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorList {
    pub colors: Vec<ColorChoice>,
}

/// Envelope returned to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResponse {
    Success(ColorList),
    Error(QueryError),
}

impl QueryResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<Result<ColorList, QueryError>> for QueryResponse {
    fn from(result: Result<ColorList, QueryError>) -> Self {
        match result {
            Ok(list) => Self::Success(list),
            Err(e) => Self::Error(e),
        }
    }
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    success: bool,
    data: &'a T,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl Serialize for QueryResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(list) => Envelope {
                success: true,
                data: list,
            }
            .serialize(serializer),
            Self::Error(e) => Envelope {
                success: false,
                data: &ErrorBody {
                    message: e.to_string(),
                },
            }
            .serialize(serializer),
        }
    }
}

/// Serves the full palette of a source as picker choices
#[derive(Debug, Clone)]
pub struct ColorQueryEndpoint<P> {
    provider: P,
}

impl<P: PaletteProvider> ColorQueryEndpoint<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Check the caller and request, then list the source's colors
    pub fn query(
        &self,
        caller: &impl Caller,
        request: &ColorQuery,
    ) -> Result<ColorList, QueryError> {
        if !caller.can_edit_posts() {
            return Err(QueryError::Forbidden);
        }

        if let Some(nonce) = &request.nonce
            && !caller.verify_nonce(nonce.trim())
        {
            return Err(QueryError::InvalidNonce);
        }

        let source = match request.source.as_deref().map(str::trim) {
            None => PaletteSource::default(),
            Some(name) => name
                .parse::<PaletteSource>()
                .map_err(|_| QueryError::InvalidSource(name.to_string()))?,
        };

        let colors: Vec<ColorChoice> = self
            .provider
            .palette(source)
            .iter()
            .map(ColorChoice::from)
            .collect();
        tracing::debug!("Color query for '{}' returned {} colors", source, colors.len());

        Ok(ColorList { colors })
    }

    /// [`query`](Self::query) wrapped in the response envelope
    pub fn handle(&self, caller: &impl Caller, request: &ColorQuery) -> QueryResponse {
        let result = self.query(caller, request);
        if let Err(e) = &result {
            tracing::warn!("Color query rejected: {}", e);
        }
        result.into()
    }
}
