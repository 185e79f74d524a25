use thiserror::Error;

/// Failure modes of a single weather lookup.
///
/// Both variants are terminal for the request: no retry, no backoff. The two
/// kinds stay distinguishable here even though the bot shows a generic message
/// for each, so tests can assert on the exact failure path.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The provider could not be reached, the response body could not be read,
    /// or the provider answered with a non-success status. The payload carries
    /// diagnostic detail for logs only and must never be shown to users.
    #[error("weather provider request failed: {0}")]
    TransportFailure(String),

    /// The provider answered, but the payload is not the expected shape: not
    /// valid JSON, missing the temperature section, or an empty condition list.
    #[error("weather provider returned an unusable payload")]
    InvalidPayload,
}
