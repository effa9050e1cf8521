use http::StatusCode;

/// Trait for domain errors that map onto HTTP responses
///
/// Feature crates implement this on their error enums so the HTTP
/// layer can build a response without the domain types depending on
/// a specific web framework.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error category (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    ///
    /// Defaults to the `Display` output; implementors override it for
    /// variants whose details must not leak.
    fn client_message(&self) -> String {
        self.to_string()
    }
}
