use thiserror::Error;

/// Internal issues indicating unexpected stored data or possible bugs.
///
/// All variants result in a 500 Internal Server Error with a generic message
/// returned to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// The stored social column of a user is not valid JSON.
    #[error("Failed to decode social links of user {user_id}: {source}")]
    MalformedSocial {
        /// ID of the user whose row holds the bad value
        user_id: i32,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// Social links could not be encoded for storage.
    #[error("Failed to encode social links: {0}")]
    SocialEncoding(#[source] serde_json::Error),
}
