//! Social graph abstraction

use crate::error::Result;
use crate::types::{SocialEvent, SocialUser};

/// Read access to a third-party social graph.
///
/// Calls go over the network and can be slow or fail outright. Callers must
/// never hold a party lock across them.
pub trait SocialGraph: Send + Sync {
    /// Events the token holder has been invited to.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network request fails
    /// - Token is rejected
    /// - Response is malformed
    fn user_events(
        &self,
        access_token: &str,
    ) -> impl std::future::Future<Output = Result<Vec<SocialEvent>>> + Send;

    /// Resolve the identity behind an access token.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network request fails
    /// - Token is rejected
    /// - Response is malformed
    fn resolve_identity(
        &self,
        access_token: &str,
    ) -> impl std::future::Future<Output = Result<SocialUser>> + Send;
}
