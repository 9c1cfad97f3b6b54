/// Where the application sends the user once the session stops being
/// valid. The gateway receives one of these at construction, so the
/// forced-redirect policy is an explicit collaborator that tests can
/// substitute, not a hidden global hook.
pub trait Navigator: Send + Sync {
    /// Abandon whatever flow is in progress and return to the
    /// unauthenticated entry point.
    fn to_login(&self);
}

/// The CLI's navigator. A terminal has no login page to swap in, so the
/// redirect becomes a notice on stderr; the expiry itself is expected
/// behavior, not an error.
pub struct LoginPrompt;

impl Navigator for LoginPrompt {
    fn to_login(&self) {
        eprintln!("Session expired. Run `keygate login <username>` to sign in again.");
    }
}
