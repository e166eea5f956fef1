/// Custom actions for Activity entities.
///
/// Each action is one enrollment transition for a single email.
#[derive(Debug, Clone)]
pub enum RosterAction {
    /// Appends the email to the roster.
    ///
    /// # Errors
    /// Fails if the email is already enrolled.
    Signup(String),
    /// Removes the email from the roster, keeping the order of the rest.
    ///
    /// # Errors
    /// Fails if the email is not enrolled.
    Unregister(String),
}

/// Results from RosterActions - variants match 1:1 with RosterAction
#[derive(Debug, Clone, PartialEq)]
pub enum RosterActionResult {
    SignedUp,
    Unregistered,
}
