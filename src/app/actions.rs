//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never touches the host directly. It returns a `Vec<Action>`
//! alongside the re-render flag, and the plugin shim (`main.rs`) turns each action
//! into Zellij API calls.
//!
//! ```
//! use memberdesk::app::Action;
//!
//! let action = Action::FetchRecords { url: "https://example.com/members.json".into() };
//! assert_ne!(action, Action::CloseFocus);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the one-shot HTTP GET for the member list.
    ///
    /// The host answers with a web request result event, which the shim maps back
    /// to `Event::FetchCompleted`.
    FetchRecords {
        /// Endpoint serving a JSON array of member records.
        url: String,
    },
}
