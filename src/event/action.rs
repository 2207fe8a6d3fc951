use serde::Deserialize;

/// Report posted by a workflow step to the actions endpoint.
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct ActionReport {
    /// The event that ran the action
    pub event: String,
    pub status: String,
}
