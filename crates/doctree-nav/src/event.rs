//! Navigation events: the vocabulary a UI shell routes into
//! [`NavigationController::apply`](crate::NavigationController::apply).
//!
//! Shells map their own input (keys, clicks, text fields) onto these so the
//! controller never depends on a particular front end.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Open the node with this id.
    Expand(String),
    /// Close the node with this id.
    Collapse(String),
    /// Flip the node's expansion.
    Toggle(String),
    /// Open every node that has children.
    ExpandAll,
    /// Close everything.
    CollapseAll,
    /// Replace the active search query.
    SetQuery(String),
    /// Drop the active query and its matches.
    Reset,
}
