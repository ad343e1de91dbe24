//! Session and ScreenDefinition
//!
//! A `ScreenDefinition` is the read-only shape of one menu. A `Session` is
//! a user's live binding to an open menu. Both are owned by the menu
//! system; the engine receives copies through the `Menus` port.

use super::arguments::Arguments;
use shared::PlayerId;

/// One navigable menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenDefinition {
    name: String,
    parameters: Vec<String>,
}

impl ScreenDefinition {
    /// Create a screen without declared parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Builder: declare parameters, in positional order
    pub fn with_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}

/// A user's open menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Who has the menu open
    pub viewer: PlayerId,
    /// Name of the open screen
    pub screen: String,
    /// Bound parameter values
    pub arguments: Arguments,
    /// User whose placeholders are rendered instead of the viewer's
    pub placeholder_identity: Option<PlayerId>,
}

impl Session {
    pub fn new(viewer: PlayerId, screen: impl Into<String>) -> Self {
        Self {
            viewer,
            screen: screen.into(),
            arguments: Arguments::new(),
            placeholder_identity: None,
        }
    }

    /// Builder: set bound arguments
    pub fn with_arguments(mut self, arguments: Arguments) -> Self {
        self.arguments = arguments;
        self
    }

    /// Builder: set the placeholder identity
    pub fn with_placeholder_identity(mut self, identity: PlayerId) -> Self {
        self.placeholder_identity = Some(identity);
        self
    }
}
