// SPDX-License-Identifier: MPL-2.0
use crate::dom::NodeId;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Storage(String),
    I18n(String),
    Dom(DomError),
}

/// Failures raised by a [`crate::dom::Document`] when an operation targets a
/// node it cannot act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomError {
    /// The handle was never issued by this document.
    UnknownNode(NodeId),

    /// The node exists but is no longer part of the tree.
    Detached(NodeId),

    /// A node cannot be appended under itself or one of its descendants.
    HierarchyRequest(NodeId),
}

impl DomError {
    /// Returns the node the failed operation was aimed at.
    pub fn node(&self) -> NodeId {
        match self {
            DomError::UnknownNode(node)
            | DomError::Detached(node)
            | DomError::HierarchyRequest(node) => *node,
        }
    }
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::UnknownNode(node) => write!(f, "unknown node {}", node),
            DomError::Detached(node) => write!(f, "node {} is detached", node),
            DomError::HierarchyRequest(node) => {
                write!(f, "node {} cannot contain its own ancestor", node)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
            Error::I18n(e) => write!(f, "I18n Error: {}", e),
            Error::Dom(e) => write!(f, "DOM Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DomError> for Error {
    fn from(err: DomError) -> Self {
        Error::Dom(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn dom_error_converts_and_keeps_node() {
        let node = NodeId::from_raw(7);
        let err: Error = DomError::Detached(node).into();
        assert_eq!(format!("{}", err), "DOM Error: node #7 is detached");
        match err {
            Error::Dom(inner) => assert_eq!(inner.node(), node),
            _ => panic!("expected Dom variant"),
        }
    }

    #[test]
    fn toml_parse_error_maps_to_config() {
        let parsed: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
