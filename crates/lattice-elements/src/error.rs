//! Definition Errors

/// Errors raised while defining a custom element kind.
///
/// `E` is the tree collaborator's own error type; failures it raises during
/// extension probing surface through [`DefineError::Tree`] with their
/// identity intact.
#[derive(Debug, thiserror::Error)]
pub enum DefineError<E> {
    /// The tag name does not match the custom element name grammar
    #[error("the custom element type name {0:?} is invalid")]
    InvalidName(String),

    /// The tag name was registered before
    #[error("the custom element type {0:?} is already defined")]
    AlreadyDefined(String),

    /// The extension target is not a plausible native tag name
    #[error("type extensions for non-native element {0:?} are not allowed")]
    ExtensionNotNative(String),

    /// The extension target resolves to the unknown-element fallback
    #[error("type extensions for unknown element {0:?} are not allowed")]
    ExtensionUnknown(String),

    /// The tree collaborator failed while probing the extension target
    #[error(transparent)]
    Tree(E),
}
