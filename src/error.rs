//! Error types for menukit
//!
//! Uses `thiserror` for library errors. Configuration and registration
//! mistakes surface here; user input inside the interactive loop never does.

use thiserror::Error;

/// Result type alias for menukit operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menukit operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// `start()` was invoked on a node that is not a root menu
    #[error("start() is only available on a root menu")]
    ActionOnlyForRootMenu,

    /// `start()` was invoked before a device was attached
    #[error("no I/O device attached to the root menu")]
    IoDeviceNotSet,

    /// An index-based registry operation was given an out-of-range index
    #[error("invalid option index {0}")]
    InvalidIndex(usize),

    /// A root menu was registered as a submenu of another menu
    #[error("a root menu cannot be added as a submenu")]
    RootMenuAsSubmenu,

    /// The entry at the requested index is not a submenu
    #[error("option at the requested index is not a submenu")]
    SubmenuDoesNotExist,
}
