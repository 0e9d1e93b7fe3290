//! Menukit - composable text menus for line-oriented terminals
//!
//! Menukit renders a tree of selectable text menus over a blocking terminal
//! and drives navigation between levels: enter a submenu, go up one level,
//! jump back to the root, or exit the whole traversal. Menus are plain
//! values; one node is marked as root, gets a device attached, and `start()`
//! runs the interactive loop until the user exits.

pub mod action;
pub mod device;
pub mod error;
pub mod menu;
pub mod navigation;
pub mod registry;

// Re-exports for convenience
pub use action::{MenuAction, Outcome};
pub use device::{ConsoleDevice, IoDevice};
pub use error::{MenuError, MenuResult};
pub use menu::Menu;
pub use navigation::Trail;
pub use registry::{EntryAction, OptionRegistry};
