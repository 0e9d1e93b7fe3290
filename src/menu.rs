//! Menu nodes and the navigation state machine.
//!
//! A `Menu` is one node of the tree. Exactly one node is constructed as
//! root; it owns the breadcrumb trail and the attached device for a
//! traversal. Descending into a submenu is a nested invocation of the same
//! loop, with the device and trail threaded down as borrows, so the call
//! chain itself is the active path through the tree.
//!
//! Results unwind differentially: `GoUp` pops one frame, `ReturnHome` pops
//! every frame down to the root, `ExitMenu` terminates the whole traversal.

use std::fmt;

use crate::action::{MenuAction, Outcome};
use crate::device::IoDevice;
use crate::error::{MenuError, MenuResult};
use crate::navigation::Trail;
use crate::registry::{EntryAction, OptionRegistry};

const PROMPT: &str = "Enter your choice : ";

/// A selectable text menu node.
pub struct Menu {
    name: String,
    is_root: bool,
    header: Option<String>,
    footer: Option<String>,
    options: OptionRegistry,
    device: Option<Box<dyn IoDevice>>,
    trail: Option<Trail>,
}

impl Menu {
    /// Creates a non-root node, addable as a submenu of another node.
    pub fn new(name: &str) -> Self {
        Self::with_root_flag(name, false)
    }

    /// Creates a root node. The root owns the trail, seeded with `name`,
    /// and is the only node `start()` may be invoked on.
    pub fn root(name: &str) -> Self {
        Self::with_root_flag(name, true)
    }

    fn with_root_flag(name: &str, is_root: bool) -> Self {
        let trail = is_root.then(|| {
            let mut trail = Trail::new();
            trail.set_root(name);
            trail
        });
        Self {
            name: name.to_string(),
            is_root,
            header: None,
            footer: None,
            options: OptionRegistry::new(),
            device: None,
            trail,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn options(&self) -> &OptionRegistry {
        &self.options
    }

    pub fn trail(&self) -> Option<&Trail> {
        self.trail.as_ref()
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Sets the line rendered between the trail and the option listing.
    ///
    /// A non-empty value sets or replaces the header; an empty or missing
    /// value clears it. The header starts cleared.
    pub fn set_header<'a>(&mut self, value: impl Into<Option<&'a str>>) {
        self.header = normalized(value.into());
    }

    /// Sets the line rendered after the option listing. Same clearing rule
    /// as [`Menu::set_header`].
    pub fn set_footer<'a>(&mut self, value: impl Into<Option<&'a str>>) {
        self.footer = normalized(value.into());
    }

    /// Changes the trail separator. Only meaningful on a root node; empty
    /// separators and non-root nodes ignore the call.
    pub fn set_separator(&mut self, separator: &str) {
        if let Some(trail) = self.trail.as_mut() {
            trail.set_separator(separator);
        }
    }

    /// Registers an entry at the end. Fails with `RootMenuAsSubmenu` when
    /// `action` carries a root node.
    pub fn add_option(&mut self, label: &str, action: EntryAction) -> MenuResult<usize> {
        let at = self.options.len();
        self.add_option_at(label, action, at)
    }

    /// Registers an entry at `at` (any index past the end appends).
    pub fn add_option_at(
        &mut self,
        label: &str,
        action: EntryAction,
        at: usize,
    ) -> MenuResult<usize> {
        if let EntryAction::Submenu(child) = &action {
            if child.is_root {
                return Err(MenuError::RootMenuAsSubmenu);
            }
        }
        Ok(self.options.insert(label, action, at))
    }

    /// Registers a leaf action at the end.
    pub fn add_handler(&mut self, label: &str, action: impl MenuAction + 'static) -> usize {
        self.options.append(label, EntryAction::handler(action))
    }

    /// Registers a labeled entry that does nothing when selected.
    pub fn add_placeholder(&mut self, label: &str) -> usize {
        self.options.append(label, EntryAction::None)
    }

    /// Registers `child` at the end, labeled with its own name.
    pub fn add_submenu(&mut self, child: Menu) -> MenuResult<usize> {
        let at = self.options.len();
        self.add_submenu_at(child, at)
    }

    /// Registers `child` at `at`, labeled with its own name.
    pub fn add_submenu_at(&mut self, child: Menu, at: usize) -> MenuResult<usize> {
        if child.is_root {
            return Err(MenuError::RootMenuAsSubmenu);
        }
        let label = child.name.clone();
        Ok(self.options.insert(&label, EntryAction::Submenu(child), at))
    }

    /// Returns the submenu registered at `index`.
    pub fn submenu_at(&self, index: usize) -> MenuResult<&Menu> {
        match self.options.get(index)? {
            EntryAction::Submenu(menu) => Ok(menu),
            _ => Err(MenuError::SubmenuDoesNotExist),
        }
    }

    /// Mutable variant of [`Menu::submenu_at`], for editing nested menus
    /// after registration.
    pub fn submenu_at_mut(&mut self, index: usize) -> MenuResult<&mut Menu> {
        match self.options.get_mut(index)? {
            EntryAction::Submenu(menu) => Ok(menu),
            _ => Err(MenuError::SubmenuDoesNotExist),
        }
    }

    /// Removes the entry at `index`. Returns `false` instead of surfacing
    /// `InvalidIndex`.
    pub fn remove_entry(&mut self, index: usize) -> bool {
        self.options.remove_at(index).is_ok()
    }

    /// Stores the device used for the next traversal started on this node.
    pub fn attach_device(&mut self, device: impl IoDevice + 'static) {
        self.device = Some(Box::new(device));
    }

    /// Runs the interactive loop until it terminates at this node.
    ///
    /// Only a root node with a device attached may start. The node stays
    /// usable afterwards: trail, registry, and device all survive the call,
    /// so `start()` may be invoked again.
    pub fn start(&mut self) -> MenuResult<()> {
        if !self.is_root {
            return Err(MenuError::ActionOnlyForRootMenu);
        }
        let mut device = self.device.take().ok_or(MenuError::IoDeviceNotSet)?;
        let mut trail = self.trail.take().unwrap_or_else(|| {
            let mut seeded = Trail::new();
            seeded.set_root(&self.name);
            seeded
        });
        self.run(device.as_mut(), &mut trail);
        self.trail = Some(trail);
        self.device = Some(device);
        Ok(())
    }

    /// One frame of the render/input/dispatch loop.
    fn run(&mut self, device: &mut dyn IoDevice, trail: &mut Trail) -> Outcome {
        loop {
            device.clear_display();

            let mut screen = self.compose(trail);
            if self.options.is_empty() {
                // Option-less nodes are display-only screens.
                device.display(&screen);
                return Outcome::Success;
            }
            screen.push('\n');
            screen.push_str(PROMPT);
            device.display(&screen);

            let input = device.accept_input();
            let Some(index) = parse_choice(&input, self.options.len()) else {
                continue;
            };
            let Ok(action) = self.options.get_mut(index) else {
                continue;
            };
            let result = match action {
                EntryAction::None => continue,
                EntryAction::Handler(handler) => handler.invoke(),
                EntryAction::Submenu(child) => {
                    trail.push_segment(&child.name);
                    child.run(device, trail)
                }
            };
            match result {
                Outcome::Success => continue,
                Outcome::ExitMenu => {
                    if self.is_root {
                        device.clear_display();
                    }
                    return Outcome::ExitMenu;
                }
                Outcome::GoUp => {
                    if self.is_root {
                        continue;
                    }
                    trail.pop_segment();
                    return Outcome::Success;
                }
                Outcome::ReturnHome => {
                    if self.is_root {
                        continue;
                    }
                    trail.collapse_to_root();
                    return Outcome::ReturnHome;
                }
            }
        }
    }

    /// Composes the screen: trail, header, option listing, footer, joined
    /// by single line breaks. The prompt is appended by the caller.
    fn compose(&self, trail: &Trail) -> String {
        let mut screen = String::new();
        screen.push_str(trail.render());
        if let Some(header) = &self.header {
            screen.push('\n');
            screen.push_str(header);
        }
        if !self.options.is_empty() {
            screen.push('\n');
            screen.push_str(&self.options.render());
        }
        if let Some(footer) = &self.footer {
            screen.push('\n');
            screen.push_str(footer);
        }
        screen
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("name", &self.name)
            .field("is_root", &self.is_root)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn normalized(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn parse_choice(input: &str, len: usize) -> Option<usize> {
    let value: usize = input.parse().ok()?;
    let index = value.checked_sub(1)?;
    (index < len).then_some(index)
}
