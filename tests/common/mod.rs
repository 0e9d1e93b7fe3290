//! Common test utilities for menukit integration tests.
//!
//! Provides `ScriptedDevice`: an `IoDevice` with pre-scripted input lines
//! and a shared log handle, so tests can assert on everything a traversal
//! did to the device (and in what order) after the menu has taken ownership
//! of it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use menukit::IoDevice;

/// One observable device call, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    Clear,
    Display(String),
    Read(String),
}

#[derive(Debug, Default)]
pub struct DeviceLog {
    pub events: Vec<DeviceEvent>,
}

impl DeviceLog {
    pub fn displays(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DeviceEvent::Display(content) => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, DeviceEvent::Clear))
            .count()
    }

    pub fn read_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, DeviceEvent::Read(_)))
            .count()
    }
}

/// Scripted stand-in for a terminal. Panics if the loop asks for more input
/// than the script provides, which turns a would-be hang into a test
/// failure.
pub struct ScriptedDevice {
    inputs: VecDeque<String>,
    log: Rc<RefCell<DeviceLog>>,
}

impl ScriptedDevice {
    pub fn new(inputs: &[&str]) -> (Self, Rc<RefCell<DeviceLog>>) {
        let log = Rc::new(RefCell::new(DeviceLog::default()));
        let device = Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            log: Rc::clone(&log),
        };
        (device, log)
    }
}

impl IoDevice for ScriptedDevice {
    fn display(&mut self, content: &str) {
        self.log
            .borrow_mut()
            .events
            .push(DeviceEvent::Display(content.to_string()));
    }

    fn accept_input(&mut self) -> String {
        let line = self.inputs.pop_front().expect("input script exhausted");
        self.log
            .borrow_mut()
            .events
            .push(DeviceEvent::Read(line.clone()));
        line
    }

    fn clear_display(&mut self) {
        self.log.borrow_mut().events.push(DeviceEvent::Clear);
    }
}
