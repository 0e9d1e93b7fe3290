//! Menukit demo binary
//!
//! Assembles a settings-style menu tree (Home -> Wifi -> Network) with the
//! full spread of entry kinds - navigation handlers, a placeholder, a slow
//! worker, nested submenus - and runs it on the console.

mod cli;

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use menukit::{ConsoleDevice, EntryAction, Menu, Outcome};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut home = Menu::root("Home");
    home.set_separator(&cli.separator);
    if let Some(header) = cli.header.as_deref() {
        home.set_header(header);
    }
    if let Some(footer) = cli.footer.as_deref() {
        home.set_footer(footer);
    }

    add_navigation_handlers(&mut home);
    home.add_placeholder("Do nothing");
    home.add_handler("Simulate work", simulate_work);

    let mut network = Menu::new("Network");
    add_navigation_handlers(&mut network);
    network.add_option_at("Simulate work", EntryAction::handler(simulate_work), 1)?;

    let mut wifi = Menu::new("Wifi");
    add_navigation_handlers(&mut wifi);
    wifi.add_submenu(network)?;

    home.add_submenu(wifi)?;

    home.attach_device(ConsoleDevice::new());
    home.start()?;
    Ok(())
}

fn add_navigation_handlers(menu: &mut Menu) {
    menu.add_handler("Back", || Outcome::GoUp);
    menu.add_handler("Return home", || Outcome::ReturnHome);
    menu.add_handler("Exit", || Outcome::ExitMenu);
}

fn simulate_work() -> Outcome {
    println!("Processing started ...");
    thread::sleep(Duration::from_secs(2));
    println!("Processing finished");
    Outcome::Success
}
