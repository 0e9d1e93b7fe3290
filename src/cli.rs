use clap::Parser;

/// Menukit demo - drives a settings-style menu tree in the terminal
#[derive(Parser, Debug)]
#[command(name = "menukit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Breadcrumb separator between menu names
    #[arg(long, default_value = "/")]
    pub separator: String,

    /// Header line shown above the home screen options
    #[arg(long)]
    pub header: Option<String>,

    /// Footer line shown below the home screen options
    #[arg(long)]
    pub footer: Option<String>,
}
