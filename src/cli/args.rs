use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "huddle")]
#[command(about = "Session interaction engine for the Huddle meeting client", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print version information
    Version,
    /// List the keyboard shortcuts the session router handles
    Shortcuts,
}
