use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "calc",
    version,
    about = "Command-line consumer for the calculator producer API"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Validate the interaction against the registered contract
    #[arg(long, global = true)]
    pub validate: bool,

    /// Parse the response body structurally instead of scanning it
    #[arg(long, global = true)]
    pub strict_json: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Multiply two numbers via the producer
    #[command(allow_negative_numbers = true)]
    Multiply { x: f64, y: f64 },

    /// Divide two numbers via the producer
    #[command(allow_negative_numbers = true)]
    Divide { x: f64, y: f64 },
}
