use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct MandelbrotExplorerArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Render a single frame of the Mandelbrot set from a parameter file.
    Render(ParameterFilePath),
    /// Render a horizontal preview strip of a palette.
    Swatch(ParameterFilePath),
}

#[derive(Debug, Args)]
pub struct ParameterFilePath {
    pub params_path: String,

    /// Place the output in a timestamped subdirectory.
    #[clap(long, short)]
    pub date_time_out: bool,
}
