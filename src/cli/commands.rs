// CLI command definitions

use super::helm::{InspectCommand, RenderCommand, VersionCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "chart-render",
    version,
    about = "Helm chart template rendering tool",
    long_about = "A standalone CLI tool for rendering and inspecting Helm chart templates across Helm 2 and Helm 3"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render a chart with `helm template` (detects the helm version if not pinned)
    Render(RenderCommand),

    /// Detect and show the installed helm major version
    Version(VersionCommand),

    /// Summarize the resources in an already-rendered manifest file
    Inspect(InspectCommand),
}
