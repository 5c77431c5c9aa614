use std::process::ExitCode;

use anvil::presentation::cli::CliApp;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Parse arguments, install logging and run the selected command
    let app = CliApp::new();
    app.run().await
}
