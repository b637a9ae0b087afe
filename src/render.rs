use std::io::Write;
use std::process::{Command, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to run renderer: {0}")]
    Io(#[from] std::io::Error),
    #[error("Renderer exited with {0}")]
    Failed(std::process::ExitStatus),
}

/// Turns report markup into a binary document. Implemented by external
/// conversion tools; export keeps working without one.
pub trait DocumentRenderer {
    fn render(&self, markup: &str) -> Result<Vec<u8>, RenderError>;
}

/// Renders HTML to PDF by piping it through the `wkhtmltopdf` binary.
#[derive(Debug, Default)]
pub struct WkhtmltopdfRenderer;

impl DocumentRenderer for WkhtmltopdfRenderer {
    fn render(&self, markup: &str) -> Result<Vec<u8>, RenderError> {
        let mut child = Command::new("wkhtmltopdf")
            .args(["--log-level", "none", "-", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // stdin is piped, so take() cannot return None here
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(markup.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(RenderError::Failed(output.status));
        }
        Ok(output.stdout)
    }
}
