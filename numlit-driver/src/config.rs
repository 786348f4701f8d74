use clap::ValueEnum;

/// How classified literals are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human readable label per literal
    Text,
    /// One JSON object per literal
    Json,
}

/// Settings for a driver session
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub format: OutputFormat,
    /// Printed before each line is read in interactive mode; empty disables it
    pub prompt: String,
    /// Attach the rejection reason to invalid literals
    pub explain: bool,
    /// Print per-kind counts once input is exhausted
    pub summary: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            prompt: ">>".to_string(),
            explain: false,
            summary: false,
        }
    }
}
