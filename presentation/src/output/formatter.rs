//! Output formatter trait

use assembly_application::PlanAssemblyOutput;
use assembly_domain::OutputFormat;

/// Trait for formatting planning results
pub trait OutputFormatter {
    /// Format every step with interactions and agent addresses
    fn format(&self, output: &PlanAssemblyOutput) -> String;

    /// Format as JSON
    fn format_json(&self, output: &PlanAssemblyOutput) -> String;

    /// Format total cost and one line per step
    fn format_summary(&self, output: &PlanAssemblyOutput) -> String;

    /// Dispatch on the configured format
    fn render(&self, output: &PlanAssemblyOutput, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(output),
            OutputFormat::Summary => self.format_summary(output),
            OutputFormat::Json => self.format_json(output),
        }
    }
}
