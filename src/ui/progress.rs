use crate::ui::icons::{CHECK, CROSS, FILE_NEW, SPARKLE, WARNING};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Terminal feedback for one generation run, rendered on stderr.
///
/// A single spinner is shown while a strategy runs; stdout stays free for
/// the rendered keywords so output can be piped.
pub struct GenerationUI {
    spinner: ProgressBar,
    verbose: bool,
}

impl GenerationUI {
    pub fn new(verbose: bool) -> Self {
        let spinner_style = ProgressStyle::default_spinner()
            .template("{prefix:.bold.dim} {spinner} {msg}")
            .expect("progress bar template is a valid static string");

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style);
        spinner.set_prefix("keysmith");

        Self { spinner, verbose }
    }

    /// Start the spinner for a strategy.
    ///
    /// Enables a 100 ms tick. Call [`Self::finish_success`] or
    /// [`Self::finish_error`] to stop it.
    pub fn start(&self, strategy: &str, base_phrase: &str) {
        self.spinner.set_message(format!(
            "Generating keywords for {} {}",
            style(base_phrase).cyan(),
            style(format!("({})", strategy)).dim()
        ));
        self.spinner.enable_steady_tick(Duration::from_millis(100));
    }

    pub fn finish_success(&self, produced: usize, requested: usize) {
        let msg = if produced < requested {
            format!(
                "{}Generated {} of {} requested keywords {}",
                WARNING,
                style(produced).yellow(),
                requested,
                style("(fewer unique keywords available)").dim()
            )
        } else {
            format!("{}Generated {} keywords", CHECK, style(produced).green())
        };
        self.spinner.finish_with_message(msg);
    }

    pub fn finish_error(&self, msg: &str) {
        self.spinner
            .finish_with_message(format!("{}Generation failed: {}", CROSS, style(msg).red()));
    }

    /// Note a written export file.
    pub fn exported(&self, path: &Path, count: usize) {
        eprintln!(
            "{}Wrote {} keywords to {}",
            FILE_NEW,
            count,
            style(path.display()).bold()
        );
    }

    /// Print a dim detail line in verbose mode only.
    pub fn detail(&self, msg: &str) {
        if self.verbose {
            eprintln!("  {} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn hint(&self, msg: &str) {
        eprintln!("{}{}", SPARKLE, style(msg).dim());
    }
}
