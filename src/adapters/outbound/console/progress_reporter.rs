use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Everything goes to stderr so stdout only carries the run summary. The
/// merge phase draws an indicatif bar; `quiet` suppresses routine messages
/// but never warnings or errors.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: false,
        }
    }

    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::new()
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        // The template is a constant; a parse failure only loses the styling.
        if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            pb.set_style(style.progress_chars("=>-"));
        }
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.finish_progress_bar();
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.finish_progress_bar();
        }
    }

    fn report_warning(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            // Printing through the bar keeps it from being torn
            Some(pb) => pb.suspend(|| eprintln!("{}", message.yellow())),
            None => eprintln!("{}", message.yellow()),
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message.red());
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        if !self.quiet {
            eprintln!("{}", message.green());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Scanning");
        reporter.report_progress(1, 2, Some("a.sysml"));
        reporter.report_warning("Skipping b.sysml");
        reporter.report_progress(2, 2, Some("b.sysml"));
        assert!(reporter.progress_bar.borrow().is_none());
        reporter.report_error("failed");
        reporter.report_completion("done");
    }

    #[test]
    fn test_quiet_reporter_never_creates_bar() {
        let reporter = StderrProgressReporter::quiet();
        reporter.report_progress(1, 3, None);
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_progress_reporter_default() {
        let reporter = StderrProgressReporter::default();
        assert!(!reporter.quiet);
    }
}
