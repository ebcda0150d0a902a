use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

const PROGRESS_CHARS: &str = "━━";

pub struct BarTemplates {
    pub main: &'static str,
    pub download: &'static str,
}

impl Default for BarTemplates {
    fn default() -> Self {
        Self {
            main: "{msg:.bold.magenta} {wide_bar:.cyan/white.dim} {pos}/{len} emotes",
            download: "  {bar:40.cyan/white.dim} {bytes}/{total_bytes} @ {bytes_per_sec}",
        }
    }
}

/// Main emote counter plus the container every per-file bar is attached to.
pub struct ProgressCounter {
    pub main: ProgressBar,
    pub multi: MultiProgress,
    templates: BarTemplates,
}

impl ProgressCounter {
    pub fn initialize(len: u64, label: &str) -> Self {
        let templates = BarTemplates::default();

        let multi = MultiProgress::with_draw_target(ProgressDrawTarget::stderr_with_hz(60));

        let bar = ProgressBar::new(len).with_style(master_progress_style(&templates));
        bar.set_message(label.to_string());

        let main = multi.add(bar);

        Self {
            main,
            multi,
            templates,
        }
    }

    pub fn add_download_bar(&self, len: u64) -> ProgressBar {
        let bar = ProgressBar::new(len).with_style(download_progress_style(&self.templates));

        self.multi.add(bar)
    }

    /// Prints a line to stdout without tearing the bars.
    pub fn println(&self, line: impl AsRef<str>) {
        self.multi.suspend(|| println!("{}", line.as_ref()));
    }

    /// Same as [`println`](Self::println) but for stderr.
    pub fn eprintln(&self, line: impl AsRef<str>) {
        self.multi.suspend(|| eprintln!("{}", line.as_ref()));
    }
}

fn bar_style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(PROGRESS_CHARS)
}

pub fn master_progress_style(templates: &BarTemplates) -> ProgressStyle {
    bar_style(templates.main)
}

pub fn download_progress_style(templates: &BarTemplates) -> ProgressStyle {
    bar_style(templates.download)
}
