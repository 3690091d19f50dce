//! Interactive rendering surface backed by indicatif
//!
//! Each step owns one bar or spinner for the lifetime of the prompt. Lines
//! are printed above the live widgets so they never tear a bar.

use colored::*;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rpm_status_core::{Prompt, StepId};
use std::collections::HashMap;
use std::time::Duration;

const ITEM_BAR_TEMPLATE: &str = "[{bar:40.cyan/blue}] {percent}%\n{msg}";
const BYTE_BAR_TEMPLATE: &str = "[{bar:40.cyan/blue}] {bytes}/{total_bytes} | {bytes_per_sec}\n{msg}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Prompt drawing indicatif widgets on stderr
pub struct TerminalPrompt {
    multi: MultiProgress,
    bars: HashMap<StepId, ProgressBar>,
    spinners: HashMap<StepId, ProgressBar>,
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: HashMap::new(),
            spinners: HashMap::new(),
        }
    }

    fn println(&self, text: &str) {
        if let Err(e) = self.multi.println(text) {
            log::debug!("Dropped output line: {e}");
        }
    }

    fn new_bar(&self, step: StepId, total: u64) -> ProgressBar {
        let template = if step == StepId::Download {
            BYTE_BAR_TEMPLATE
        } else {
            ITEM_BAR_TEMPLATE
        };
        let style = ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        let bar = ProgressBar::new(total).with_style(style);
        self.multi.add(bar)
    }

    fn new_spinner(&self) -> ProgressBar {
        let style = ProgressStyle::with_template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        let spinner = ProgressBar::new_spinner().with_style(style);
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.multi.add(spinner)
    }
}

/// Leave interrupted bars on screen and clear running spinners
impl Drop for TerminalPrompt {
    fn drop(&mut self) {
        for bar in self.bars.values() {
            if !bar.is_finished() {
                bar.abandon();
            }
        }
        for spinner in self.spinners.values() {
            if !spinner.is_finished() {
                spinner.finish_and_clear();
            }
        }
    }
}

impl Prompt for TerminalPrompt {
    fn write(&mut self, text: &str) {
        self.println(text);
    }

    fn render_failure_message(&mut self, text: &str) {
        self.println(&text.red().to_string());
    }

    fn render_spacer(&mut self) {
        self.println("");
    }

    fn render_progress_bar(&mut self, step: StepId, done: u64, total: u64, message: &str) {
        if !self.bars.contains_key(&step) {
            let bar = self.new_bar(step, total);
            self.bars.insert(step, bar);
        }
        let Some(bar) = self.bars.get(&step) else {
            return;
        };

        bar.set_length(total);
        bar.set_position(done);
        bar.set_message(message.trim_end().to_string());
    }

    fn finish_progress_bar(&mut self, step: StepId) {
        if let Some(bar) = self.bars.get(&step) {
            bar.finish();
        }
    }

    fn advance_spinner(&mut self, step: StepId, finished: bool) {
        if !self.spinners.contains_key(&step) {
            let spinner = self.new_spinner();
            self.spinners.insert(step, spinner);
        }
        let Some(spinner) = self.spinners.get(&step) else {
            return;
        };

        if finished {
            spinner.finish_and_clear();
        } else {
            spinner.tick();
        }
    }
}
