//! Line-oriented classification loop
//! 
//! Reads lines, splits them into whitespace separated literals and writes one
//! result per literal. The same loop serves stdin and batch files; only
//! interactive sessions print a prompt.

use crate::config::DriverConfig;
use crate::report::{write_classification, Summary};
use log::{debug, info};
use numlit_classifier::classify_fields;
use std::io::{BufRead, Write};

pub struct Session<'c> {
    config: &'c DriverConfig,
    summary: Summary,
}

impl<'c> Session<'c> {
    pub fn new(config: &'c DriverConfig) -> Self {
        Self {
            config,
            summary: Summary::default(),
        }
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Classify every literal of `input` until it is exhausted
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        interactive: bool,
    ) -> anyhow::Result<()> {
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        loop {
            if interactive && !self.config.prompt.is_empty() {
                write!(out, "{}", self.config.prompt)?;
                out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input after {line_no} lines");
                return Ok(());
            }
            line_no += 1;

            // Undecodable bytes become U+FFFD and classify as Invalid.
            let line = String::from_utf8_lossy(&buf);

            for classification in classify_fields(&line) {
                info!("line {line_no}: {:?} -> {:?}", classification.literal, classification.kind());
                self.summary.record(classification.kind());
                write_classification(out, self.config, &classification)?;
            }
        }
    }

    /// Write the summary if the session asked for one
    pub fn finish<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        if self.config.summary {
            self.summary.write(out, self.config.format)?;
        }
        out.flush()?;
        Ok(())
    }
}
