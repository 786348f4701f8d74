//! Rendering of classification results

use crate::config::{DriverConfig, OutputFormat};
use numlit_classifier::{BitWidth, Classification, LiteralKind};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

#[derive(Serialize)]
struct Record<'a> {
    literal: &'a str,
    kind: LiteralKind,
    label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// Write one classified literal in the configured format
pub fn write_classification<W: Write>(
    out: &mut W,
    config: &DriverConfig,
    classification: &Classification<'_>,
) -> anyhow::Result<()> {
    let kind = classification.kind();
    let reason = classification
        .reason()
        .filter(|_| config.explain)
        .map(|err| err.to_string());

    match config.format {
        OutputFormat::Text => match reason {
            Some(reason) => writeln!(out, "{kind} ({reason})")?,
            None => writeln!(out, "{kind}")?,
        },
        OutputFormat::Json => {
            let record = Record {
                literal: classification.literal,
                kind,
                label: kind.label(),
                bits: kind.bit_width().map(BitWidth::bits),
                reason,
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
    }
    Ok(())
}

/// Running per-kind counts over a session
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    counts: HashMap<LiteralKind, usize>,
}

#[derive(Serialize)]
struct KindCount {
    kind: LiteralKind,
    count: usize,
}

#[derive(Serialize)]
struct SummaryRecord {
    total: usize,
    valid: usize,
    counts: Vec<KindCount>,
}

impl Summary {
    pub fn record(&mut self, kind: LiteralKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    pub fn count(&self, kind: LiteralKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Literals that classified to a real kind
    pub fn valid(&self) -> usize {
        self.counts
            .iter()
            .filter(|(kind, _)| kind.is_valid())
            .map(|(_, count)| count)
            .sum()
    }

    /// Non-zero counts in kind declaration order
    fn nonzero(&self) -> impl Iterator<Item = (LiteralKind, usize)> + '_ {
        LiteralKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|(_, count)| *count > 0)
    }

    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Text => {
                for (kind, count) in self.nonzero() {
                    writeln!(out, "{kind}: {count}")?;
                }
                writeln!(out, "valid: {}", self.valid())?;
                writeln!(out, "total: {}", self.total())?;
            }
            OutputFormat::Json => {
                let record = SummaryRecord {
                    total: self.total(),
                    valid: self.valid(),
                    counts: self
                        .nonzero()
                        .map(|(kind, count)| KindCount { kind, count })
                        .collect(),
                };
                writeln!(out, "{}", serde_json::to_string(&record)?)?;
            }
        }
        Ok(())
    }
}
