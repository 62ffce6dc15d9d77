use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How answers are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One labelled number produced by a solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub label: String,
    pub value: u64,
}

/// Everything a solver hands to the printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverReport {
    pub day: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    pub answers: Vec<Answer>,
}

impl SolverReport {
    pub fn new(day: u8) -> Self {
        Self {
            day,
            input: None,
            answers: Vec::new(),
        }
    }

    pub fn answer(mut self, label: &str, value: u64) -> Self {
        self.answers.push(Answer {
            label: label.to_string(),
            value,
        });
        self
    }

    pub fn with_input(mut self, path: &Path) -> Self {
        self.input = Some(path.to_path_buf());
        self
    }

    /// Look up an answer by its label.
    pub fn value(&self, label: &str) -> Option<u64> {
        self.answers
            .iter()
            .find(|a| a.label == label)
            .map(|a| a.value)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }

    fn render_text(&self) -> String {
        let header = self
            .input
            .iter()
            .map(|path| format!("Reading from file: {}\n", path.display()));
        let answers = self
            .answers
            .iter()
            .map(|a| format!("{}: {}\n", a.label, a.value));
        header.chain(answers).collect()
    }
}
