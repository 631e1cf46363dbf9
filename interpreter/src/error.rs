// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, io};

use colored::{Color, Colorize};
use linescript::{ControlFlowError, ExecutionError, ParseError};
use strum::AsRefStr;
use thiserror::Error;

/// Anything that stops a run.
#[derive(Debug, Error, AsRefStr)]
pub enum RuntimeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    ControlFlow(#[from] ControlFlowError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("console failure: {0}")]
    Io(#[from] io::Error),

    #[error("could not read the program: {0}")]
    Source(io::Error),
}

impl RuntimeError {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    #[must_use]
    pub fn tag(&self) -> DiagnosticTag {
        match self {
            Self::Parse(ParseError::CommandNotFound { .. }) => DiagnosticTag::Error,
            Self::Parse(..) => DiagnosticTag::ParseError,
            Self::ControlFlow(..) => DiagnosticTag::Error,
            Self::Execution(ExecutionError::TypeMismatch { .. }) => DiagnosticTag::Fatal,
            Self::Execution(..) => DiagnosticTag::Error,
            Self::Io(..) | Self::Source(..) => DiagnosticTag::Fatal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum DiagnosticTag {
    #[strum(serialize = "parse error")]
    ParseError,

    #[strum(serialize = "error")]
    Error,

    #[strum(serialize = "fatal")]
    Fatal,
}

impl DiagnosticTag {
    #[must_use]
    pub const fn color(&self) -> Color {
        match self {
            Self::ParseError => Color::Yellow,
            Self::Error => Color::Red,
            Self::Fatal => Color::BrightRed,
        }
    }
}

impl Display for DiagnosticTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Writes `[tag] line N: message` to stderr.
pub struct DiagnosticPrinter {
    tag: DiagnosticTag,
    line: Option<usize>,
    message: String,
}

impl DiagnosticPrinter {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(tag: DiagnosticTag, message: impl Display) -> Self {
        Self {
            tag,
            line: None,
            message: message.to_string(),
        }
    }

    #[must_use = "Use the `print` method to actually print"]
    pub fn for_error(error: &RuntimeError) -> Self {
        Self::new(error.tag(), error)
    }

    #[must_use]
    pub fn line(self, line: usize) -> Self {
        Self {
            line: Some(line),
            ..self
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let tag = format!("[{}]", self.tag).color(self.tag.color()).bold();

        match self.line {
            Some(line) => format!("{tag} line {line}: {}", self.message),
            None => format!("{tag} {}", self.message),
        }
    }

    pub fn print(self) {
        eprintln!("{}", self.render());
    }
}
