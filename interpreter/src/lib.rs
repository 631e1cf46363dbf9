// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod console;
mod error;
mod interpreter;
mod logger;
mod runner;
mod timer;

pub use linescript::*;

pub use self::{
    config::{ConfigError, ConfigRoot, ConfigSectionLog, ConfigSectionRun, FILE_NAME as CONFIG_FILE_NAME},
    console::{BufferedConsole, Console, StdConsole},
    error::{DiagnosticPrinter, DiagnosticTag, RuntimeError},
    interpreter::Interpreter,
    logger::Logger,
    runner::{run_program, LineError, SourceLines},
    timer::{format_report, ExecutionTimer},
};
