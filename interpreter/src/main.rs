// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Subcommand;
use linescript_interpreter::{
    run_program, split_chunks, ConfigRoot, DiagnosticPrinter, DiagnosticTag, Interpreter, Lexer, Logger,
    SourceLines, StdConsole,
};
use log::warn;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    /// Configuration file to use instead of `linescript.toml`.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interpret a program.
    Run {
        file: Option<PathBuf>,
    },

    /// Print the tokens of every line of a program, grouped by chunk.
    Tokens {
        file: PathBuf,
    },
}

const EXIT_HALTED: u8 = 1;
const EXIT_UNREADABLE: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse_args();

    let config = match ConfigRoot::discover(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            DiagnosticPrinter::new(DiagnosticTag::Fatal, e).print();
            return ExitCode::from(EXIT_UNREADABLE);
        }
    };

    if let Err(e) = Logger::initialize(Logger::level_for(args.verbose || config.log.debug)) {
        eprintln!("Could not install the logger: {e}");
    }

    let result = match args.command {
        Commands::Run { file } => {
            let path = file.unwrap_or_else(|| config.run.default_program.clone());
            run(&path, config.run.timeexec)
        }

        Commands::Tokens { file } => print_tokens(&file).map(|()| ExitCode::SUCCESS),
    };

    result.unwrap_or_else(|e| {
        DiagnosticPrinter::new(DiagnosticTag::Fatal, format!("{e:#}")).print();
        ExitCode::from(EXIT_UNREADABLE)
    })
}

fn open(path: &Path) -> anyhow::Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("could not open program {}", path.display()))?;

    Ok(BufReader::new(file))
}

fn run(path: &Path, force_timeexec: bool) -> anyhow::Result<ExitCode> {
    let source = open(path)?;
    let mut interpreter = Interpreter::new(StdConsole::new());

    let mut exit_code = ExitCode::SUCCESS;
    if let Err(e) = run_program(&mut interpreter, source) {
        DiagnosticPrinter::for_error(&e.error).line(e.line).print();
        exit_code = ExitCode::from(EXIT_HALTED);
    }

    interpreter.report_execution_time(force_timeexec)
        .context("could not print the execution time")?;

    Ok(exit_code)
}

fn print_tokens(path: &Path) -> anyhow::Result<()> {
    let source = open(path)?;
    let mut lexer = Lexer::new();

    for (index, line) in SourceLines::new(source).enumerate() {
        let line = line.with_context(|| format!("could not read line {} of {}", index + 1, path.display()))?;
        let tokens = lexer.tokenize(&line);

        for (chunk_index, chunk) in split_chunks(&tokens).into_iter().enumerate() {
            for token in chunk {
                println!("{}:{} #{chunk_index} {} {}", index + 1, token.column + 1, token.kind.name(), token.kind);
            }
        }
    }

    if lexer.is_inside_block_comment() {
        warn!("{} ends inside a block comment", path.display());
    }

    Ok(())
}
