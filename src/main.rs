// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::Write;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::debug;

use lastword::extract::{extract_file, Extraction, DEFAULT_INPUT};
use lastword::Error;

/// Print a word from the last line of a text file.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
#[command(version, about, long_about = None)]
pub struct App {
    /// the text file to read
    #[arg(default_value = DEFAULT_INPUT)]
    file: PathBuf,

    /// 1-indexed position of the word to print
    #[clap(short, long, default_value = "6")]
    word: NonZeroUsize,
}

/// Exit status when the last line has no word at the requested position.
const NO_WORD: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();
    let args = App::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<Error>() {
                Some(err) => {
                    if let Some(source) = std::error::Error::source(err) {
                        debug!("{}: {source}", err.path().display());
                    }
                    eprintln!("{err}");
                }
                None => eprintln!("{e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &App) -> Result<ExitCode> {
    let extraction = extract_file(&args.file, args.word)?;

    match extraction {
        Extraction::Found(word) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(word.as_bytes())?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        other => {
            eprintln!("{other}");
            Ok(ExitCode::from(NO_WORD))
        }
    }
}
