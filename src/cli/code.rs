//! Code CLI subcommand.
//!
//! This command prints a description of the (12, 63) QRA code.
//!
//! # Examples
//!
//! ```shell
//! $ qracodes code --tables
//! ```

use crate::{
    cli::{qra_code, Run},
    code::QraCode,
};
use clap::Parser;
use std::{error::Error, fmt::Write};

/// Code CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Describes the QRA code")]
pub struct Args {
    /// Print the accumulator tables
    #[arg(long)]
    pub tables: bool,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let code = qra_code()?;
        print!("{}", summary(&code, self.tables)?);
        Ok(())
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn summary(code: &QraCode, tables: bool) -> Result<String, std::fmt::Error> {
    let mut s = String::new();
    writeln!(
        s,
        "k = {}, n = {}, rate = {:.4}",
        code.k(),
        code.n(),
        code.rate()
    )?;
    writeln!(
        s,
        "factor graph: {} variables, {} factors ({} parity checks), {} edges",
        code.num_variables(),
        code.num_factors(),
        code.parity_checks().len(),
        code.num_edges()
    )?;
    writeln!(
        s,
        "maximum degrees: variable {}, check {}",
        code.max_var_degree(),
        code.max_check_degree()
    )?;
    // the intrinsic factor is not a repetition
    let repetitions: Vec<usize> = (0..code.k()).map(|v| code.var_degree(v) - 1).collect();
    writeln!(s, "repetitions: {}", join(&repetitions))?;
    if tables {
        writeln!(s, "acc_input_idx: {}", join(code.acc_input_idx()))?;
        writeln!(s, "acc_input_wlog: {}", join(code.acc_input_wlog()))?;
    }
    Ok(s)
}
