//! `rpn-calc`: evaluate a reverse-Polish program from the command line.
//!
//! Usage:
//!   rpn-calc [--config FILE] [--history FILE] [--set NAME=VALUE]...
//!            [--plot FROM:TO:COUNT] TOKEN...
//!
//! Tokens are operations (`+`, `÷`, `sin`, `π`, ...), numbers or variable
//! names. Without tokens the most recent program in the history file is
//! loaded. Prints `<expression> = <result>`.

use clap::Parser;
use rpn_calc::{linspace, sample, Calculator, Config, ProgramHistory};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Evaluate a reverse-Polish program and print it as infix.
#[derive(Parser, Debug)]
#[command(name = "rpn-calc", version, about, long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON file holding recently used programs.
    #[arg(long)]
    history: Option<PathBuf>,
    /// Bind a variable before evaluating. May be repeated.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    sets: Vec<(String, String)>,
    /// Sample the newest expression over the plot variable.
    #[arg(long, value_name = "FROM:TO:COUNT", value_parser = parse_range)]
    plot: Option<PlotRange>,
    /// Operations, numbers and variable names, in push order.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotRange {
    from: f64,
    to: f64,
    count: usize,
}

fn parse_assignment(text: &str) -> Result<(String, String), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {text:?}"))?;
    if name.is_empty() {
        return Err(format!("missing variable name in {text:?}"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn parse_range(range: &str) -> Result<PlotRange, String> {
    let parts: Vec<&str> = range.split(':').collect();
    let [from, to, count] = parts.as_slice() else {
        return Err(format!("expected FROM:TO:COUNT, got {range:?}"));
    };
    let number = |s: &str| s.parse::<f64>().map_err(|e| format!("{s:?}: {e}"));
    let count = count
        .parse::<usize>()
        .map_err(|e| format!("{count:?}: {e}"))?;
    Ok(PlotRange {
        from: number(*from)?,
        to: number(*to)?,
        count,
    })
}

fn load_history(path: &Path, capacity: usize) -> ProgramHistory {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => return ProgramHistory::bounded(capacity),
    };
    ProgramHistory::from_json(&json, capacity).unwrap_or_else(|e| {
        log::warn!("discarding unreadable history {}: {}", path.display(), e);
        ProgramHistory::bounded(capacity)
    })
}

fn run(args: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.validate()?;

    let mut calc = Calculator::with_config(&config);
    for (name, text) in &args.sets {
        let value = calc
            .formatter()
            .parse(text)
            .ok_or_else(|| format!("--set {name}: {text:?} is not a number"))?;
        calc.set_variable(name, Some(value))?;
    }

    let mut history = args
        .history
        .as_ref()
        .map(|path| load_history(path, config.history.capacity));

    if args.tokens.is_empty() {
        if let Some(program) = history.as_ref().and_then(|h| h.latest()) {
            calc.load_program(program);
        }
    }
    for token in &args.tokens {
        calc.push_token(token);
    }

    let result = calc.evaluate();
    println!("{} = {}", calc.description(), calc.display(result));

    if let Some(range) = args.plot {
        println!("{}", calc.function_label(&config.plot_variable));
        let xs = linspace(range.from, range.to, range.count);
        let points = sample(&mut calc, &config.plot_variable, xs)?;
        for point in points {
            let y = point
                .y
                .map(|y| calc.formatter().format(y))
                .unwrap_or_else(|| "-".to_string());
            println!("{}\t{}", calc.formatter().format(point.x), y);
        }
    }

    if let (Some(path), Some(history)) = (&args.history, history.as_mut()) {
        if history.save(calc.program()) {
            fs::write(path, history.to_json()?)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{e}");
        process::exit(1);
    }
}
