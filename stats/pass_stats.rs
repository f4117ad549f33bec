//! Password statistics binary - builds many passwords and reports how
//! character classes spread across positions.
//!
//! Usage:
//!   ./pass_stats              # 1000 passwords of length 10
//!   ./pass_stats 16 100000    # 100000 passwords of length 16
//!
//! A class that dominates a position means the shuffle is not hiding the
//! seed order (numbers, lowercase, uppercase, special).

#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::io::{self, Write};

use rand::rngs::OsRng;

#[path = "../src/pass/mod.rs"]
mod pass;

use pass::charset::ClassKind;
use pass::{BuildError, CharacterPool, StrengthLevel};

const DEFAULT_LENGTH: usize = 10;
const DEFAULT_COUNT: usize = 1_000;

struct Report {
    length: usize,
    count: usize,
    positions: Vec<[usize; 4]>,
    duplicates: usize,
    strengths: BTreeMap<StrengthLevel, usize>,
}

/// Index of the first class holding `c`, in rotation order.
fn class_index(pool: &CharacterPool, c: char) -> Option<usize> {
    pool.classes()
        .iter()
        .position(|class| class.chars().contains(&c))
}

fn collect(pool: &CharacterPool, length: usize, count: usize) -> Result<Report, BuildError> {
    // The per-position table is sized by `length`, so reject it before allocating.
    let capacity = pool.capacity();
    if length > capacity {
        return Err(BuildError::CapacityExceeded { length, capacity });
    }

    let mut positions = vec![[0usize; 4]; length];
    let mut seen = HashSet::new();
    let mut duplicates = 0;
    let mut strengths = BTreeMap::new();

    for _ in 0..count {
        let password = pass::build(pool, length, &mut OsRng)?;
        for (pos, c) in password.as_str().chars().enumerate() {
            if let Some(idx) = class_index(pool, c) {
                positions[pos][idx] += 1;
            }
        }
        *strengths.entry(pass::evaluate(password.as_str())).or_insert(0) += 1;
        if !seen.insert(password.as_str().to_owned()) {
            duplicates += 1;
        }
    }

    Ok(Report {
        length,
        count,
        positions,
        duplicates,
        strengths,
    })
}

fn print_report<W: Write>(out: &mut W, report: &Report, capacity: usize) -> io::Result<()> {
    writeln!(
        out,
        "length {} | {} passwords | pool capacity {}",
        report.length, report.count, capacity
    )?;
    writeln!(out)?;

    write!(out, "{:>5}", "pos")?;
    for kind in ClassKind::ALL {
        write!(out, "{:>11}", kind.name())?;
    }
    writeln!(out)?;

    for (pos, per_class) in report.positions.iter().enumerate() {
        write!(out, "{:>5}", pos)?;
        for &n in per_class {
            let pct = 100.0 * n as f64 / report.count.max(1) as f64;
            write!(out, "{:>10.1}%", pct)?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "duplicates: {}", report.duplicates)?;
    write!(out, "strength:")?;
    for level in StrengthLevel::ALL {
        let n = report.strengths.get(&level).copied().unwrap_or(0);
        write!(out, "  {} {}", level, n)?;
    }
    writeln!(out)
}

fn parse_arg(args: &[String], idx: usize, default: usize) -> Option<usize> {
    match args.get(idx) {
        None => Some(default),
        Some(s) => s.parse().ok(),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: pass_stats [LENGTH] [COUNT]");
        eprintln!();
        eprintln!("Builds COUNT passwords of LENGTH characters and prints the share of");
        eprintln!("each character class at every position, the number of duplicate");
        eprintln!("passwords, and how the passwords were rated.");
        eprintln!();
        eprintln!("Defaults: LENGTH {DEFAULT_LENGTH}, COUNT {DEFAULT_COUNT}");
        std::process::exit(0);
    }

    let (Some(length), Some(count)) = (
        parse_arg(&args, 1, DEFAULT_LENGTH),
        parse_arg(&args, 2, DEFAULT_COUNT),
    ) else {
        eprintln!("LENGTH and COUNT must be whole numbers");
        std::process::exit(2);
    };

    let pool = CharacterPool::standard();
    let report = match collect(pool, length, count) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if print_report(&mut out, &report, pool.capacity()).is_err() {
        std::process::exit(1);
    }
}
