use anyhow::{bail, Context, Result};
use std::env;
use std::path::Path;
use tracing::info;

use tally::{date_utils, logging, string_utils, CartConfig};

const USAGE: &str = "usage:
  tally cart <prices.csv> [config.json]
  tally month <1-12>
  tally leap <year>
  tally palindrome <text>";

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str);

    match command {
        Some("cart") => run_cart(&args[1..]),
        Some("month") => run_month(&args[1..]),
        Some("leap") => run_leap(&args[1..]),
        Some("palindrome") => run_palindrome(&args[1..]),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }
}

fn run_cart(args: &[String]) -> Result<()> {
    let Some(csv_path) = args.first() else {
        bail!("cart: missing <prices.csv>\n{}", USAGE);
    };

    let config = match args.get(1) {
        Some(path) => CartConfig::from_file(path)?,
        None => CartConfig::default(),
    };

    let prices = tally::load_amounts_csv(Path::new(csv_path))?;
    info!(path = %csv_path, count = prices.len(), "cart loaded");

    let summary = config.summarize(&prices);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run_month(args: &[String]) -> Result<()> {
    let month: u32 = single_arg(args, "month")?;
    let name = date_utils::month_name(month)?;
    let days = date_utils::days_in_month(month)?;
    println!("{} ({} days)", name, days);
    Ok(())
}

fn run_leap(args: &[String]) -> Result<()> {
    let year: i32 = single_arg(args, "leap")?;
    println!("{}", date_utils::is_leap_year(year));
    Ok(())
}

fn run_palindrome(args: &[String]) -> Result<()> {
    let text = args.join(" ");
    println!("{}", string_utils::is_palindrome(&text));
    Ok(())
}

fn single_arg<T>(args: &[String], command: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = args.first() else {
        bail!("{}: missing argument\n{}", command, USAGE);
    };
    raw.parse::<T>()
        .with_context(|| format!("{}: invalid argument {:?}", command, raw))
}
