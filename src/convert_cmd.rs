//! Conversion commands: single dates, Gregorian <-> Shamsi.

use anyhow::Result;
use tracing::debug;

use jantari_calendar::{
    ShamsiDate, gregorian_to_shamsi, month_label, parse_gregorian, shamsi_to_gregorian,
};

use crate::cli::{ToGregorianArgs, ToShamsiArgs};

/// Run the `to-shamsi` subcommand.
pub fn run_to_shamsi(args: ToShamsiArgs) -> Result<()> {
    let date = parse_gregorian(&args.date)?;
    let shamsi = gregorian_to_shamsi(date);
    debug!(%date, %shamsi, "converted to shamsi");

    if args.json {
        let out = serde_json::json!({
            "gregorian": date.to_string(),
            "shamsi": shamsi,
            "month": month_label(shamsi.month())?,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} ({})", shamsi, month_label(shamsi.month())?);
    }
    Ok(())
}

/// Run the `to-gregorian` subcommand.
pub fn run_to_gregorian(args: ToGregorianArgs) -> Result<()> {
    let shamsi = ShamsiDate::new(args.year, args.month, args.day)?;
    let date = shamsi_to_gregorian(shamsi)?;
    debug!(%shamsi, %date, "converted to gregorian");

    if args.json {
        let out = serde_json::json!({
            "shamsi": shamsi,
            "gregorian": date.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{date}");
    }
    Ok(())
}
