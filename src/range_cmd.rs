//! Range command: Shamsi month/year to a Gregorian date range.

use anyhow::Result;
use tracing::debug;

use jantari_calendar::{month_label, month_range};

use crate::cli::RangeArgs;

/// Run the `range` subcommand. Month 0 selects the whole year.
pub fn run(args: RangeArgs) -> Result<()> {
    let range = month_range(args.year, args.month)?;
    debug!(year = args.year, month = args.month, %range, "resolved range");

    if args.json {
        let label = if args.month == 0 {
            "year"
        } else {
            month_label(args.month)?
        };
        let out = serde_json::json!({
            "year": args.year,
            "month": args.month,
            "label": label,
            "start": range.start_iso(),
            "end": range.end_iso(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if args.month == 0 {
        println!("{} {range}", args.year);
    } else {
        println!("{} {} {range}", args.year, month_label(args.month)?);
    }
    Ok(())
}
