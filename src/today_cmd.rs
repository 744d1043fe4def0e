//! Today command: current Shamsi date and the current month's range.

use anyhow::Result;

use jantari_calendar::{current_shamsi_date, month_label, month_range};

use crate::cli::TodayArgs;

/// Run the `today` subcommand.
pub fn run(args: TodayArgs) -> Result<()> {
    let today = current_shamsi_date();
    let range = month_range(today.year(), today.month())?;

    if args.json {
        let out = serde_json::json!({
            "today": today,
            "month": month_label(today.month())?,
            "month_start": range.start_iso(),
            "month_end": range.end_iso(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} ({})", today, month_label(today.month())?);
        println!("month range: {range}");
    }
    Ok(())
}
