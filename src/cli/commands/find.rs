use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::formatting::mins2readable;

use super::{resolve_bounds, schedule_from_args};

/// Locate the earliest free slot and print it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Find {
        minutes,
        from,
        to,
        busy,
        json,
    } = cmd
    {
        //
        // 1. Build the throwaway schedule from the busy intervals
        //
        let schedule = schedule_from_args(busy)?;

        //
        // 2. Resolve the search bounds
        //
        let (from, to) = resolve_bounds(from, to, cfg)?;

        //
        // 3. Run the search; no slot surfaces as an error to main
        //
        let slot = schedule.find_slot_between(*minutes, from, to)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&slot)?);
        } else {
            messages::success(format!(
                "Earliest free slot of {}: {}-{}",
                mins2readable(*minutes, false),
                slot.start_at(),
                slot.end_at()
            ));
        }
    }

    Ok(())
}
