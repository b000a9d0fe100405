use ansi_term::Colour;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::formatting::mins2readable;
use crate::utils::table::Table;

use super::{resolve_bounds, schedule_from_args};

/// Color for a scanned window: green when it satisfies the request.
fn color_for_window(window_minutes: i64, wanted: i64) -> Colour {
    if window_minutes > wanted {
        Colour::Green
    } else {
        Colour::Red
    }
}

/// Report whether a free slot of the requested length exists.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        minutes,
        from,
        to,
        busy,
        details,
    } = cmd
    {
        let schedule = schedule_from_args(busy)?;
        let (from, to) = resolve_bounds(from, to, cfg)?;

        if schedule.has_free_time_between(*minutes, from, to) {
            messages::success(format!(
                "A free slot of {} exists between {} and {}",
                mins2readable(*minutes, false),
                from,
                to
            ));
        } else {
            messages::warning(format!(
                "No free slot of {} between {} and {}",
                mins2readable(*minutes, false),
                from,
                to
            ));
        }

        if *details {
            let mut table = Table::new(&["start", "end", "minutes"]);

            for gap in schedule.scan_gaps(from, to) {
                table.add_row(vec![
                    gap.start.to_string(),
                    gap.end.to_string(),
                    color_for_window(gap.minutes, *minutes)
                        .paint(gap.minutes.to_string())
                        .to_string(),
                ]);
            }

            print!("{}", table.render());
        }
    }

    Ok(())
}
