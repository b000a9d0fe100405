//! Fixed demonstration sequence exercising the whole schedule API.

use std::io;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::DaySchedule;
use crate::errors::AppResult;
use crate::models::clock_time::ClockTime;
use crate::ui::messages;

use super::edit::prompt_edit;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Demo = cmd {
        let stdin = io::stdin();
        run_demo(&mut stdin.lock())?;
    }

    Ok(())
}

fn run_demo(input: &mut impl io::BufRead) -> AppResult<()> {
    messages::header("rdayplan demo");

    let mut schedule = DaySchedule::new();

    let seed = [
        (ClockTime::new(0, 10)?, ClockTime::new(2, 20)?, "test 1", true),
        (ClockTime::new(0, 1)?, ClockTime::new(0, 9)?, "test 3", false),
        (
            ClockTime::new(10, 20)?,
            ClockTime::new(11, 40)?,
            "test 2",
            false,
        ),
        (
            ClockTime::new(8, 20)?,
            ClockTime::new(9, 30)?,
            "test 4",
            false,
        ),
    ];

    for (start_at, end_at, description, completed) in seed {
        if !schedule.add_item(start_at, end_at, description, completed)? {
            messages::warning(format!(
                "Rejected overlapping item {start_at}-{end_at} ({description})"
            ));
        }
    }

    println!("{schedule}");

    // Find a 5-minute slot after 10:20 and put it on the schedule.
    let slot = schedule.find_slot_from(5, ClockTime::new(10, 20)?)?;
    messages::info(format!(
        "Found free slot: {}-{}",
        slot.start_at(),
        slot.end_at()
    ));
    schedule.add(slot);

    prompt_edit(&mut schedule, 3, input)?;

    let removed = schedule.remove(2)?;
    println!("Removed item: {removed}\n");
    println!("{schedule}");

    let redo = schedule.filter_incomplete();

    let removed = schedule.remove(0)?;
    println!("Removed item: {removed}\n");
    let removed = schedule.remove(1)?;
    println!("Removed item: {removed}\n");

    println!("{schedule}");
    println!("Redo:\n{redo}");

    Ok(())
}
