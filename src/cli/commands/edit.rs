//! Line-based edit prompt: console glue over the pure edit logic.

use std::io::{self, BufRead, Write};

use crate::core::edit::{EditField, EditLogic};
use crate::core::schedule::DaySchedule;
use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::models::item::ScheduleItem;
use crate::ui::messages;

fn read_line(input: &mut impl BufRead) -> AppResult<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim().to_string())
}

fn read_number(input: &mut impl BufRead, label: &str) -> AppResult<i32> {
    print!(" {label}: ");
    io::stdout().flush()?;

    let line = read_line(input)?;
    line.parse().map_err(|_| AppError::InvalidTimeFormat(line))
}

fn read_time(input: &mut impl BufRead) -> AppResult<ClockTime> {
    let hour = read_number(input, "Hour")?;
    let minute = read_number(input, "Minute")?;

    ClockTime::new(hour, minute)
}

/// Show the edit menu for the item at `index`, read one choice plus the new
/// value from `input`, and apply it through [`EditLogic`].
pub fn prompt_edit(
    schedule: &mut DaySchedule,
    index: usize,
    input: &mut impl BufRead,
) -> AppResult<ScheduleItem> {
    let current = schedule.get(index)?;

    println!("Item: {current}");
    println!("  What do you want to change?");
    println!("\t1. start time");
    println!("\t2. end time");
    println!("\t3. description");
    println!("\t4. status");
    print!("Enter choice: ");
    io::stdout().flush()?;

    let choice = read_line(input)?;

    let field = match choice.as_str() {
        "1" => {
            println!("Enter new start time:");
            EditField::Start(read_time(input)?)
        }
        "2" => {
            println!("Enter new end time:");
            EditField::End(read_time(input)?)
        }
        "3" => {
            print!("Enter new description: ");
            io::stdout().flush()?;
            EditField::Description(read_line(input)?)
        }
        "4" => EditField::ToggleCompleted,
        other => return Err(AppError::InvalidEditChoice(other.to_string())),
    };

    let updated = EditLogic::apply(schedule, index, field)?;
    messages::success(format!("Item updated: {updated}"));

    Ok(updated)
}
