use super::range::Direction;
use std::io::{self, BufRead, Write};

/// Interactive direction/days prompt loop.
///
/// Re-prompts on bad input instead of failing: unknown direction text
/// re-enters the direction prompt, a non-integer or non-positive day
/// count re-enters the days prompt. Reader and writer are generic so
/// tests can drive the loop with in-memory buffers.
pub fn read_direction_and_days(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<(Direction, i64)> {
    let direction = read_direction(input, out)?;
    let days = read_days(input, out, direction)?;
    Ok((direction, days))
}

fn read_direction(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Direction> {
    loop {
        write!(out, "Do you want events from 'past' or 'future'? ")?;
        out.flush()?;

        match read_trimmed_line(input)?.parse::<Direction>() {
            Ok(direction) => return Ok(direction),
            Err(_) => writeln!(out, "Invalid input. Please type 'past' or 'future'.")?,
        }
    }
}

fn read_days(
    input: &mut impl BufRead,
    out: &mut impl Write,
    direction: Direction,
) -> io::Result<i64> {
    loop {
        write!(out, "Enter the number of days for {} events: ", direction)?;
        out.flush()?;

        match read_trimmed_line(input)?.parse::<i64>() {
            Ok(days) if days >= 1 => return Ok(days),
            Ok(_) => writeln!(out, "Please enter a positive integer for days.")?,
            Err(_) => writeln!(out, "Invalid input. Please enter a valid number.")?,
        }
    }
}

/// A closed stdin would otherwise spin the loop forever.
fn read_trimmed_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        ));
    }
    Ok(line.trim().to_string())
}
