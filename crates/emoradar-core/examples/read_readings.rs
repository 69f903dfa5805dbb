use emoradar_core::{read_or_fallback, JsonReadingAdapter};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args().nth(1);
    let reader: Box<dyn BufRead> = match path {
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (reading, fallback_reason) = read_or_fallback(&JsonReadingAdapter, &line)?;
        if let Some(reason) = fallback_reason {
            eprintln!("fallback: {reason}");
        }

        println!(
            "{:+.2}\t{:?}\t{}",
            reading.scores.overall_wellbeing.unwrap_or_default(),
            reading.intervention_priority,
            reading.emotional_state
        );
    }

    Ok(())
}
