//! Capture and report phase timings

use std::{fmt::Display, time::Duration};

use indexmap::IndexMap;

#[derive(Default, Debug)]
pub struct Timings {
    timings: IndexMap<String, Duration>,
}

impl Timings {
    pub fn record<T: AsRef<str>>(&mut self, name: T, elapsed: Duration) {
        self.timings.insert(name.as_ref().to_string(), elapsed);
    }

    pub fn get<T: AsRef<str>>(&self, name: T) -> Option<Duration> {
        self.timings.get(name.as_ref()).copied()
    }

    /// Phase names in the order first recorded
    pub fn phases(&self) -> impl Iterator<Item = &str> {
        self.timings.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }
}

impl Display for Timings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.timings.keys().map(|k| k.len()).max().unwrap_or(0) + 1;

        for (k, v) in &self.timings {
            writeln!(f, "{:width$}: {:14.9}s", k, v.as_secs_f64(), width = width)?;
        }
        Ok(())
    }
}
