//! Dashboard Greeting
//!
//! "Welcome First Last, Good Morning", keyed on the local clock hour.

use chrono::Timelike;

use crate::domain::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// [0,12) morning, [12,18) afternoon, [18,24) evening
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    pub fn salutation(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Good Morning",
            TimeOfDay::Afternoon => "Good Afternoon",
            TimeOfDay::Evening => "Good Evening",
        }
    }
}

/// Source of the current local hour
pub trait Clock: Send + Sync {
    fn current_hour(&self) -> u32;
}

/// Wall clock in the user's time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn current_hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// Always the same hour
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub u32);

#[cfg(test)]
impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.0
    }
}

pub fn greeting(session: &Session, hour: u32) -> String {
    format!(
        "Welcome {} {}, {}",
        session.first_name,
        session.last_name,
        TimeOfDay::from_hour(hour).salutation()
    )
}

pub fn greeting_now(session: &Session, clock: &dyn Clock) -> String {
    greeting(session, clock.current_hour())
}
