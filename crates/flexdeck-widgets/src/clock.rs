// ABOUTME: Clock widget showing the current local time.

use chrono::Local;

use crate::registry::{Visual, Widget};

pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Clock {
    fn render(&self) -> Visual {
        let now = Local::now();
        Visual {
            title: "Clock".to_string(),
            lines: vec![now.format("%H:%M:%S").to_string()],
        }
    }
}
