use std::time::Duration;

pub const ROTATION_INTERVAL: Duration = Duration::from_secs(2);

/// Index into the profile's job titles, advanced on a timer
#[derive(Debug, Default)]
pub struct TitleRotation {
    index: usize,
}

impl TitleRotation {
    pub fn advance(&mut self, count: usize) {
        if count > 0 {
            self.index = (self.index + 1) % count;
        }
    }

    pub fn current<'a>(&self, titles: &'a [String]) -> &'a str {
        titles.get(self.index).map(String::as_str).unwrap_or_default()
    }
}
