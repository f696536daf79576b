use std::time::Duration;

/// How long each tip stays on screen.
pub const TIP_ROTATION_PERIOD: Duration = Duration::from_secs(6);

/// Tips cycled on the home banner.
pub const EXPLORER_TIPS: [&str; 3] = [
    "Visit Al Ain Zoo in Abu Dhabi for a special stamp!",
    "Scan QR codes at the Dubai Museum for exclusive stamps.",
    "Don't forget to explore the Heart of Sharjah for unique stamps!",
];

/// Cycles through a fixed list of tips, wrapping at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipRotator {
    tips: &'static [&'static str],
    index: usize,
}

impl TipRotator {
    #[must_use]
    pub fn new(tips: &'static [&'static str]) -> Self {
        Self { tips, index: 0 }
    }

    #[must_use]
    pub fn explorer() -> Self {
        Self::new(&EXPLORER_TIPS)
    }

    /// Move to the next tip. No-op for an empty list.
    pub fn advance(&mut self) {
        if !self.tips.is_empty() {
            self.index = (self.index + 1) % self.tips.len();
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> Option<&'static str> {
        self.tips.get(self.index).copied()
    }
}

impl Default for TipRotator {
    fn default() -> Self {
        Self::explorer()
    }
}
