/// A participant in the bowling session.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    /// Raw value of each completed roll, in roll order
    pub scores: Vec<u32>,
    /// Running total across all completed rolls
    #[serde(default)]
    pub overall_score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: Vec::new(),
            overall_score: 0,
        }
    }

    /// Record one completed roll.
    pub fn record_roll(&mut self, value: u32) {
        self.scores.push(value);
        self.overall_score += value;
    }

    /// Drop all recorded rolls, keeping the identity.
    pub fn reset(&mut self) {
        self.scores.clear();
        self.overall_score = 0;
    }
}
