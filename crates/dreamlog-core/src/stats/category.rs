//! Sleep-quality and dream-type categories.

/// Sleep quality, matched by exact equality against the stored text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepQuality {
    Good,
    Average,
    Poor,
}

impl SleepQuality {
    pub const ALL: [Self; 3] = [Self::Good, Self::Average, Self::Poor];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }

    /// `None` for anything other than the three exact labels.
    pub fn classify(quality: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_str() == quality)
    }
}

/// Dream type, matched by substring containment.
///
/// Variants are declared in priority order: the first label contained in the
/// stored text wins, so `"Lucid Nightmare"` is a lucid dream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DreamKind {
    Normal,
    Lucid,
    Recurring,
    Nightmare,
}

impl DreamKind {
    pub const PRIORITY: [Self; 4] = [Self::Normal, Self::Lucid, Self::Recurring, Self::Nightmare];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Lucid => "Lucid",
            Self::Recurring => "Recurring",
            Self::Nightmare => "Nightmare",
        }
    }

    pub fn classify(kind: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|k| kind.contains(k.as_str()))
    }
}
