//! Configuration for a generation run.

/// How member and party alignments are decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlignmentMode {
    /// One alignment is rolled for the party and every member shares it.
    #[default]
    Party,
    /// Each member rolls their own; the party takes the most common one.
    Individual,
}

impl AlignmentMode {
    /// Parse `"party"` or `"individual"`, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "party" => Some(Self::Party),
            "individual" => Some(Self::Individual),
            _ => None,
        }
    }
}

impl std::fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Party => write!(f, "party"),
            Self::Individual => write!(f, "individual"),
        }
    }
}

/// Configuration for generating a party.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// RNG seed for reproducible parties.
    pub seed: u64,
    /// How alignments are decided.
    pub alignment_mode: AlignmentMode,
    /// How many names to try per member before giving up on uniqueness.
    pub max_name_attempts: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            alignment_mode: AlignmentMode::Party,
            max_name_attempts: 1000,
        }
    }
}

impl GenConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the alignment mode.
    pub fn with_alignment_mode(mut self, mode: AlignmentMode) -> Self {
        self.alignment_mode = mode;
        self
    }

    /// Set the name attempt limit (at least 1).
    pub fn with_max_name_attempts(mut self, attempts: usize) -> Self {
        self.max_name_attempts = attempts.max(1);
        self
    }
}
