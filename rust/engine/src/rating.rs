//! Labels and colour buckets derived from a probability.
//!
//! Badges and progress bars use different cut points (75/50 versus
//! 75/50/25). Both schemes are kept separate because front ends render them
//! on different elements.

use serde::Serialize;

/// Qualitative rating of an opening-hand probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyRating {
    Low,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl ConsistencyRating {
    pub fn from_probability(probability: f64) -> Self {
        let percent = probability * 100.0;
        if percent >= 90.0 {
            ConsistencyRating::Excellent
        } else if percent >= 75.0 {
            ConsistencyRating::VeryGood
        } else if percent >= 60.0 {
            ConsistencyRating::Good
        } else if percent >= 40.0 {
            ConsistencyRating::Fair
        } else {
            ConsistencyRating::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsistencyRating::Excellent => "Excellent",
            ConsistencyRating::VeryGood => "Very good",
            ConsistencyRating::Good => "Good",
            ConsistencyRating::Fair => "Fair",
            ConsistencyRating::Low => "Low",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ConsistencyRating::Excellent => "⭐",
            ConsistencyRating::VeryGood => "✨",
            ConsistencyRating::Good => "👍",
            ConsistencyRating::Fair => "⚠️",
            ConsistencyRating::Low => "❌",
        }
    }

    /// Icon, label and "probability", e.g. `"⭐ Excellent probability"`.
    pub fn headline(&self) -> String {
        format!("{} {} probability", self.icon(), self.label())
    }
}

/// Rating for a calculated probability; `None` when there is nothing to rate.
pub fn consistency_rating(probability: Option<f64>) -> Option<ConsistencyRating> {
    probability.map(ConsistencyRating::from_probability)
}

/// Rating label, or an empty string for an undefined probability.
pub fn rating_label(probability: Option<f64>) -> &'static str {
    consistency_rating(probability).map_or("", |r| r.label())
}

/// Bucket for result badges: 75/50 split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Neutral,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Success => "success",
            BadgeTone::Warning => "warning",
            BadgeTone::Danger => "danger",
        }
    }
}

pub fn badge_tone(probability: Option<f64>) -> BadgeTone {
    let Some(p) = probability else {
        return BadgeTone::Neutral;
    };
    let percent = p * 100.0;
    if percent >= 75.0 {
        BadgeTone::Success
    } else if percent >= 50.0 {
        BadgeTone::Warning
    } else {
        BadgeTone::Danger
    }
}

/// Bucket for progress bars and probability text: 75/50/25 split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTone {
    Neutral,
    Success,
    Warning,
    Caution,
    Danger,
}

impl ProgressTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressTone::Neutral => "neutral",
            ProgressTone::Success => "success",
            ProgressTone::Warning => "warning",
            ProgressTone::Caution => "caution",
            ProgressTone::Danger => "danger",
        }
    }
}

pub fn progress_tone(probability: Option<f64>) -> ProgressTone {
    let Some(p) = probability else {
        return ProgressTone::Neutral;
    };
    let percent = p * 100.0;
    if percent >= 75.0 {
        ProgressTone::Success
    } else if percent >= 50.0 {
        ProgressTone::Warning
    } else if percent >= 25.0 {
        ProgressTone::Caution
    } else {
        ProgressTone::Danger
    }
}
