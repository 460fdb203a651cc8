use serde::{Deserialize, Serialize};

/// Catalog identifier for a publisher property.
pub type DomainId = &'static str;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainCategory {
    News,
    Sports,
    Technology,
    Finance,
    Lifestyle,
    Entertainment,
    Automotive,
    Travel,
}

impl DomainCategory {
    pub fn label(&self) -> &'static str {
        match self {
            DomainCategory::News => "News",
            DomainCategory::Sports => "Sports",
            DomainCategory::Technology => "Technology",
            DomainCategory::Finance => "Finance",
            DomainCategory::Lifestyle => "Lifestyle",
            DomainCategory::Entertainment => "Entertainment",
            DomainCategory::Automotive => "Automotive",
            DomainCategory::Travel => "Travel",
        }
    }
}

/// Audience composition of a property. Both values are fractions in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudienceProfile {
    /// Share of visitors running blockers, privacy browsers or similar tooling.
    pub tech_savvy: f64,
    /// Share of traffic arriving from Safari / iOS, which carries no third-party identity.
    pub safari_share: f64,
}

/// A publisher property from the static catalog.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PublisherDomain {
    pub id: DomainId,
    pub name: &'static str,
    pub monthly_pageviews: u64,
    pub display_cpm: f64,
    pub video_cpm: f64,
    /// Fraction of impressions served as display; the remainder is video.
    pub display_share: f64,
    pub category: DomainCategory,
    pub audience: AudienceProfile,
}

/// Pageview-weighted reduction of a domain selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompositeInputs {
    pub monthly_pageviews: u64,
    pub display_cpm: f64,
    pub video_cpm: f64,
    pub display_share: f64,
    pub tech_savvy: f64,
    pub safari_share: f64,
    pub domain_count: usize,
}

pub const DEFAULT_DISPLAY_CPM: f64 = 2.50;
pub const DEFAULT_VIDEO_CPM: f64 = 12.00;
pub const DEFAULT_DISPLAY_SHARE: f64 = 0.80;
pub const DEFAULT_TECH_SAVVY: f64 = 0.35;
pub const DEFAULT_SAFARI_SHARE: f64 = 0.30;

impl CompositeInputs {
    /// Composite used when nothing (or nothing with traffic) is selected.
    pub fn default_composite() -> Self {
        Self {
            monthly_pageviews: 0,
            display_cpm: DEFAULT_DISPLAY_CPM,
            video_cpm: DEFAULT_VIDEO_CPM,
            display_share: DEFAULT_DISPLAY_SHARE,
            tech_savvy: DEFAULT_TECH_SAVVY,
            safari_share: DEFAULT_SAFARI_SHARE,
            domain_count: 0,
        }
    }

    pub fn is_default(&self) -> bool {
        self.domain_count == 0
    }

    /// Replaces the weighted CPMs with visitor-supplied slider values.
    pub fn with_cpm_overrides(mut self, display_cpm: Option<f64>, video_cpm: Option<f64>) -> Self {
        if let Some(value) = display_cpm {
            self.display_cpm = value;
        }
        if let Some(value) = video_cpm {
            self.video_cpm = value;
        }
        self
    }

    /// Blended CPM across the display/video split.
    pub fn blended_cpm(&self) -> f64 {
        self.display_share * self.display_cpm + (1.0 - self.display_share) * self.video_cpm
    }
}

impl Default for CompositeInputs {
    fn default() -> Self {
        Self::default_composite()
    }
}
