use serde::{Deserialize, Serialize};

use super::benchmarks::{check_range, ValidationError};

/// Bounds and granularity for one funnel slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderSpec {
    pub fn validate(&self, value: f64) -> Result<f64, ValidationError> {
        check_range(self.label, value, self.min..=self.max)?;
        Ok(value)
    }
}

pub const DISPLAY_CPM_SLIDER: SliderSpec = SliderSpec {
    label: "Display CPM",
    min: 0.50,
    max: 40.0,
    step: 0.25,
    default: 2.50,
};

pub const VIDEO_CPM_SLIDER: SliderSpec = SliderSpec {
    label: "Video CPM",
    min: 2.0,
    max: 80.0,
    step: 0.50,
    default: 12.0,
};

pub const CAMPAIGNS_SLIDER: SliderSpec = SliderSpec {
    label: "CAPI campaigns per year",
    min: 0.0,
    max: 52.0,
    step: 1.0,
    default: 12.0,
};

pub const CAMPAIGN_SPEND_SLIDER: SliderSpec = SliderSpec {
    label: "Average campaign spend",
    min: 0.0,
    max: 2_000_000.0,
    step: 5_000.0,
    default: 100_000.0,
};

/// Slider answers collected on the assumptions step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    /// `None` keeps the pageview-weighted CPM of the selection.
    pub display_cpm: Option<f64>,
    pub video_cpm: Option<f64>,
    pub campaigns_per_year: u32,
    pub avg_campaign_spend: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            display_cpm: None,
            video_cpm: None,
            campaigns_per_year: CAMPAIGNS_SLIDER.default as u32,
            avg_campaign_spend: CAMPAIGN_SPEND_SLIDER.default,
        }
    }
}

impl ScenarioInputs {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(cpm) = self.display_cpm {
            DISPLAY_CPM_SLIDER.validate(cpm)?;
        }
        if let Some(cpm) = self.video_cpm {
            VIDEO_CPM_SLIDER.validate(cpm)?;
        }
        CAMPAIGNS_SLIDER.validate(self.campaigns_per_year as f64)?;
        CAMPAIGN_SPEND_SLIDER.validate(self.avg_campaign_spend)?;
        Ok(())
    }

    /// Annual CAPI media spend implied by the sliders.
    pub fn annual_spend(&self) -> f64 {
        self.campaigns_per_year as f64 * self.avg_campaign_spend
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeploymentScope {
    #[default]
    Single,
    Multi,
    FullPortfolio,
}

pub const FULL_PORTFOLIO_MIN_DOMAINS: usize = 15;

impl DeploymentScope {
    pub const ALL: [DeploymentScope; 3] = [
        DeploymentScope::Single,
        DeploymentScope::Multi,
        DeploymentScope::FullPortfolio,
    ];

    /// Step function on domain count; boundaries resolve to the higher tier.
    pub fn for_domain_count(count: usize) -> Self {
        if count >= FULL_PORTFOLIO_MIN_DOMAINS {
            DeploymentScope::FullPortfolio
        } else if count >= 2 {
            DeploymentScope::Multi
        } else {
            DeploymentScope::Single
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            DeploymentScope::Single => 1.0,
            DeploymentScope::Multi => 0.8,
            DeploymentScope::FullPortfolio => 1.2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeploymentScope::Single => "Single domain",
            DeploymentScope::Multi => "Multi-domain",
            DeploymentScope::FullPortfolio => "Full portfolio",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_tiers_follow_domain_count() {
        assert_eq!(DeploymentScope::for_domain_count(0), DeploymentScope::Single);
        assert_eq!(DeploymentScope::for_domain_count(1), DeploymentScope::Single);
        assert_eq!(DeploymentScope::for_domain_count(2), DeploymentScope::Multi);
        assert_eq!(DeploymentScope::for_domain_count(14), DeploymentScope::Multi);
        assert_eq!(
            DeploymentScope::for_domain_count(15),
            DeploymentScope::FullPortfolio
        );
        assert_eq!(
            DeploymentScope::for_domain_count(40),
            DeploymentScope::FullPortfolio
        );
    }

    #[test]
    fn scope_multipliers() {
        assert_eq!(DeploymentScope::Single.multiplier(), 1.0);
        assert_eq!(DeploymentScope::Multi.multiplier(), 0.8);
        assert_eq!(DeploymentScope::FullPortfolio.multiplier(), 1.2);
    }

    #[test]
    fn sliders_reject_out_of_range_values() {
        let mut inputs = ScenarioInputs::default();
        assert!(inputs.validate().is_ok());

        inputs.display_cpm = Some(0.1);
        assert!(inputs.validate().is_err());

        inputs.display_cpm = None;
        inputs.avg_campaign_spend = 2_500_000.0;
        assert!(inputs.validate().is_err());

        inputs.avg_campaign_spend = 50_000.0;
        inputs.campaigns_per_year = 60;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn annual_spend_multiplies_count_by_average() {
        let inputs = ScenarioInputs {
            campaigns_per_year: 4,
            avg_campaign_spend: 250_000.0,
            ..ScenarioInputs::default()
        };
        assert_eq!(inputs.annual_spend(), 1_000_000.0);
    }
}
