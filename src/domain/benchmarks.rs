//! Published benchmark constants and per-run assumption overrides.

use std::{fmt, ops::RangeInclusive, sync::OnceLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskPosture {
    Conservative,
    #[default]
    Moderate,
    Optimistic,
}

impl RiskPosture {
    pub const ALL: [RiskPosture; 3] = [
        RiskPosture::Conservative,
        RiskPosture::Moderate,
        RiskPosture::Optimistic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskPosture::Conservative => "Conservative",
            RiskPosture::Moderate => "Moderate",
            RiskPosture::Optimistic => "Optimistic",
        }
    }

    /// Benchmark table for this posture. Plain lookup, no interpolation.
    pub fn benchmarks(&self) -> &'static BenchmarkTable {
        let tables = TABLES.get_or_init(build_tables);
        match self {
            RiskPosture::Conservative => &tables[0],
            RiskPosture::Moderate => &tables[1],
            RiskPosture::Optimistic => &tables[2],
        }
    }
}

impl fmt::Display for RiskPosture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkTable {
    /// Share of non-Safari traffic matched to an identity today.
    pub baseline_match_rate: f64,
    /// Share of non-Safari traffic matched once deployed.
    pub improved_match_rate: f64,
    /// Share of Safari/iOS traffic matched once deployed (baseline is zero).
    pub safari_match_rate: f64,
    /// CPM lift on newly addressable inventory.
    pub cpm_premium: f64,
    /// Incremental revenue per unit of CAPI campaign spend.
    pub conversion_multiplier: f64,
    pub revenue_share_rate: f64,
    pub campaign_cap: f64,
    pub ads_per_pageview: f64,
    /// Annual ID-infrastructure cost avoided per million monthly pageviews.
    pub id_savings_per_million: f64,
}

static TABLES: OnceLock<[BenchmarkTable; 3]> = OnceLock::new();

fn build_tables() -> [BenchmarkTable; 3] {
    let shared = BenchmarkTable {
        baseline_match_rate: 0.40,
        improved_match_rate: 0.70,
        safari_match_rate: 0.50,
        cpm_premium: 0.25,
        conversion_multiplier: 0.40,
        revenue_share_rate: 0.125,
        campaign_cap: 30_000.0,
        ads_per_pageview: 3.0,
        id_savings_per_million: 20.0,
    };

    [
        BenchmarkTable {
            improved_match_rate: 0.60,
            safari_match_rate: 0.35,
            cpm_premium: 0.15,
            conversion_multiplier: 0.30,
            ..shared.clone()
        },
        shared.clone(),
        BenchmarkTable {
            improved_match_rate: 0.80,
            safari_match_rate: 0.65,
            cpm_premium: 0.35,
            conversion_multiplier: 0.50,
            ..shared
        },
    ]
}

/// Named benchmark values a visitor may override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assumption {
    BaselineMatchRate,
    ImprovedMatchRate,
    SafariMatchRate,
    CpmPremium,
    ConversionMultiplier,
    RevenueShareRate,
    CampaignCap,
    AdsPerPageview,
    IdSavingsPerMillion,
}

impl Assumption {
    pub const ALL: [Assumption; 9] = [
        Assumption::BaselineMatchRate,
        Assumption::ImprovedMatchRate,
        Assumption::SafariMatchRate,
        Assumption::CpmPremium,
        Assumption::ConversionMultiplier,
        Assumption::RevenueShareRate,
        Assumption::CampaignCap,
        Assumption::AdsPerPageview,
        Assumption::IdSavingsPerMillion,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Assumption::BaselineMatchRate => "baseline_match_rate",
            Assumption::ImprovedMatchRate => "improved_match_rate",
            Assumption::SafariMatchRate => "safari_match_rate",
            Assumption::CpmPremium => "cpm_premium",
            Assumption::ConversionMultiplier => "conversion_multiplier",
            Assumption::RevenueShareRate => "revenue_share_rate",
            Assumption::CampaignCap => "campaign_cap",
            Assumption::AdsPerPageview => "ads_per_pageview",
            Assumption::IdSavingsPerMillion => "id_savings_per_million",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Assumption::BaselineMatchRate => "Baseline match rate",
            Assumption::ImprovedMatchRate => "Improved match rate",
            Assumption::SafariMatchRate => "Safari/iOS match rate",
            Assumption::CpmPremium => "CPM premium",
            Assumption::ConversionMultiplier => "Conversion multiplier",
            Assumption::RevenueShareRate => "Revenue share",
            Assumption::CampaignCap => "Campaign cap",
            Assumption::AdsPerPageview => "Ads per pageview",
            Assumption::IdSavingsPerMillion => "ID savings per 1M pageviews",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key.trim())
    }

    /// Plausible range; anything outside is rejected rather than clamped.
    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            Assumption::ConversionMultiplier => 0.0..=2.0,
            Assumption::CampaignCap => 0.0..=1_000_000.0,
            Assumption::AdsPerPageview => 0.0..=20.0,
            Assumption::IdSavingsPerMillion => 0.0..=500.0,
            _ => 0.0..=1.0,
        }
    }

    pub fn read(&self, table: &BenchmarkTable) -> f64 {
        match self {
            Assumption::BaselineMatchRate => table.baseline_match_rate,
            Assumption::ImprovedMatchRate => table.improved_match_rate,
            Assumption::SafariMatchRate => table.safari_match_rate,
            Assumption::CpmPremium => table.cpm_premium,
            Assumption::ConversionMultiplier => table.conversion_multiplier,
            Assumption::RevenueShareRate => table.revenue_share_rate,
            Assumption::CampaignCap => table.campaign_cap,
            Assumption::AdsPerPageview => table.ads_per_pageview,
            Assumption::IdSavingsPerMillion => table.id_savings_per_million,
        }
    }

    fn write(&self, table: &mut BenchmarkTable, value: f64) {
        let slot = match self {
            Assumption::BaselineMatchRate => &mut table.baseline_match_rate,
            Assumption::ImprovedMatchRate => &mut table.improved_match_rate,
            Assumption::SafariMatchRate => &mut table.safari_match_rate,
            Assumption::CpmPremium => &mut table.cpm_premium,
            Assumption::ConversionMultiplier => &mut table.conversion_multiplier,
            Assumption::RevenueShareRate => &mut table.revenue_share_rate,
            Assumption::CampaignCap => &mut table.campaign_cap,
            Assumption::AdsPerPageview => &mut table.ads_per_pageview,
            Assumption::IdSavingsPerMillion => &mut table.id_savings_per_million,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("unknown assumption `{0}`")]
    UnknownAssumption(String),
    #[error("{name} must be a number, got `{raw}`")]
    NotNumeric { name: &'static str, raw: String },
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("improved match rate {improved} is below baseline {baseline}")]
    ImprovedBelowBaseline { improved: f64, baseline: f64 },
}

/// Sparse set of benchmark replacements. Absent entries fall back to the posture table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AssumptionOverrides {
    values: Vec<(Assumption, f64)>,
}

impl AssumptionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an override after range-checking it. Replaces any earlier value for the same key.
    pub fn set(&mut self, assumption: Assumption, value: f64) -> Result<(), ValidationError> {
        check_range(assumption.label(), value, assumption.range())?;
        self.values.retain(|(existing, _)| *existing != assumption);
        self.values.push((assumption, value));
        Ok(())
    }

    pub fn get(&self, assumption: Assumption) -> Option<f64> {
        self.values
            .iter()
            .find(|(existing, _)| *existing == assumption)
            .map(|(_, value)| *value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses `key = value` pairs such as those collected from form inputs.
    /// Blank values are skipped so an untouched field keeps the benchmark.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut overrides = Self::new();
        for (key, raw) in pairs {
            let assumption = Assumption::from_key(key)
                .ok_or_else(|| ValidationError::UnknownAssumption(key.to_string()))?;
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let value: f64 = raw.parse().map_err(|_| ValidationError::NotNumeric {
                name: assumption.label(),
                raw: raw.to_string(),
            })?;
            overrides.set(assumption, value)?;
        }
        Ok(overrides)
    }

    /// Produces the effective table for one run.
    pub fn apply(&self, base: &BenchmarkTable) -> Result<BenchmarkTable, ValidationError> {
        let mut table = base.clone();
        for (assumption, value) in &self.values {
            check_range(assumption.label(), *value, assumption.range())?;
            assumption.write(&mut table, *value);
        }

        if table.improved_match_rate < table.baseline_match_rate {
            return Err(ValidationError::ImprovedBelowBaseline {
                improved: table.improved_match_rate,
                baseline: table.baseline_match_rate,
            });
        }

        Ok(table)
    }
}

pub(crate) fn check_range(
    name: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
) -> Result<(), ValidationError> {
    if !value.is_finite() || !range.contains(&value) {
        return Err(ValidationError::OutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postures_scale_the_three_levers() {
        let c = RiskPosture::Conservative.benchmarks();
        let m = RiskPosture::Moderate.benchmarks();
        let o = RiskPosture::Optimistic.benchmarks();

        assert!(c.improved_match_rate < m.improved_match_rate);
        assert!(m.improved_match_rate < o.improved_match_rate);
        assert!(c.conversion_multiplier < m.conversion_multiplier);
        assert!(m.conversion_multiplier < o.conversion_multiplier);
        assert!(c.cpm_premium < m.cpm_premium);
        assert!(m.cpm_premium < o.cpm_premium);
        assert_eq!(c.revenue_share_rate, o.revenue_share_rate);
    }

    #[test]
    fn moderate_table_carries_published_campaign_terms() {
        let m = RiskPosture::Moderate.benchmarks();
        assert_eq!(m.conversion_multiplier, 0.40);
        assert_eq!(m.revenue_share_rate, 0.125);
        assert_eq!(m.campaign_cap, 30_000.0);
    }

    #[test]
    fn overrides_replace_only_named_values() {
        let mut overrides = AssumptionOverrides::new();
        overrides.set(Assumption::CpmPremium, 0.5).unwrap();

        let base = RiskPosture::Moderate.benchmarks();
        let table = overrides.apply(base).unwrap();
        assert_eq!(table.cpm_premium, 0.5);
        assert_eq!(table.conversion_multiplier, base.conversion_multiplier);
    }

    #[test]
    fn out_of_range_overrides_are_rejected_not_clamped() {
        let mut overrides = AssumptionOverrides::new();
        let err = overrides.set(Assumption::RevenueShareRate, 1.5).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { max, .. } if max == 1.0));
        assert!(overrides.is_empty());

        assert!(overrides.set(Assumption::CpmPremium, f64::NAN).is_err());
        assert!(overrides.set(Assumption::CampaignCap, -1.0).is_err());
    }

    #[test]
    fn improved_below_baseline_is_rejected() {
        let mut overrides = AssumptionOverrides::new();
        overrides.set(Assumption::ImprovedMatchRate, 0.2).unwrap();
        let err = overrides.apply(RiskPosture::Moderate.benchmarks()).unwrap_err();
        assert!(matches!(err, ValidationError::ImprovedBelowBaseline { .. }));
    }

    #[test]
    fn pairs_parse_and_reject_bad_input() {
        let overrides =
            AssumptionOverrides::from_pairs([("cpm_premium", "0.3"), ("campaign_cap", " ")])
                .unwrap();
        assert_eq!(overrides.get(Assumption::CpmPremium), Some(0.3));
        assert_eq!(overrides.get(Assumption::CampaignCap), None);

        assert!(matches!(
            AssumptionOverrides::from_pairs([("made_up", "1")]),
            Err(ValidationError::UnknownAssumption(_))
        ));
        assert!(matches!(
            AssumptionOverrides::from_pairs([("cpm_premium", "lots")]),
            Err(ValidationError::NotNumeric { .. })
        ));
    }

    #[test]
    fn setting_twice_keeps_latest_value() {
        let mut overrides = AssumptionOverrides::new();
        overrides.set(Assumption::AdsPerPageview, 2.0).unwrap();
        overrides.set(Assumption::AdsPerPageview, 4.0).unwrap();
        assert_eq!(overrides.get(Assumption::AdsPerPageview), Some(4.0));
    }
}
