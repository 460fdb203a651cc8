//! Commercial pricing models and single-campaign fee economics.

use serde::{Deserialize, Serialize};

use super::benchmarks::{check_range, BenchmarkTable, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevenueShareTerms {
    pub share_rate: f64,
    pub campaign_cap: f64,
}

impl RevenueShareTerms {
    pub fn from_benchmarks(table: &BenchmarkTable) -> Self {
        Self {
            share_rate: table.revenue_share_rate,
            campaign_cap: table.campaign_cap,
        }
    }

    /// Vendor take on `incremental`, capped.
    pub fn fee(&self, incremental: f64) -> f64 {
        (incremental * self.share_rate).min(self.campaign_cap)
    }
}

impl Default for RevenueShareTerms {
    fn default() -> Self {
        Self {
            share_rate: 0.125,
            campaign_cap: 30_000.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatFeeTerms {
    pub annual_fee: f64,
}

impl FlatFeeTerms {
    pub fn monthly_fee(&self) -> f64 {
        self.annual_fee / 12.0
    }
}

impl Default for FlatFeeTerms {
    fn default() -> Self {
        Self {
            annual_fee: 150_000.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnualCapTerms {
    pub base_share_rate: f64,
    pub annual_cap: f64,
}

impl Default for AnnualCapTerms {
    fn default() -> Self {
        Self {
            base_share_rate: 0.125,
            annual_cap: 250_000.0,
        }
    }
}

/// Terms used for the models the user did not select, so comparisons reflect what they entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlternativeTerms {
    pub flat_fee: FlatFeeTerms,
    pub annual_cap: AnnualCapTerms,
}

impl AlternativeTerms {
    /// Model of the given kind; revenue share always follows the benchmark table.
    pub fn model_for(&self, kind: ModelKind, table: &BenchmarkTable) -> CommercialModel {
        match kind {
            ModelKind::RevenueShare => {
                CommercialModel::RevenueShare(RevenueShareTerms::from_benchmarks(table))
            }
            ModelKind::FlatFee => CommercialModel::FlatFee(self.flat_fee),
            ModelKind::AnnualCap => CommercialModel::AnnualCap(self.annual_cap),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        CommercialModel::FlatFee(self.flat_fee).validate()?;
        CommercialModel::AnnualCap(self.annual_cap).validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CommercialModel {
    RevenueShare(RevenueShareTerms),
    FlatFee(FlatFeeTerms),
    AnnualCap(AnnualCapTerms),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    #[default]
    RevenueShare,
    FlatFee,
    AnnualCap,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [
        ModelKind::RevenueShare,
        ModelKind::FlatFee,
        ModelKind::AnnualCap,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ModelKind::RevenueShare => "Revenue share",
            ModelKind::FlatFee => "Flat annual fee",
            ModelKind::AnnualCap => "Annual cap",
        }
    }
}

impl CommercialModel {
    pub fn kind(&self) -> ModelKind {
        match self {
            CommercialModel::RevenueShare(_) => ModelKind::RevenueShare,
            CommercialModel::FlatFee(_) => ModelKind::FlatFee,
            CommercialModel::AnnualCap(_) => ModelKind::AnnualCap,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            CommercialModel::RevenueShare(terms) => {
                check_range("Revenue share", terms.share_rate, 0.0..=1.0)?;
                check_range("Campaign cap", terms.campaign_cap, 0.0..=1_000_000.0)?;
            }
            CommercialModel::FlatFee(terms) => {
                check_range("Annual fee", terms.annual_fee, 0.0..=10_000_000.0)?;
            }
            CommercialModel::AnnualCap(terms) => {
                check_range("Base share", terms.base_share_rate, 0.0..=1.0)?;
                check_range("Annual cap", terms.annual_cap, 0.0..=10_000_000.0)?;
            }
        }
        Ok(())
    }
}

/// Fee outcome for a single CAPI campaign under revenue share.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignEconomics {
    pub spend: f64,
    pub incremental_revenue: f64,
    pub raw_fee: f64,
    pub capped_fee: f64,
    pub net_to_publisher: f64,
    /// `None` when the capped fee is zero.
    pub roi_multiple: Option<f64>,
}

impl CampaignEconomics {
    pub fn for_spend(spend: f64, conversion_multiplier: f64, terms: &RevenueShareTerms) -> Self {
        let incremental_revenue = spend.max(0.0) * conversion_multiplier;
        let raw_fee = incremental_revenue * terms.share_rate;
        let capped_fee = raw_fee.min(terms.campaign_cap);
        let roi_multiple = if capped_fee > 0.0 {
            Some(incremental_revenue / capped_fee)
        } else {
            None
        };

        Self {
            spend,
            incremental_revenue,
            raw_fee,
            capped_fee,
            net_to_publisher: incremental_revenue - capped_fee,
            roi_multiple,
        }
    }

    pub fn is_capped(&self) -> bool {
        self.raw_fee > self.capped_fee
    }
}

/// Campaign spend above which the revenue-share cap engages: cap / (conversion × share).
pub fn campaign_cap_threshold(conversion_multiplier: f64, terms: &RevenueShareTerms) -> Option<f64> {
    let denominator = conversion_multiplier * terms.share_rate;
    if denominator > 0.0 {
        Some(terms.campaign_cap / denominator)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::benchmarks::RiskPosture;

    #[test]
    fn one_million_spend_hits_the_cap() {
        let econ = CampaignEconomics::for_spend(1_000_000.0, 0.40, &RevenueShareTerms::default());
        assert!((econ.incremental_revenue - 400_000.0).abs() < 1e-6);
        assert!((econ.raw_fee - 50_000.0).abs() < 1e-6);
        assert_eq!(econ.capped_fee, 30_000.0);
        assert!((econ.net_to_publisher - 370_000.0).abs() < 1e-6);
        let roi = econ.roi_multiple.unwrap();
        assert!((roi - 13.333_333).abs() < 1e-3);
        assert!(econ.is_capped());
    }

    #[test]
    fn capped_fee_is_min_of_raw_fee_and_cap() {
        let terms = RevenueShareTerms::default();
        for spend in [0.0, 10_000.0, 250_000.0, 599_999.0, 600_000.0, 750_000.0, 5_000_000.0] {
            let econ = CampaignEconomics::for_spend(spend, 0.40, &terms);
            let expected = (spend * 0.40 * 0.125_f64).min(30_000.0);
            assert!((econ.capped_fee - expected).abs() < 1e-6, "spend {spend}");
            assert!(
                (econ.net_to_publisher - (econ.incremental_revenue - econ.capped_fee)).abs() < 1e-6
            );
        }
    }

    #[test]
    fn zero_fee_reports_roi_as_not_applicable() {
        let econ = CampaignEconomics::for_spend(0.0, 0.40, &RevenueShareTerms::default());
        assert_eq!(econ.capped_fee, 0.0);
        assert_eq!(econ.roi_multiple, None);

        let free = RevenueShareTerms {
            share_rate: 0.0,
            campaign_cap: 30_000.0,
        };
        assert_eq!(CampaignEconomics::for_spend(500_000.0, 0.4, &free).roi_multiple, None);
    }

    #[test]
    fn cap_threshold_is_six_hundred_thousand_by_default() {
        let threshold = campaign_cap_threshold(0.40, &RevenueShareTerms::default()).unwrap();
        assert!((threshold - 600_000.0).abs() < 1e-6);
        assert_eq!(campaign_cap_threshold(0.0, &RevenueShareTerms::default()), None);
    }

    #[test]
    fn model_terms_are_range_checked() {
        let bad = CommercialModel::AnnualCap(AnnualCapTerms {
            base_share_rate: 1.2,
            annual_cap: 100_000.0,
        });
        assert!(bad.validate().is_err());
        assert!(CommercialModel::FlatFee(FlatFeeTerms::default()).validate().is_ok());
    }

    #[test]
    fn flat_fee_amortizes_monthly() {
        assert_eq!(FlatFeeTerms { annual_fee: 120_000.0 }.monthly_fee(), 10_000.0);
    }

    #[test]
    fn alternative_terms_carry_entered_fees_and_benchmark_share() {
        let table = RiskPosture::Moderate.benchmarks();
        let terms = AlternativeTerms {
            flat_fee: FlatFeeTerms { annual_fee: 75_000.0 },
            annual_cap: AnnualCapTerms {
                base_share_rate: 0.1,
                annual_cap: 90_000.0,
            },
        };
        assert_eq!(
            terms.model_for(ModelKind::FlatFee, table),
            CommercialModel::FlatFee(terms.flat_fee)
        );
        assert_eq!(
            terms.model_for(ModelKind::AnnualCap, table),
            CommercialModel::AnnualCap(terms.annual_cap)
        );
        assert_eq!(
            terms.model_for(ModelKind::RevenueShare, table),
            CommercialModel::RevenueShare(RevenueShareTerms::from_benchmarks(table))
        );
    }

    #[test]
    fn model_kinds_list_every_model_once() {
        assert_eq!(
            ModelKind::ALL,
            [ModelKind::RevenueShare, ModelKind::FlatFee, ModelKind::AnnualCap]
        );
    }
}
