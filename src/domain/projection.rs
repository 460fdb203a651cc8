//! Month-by-month revenue projection over a fixed horizon.
//!
//! Everything here is a pure function of the request: the whole projection is
//! rebuilt on every call and identical requests yield identical output.

use serde::{Deserialize, Serialize};

use super::{
    benchmarks::{AssumptionOverrides, BenchmarkTable, RiskPosture, ValidationError},
    commercial::{
        campaign_cap_threshold, AlternativeTerms, CampaignEconomics, CommercialModel, ModelKind,
        RevenueShareTerms,
    },
    entities::CompositeInputs,
    scenario::{DeploymentScope, ScenarioInputs},
};

pub const HORIZON_MONTHS: u32 = 36;

/// Dampening of addressability gains for audiences that block or strip identifiers.
pub const TECH_SAVVY_DRAG: f64 = 0.30;

/// Rollout curve: months 1-3, 4-6, then full effect.
pub fn ramp_multiplier(month: u32) -> f64 {
    match month {
        0..=3 => 0.15,
        4..=6 => 0.35,
        _ => 1.0,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub composite: CompositeInputs,
    pub scope: DeploymentScope,
    pub posture: RiskPosture,
    pub model: CommercialModel,
    pub scenario: ScenarioInputs,
    pub overrides: AssumptionOverrides,
    /// Terms for the comparison models other than `model`.
    pub alternatives: AlternativeTerms,
}

impl ProjectionRequest {
    /// Request with default sliders, revenue share and the scope implied by the selection size.
    pub fn for_composite(composite: CompositeInputs, posture: RiskPosture) -> Self {
        let scope = DeploymentScope::for_domain_count(composite.domain_count);
        let alternatives = AlternativeTerms::default();
        Self {
            composite,
            scope,
            posture,
            model: alternatives.model_for(ModelKind::RevenueShare, posture.benchmarks()),
            scenario: ScenarioInputs::default(),
            overrides: AssumptionOverrides::default(),
            alternatives,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMonth {
    pub month: u32,
    pub ramp: f64,
    pub base_revenue: f64,
    pub incremental_revenue: f64,
    pub vendor_share: f64,
    pub publisher_net_gain: f64,
    pub value_suppressed: f64,
    pub cumulative_incremental: f64,
    pub cumulative_vendor_share: f64,
    pub cumulative_net_gain: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearTotals {
    pub year: u32,
    pub incremental_revenue: f64,
    pub vendor_share: f64,
    pub net_gain: f64,
    pub value_suppressed: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub model: ModelKind,
    pub total_base_revenue: f64,
    pub total_incremental: f64,
    pub total_vendor_share: f64,
    pub total_net_gain: f64,
    pub total_value_suppressed: f64,
    /// Incremental revenue per unit of vendor share; `None` when nothing was paid.
    pub roi_multiple: Option<f64>,
    /// Net gain as a percentage of base revenue; `None` without base revenue.
    pub net_gain_pct: Option<f64>,
    /// First month whose cumulative net gain is positive.
    pub payback_month: Option<u32>,
    pub yearly: Vec<YearTotals>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddressabilityUplift {
    pub baseline_rate: f64,
    pub improved_rate: f64,
    pub gain: f64,
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapiUplift {
    pub campaigns_per_year: u32,
    pub campaign: CampaignEconomics,
    pub monthly_revenue: f64,
    pub annual_net_to_publisher: f64,
    pub cap_threshold: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelComparison {
    pub model: ModelKind,
    pub total_vendor_share: f64,
    pub total_net_gain: f64,
    pub total_value_suppressed: f64,
    pub roi_multiple: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Composite after slider CPM overrides.
    pub inputs: CompositeInputs,
    pub scope: DeploymentScope,
    pub posture: RiskPosture,
    pub model: CommercialModel,
    /// Posture table with overrides applied.
    pub benchmarks: BenchmarkTable,
    pub months: Vec<ProjectionMonth>,
    pub summary: ProjectionSummary,
    pub addressability: AddressabilityUplift,
    pub capi: CapiUplift,
    /// Annual ID-infrastructure spend avoided.
    pub id_infrastructure_savings: f64,
    pub comparison: Vec<ModelComparison>,
}

/// Steady-state monthly drivers shared by every commercial model.
struct UpliftDrivers {
    base_revenue: f64,
    addressability: AddressabilityUplift,
    capi_monthly: f64,
    scope_multiplier: f64,
}

impl UpliftDrivers {
    fn compute(
        inputs: &CompositeInputs,
        scenario: &ScenarioInputs,
        table: &BenchmarkTable,
        scope: DeploymentScope,
    ) -> Self {
        let impressions = inputs.monthly_pageviews as f64 * table.ads_per_pageview;
        let base_revenue = impressions / 1000.0 * inputs.blended_cpm();

        let non_safari = 1.0 - inputs.safari_share;
        let baseline_rate = non_safari * table.baseline_match_rate;
        let improved_rate =
            non_safari * table.improved_match_rate + inputs.safari_share * table.safari_match_rate;
        let gain = (improved_rate - baseline_rate).max(0.0)
            * (1.0 - TECH_SAVVY_DRAG * inputs.tech_savvy);

        let scope_multiplier = scope.multiplier();
        let addressability_monthly = base_revenue * gain * table.cpm_premium * scope_multiplier;
        let capi_monthly = scenario.campaigns_per_year as f64 / 12.0
            * scenario.avg_campaign_spend
            * table.conversion_multiplier
            * scope_multiplier;

        Self {
            base_revenue,
            addressability: AddressabilityUplift {
                baseline_rate,
                improved_rate,
                gain,
                monthly_revenue: addressability_monthly,
                annual_revenue: addressability_monthly * 12.0,
            },
            capi_monthly,
            scope_multiplier,
        }
    }

    fn steady_incremental(&self) -> f64 {
        self.addressability.monthly_revenue + self.capi_monthly
    }
}

/// Builds the full projection for one request.
pub fn project(request: &ProjectionRequest) -> Result<Projection, ValidationError> {
    request.scenario.validate()?;
    request.model.validate()?;
    request.alternatives.validate()?;
    let table = request.overrides.apply(request.posture.benchmarks())?;

    let inputs = request
        .composite
        .clone()
        .with_cpm_overrides(request.scenario.display_cpm, request.scenario.video_cpm);
    let drivers = UpliftDrivers::compute(&inputs, &request.scenario, &table, request.scope);
    let reference = RevenueShareTerms::from_benchmarks(&table);

    let months = run_model(&drivers, &request.model, &reference);
    let summary = summarize(request.model.kind(), &months);

    let comparison = ModelKind::ALL
        .iter()
        .map(|kind| {
            let model = if *kind == request.model.kind() {
                request.model
            } else {
                request.alternatives.model_for(*kind, &table)
            };
            let rows = run_model(&drivers, &model, &reference);
            let totals = summarize(*kind, &rows);
            ModelComparison {
                model: *kind,
                total_vendor_share: totals.total_vendor_share,
                total_net_gain: totals.total_net_gain,
                total_value_suppressed: totals.total_value_suppressed,
                roi_multiple: totals.roi_multiple,
            }
        })
        .collect();

    let campaign = CampaignEconomics::for_spend(
        request.scenario.avg_campaign_spend,
        table.conversion_multiplier,
        &reference,
    );
    let capi = CapiUplift {
        campaigns_per_year: request.scenario.campaigns_per_year,
        annual_net_to_publisher: campaign.net_to_publisher
            * request.scenario.campaigns_per_year as f64,
        cap_threshold: campaign_cap_threshold(table.conversion_multiplier, &reference),
        monthly_revenue: drivers.capi_monthly,
        campaign,
    };

    let id_infrastructure_savings =
        inputs.monthly_pageviews as f64 * 12.0 / 1_000_000.0 * table.id_savings_per_million;

    log::debug!(
        "Projected {} over {} months: incremental {:.0}, vendor {:.0}, scope x{}",
        summary.model.label(),
        HORIZON_MONTHS,
        summary.total_incremental,
        summary.total_vendor_share,
        drivers.scope_multiplier
    );

    Ok(Projection {
        inputs,
        scope: request.scope,
        posture: request.posture,
        model: request.model,
        benchmarks: table,
        months,
        summary,
        addressability: drivers.addressability,
        capi,
        id_infrastructure_savings,
        comparison,
    })
}

fn run_model(
    drivers: &UpliftDrivers,
    model: &CommercialModel,
    reference: &RevenueShareTerms,
) -> Vec<ProjectionMonth> {
    let mut rows: Vec<ProjectionMonth> = Vec::with_capacity(HORIZON_MONTHS as usize);
    let mut cumulative_incremental = 0.0;
    let mut cumulative_vendor_share = 0.0;
    let mut cumulative_net_gain = 0.0;

    for month in 1..=HORIZON_MONTHS {
        let ramp = ramp_multiplier(month);
        let incremental = drivers.steady_incremental() * ramp;
        let aligned = reference.fee(incremental);

        let vendor_share = match model {
            CommercialModel::RevenueShare(terms) => terms.fee(incremental),
            CommercialModel::FlatFee(terms) => terms.monthly_fee(),
            CommercialModel::AnnualCap(terms) => {
                // Trailing 11 months plus this one form a 12-month window.
                let start = rows.len().saturating_sub(11);
                let trailing: f64 = rows[start..].iter().map(|r| r.vendor_share).sum();
                let headroom = (terms.annual_cap - trailing).max(0.0);
                (incremental * terms.base_share_rate).min(headroom)
            }
        };

        let value_suppressed = match model {
            CommercialModel::RevenueShare(_) => 0.0,
            CommercialModel::FlatFee(_) => (vendor_share - aligned).max(0.0),
            CommercialModel::AnnualCap(_) => (aligned - vendor_share).max(0.0),
        };

        let publisher_net_gain = incremental - vendor_share;
        cumulative_incremental += incremental;
        cumulative_vendor_share += vendor_share;
        cumulative_net_gain += publisher_net_gain;

        rows.push(ProjectionMonth {
            month,
            ramp,
            base_revenue: drivers.base_revenue,
            incremental_revenue: incremental,
            vendor_share,
            publisher_net_gain,
            value_suppressed,
            cumulative_incremental,
            cumulative_vendor_share,
            cumulative_net_gain,
        });
    }

    rows
}

fn summarize(model: ModelKind, months: &[ProjectionMonth]) -> ProjectionSummary {
    let total_base_revenue: f64 = months.iter().map(|m| m.base_revenue).sum();
    let total_incremental: f64 = months.iter().map(|m| m.incremental_revenue).sum();
    let total_vendor_share: f64 = months.iter().map(|m| m.vendor_share).sum();
    let total_net_gain: f64 = months.iter().map(|m| m.publisher_net_gain).sum();
    let total_value_suppressed: f64 = months.iter().map(|m| m.value_suppressed).sum();

    let roi_multiple = if total_vendor_share > 0.0 {
        Some(total_incremental / total_vendor_share)
    } else {
        None
    };
    let net_gain_pct = if total_base_revenue > 0.0 {
        Some(total_net_gain / total_base_revenue * 100.0)
    } else {
        None
    };
    let payback_month = months
        .iter()
        .find(|m| m.cumulative_net_gain > 0.0)
        .map(|m| m.month);

    let yearly = months
        .chunks(12)
        .enumerate()
        .map(|(idx, chunk)| YearTotals {
            year: idx as u32 + 1,
            incremental_revenue: chunk.iter().map(|m| m.incremental_revenue).sum(),
            vendor_share: chunk.iter().map(|m| m.vendor_share).sum(),
            net_gain: chunk.iter().map(|m| m.publisher_net_gain).sum(),
            value_suppressed: chunk.iter().map(|m| m.value_suppressed).sum(),
        })
        .collect();

    ProjectionSummary {
        model,
        total_base_revenue,
        total_incremental,
        total_vendor_share,
        total_net_gain,
        total_value_suppressed,
        roi_multiple,
        net_gain_pct,
        payback_month,
        yearly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        aggregate::aggregate_domains,
        benchmarks::Assumption,
        catalog::catalog,
        commercial::{AnnualCapTerms, FlatFeeTerms},
    };

    fn portfolio_request() -> ProjectionRequest {
        let composite = aggregate_domains(
            &["daily-ledger", "capital-brief", "byte-report", "final-whistle"],
            catalog(),
        );
        ProjectionRequest::for_composite(composite, RiskPosture::Moderate)
    }

    fn with_model(model: CommercialModel) -> ProjectionRequest {
        ProjectionRequest {
            model,
            ..portfolio_request()
        }
    }

    #[test]
    fn horizon_is_thirty_six_months() {
        let projection = project(&portfolio_request()).unwrap();
        assert_eq!(projection.months.len(), 36);
        assert_eq!(projection.months.first().unwrap().month, 1);
        assert_eq!(projection.months.last().unwrap().month, 36);
        assert_eq!(projection.summary.yearly.len(), 3);
    }

    #[test]
    fn ramp_is_monotonic_and_flat_after_month_six() {
        let mut previous = 0.0;
        for month in 1..=12 {
            let ramp = ramp_multiplier(month);
            assert!(ramp >= previous, "month {month}");
            previous = ramp;
        }
        assert_eq!(ramp_multiplier(1), 0.15);
        assert_eq!(ramp_multiplier(3), 0.15);
        assert_eq!(ramp_multiplier(4), 0.35);
        assert_eq!(ramp_multiplier(6), 0.35);
        for month in 7..=HORIZON_MONTHS {
            assert_eq!(ramp_multiplier(month), 1.0);
        }
    }

    #[test]
    fn identical_requests_produce_identical_projections() {
        let request = with_model(CommercialModel::AnnualCap(AnnualCapTerms::default()));
        let first = project(&request).unwrap();
        let second = project(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn revenue_share_never_suppresses_value() {
        let projection = project(&portfolio_request()).unwrap();
        assert!(projection.months.iter().all(|m| m.value_suppressed == 0.0));
        assert_eq!(projection.summary.total_value_suppressed, 0.0);
    }

    #[test]
    fn revenue_share_vendor_take_is_capped_monthly() {
        let projection = project(&portfolio_request()).unwrap();
        let cap = projection.benchmarks.campaign_cap;
        for m in &projection.months {
            let expected = (m.incremental_revenue * 0.125).min(cap);
            assert!((m.vendor_share - expected).abs() < 1e-9);
            assert!(m.vendor_share <= cap);
        }
    }

    #[test]
    fn alternative_models_report_non_negative_suppression() {
        for model in [
            CommercialModel::FlatFee(FlatFeeTerms::default()),
            CommercialModel::AnnualCap(AnnualCapTerms::default()),
        ] {
            let projection = project(&with_model(model)).unwrap();
            assert!(projection.months.iter().all(|m| m.value_suppressed >= 0.0));
        }
    }

    #[test]
    fn flat_fee_can_produce_negative_net_gain_in_ramp_months() {
        let composite = aggregate_domains(&["harbor-herald"], catalog());
        let mut request = ProjectionRequest::for_composite(composite, RiskPosture::Conservative);
        request.model = CommercialModel::FlatFee(FlatFeeTerms::default());
        request.scenario.campaigns_per_year = 0;

        let projection = project(&request).unwrap();
        let first = &projection.months[0];
        assert!((first.vendor_share - 12_500.0).abs() < 1e-9);
        assert!(first.publisher_net_gain < 0.0);
        assert!(first.value_suppressed > 0.0);
        assert!(projection
            .months
            .iter()
            .all(|m| (m.vendor_share - 12_500.0).abs() < 1e-9));
    }

    #[test]
    fn annual_cap_never_exceeds_cap_in_any_twelve_month_window() {
        let terms = AnnualCapTerms {
            base_share_rate: 0.125,
            annual_cap: 60_000.0,
        };
        let projection = project(&with_model(CommercialModel::AnnualCap(terms))).unwrap();

        let shares: Vec<f64> = projection.months.iter().map(|m| m.vendor_share).collect();
        assert!(shares.iter().any(|s| s.abs() < 1e-6), "cap should bind in this scenario");
        for window in shares.windows(12) {
            let total: f64 = window.iter().sum();
            assert!(total <= terms.annual_cap + 1e-6, "window total {total}");
        }
        for year in &projection.summary.yearly {
            assert!(year.vendor_share <= terms.annual_cap + 1e-6);
        }
        assert!(projection.summary.total_value_suppressed > 0.0);
    }

    #[test]
    fn zero_activity_reports_roi_as_not_applicable() {
        let ids: [&str; 0] = [];
        let composite = aggregate_domains(&ids, catalog());
        let mut request = ProjectionRequest::for_composite(composite, RiskPosture::Moderate);
        request.scenario.campaigns_per_year = 0;

        let projection = project(&request).unwrap();
        assert_eq!(projection.summary.total_incremental, 0.0);
        assert_eq!(projection.summary.roi_multiple, None);
        assert_eq!(projection.summary.net_gain_pct, None);
        assert_eq!(projection.summary.payback_month, None);
    }

    #[test]
    fn capi_uplift_matches_campaign_economics() {
        let mut request = portfolio_request();
        request.scenario.campaigns_per_year = 1;
        request.scenario.avg_campaign_spend = 1_000_000.0;

        let projection = project(&request).unwrap();
        let campaign = &projection.capi.campaign;
        assert!((campaign.incremental_revenue - 400_000.0).abs() < 1e-6);
        assert_eq!(campaign.capped_fee, 30_000.0);
        assert!((campaign.net_to_publisher - 370_000.0).abs() < 1e-6);
        assert!((projection.capi.cap_threshold.unwrap() - 600_000.0).abs() < 1e-6);
    }

    #[test]
    fn scope_scales_incremental_revenue() {
        let mut single = portfolio_request();
        single.scope = DeploymentScope::Single;
        let mut full = portfolio_request();
        full.scope = DeploymentScope::FullPortfolio;

        let single = project(&single).unwrap();
        let full = project(&full).unwrap();
        let ratio = full.months[10].incremental_revenue / single.months[10].incremental_revenue;
        assert!((ratio - 1.2).abs() < 1e-9);
    }

    #[test]
    fn ramp_applies_to_full_uplift() {
        let projection = project(&portfolio_request()).unwrap();
        let steady = projection.months[12].incremental_revenue;
        assert!((projection.months[0].incremental_revenue - steady * 0.15).abs() < 1e-6);
        assert!((projection.months[4].incremental_revenue - steady * 0.35).abs() < 1e-6);
    }

    #[test]
    fn optimistic_posture_projects_more_than_conservative() {
        let mut low = portfolio_request();
        low.posture = RiskPosture::Conservative;
        let mut high = portfolio_request();
        high.posture = RiskPosture::Optimistic;

        let low = project(&low).unwrap();
        let high = project(&high).unwrap();
        assert!(high.summary.total_incremental > low.summary.total_incremental);
    }

    #[test]
    fn overrides_flow_into_projection_and_bad_ones_are_rejected() {
        let mut request = portfolio_request();
        request
            .overrides
            .set(Assumption::ConversionMultiplier, 0.2)
            .unwrap();
        let projection = project(&request).unwrap();
        assert_eq!(projection.benchmarks.conversion_multiplier, 0.2);

        let mut request = portfolio_request();
        request.overrides.set(Assumption::BaselineMatchRate, 0.9).unwrap();
        assert!(matches!(
            project(&request),
            Err(ValidationError::ImprovedBelowBaseline { .. })
        ));
    }

    #[test]
    fn comparison_covers_every_model() {
        let projection = project(&portfolio_request()).unwrap();
        let kinds: Vec<_> = projection.comparison.iter().map(|c| c.model).collect();
        assert_eq!(kinds, ModelKind::ALL.to_vec());

        let revshare = &projection.comparison[0];
        assert_eq!(revshare.total_value_suppressed, 0.0);
        assert!((revshare.total_net_gain - projection.summary.total_net_gain).abs() < 1e-9);
    }

    #[test]
    fn cumulative_columns_are_running_totals() {
        let projection = project(&portfolio_request()).unwrap();
        let last = projection.months.last().unwrap();
        assert!((last.cumulative_incremental - projection.summary.total_incremental).abs() < 1e-6);
        assert!((last.cumulative_net_gain - projection.summary.total_net_gain).abs() < 1e-6);
    }

    #[test]
    fn id_savings_scale_with_pageviews() {
        let projection = project(&portfolio_request()).unwrap();
        let expected = projection.inputs.monthly_pageviews as f64 * 12.0 / 1_000_000.0 * 20.0;
        assert!((projection.id_infrastructure_savings - expected).abs() < 1e-6);
    }
}
