use serde::{Deserialize, Serialize};

use super::{commercial::ModelKind, entities::CompositeInputs, projection::Projection};

pub const HIGH_SAFARI_SHARE: f64 = 0.35;
pub const SLOW_PAYBACK_MONTH: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub detail: String,
}

impl Recommendation {
    fn new(priority: Priority, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            priority,
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Advice derived from one projection, most urgent first.
pub fn recommendations(composite: &CompositeInputs, projection: &Projection) -> Vec<Recommendation> {
    let mut items = Vec::new();

    if composite.is_default() {
        items.push(Recommendation::new(
            Priority::High,
            "Select your properties",
            "No domains are selected, so the estimate runs on industry defaults with no traffic. \
             Pick the sites you operate for a personalised figure.",
        ));
    }

    if projection.inputs.safari_share >= HIGH_SAFARI_SHARE {
        items.push(Recommendation::new(
            Priority::High,
            "Lead with Safari and iOS addressability",
            format!(
                "{:.0}% of your traffic arrives without a third-party identity. Matching it moves \
                 addressability from {:.0}% to {:.0}%.",
                projection.inputs.safari_share * 100.0,
                projection.addressability.baseline_rate * 100.0,
                projection.addressability.improved_rate * 100.0,
            ),
        ));
    }

    if let Some(threshold) = projection.capi.cap_threshold {
        if projection.capi.campaigns_per_year > 0 && projection.capi.campaign.spend > threshold {
            items.push(Recommendation::new(
                Priority::Medium,
                "Campaign cap engages",
                format!(
                    "Average campaign spend exceeds ${:.0}; every dollar above that keeps 100% of \
                     incremental revenue with you.",
                    threshold
                ),
            ));
        }
    }

    let suppressed = projection
        .comparison
        .iter()
        .filter(|c| c.model != ModelKind::RevenueShare && c.total_value_suppressed > 0.0)
        .map(|c| (c.model, c.total_value_suppressed))
        .max_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((model, amount)) = suppressed {
        let priority = if projection.model.kind() == ModelKind::RevenueShare {
            Priority::Low
        } else {
            Priority::High
        };
        items.push(Recommendation::new(
            priority,
            "Prefer revenue share",
            format!(
                "The {} model misaligns incentives by ${:.0} over three years; revenue share keeps \
                 vendor and publisher paid on the same outcome.",
                model.label().to_lowercase(),
                amount
            ),
        ));
    }

    match projection.summary.payback_month {
        Some(month) if month > SLOW_PAYBACK_MONTH => items.push(Recommendation::new(
            Priority::Medium,
            "Stage the rollout",
            format!(
                "Cumulative net gain turns positive in month {month}. Start with your highest-traffic \
                 domains to shorten payback."
            ),
        )),
        None if projection.summary.total_incremental > 0.0 => items.push(Recommendation::new(
            Priority::High,
            "Revisit the commercial terms",
            "Fees exceed incremental revenue across the whole horizon.",
        )),
        _ => {}
    }

    if items.iter().all(|item| item.priority == Priority::Low) {
        items.push(Recommendation::new(
            Priority::Low,
            "Proceed to a pilot",
            format!(
                "Projected net gain of ${:.0} over three years supports a pilot on your current \
                 portfolio.",
                projection.summary.total_net_gain
            ),
        ));
    }

    items.sort_by_key(|item| item.priority);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        aggregate::aggregate_domains,
        benchmarks::RiskPosture,
        catalog::catalog,
        commercial::{CommercialModel, FlatFeeTerms},
        projection::{project, ProjectionRequest},
    };

    fn run(ids: &[&str], tweak: impl FnOnce(&mut ProjectionRequest)) -> Vec<Recommendation> {
        let composite = aggregate_domains(ids, catalog());
        let mut request = ProjectionRequest::for_composite(composite.clone(), RiskPosture::Moderate);
        tweak(&mut request);
        let projection = project(&request).unwrap();
        recommendations(&composite, &projection)
    }

    #[test]
    fn empty_selection_asks_for_properties_first() {
        let items = run(&[], |_| {});
        assert_eq!(items[0].title, "Select your properties");
        assert_eq!(items[0].priority, Priority::High);
    }

    #[test]
    fn safari_heavy_portfolio_gets_safari_advice() {
        let items = run(&["wellnest", "home-table"], |_| {});
        assert!(items.iter().any(|i| i.title.contains("Safari")));
    }

    #[test]
    fn large_campaigns_trigger_cap_advice() {
        let items = run(&["daily-ledger"], |r| r.scenario.avg_campaign_spend = 900_000.0);
        assert!(items.iter().any(|i| i.title == "Campaign cap engages"));

        let items = run(&["daily-ledger"], |r| r.scenario.avg_campaign_spend = 100_000.0);
        assert!(!items.iter().any(|i| i.title == "Campaign cap engages"));
    }

    #[test]
    fn flat_fee_selection_escalates_revenue_share_advice() {
        let items = run(&["daily-ledger"], |r| {
            r.model = CommercialModel::FlatFee(FlatFeeTerms::default())
        });
        let advice = items.iter().find(|i| i.title == "Prefer revenue share").unwrap();
        assert_eq!(advice.priority, Priority::High);
    }

    #[test]
    fn items_are_sorted_by_priority() {
        let items = run(&["wellnest"], |r| r.scenario.avg_campaign_spend = 900_000.0);
        let priorities: Vec<_> = items.iter().map(|i| i.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);
        assert!(!items.is_empty());
    }
}
