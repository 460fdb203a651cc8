use std::collections::{BTreeMap, BTreeSet};

use super::{
    aggregate::aggregate_domains,
    benchmarks::{Assumption, AssumptionOverrides, RiskPosture, ValidationError},
    catalog::catalog,
    commercial::{AlternativeTerms, AnnualCapTerms, FlatFeeTerms, ModelKind},
    entities::CompositeInputs,
    lead::LeadRecord,
    projection::{project, Projection, ProjectionRequest},
    scenario::{DeploymentScope, ScenarioInputs},
};

/// Funnel state shared across steps. Everything downstream of it is re-derived on read.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub selected_domains: BTreeSet<String>,
    pub posture: RiskPosture,
    pub model_kind: ModelKind,
    pub flat_fee: FlatFeeTerms,
    pub annual_cap: AnnualCapTerms,
    /// `None` follows the domain count.
    pub scope_override: Option<DeploymentScope>,
    pub scenario: ScenarioInputs,
    /// Raw text per assumption key as typed on the assumptions step.
    pub override_inputs: BTreeMap<&'static str, String>,
    pub lead: Option<LeadRecord>,
}

impl AppState {
    pub fn toggle_domain(&mut self, id: &str) {
        if !self.selected_domains.remove(id) {
            self.selected_domains.insert(id.to_string());
        }
    }

    pub fn composite(&self) -> CompositeInputs {
        let ids: Vec<&str> = self.selected_domains.iter().map(String::as_str).collect();
        aggregate_domains(&ids, catalog())
    }

    pub fn scope(&self) -> DeploymentScope {
        self.scope_override
            .unwrap_or_else(|| DeploymentScope::for_domain_count(self.selected_domains.len()))
    }

    pub fn overrides(&self) -> Result<AssumptionOverrides, ValidationError> {
        AssumptionOverrides::from_pairs(
            self.override_inputs
                .iter()
                .map(|(key, value)| (*key, value.as_str())),
        )
    }

    pub fn set_override_input(&mut self, assumption: Assumption, raw: String) {
        if raw.trim().is_empty() {
            self.override_inputs.remove(assumption.key());
        } else {
            self.override_inputs.insert(assumption.key(), raw);
        }
    }

    pub fn projection_request(&self) -> Result<ProjectionRequest, ValidationError> {
        let overrides = self.overrides()?;
        let table = overrides.apply(self.posture.benchmarks())?;
        let alternatives = AlternativeTerms {
            flat_fee: self.flat_fee,
            annual_cap: self.annual_cap,
        };
        let model = alternatives.model_for(self.model_kind, &table);

        Ok(ProjectionRequest {
            composite: self.composite(),
            scope: self.scope(),
            posture: self.posture,
            model,
            scenario: self.scenario.clone(),
            overrides,
            alternatives,
        })
    }

    pub fn projection(&self) -> Result<Projection, ValidationError> {
        project(&self.projection_request()?)
    }

    pub fn apply_persisted(&mut self, lead: LeadRecord) {
        self.lead = Some(lead);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commercial::CommercialModel;

    #[test]
    fn toggling_twice_deselects() {
        let mut state = AppState::default();
        state.toggle_domain("metro-wire");
        assert!(state.selected_domains.contains("metro-wire"));
        state.toggle_domain("metro-wire");
        assert!(state.selected_domains.is_empty());
    }

    #[test]
    fn scope_follows_selection_unless_overridden() {
        let mut state = AppState::default();
        for domain in catalog().iter().take(15) {
            state.toggle_domain(domain.id);
        }
        assert_eq!(state.scope(), DeploymentScope::FullPortfolio);

        state.scope_override = Some(DeploymentScope::Single);
        assert_eq!(state.scope(), DeploymentScope::Single);
    }

    #[test]
    fn bad_override_text_surfaces_as_validation_error() {
        let mut state = AppState::default();
        state.set_override_input(Assumption::CpmPremium, "1.7".into());
        assert!(matches!(
            state.projection(),
            Err(ValidationError::OutOfRange { .. })
        ));

        state.set_override_input(Assumption::CpmPremium, String::new());
        assert!(state.projection().is_ok());
    }

    #[test]
    fn revenue_share_terms_follow_overridden_benchmarks() {
        let mut state = AppState::default();
        state.set_override_input(Assumption::RevenueShareRate, "0.2".into());
        let request = state.projection_request().unwrap();
        match request.model {
            CommercialModel::RevenueShare(terms) => assert_eq!(terms.share_rate, 0.2),
            other => panic!("unexpected model {other:?}"),
        }
    }

    #[test]
    fn comparison_uses_entered_terms_whichever_model_is_selected() {
        let mut state = AppState::default();
        state.toggle_domain("daily-ledger");
        state.flat_fee = FlatFeeTerms { annual_fee: 60_000.0 };
        state.annual_cap = AnnualCapTerms {
            base_share_rate: 0.10,
            annual_cap: 90_000.0,
        };

        let totals = |kind: ModelKind, state: &AppState| {
            state
                .projection()
                .unwrap()
                .comparison
                .into_iter()
                .find(|entry| entry.model == kind)
                .unwrap()
        };

        state.model_kind = ModelKind::FlatFee;
        let flat_selected = totals(ModelKind::FlatFee, &state);
        let cap_unselected = totals(ModelKind::AnnualCap, &state);
        state.model_kind = ModelKind::RevenueShare;
        let flat_unselected = totals(ModelKind::FlatFee, &state);
        state.model_kind = ModelKind::AnnualCap;
        let cap_selected = totals(ModelKind::AnnualCap, &state);

        assert_eq!(flat_selected, flat_unselected);
        assert_eq!(flat_selected.total_vendor_share, 180_000.0);
        assert_eq!(cap_selected, cap_unselected);
    }

    #[test]
    fn invalid_alternative_terms_are_rejected() {
        let mut state = AppState::default();
        state.flat_fee = FlatFeeTerms { annual_fee: -1.0 };
        assert!(matches!(
            state.projection(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
