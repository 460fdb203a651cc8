//! Aggregation and projection engine behind the uplift funnel.

pub mod aggregate;
pub mod app_state;
pub mod benchmarks;
pub mod catalog;
pub mod commercial;
pub mod entities;
pub mod format;
pub mod lead;
pub mod projection;
pub mod recommendation;
pub mod report;
pub mod scenario;

pub use aggregate::{aggregate_domains, pageview_weights};
pub use app_state::AppState;
pub use benchmarks::{
    Assumption, AssumptionOverrides, BenchmarkTable, RiskPosture, ValidationError,
};
pub use commercial::{
    campaign_cap_threshold, AlternativeTerms, AnnualCapTerms, CampaignEconomics, CommercialModel, FlatFeeTerms,
    ModelKind, RevenueShareTerms,
};
pub use entities::{AudienceProfile, CompositeInputs, DomainCategory, PublisherDomain};
pub use lead::{LeadField, LeadForm, LeadRecord, LeadValidationError};
pub use projection::{
    project, ramp_multiplier, ModelComparison, Projection, ProjectionMonth, ProjectionRequest,
    ProjectionSummary, HORIZON_MONTHS,
};
pub use recommendation::{recommendations, Priority, Recommendation};
pub use report::render_report;
pub use scenario::{DeploymentScope, ScenarioInputs, SliderSpec};
