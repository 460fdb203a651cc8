//! Plain-text personalised report, used for clipboard copy and file export.

use super::{
    entities::CompositeInputs,
    format::{format_fraction, format_pageviews, format_roi, format_usd},
    lead::LeadRecord,
    projection::Projection,
    recommendation::Recommendation,
};

pub const REPORT_TITLE: &str = "Identity Uplift Report";

pub fn render_report(
    lead: Option<&LeadRecord>,
    composite: &CompositeInputs,
    projection: &Projection,
    recommendations: &[Recommendation],
) -> String {
    let mut lines = vec![REPORT_TITLE.to_string(), "=".repeat(REPORT_TITLE.len())];

    if let Some(lead) = lead {
        lines.push(format!("Prepared for {} ({})", lead.full_name(), lead.company));
        lines.push(format!("Contact: {}", lead.email));
    }
    lines.push(format!(
        "Scenario: {} posture, {}, {}",
        projection.posture.label(),
        projection.scope.label(),
        projection.model.kind().label()
    ));
    lines.push(String::new());

    lines.push("Portfolio".to_string());
    if composite.is_default() {
        lines.push("  No domains selected; industry defaults applied.".to_string());
    } else {
        lines.push(format!(
            "  {} domains, {} monthly pageviews",
            composite.domain_count,
            format_pageviews(composite.monthly_pageviews)
        ));
    }
    lines.push(format!(
        "  Display CPM ${:.2}, video CPM ${:.2}, display share {}",
        projection.inputs.display_cpm,
        projection.inputs.video_cpm,
        format_fraction(projection.inputs.display_share)
    ));
    lines.push(format!(
        "  Safari/iOS traffic {}, tech-savvy audience {}",
        format_fraction(projection.inputs.safari_share),
        format_fraction(projection.inputs.tech_savvy)
    ));
    lines.push(String::new());

    let summary = &projection.summary;
    lines.push("36-month outlook".to_string());
    lines.push(format!(
        "  Incremental revenue   {}",
        format_usd(summary.total_incremental)
    ));
    lines.push(format!(
        "  Vendor share          {}",
        format_usd(summary.total_vendor_share)
    ));
    lines.push(format!(
        "  Net to publisher      {}",
        format_usd(summary.total_net_gain)
    ));
    lines.push(format!(
        "  ROI multiple          {}",
        format_roi(summary.roi_multiple)
    ));
    lines.push(format!(
        "  Net gain vs. base     {}",
        summary
            .net_gain_pct
            .map(|pct| format!("{pct:.1}%"))
            .unwrap_or_else(|| "n/a".to_string())
    ));
    lines.push(format!(
        "  Payback               {}",
        summary
            .payback_month
            .map(|month| format!("month {month}"))
            .unwrap_or_else(|| "not within horizon".to_string())
    ));
    lines.push(String::new());

    lines.push("Uplift drivers (steady state)".to_string());
    lines.push(format!(
        "  Addressability {} -> {}: {} / month",
        format_fraction(projection.addressability.baseline_rate),
        format_fraction(projection.addressability.improved_rate),
        format_usd(projection.addressability.monthly_revenue)
    ));
    lines.push(format!(
        "  CAPI campaigns ({} / year): {} / month",
        projection.capi.campaigns_per_year,
        format_usd(projection.capi.monthly_revenue)
    ));
    lines.push(format!(
        "  ID infrastructure savings: {} / year",
        format_usd(projection.id_infrastructure_savings)
    ));
    lines.push(String::new());

    lines.push("By year".to_string());
    for year in &summary.yearly {
        lines.push(format!(
            "  Year {}: incremental {}, vendor {}, net {}",
            year.year,
            format_usd(year.incremental_revenue),
            format_usd(year.vendor_share),
            format_usd(year.net_gain)
        ));
    }
    lines.push(String::new());

    lines.push("Commercial models".to_string());
    for entry in &projection.comparison {
        lines.push(format!(
            "  {:<16} net {}, vendor {}, suppressed {}, ROI {}",
            entry.model.label(),
            format_usd(entry.total_net_gain),
            format_usd(entry.total_vendor_share),
            format_usd(entry.total_value_suppressed),
            format_roi(entry.roi_multiple)
        ));
    }

    if !recommendations.is_empty() {
        lines.push(String::new());
        lines.push("Recommendations".to_string());
        for item in recommendations {
            lines.push(format!("  [{}] {}", item.priority.label(), item.title));
            lines.push(format!("      {}", item.detail));
        }
    }

    lines.join("\n")
}
