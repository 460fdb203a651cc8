use std::collections::HashSet;

use super::entities::{CompositeInputs, PublisherDomain};

/// Reduces the selected properties into one pageview-weighted composite.
///
/// Unknown identifiers and duplicates are ignored. Accumulation walks the
/// catalog in its own order, so the result is independent of selection order.
/// With nothing selected (or no traffic) the default composite is returned.
pub fn aggregate_domains<S: AsRef<str>>(
    ids: &[S],
    catalog: &[PublisherDomain],
) -> CompositeInputs {
    let selected = selected_domains(ids, catalog);

    let total_pageviews: u64 = selected.iter().map(|d| d.monthly_pageviews).sum();
    if selected.is_empty() || total_pageviews == 0 {
        return CompositeInputs::default_composite();
    }

    let weight_sum = total_pageviews as f64;
    let weighted = |field: fn(&PublisherDomain) -> f64| -> f64 {
        selected
            .iter()
            .map(|d| field(*d) * d.monthly_pageviews as f64)
            .sum::<f64>()
            / weight_sum
    };

    CompositeInputs {
        monthly_pageviews: total_pageviews,
        display_cpm: weighted(|d| d.display_cpm),
        video_cpm: weighted(|d| d.video_cpm),
        display_share: weighted(|d| d.display_share),
        tech_savvy: weighted(|d| d.audience.tech_savvy),
        safari_share: weighted(|d| d.audience.safari_share),
        domain_count: selected.len(),
    }
}

/// Normalized pageview weight per matched domain, in catalog order.
pub fn pageview_weights<S: AsRef<str>>(
    ids: &[S],
    catalog: &[PublisherDomain],
) -> Vec<(&'static str, f64)> {
    let selected = selected_domains(ids, catalog);
    let total: u64 = selected.iter().map(|d| d.monthly_pageviews).sum();
    if total == 0 {
        return Vec::new();
    }

    selected
        .iter()
        .map(|d| (d.id, d.monthly_pageviews as f64 / total as f64))
        .collect()
}

fn selected_domains<'a, S: AsRef<str>>(
    ids: &[S],
    catalog: &'a [PublisherDomain],
) -> Vec<&'a PublisherDomain> {
    let wanted: HashSet<&str> = ids.iter().map(|id| id.as_ref()).collect();

    for id in &wanted {
        if !catalog.iter().any(|d| d.id == *id) {
            log::debug!("Ignoring unknown domain id {id:?}");
        }
    }

    catalog
        .iter()
        .filter(|d| wanted.contains(d.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::catalog;

    const EPS: f64 = 1e-9;

    fn within(value: f64, values: impl Iterator<Item = f64> + Clone) -> bool {
        let min = values.clone().fold(f64::INFINITY, f64::min);
        let max = values.fold(f64::NEG_INFINITY, f64::max);
        value >= min - EPS && value <= max + EPS
    }

    #[test]
    fn empty_selection_returns_default_composite() {
        let ids: [&str; 0] = [];
        let composite = aggregate_domains(&ids, catalog());
        assert_eq!(composite, CompositeInputs::default_composite());
    }

    #[test]
    fn only_unknown_ids_returns_default_composite() {
        let composite = aggregate_domains(&["nope", "also-nope"], catalog());
        assert_eq!(composite, CompositeInputs::default_composite());
    }

    #[test]
    fn single_domain_passes_through_its_values() {
        let composite = aggregate_domains(&["metro-wire"], catalog());
        let source = crate::domain::catalog::find("metro-wire").unwrap();
        assert_eq!(composite.monthly_pageviews, source.monthly_pageviews);
        assert!((composite.display_cpm - source.display_cpm).abs() < EPS);
        assert!((composite.safari_share - source.audience.safari_share).abs() < EPS);
        assert_eq!(composite.domain_count, 1);
    }

    #[test]
    fn weighted_mean_matches_hand_computation() {
        let composite = aggregate_domains(&["daily-ledger", "metro-wire"], catalog());
        let expected = (3.10 * 42_000_000.0 + 2.40 * 18_500_000.0) / 60_500_000.0;
        assert_eq!(composite.monthly_pageviews, 60_500_000);
        assert!((composite.display_cpm - expected).abs() < EPS);
    }

    #[test]
    fn unknown_and_duplicate_ids_are_ignored() {
        let clean = aggregate_domains(&["pitchside", "wellnest"], catalog());
        let noisy = aggregate_domains(
            &["pitchside", "bogus", "wellnest", "pitchside"],
            catalog(),
        );
        assert_eq!(clean, noisy);
    }

    #[test]
    fn selection_order_does_not_change_result() {
        let forward = aggregate_domains(&["byte-report", "carry-on", "final-whistle"], catalog());
        let reverse = aggregate_domains(&["final-whistle", "carry-on", "byte-report"], catalog());
        assert_eq!(forward, reverse);
    }

    #[test]
    fn weights_sum_to_one_and_outputs_do_not_extrapolate() {
        let ids: Vec<&str> = catalog().iter().step_by(3).map(|d| d.id).collect();
        let weights = pageview_weights(&ids, catalog());
        let total: f64 = weights.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < EPS);

        let composite = aggregate_domains(&ids, catalog());
        let selected: Vec<_> = catalog().iter().filter(|d| ids.contains(&d.id)).collect();
        assert!(within(composite.display_cpm, selected.iter().map(|d| d.display_cpm)));
        assert!(within(composite.video_cpm, selected.iter().map(|d| d.video_cpm)));
        assert!(within(composite.display_share, selected.iter().map(|d| d.display_share)));
        assert!(within(composite.tech_savvy, selected.iter().map(|d| d.audience.tech_savvy)));
        assert!(within(
            composite.safari_share,
            selected.iter().map(|d| d.audience.safari_share)
        ));
    }

    #[test]
    fn cpm_overrides_replace_weighted_values() {
        let composite = aggregate_domains(&["daily-ledger"], catalog())
            .with_cpm_overrides(Some(5.0), None);
        assert_eq!(composite.display_cpm, 5.0);
        assert!((composite.video_cpm - 14.50).abs() < EPS);
    }
}
