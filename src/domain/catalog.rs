//! Static publisher catalog offered in the domain picker.

use super::entities::{AudienceProfile, DomainCategory, PublisherDomain};

macro_rules! domain {
    ($id:literal, $name:literal, $pv:expr, $dcpm:expr, $vcpm:expr, $split:expr, $cat:ident, $tech:expr, $safari:expr) => {
        PublisherDomain {
            id: $id,
            name: $name,
            monthly_pageviews: $pv,
            display_cpm: $dcpm,
            video_cpm: $vcpm,
            display_share: $split,
            category: DomainCategory::$cat,
            audience: AudienceProfile {
                tech_savvy: $tech,
                safari_share: $safari,
            },
        }
    };
}

static CATALOG: [PublisherDomain; 18] = [
    domain!("daily-ledger", "The Daily Ledger", 42_000_000, 3.10, 14.50, 0.82, News, 0.28, 0.34),
    domain!("metro-wire", "Metro Wire", 18_500_000, 2.40, 11.00, 0.88, News, 0.22, 0.31),
    domain!("capital-brief", "Capital Brief", 9_800_000, 4.60, 19.00, 0.85, Finance, 0.41, 0.44),
    domain!("market-pulse", "Market Pulse", 6_200_000, 5.20, 21.50, 0.90, Finance, 0.46, 0.47),
    domain!("byte-report", "Byte Report", 12_400_000, 3.80, 16.00, 0.78, Technology, 0.62, 0.39),
    domain!("gadget-lane", "Gadget Lane", 7_900_000, 3.30, 15.20, 0.70, Technology, 0.58, 0.42),
    domain!("final-whistle", "Final Whistle", 25_000_000, 2.10, 13.40, 0.65, Sports, 0.24, 0.29),
    domain!("pitchside", "Pitchside", 11_300_000, 1.90, 12.10, 0.68, Sports, 0.21, 0.27),
    domain!("home-table", "Home & Table", 8_700_000, 2.70, 10.80, 0.86, Lifestyle, 0.18, 0.52),
    domain!("wellnest", "Wellnest", 5_400_000, 2.90, 11.60, 0.84, Lifestyle, 0.20, 0.55),
    domain!("screen-scene", "Screen Scene", 15_600_000, 2.30, 15.80, 0.60, Entertainment, 0.30, 0.38),
    domain!("backstage-pass", "Backstage Pass", 4_300_000, 2.00, 13.90, 0.62, Entertainment, 0.27, 0.41),
    domain!("torque-weekly", "Torque Weekly", 3_900_000, 3.60, 17.20, 0.75, Automotive, 0.33, 0.25),
    domain!("open-road", "Open Road", 2_600_000, 3.40, 16.40, 0.77, Automotive, 0.31, 0.24),
    domain!("wander-post", "Wander Post", 3_200_000, 3.90, 14.00, 0.83, Travel, 0.26, 0.46),
    domain!("carry-on", "Carry-On", 2_100_000, 3.70, 13.60, 0.85, Travel, 0.25, 0.48),
    domain!("county-courier", "County Courier", 1_400_000, 1.60, 8.50, 0.92, News, 0.15, 0.30),
    domain!("harbor-herald", "Harbor Herald", 1_100_000, 1.50, 8.00, 0.93, News, 0.14, 0.28),
];

pub fn catalog() -> &'static [PublisherDomain] {
    &CATALOG
}

pub fn find(id: &str) -> Option<&'static PublisherDomain> {
    CATALOG.iter().find(|domain| domain.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn catalog_is_large_enough_for_full_portfolio() {
        assert!(catalog().len() >= 15);
    }

    #[test]
    fn catalog_fractions_are_plausible() {
        for domain in catalog() {
            assert!((0.0..=1.0).contains(&domain.display_share), "{}", domain.id);
            assert!((0.0..=1.0).contains(&domain.audience.tech_savvy), "{}", domain.id);
            assert!((0.0..=1.0).contains(&domain.audience.safari_share), "{}", domain.id);
            assert!(domain.monthly_pageviews > 0);
        }
    }

    #[test]
    fn find_returns_none_for_unknown_ids() {
        assert!(find("daily-ledger").is_some());
        assert!(find("not-a-domain").is_none());
    }
}
