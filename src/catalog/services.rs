// SPDX-License-Identifier: MPL-2.0
//! The fixed set of service offerings.

use super::{Accent, Icon};

/// A single service offering displayed in the services grid.
///
/// Every offering carries a non-empty feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub features: &'static [&'static str],
}

const SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        title: "Custom SaaS Development",
        description: "We build scalable, secure, and feature-rich SaaS \
                      solutions tailored to your business needs.",
        icon: Icon::Cloud,
        accent: Accent::Blue,
        features: &[
            "Custom SaaS Architecture",
            "API Development",
            "Cloud Infrastructure",
        ],
    },
    ServiceOffering {
        title: "Full-Stack Development",
        description: "We deliver end-to-end solutions that combine robust \
                      backend systems with sleek frontends.",
        icon: Icon::Code,
        accent: Accent::Green,
        features: &[
            "Frontend Frameworks",
            "Backend Development",
            "Database Architecture",
        ],
    },
    ServiceOffering {
        title: "Mobile App Development",
        description: "We build fast, secure, and scalable mobile applications \
                      for iOS and Android, using native and cross-platform \
                      technologies.",
        icon: Icon::Database,
        accent: Accent::Pink,
        features: &[
            "Native iOS/Android Development",
            "Cross-Platform Development",
            "Mobile App Design",
        ],
    },
    ServiceOffering {
        title: "AI Integration & Automation",
        description: "We integrate AI and machine learning solutions to \
                      automate tasks, enhance decision-making, and improve \
                      efficiency.",
        icon: Icon::Layers,
        accent: Accent::Orange,
        features: &[
            "Custom AI Development",
            "Integrating AI into Existing Systems",
            "Workflow Automations",
        ],
    },
];

/// Returns the service offerings in display order.
#[must_use]
pub fn offerings() -> &'static [ServiceOffering] {
    &SERVICES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_offering_has_features() {
        for offering in offerings() {
            assert!(
                !offering.features.is_empty(),
                "offering {} has no features",
                offering.title
            );
        }
    }

    #[test]
    fn offering_titles_are_unique() {
        let titles: Vec<_> = offerings().iter().map(|o| o.title).collect();
        let mut deduped = titles.clone();
        deduped.dedup();
        assert_eq!(titles.len(), deduped.len());
    }
}
