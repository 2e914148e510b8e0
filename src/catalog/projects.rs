// SPDX-License-Identifier: MPL-2.0
//! Project portfolio records and category filtering.
//!
//! The filter types are pure domain checks without any UI concern: the
//! gallery component holds a [`CategoryFilter`] and recomputes its visible
//! subset through [`visible`] on every change.

/// Unique identifier of a project record.
pub type ProjectId = u32;

// =============================================================================
// Categories
// =============================================================================

/// Category assigned to a project. Categories are disjoint per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Web,
    Mobile,
    Ecommerce,
    Saas,
}

/// Single-select gallery filter: one concrete category, or all of them.
///
/// Exactly one filter is active at a time; the default shows the full
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Web,
    Mobile,
    Ecommerce,
    Saas,
}

impl CategoryFilter {
    /// Every declared filter, in chip display order.
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Web,
        CategoryFilter::Mobile,
        CategoryFilter::Ecommerce,
        CategoryFilter::Saas,
    ];

    /// Returns `true` if this filter matches the given category.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Web => matches!(category, Category::Web),
            Self::Mobile => matches!(category, Category::Mobile),
            Self::Ecommerce => matches!(category, Category::Ecommerce),
            Self::Saas => matches!(category, Category::Saas),
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::All)
    }

    /// Stable identifier, usable for persistence or diagnostics.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Web => "web",
            Self::Mobile => "mobile",
            Self::Ecommerce => "ecommerce",
            Self::Saas => "saas",
        }
    }

    /// Parses a filter identifier, falling back to `All` on unrecognized
    /// input so an invalid id can never leave the gallery without a valid
    /// filter.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            "web" => Self::Web,
            "mobile" => Self::Mobile,
            "ecommerce" => Self::Ecommerce,
            "saas" => Self::Saas,
            _ => Self::All,
        }
    }

    /// Localization key for the filter chip label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::All => "category-all",
            Self::Web => "category-web",
            Self::Mobile => "category-mobile",
            Self::Ecommerce => "category-ecommerce",
            Self::Saas => "category-saas",
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// A single portfolio entry.
///
/// `image` is a placeholder asset path; resolving it against an actual asset
/// pipeline is out of scope for this crate. `link` and `source_link` are
/// optional: absent links suppress the corresponding affordance in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub description: &'static str,
    pub client: &'static str,
    /// Human-readable completion label, e.g. "March 2024".
    pub completed: &'static str,
    pub link: Option<&'static str>,
    pub source_link: Option<&'static str>,
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

const PROJECTS: [ProjectRecord; 6] = [
    ProjectRecord {
        id: 1,
        title: "HealthTrack Pro",
        category: Category::Saas,
        tags: &["Healthcare", "React", "Node.js"],
        image: "assets/projects/healthtrack.png",
        description: "A comprehensive healthcare management system for \
                      clinics and hospitals, featuring patient records, \
                      appointment scheduling, and billing integration.",
        client: "MedCare Solutions",
        completed: "March 2024",
        link: Some("https://healthtrack.example.com"),
        source_link: Some("https://codeberg.org/folio/healthtrack"),
        features: &[
            "Electronic Medical Records",
            "Appointment Scheduling",
            "Billing Integration",
            "Patient Portal",
            "Reporting Dashboard",
        ],
        technologies: &["React", "Node.js", "MongoDB", "AWS"],
    },
    ProjectRecord {
        id: 2,
        title: "EcoShop",
        category: Category::Ecommerce,
        tags: &["E-Commerce", "Next.js", "Tailwind"],
        image: "assets/projects/ecoshop.png",
        description: "A sustainable products marketplace with advanced \
                      filtering, secure checkout, and an integrated carbon \
                      footprint calculator.",
        client: "GreenLife Co.",
        completed: "January 2024",
        link: Some("https://ecoshop.example.com"),
        source_link: Some("https://codeberg.org/folio/ecoshop"),
        features: &[
            "Product Catalog",
            "Secure Checkout",
            "Customer Accounts",
            "Order Management",
            "Carbon Footprint Calculator",
        ],
        technologies: &["Next.js", "Tailwind CSS", "Prisma", "Stripe"],
    },
    ProjectRecord {
        id: 3,
        title: "TaskMaster",
        category: Category::Mobile,
        tags: &["Productivity", "React Native", "Firebase"],
        image: "assets/projects/taskmaster.png",
        description: "A feature-rich task management mobile app with team \
                      collaboration, file sharing, and real-time \
                      notifications.",
        client: "ProductiveCo",
        completed: "November 2023",
        link: Some("https://taskmaster.example.com"),
        source_link: Some("https://codeberg.org/folio/taskmaster"),
        features: &[
            "Task Management",
            "Team Collaboration",
            "File Sharing",
            "Real-time Notifications",
            "Cross-platform Support",
        ],
        technologies: &["React Native", "Firebase", "Redux", "Expo"],
    },
    ProjectRecord {
        id: 4,
        title: "EventHub",
        category: Category::Web,
        tags: &["Events", "Vue.js", "Express"],
        image: "assets/projects/eventhub.png",
        description: "An event management platform with ticket sales, \
                      attendee tracking, and virtual event hosting \
                      capabilities.",
        client: "EventPro Inc.",
        completed: "October 2023",
        link: Some("https://eventhub.example.com"),
        source_link: Some("https://codeberg.org/folio/eventhub"),
        features: &[
            "Event Creation",
            "Ticket Sales",
            "Attendee Management",
            "Virtual Event Hosting",
            "Analytics Dashboard",
        ],
        technologies: &["Vue.js", "Express", "PostgreSQL", "AWS"],
    },
    ProjectRecord {
        id: 5,
        title: "InvestSmart",
        category: Category::Saas,
        tags: &["Finance", "React", "Python"],
        image: "assets/projects/investsmart.png",
        description: "A financial investment platform with portfolio \
                      management, market analytics, and automated trading \
                      strategies.",
        client: "FinTech Solutions",
        completed: "August 2023",
        link: Some("https://investsmart.example.com"),
        source_link: Some("https://codeberg.org/folio/investsmart"),
        features: &[
            "Portfolio Management",
            "Market Analytics",
            "Automated Trading",
            "Risk Assessment",
            "Performance Reporting",
        ],
        technologies: &["React", "Django", "Python", "TensorFlow"],
    },
    ProjectRecord {
        id: 6,
        title: "FoodDelivery Pro",
        category: Category::Mobile,
        tags: &["Food", "React Native", "Node.js"],
        image: "assets/projects/fooddelivery.png",
        description: "A comprehensive food delivery platform with real-time \
                      order tracking, driver management, and restaurant \
                      integration.",
        client: "Quick Bites Co.",
        completed: "July 2023",
        link: Some("https://fooddelivery.example.com"),
        source_link: Some("https://codeberg.org/folio/fooddelivery"),
        features: &[
            "Restaurant Menus",
            "Order Tracking",
            "Payment Processing",
            "Driver Management",
            "Customer Ratings",
        ],
        technologies: &["React Native", "Node.js", "MongoDB", "Socket.io"],
    },
];

/// Returns the full catalog in its canonical order.
#[must_use]
pub fn catalog() -> &'static [ProjectRecord] {
    &PROJECTS
}

/// Returns the records matched by `filter`, preserving catalog order.
///
/// A single linear pass over the catalog; `All` yields every record.
#[must_use]
pub fn visible(filter: CategoryFilter) -> Vec<&'static ProjectRecord> {
    PROJECTS
        .iter()
        .filter(|record| filter.matches(record.category))
        .collect()
}

/// Looks up a record by id.
#[must_use]
pub fn find(id: ProjectId) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|record| record.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_all_matches_every_category() {
        let filter = CategoryFilter::All;
        assert!(filter.matches(Category::Web));
        assert!(filter.matches(Category::Mobile));
        assert!(filter.matches(Category::Ecommerce));
        assert!(filter.matches(Category::Saas));
        assert!(!filter.is_active());
    }

    #[test]
    fn concrete_filters_match_only_their_category() {
        assert!(CategoryFilter::Mobile.matches(Category::Mobile));
        assert!(!CategoryFilter::Mobile.matches(Category::Web));
        assert!(CategoryFilter::Saas.is_active());
    }

    #[test]
    fn from_id_round_trips_declared_ids() {
        for filter in CategoryFilter::ALL {
            assert_eq!(CategoryFilter::from_id(filter.id()), filter);
        }
    }

    #[test]
    fn from_id_falls_back_to_all_on_unknown_input() {
        assert_eq!(CategoryFilter::from_id("desktop"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_id(""), CategoryFilter::All);
    }

    #[test]
    fn catalog_ids_are_unique_and_sequential() {
        let ids: Vec<_> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn visible_all_returns_full_catalog_in_order() {
        let all = visible(CategoryFilter::All);
        assert_eq!(all.len(), catalog().len());
        let ids: Vec<_> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn visible_mobile_returns_exactly_the_mobile_records() {
        let mobile = visible(CategoryFilter::Mobile);
        let ids: Vec<_> = mobile.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 6]);
        for record in mobile {
            assert_eq!(record.category, Category::Mobile);
        }
    }

    #[test]
    fn visible_is_idempotent() {
        let once = visible(CategoryFilter::Ecommerce);
        let twice = visible(CategoryFilter::Ecommerce);
        let once_ids: Vec<_> = once.iter().map(|p| p.id).collect();
        let twice_ids: Vec<_> = twice.iter().map(|p| p.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn every_declared_filter_partitions_consistently() {
        // The four concrete filters together cover the whole catalog with
        // no overlap (categories are disjoint per record).
        let concrete = [
            CategoryFilter::Web,
            CategoryFilter::Mobile,
            CategoryFilter::Ecommerce,
            CategoryFilter::Saas,
        ];
        let total: usize = concrete.iter().map(|f| visible(*f).len()).sum();
        assert_eq!(total, catalog().len());
    }

    #[test]
    fn find_returns_matching_record() {
        let record = find(2).expect("project 2 should exist");
        assert_eq!(record.title, "EcoShop");
        assert_eq!(record.category, Category::Ecommerce);
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        assert!(find(0).is_none());
        assert!(find(42).is_none());
    }

    #[test]
    fn every_record_has_tags_features_and_technologies() {
        for record in catalog() {
            assert!(!record.tags.is_empty());
            assert!(!record.features.is_empty());
            assert!(!record.technologies.is_empty());
        }
    }
}
