use serde::Serialize;

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceItem {
    pub id: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioItem {
    pub id: &'static str,
    pub client: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub stats: &'static [Stat],
}

impl PortfolioItem {
    /// Even positions put the image on the left, odd positions mirror the row.
    pub fn image_first(index: usize) -> bool {
        index % 2 == 0
    }

    pub fn image_alt(&self) -> String {
        format!("{} — {} case study", self.client, self.category)
    }
}

/// FAQ entries have no id of their own; their position in `FAQS` is their identity.
#[derive(Clone, Debug, PartialEq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeadlineStat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ProjectType {
    #[default]
    #[serde(rename = "Marketing Strategy")]
    MarketingStrategy,
    #[serde(rename = "Web Design & Development")]
    WebDesign,
    #[serde(rename = "Branding Identity")]
    Branding,
    #[serde(rename = "SEO & Content")]
    SeoContent,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::MarketingStrategy,
        ProjectType::WebDesign,
        ProjectType::Branding,
        ProjectType::SeoContent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::MarketingStrategy => "Marketing Strategy",
            ProjectType::WebDesign => "Web Design & Development",
            ProjectType::Branding => "Branding Identity",
            ProjectType::SeoContent => "SEO & Content",
        }
    }

    pub fn from_label(label: &str) -> Option<ProjectType> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

/// "/01", "/02", ... for the FAQ rows.
pub fn display_index(index: usize) -> String {
    format!("/{:02}", index + 1)
}

pub fn portfolio_ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub const SERVICES: &[ServiceItem] = &[
    ServiceItem {
        id: "s1",
        number: "01",
        title: "Marketing Strategy",
        description: "We dissect your market position and architect a roadmap that transforms casual browsers into loyal brand advocates.",
        tags: &["Brand Strategy", "Market Analysis", "Positioning"],
    },
    ServiceItem {
        id: "s2",
        number: "02",
        title: "Digital Design",
        description: "Visual identity that cuts through the noise. We build systems, not just logos. Brutalist, minimal, or corporate.",
        tags: &["UI/UX", "Web Design", "Motion Graphics"],
    },
    ServiceItem {
        id: "s3",
        number: "03",
        title: "SEO & Content",
        description: "Dominate search results with content that actually converts. Technical SEO meets storytelling.",
        tags: &["SEO", "Copywriting", "Content Strategy"],
    },
];

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        id: "p1",
        client: "DARK BLOOM",
        category: "Fashion",
        image: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=1000&auto=format&fit=crop",
        stats: &[
            Stat { label: "Conv. Rate", value: "+40%" },
            Stat { label: "ROI", value: "3.5x" },
        ],
    },
    PortfolioItem {
        id: "p2",
        client: "WONDEROUD",
        category: "E-Commerce",
        image: "https://images.unsplash.com/photo-1618331835717-801e976710b2?q=80&w=1000&auto=format&fit=crop",
        stats: &[
            Stat { label: "Sales", value: "+188%" },
            Stat { label: "Traffic", value: "2.1M" },
        ],
    },
    PortfolioItem {
        id: "p3",
        client: "TECHNO CORE",
        category: "SaaS",
        image: "https://images.unsplash.com/photo-1550745165-9bc0b252726f?q=80&w=1000&auto=format&fit=crop",
        stats: &[
            Stat { label: "Signups", value: "+580%" },
            Stat { label: "Retention", value: "92%" },
        ],
    },
];

pub const FAQS: &[FaqItem] = &[
    FaqItem {
        question: "How does Nova Digital start a project?",
        answer: "We begin with a deep dive audit of your current digital footprint. No fluff, just hard data and brutal honesty about what's working and what isn't.",
    },
    FaqItem {
        question: "Do you work with startups?",
        answer: "Yes, if you have the ambition to disrupt. We prefer bold partners over safe ones.",
    },
    FaqItem {
        question: "What makes you different from other agencies in Brasov?",
        answer: "We don't just make things look pretty. We engineer growth systems. Our design is a weapon, not decoration.",
    },
    FaqItem {
        question: "How do you track results?",
        answer: "Live dashboards, weekly sprint reports, and direct ROI attribution. You'll never have to ask 'is this working?'",
    },
];

pub const HEADLINE_STATS: &[HeadlineStat] = &[
    HeadlineStat { value: "188%", label: "Avg. Traffic Growth" },
    HeadlineStat { value: "700+", label: "Campaigns Launched" },
    HeadlineStat { value: "10x", label: "ROI Multiplier" },
    HeadlineStat { value: "24/7", label: "System Uptime" },
];

pub const MARQUEE_TEXT: &str = "NOVA DIGITAL + CONTROL + DOMINATE + RESULTS +";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn service_ids_are_unique() {
        let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn portfolio_stats_fill_two_columns() {
        for item in PORTFOLIO {
            assert!(!item.stats.is_empty(), "{} has no stats", item.client);
            assert_eq!(item.stats.len() % 2, 0, "{} has an odd stat count", item.client);
        }
    }

    #[test]
    fn portfolio_layout_alternates() {
        assert!(PortfolioItem::image_first(0));
        assert!(!PortfolioItem::image_first(1));
        assert!(PortfolioItem::image_first(2));
    }

    #[test]
    fn indices_are_one_based_and_padded() {
        assert_eq!(display_index(0), "/01");
        assert_eq!(display_index(3), "/04");
        assert_eq!(display_index(11), "/12");
        assert_eq!(portfolio_ordinal(2), "03");
    }

    #[test]
    fn image_alt_names_client_and_category() {
        assert_eq!(PORTFOLIO[0].image_alt(), "DARK BLOOM — Fashion case study");
    }

    #[test]
    fn project_types_parse_from_their_labels() {
        for kind in ProjectType::ALL {
            assert_eq!(ProjectType::from_label(kind.label()), Some(kind));
        }
        assert_eq!(ProjectType::from_label("Something Else"), None);
        assert_eq!(ProjectType::default(), ProjectType::MarketingStrategy);
    }

    #[test]
    fn project_type_serializes_as_label() {
        let json = serde_json::to_string(&ProjectType::WebDesign).unwrap();
        assert_eq!(json, "\"Web Design & Development\"");
    }
}
