#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct CaseStudy {
    pub client: &'static str,
    pub headline: &'static str,
    pub outcome: &'static str,
    pub services: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        slug: "brand-identity",
        title: "Brand Identity",
        summary: "Names, marks and visual systems that hold up from a favicon to a billboard.",
        points: &["Brand strategy workshops", "Logo and type systems", "Brand guidelines"],
    },
    Service {
        slug: "web-design",
        title: "Web Design & Development",
        summary: "Fast, accessible marketing sites your team can actually edit.",
        points: &["UX research and wireframes", "Responsive design", "Headless CMS builds"],
    },
    Service {
        slug: "content-marketing",
        title: "Content Marketing",
        summary: "Editorial calendars, long-form writing and the distribution to match.",
        points: &["Content strategy", "Copywriting", "Newsletter programs"],
    },
    Service {
        slug: "performance-marketing",
        title: "Performance Marketing",
        summary: "Paid search and social campaigns measured against revenue, not clicks.",
        points: &["Campaign planning", "Creative testing", "Attribution reporting"],
    },
    Service {
        slug: "seo",
        title: "Search Engine Optimisation",
        summary: "Technical audits and content work that compound month over month.",
        points: &["Technical audits", "Keyword research", "On-page optimisation"],
    },
    Service {
        slug: "social-media",
        title: "Social Media",
        summary: "Channel strategy and production for the platforms your customers use.",
        points: &["Channel strategy", "Short-form video", "Community management"],
    },
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        client: "Northbank Coffee",
        headline: "From one café to a national subscription brand",
        outcome: "3x online revenue in the first year after relaunch.",
        services: &["brand-identity", "web-design"],
    },
    CaseStudy {
        client: "Fieldnote Health",
        headline: "Making a clinical product feel human",
        outcome: "Demo requests up 140% after the new content program.",
        services: &["content-marketing", "seo"],
    },
    CaseStudy {
        client: "Lumen Outdoor",
        headline: "Paid social that pays for itself",
        outcome: "Cost per acquisition down 38% across Meta and TikTok.",
        services: &["performance-marketing", "social-media"],
    },
];

pub fn find_service(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = SERVICES.iter().map(|s| s.slug).collect();
        assert_eq!(slugs.len(), SERVICES.len());
    }

    #[test]
    fn lookup_by_slug() {
        assert_eq!(find_service("seo").map(|s| s.title), Some("Search Engine Optimisation"));
        assert!(find_service("does-not-exist").is_none());
    }

    #[test]
    fn case_studies_reference_known_services() {
        for study in CASE_STUDIES {
            for slug in study.services {
                assert!(find_service(slug).is_some(), "{} references unknown service {}", study.client, slug);
            }
        }
    }
}
