//! Research hub resources
//!
//! Static outbound links. Nothing here is fetched.

use serde::Serialize;

/// A curated external resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchLink {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub badge: &'static str,
}

/// A research hub feature that is announced but not built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingFeature {
    pub title: &'static str,
    pub description: &'static str,
}

pub static RESEARCH_LINKS: &[ResearchLink] = &[
    ResearchLink {
        title: "PubMed — Vitreoretinal Surgery",
        description: "Search the world's largest biomedical literature database for vitreoretinal surgery studies.",
        url: "https://pubmed.ncbi.nlm.nih.gov/?term=vitreoretinal+surgery",
        badge: "Literature",
    },
    ResearchLink {
        title: "ClinicalTrials.gov — Retinal",
        description: "Browse ongoing and completed clinical trials in retinal surgery and therapeutics.",
        url: "https://clinicaltrials.gov/search?cond=retinal&intr=surgery",
        badge: "Trials",
    },
    ResearchLink {
        title: "ASRS — Research Papers",
        description: "American Society of Retina Specialists research publications and meeting proceedings.",
        url: "https://www.asrs.org",
        badge: "Society",
    },
    ResearchLink {
        title: "Retina Journal",
        description: "The official journal of the American Society of Retina Specialists with peer-reviewed research.",
        url: "https://journals.lww.com/retinajournal",
        badge: "Journal",
    },
    ResearchLink {
        title: "AAO — Retina Resources",
        description: "American Academy of Ophthalmology clinical education and research resources for retinal diseases.",
        url: "https://www.aao.org/eye-health/diseases/retinal-diseases",
        badge: "Education",
    },
    ResearchLink {
        title: "Euretina — European Research",
        description: "European Society of Retina Specialists research abstracts and meeting presentations.",
        url: "https://euretina.org",
        badge: "Society",
    },
];

pub static UPCOMING_FEATURES: &[UpcomingFeature] = &[
    UpcomingFeature {
        title: "PubMed Integration",
        description: "Search and browse vitreoretinal research papers directly from this platform.",
    },
    UpcomingFeature {
        title: "AI Research Discovery",
        description: "AI-powered summaries and trend analysis across recent publications.",
    },
    UpcomingFeature {
        title: "Case Gallery",
        description: "Curated surgical case studies with pre/post imaging and technique breakdowns.",
    },
];

pub const RESEARCH_DISCLAIMER: &str = "This platform is for educational purposes only. Always consult peer-reviewed literature and qualified professionals for clinical decisions.";
