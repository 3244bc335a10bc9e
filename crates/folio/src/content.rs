//! Static site content: projects, publications and profile data.

use serde::Serialize;

use crate::pages::Page;
use crate::routes::RouteTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    /// Canonical route of the project article.
    pub link: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationKind {
    Journal,
    Conference,
    Dissertation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub id: u32,
    pub title: &'static str,
    pub authors: &'static str,
    pub venue: &'static str,
    pub year: &'static str,
    pub link: &'static str,
    pub kind: PublicationKind,
    pub summary: Option<&'static str>,
    pub doi: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Analytical,
    Soft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub const CONTACT_EMAIL: &str = "transportanalyticsandinsights@gmail.com";

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "TransitMate Chatbot",
        description: "An intelligent conversational AI system that delivers real-time, context-aware responses to natural language queries about TransLink service disruptions, track closures, and stop impacts using Retrieval-Augmented Generation (RAG).",
        icon: "route",
        image: "/assets/images/TransitMateChatbot.png",
        tags: &["Translink", "Chatbot", "Service Disruptions", "Python", "RAG", "LLM", "Conversational AI"],
        link: "/projects/transitmate_chatbot",
        color: "from-green-500 to-teal-500",
    },
    Project {
        id: 2,
        title: "Mapping Connectivity Across Brisbane: What GTFS Reveals",
        description: "Analyzing 244 direct suburb connections to Brisbane City using GTFS data (January 12-18, 2026) to reveal how efficiently residents can reach the city center across different modes and time periods.",
        icon: "route",
        image: "/assets/images/BrisbaneCityNetwork.png",
        tags: &["GTFS", "Network Analysis", "Geospatial Analysis", "Brisbane City", "Python", "Accessibility Analysis", "Translink"],
        link: "/projects/brisbane_connectivity",
        color: "from-blue-500 to-cyan-500",
    },
    Project {
        id: 3,
        title: "Decoding Translink Origin Destination Patronage Data",
        description: "Examined 470 million trips across TransLink's bus, train, and ferry networks from January 2022 to October 2025, revealing a public transport system experiencing rapid transformation.",
        icon: "subway",
        image: "/assets/images/TranslinkBus.png",
        tags: &["Translink", "Patronage", "Python", "Data Visualization", "Tableau"],
        link: "/projects/translink_od",
        color: "from-purple-500 to-pink-500",
    },
    Project {
        id: 4,
        title: "Feature Engineering Impact Analysis",
        description: "demonstrates the fundamental importance of feature engineering in machine learning model performance through a controlled experiment using London bike sharing demand forecasting.",
        icon: "robot",
        image: "/assets/images/FeatureEngineering.png",
        tags: &["Machine Learning", "Feature Engineering", "Time Series Forecasting", "Python", "Bike Sharing"],
        link: "/projects/feature_engineering_impact_analysis",
        color: "from-purple-500 to-pink-500",
    },
];

pub static PUBLICATIONS: [Publication; 6] = [
    Publication {
        id: 1,
        title: "Data Fusion for the Development of a Multimodal Freight Transload Facilities Dataset in the U.S.",
        authors: "Asborno, M., Bhurtyal, S., Mitchell, K. N., Peterson, S. K., & Kress, M. M.",
        venue: "Transportation Research Record: Journal of the Transportation Research Board, 0(0)",
        year: "2026",
        link: "https://doi.org/10.1177/03611981251394678",
        kind: PublicationKind::Journal,
        summary: None,
        doi: None,
    },
    Publication {
        id: 2,
        title: "Prediction of waterborne freight activity with Automatic Identification System using Machine learning",
        authors: "Bhurtyal, S., Bui, H., Hernandez, S., Eksioglu, S., Asborno, M., Mitchell, K. N., & Kress, M.",
        venue: "Computers & Industrial Engineering, 200, 110757",
        year: "2025",
        link: "https://www.sciencedirect.com/science/article/abs/pii/S0360835224008799",
        kind: PublicationKind::Journal,
        summary: None,
        doi: None,
    },
    Publication {
        id: 3,
        title: "Data-Driven Methods to Assess Transportation System Resilience: Case Study of the Arkansas Roadway Network",
        authors: "Bhurtyal, S., Hernandez, S., Amankwah-Nkyi, K.",
        venue: "Journal of Transportation Engineering, Part A: Systems. 10.1061/JTEPBS/TEENG-8064",
        year: "2024",
        link: "https://ascelibrary.org/doi/10.1061/JTEPBS.TEENG-8064",
        kind: PublicationKind::Journal,
        summary: None,
        doi: None,
    },
    Publication {
        id: 4,
        title: "A two-stage stochastic optimization model for port infrastructure planning",
        authors: "Bhurtyal, S., Hernandez, S., Eksioglu, S., & Yves, M.",
        venue: "Maritime Economics & Logistics, 26(2), 185-211",
        year: "2024",
        link: "https://link.springer.com/article/10.1057/s41278-023-00262-0",
        kind: PublicationKind::Journal,
        summary: None,
        doi: None,
    },
    Publication {
        id: 5,
        title: "Impacts of a Highway Bypass on Residential Property Values in a Small City in Arkansas",
        authors: "Bhurtyal, S., Giebler, M., Mitra, S., & Hernandez, S.",
        venue: "Transportation Research Board Annual Meeting (No. TRBAM-21-01535)",
        year: "2021",
        link: "https://trid.trb.org/View/1759364",
        kind: PublicationKind::Conference,
        summary: None,
        doi: None,
    },
    Publication {
        id: 6,
        title: "Addressing Data Limitations of Commercial Waterways via Machine Learning and Stochastic Optimization",
        authors: "Bhurtyal, S.",
        venue: "University of Arkansas, USA",
        year: "Dissertation",
        link: "https://www.proquest.com/openview/4f0f170da25e6f4efe5a615cdbe155c0/1?pq-origsite=gscholar&cbl=18750&diss=y",
        kind: PublicationKind::Dissertation,
        summary: Some("Developed machine learning and optimization frameworks to overcome data constraints in waterborne freight systems, improving prediction accuracy and supporting infrastructure planning decisions."),
        doi: None,
    },
];

/// Header, footer and mobile-menu links. All are anchors on the home page.
pub static NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "Projects", href: "#projects" },
    NavLink { label: "About Me", href: "#about" },
    NavLink { label: "Contact", href: "#contact" },
];

pub static SKILLS: [Skill; 14] = [
    Skill { name: "Python", category: SkillCategory::Technical },
    Skill { name: "SQL", category: SkillCategory::Technical },
    Skill { name: "GIS", category: SkillCategory::Technical },
    Skill { name: "Tableau", category: SkillCategory::Technical },
    Skill { name: "Large Data Analysis", category: SkillCategory::Analytical },
    Skill { name: "Transit Network Analysis", category: SkillCategory::Analytical },
    Skill { name: "Network Optimization", category: SkillCategory::Analytical },
    Skill { name: "Performance Metrics Development", category: SkillCategory::Analytical },
    Skill { name: "Machine Learning", category: SkillCategory::Technical },
    Skill { name: "Data Visualization", category: SkillCategory::Technical },
    Skill { name: "R", category: SkillCategory::Technical },
    Skill { name: "Stakeholder Engagement", category: SkillCategory::Soft },
    Skill { name: "Project Management", category: SkillCategory::Soft },
    Skill { name: "Problem Solving", category: SkillCategory::Soft },
];

pub static AREAS_OF_EXPERTISE: [&str; 5] = [
    "Big Data Analytics",
    "Network Optimization",
    "Data Visualization",
    "Demand Forecasting",
    "Spatial Analysis",
];

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        platform: "Email",
        icon: "envelope",
        url: "mailto:transportanalyticsandinsights@gmail.com",
    },
    SocialLink {
        platform: "LinkedIn",
        icon: "linkedin-in",
        url: "https://www.linkedin.com/in/sanjeev-bhurtyal/",
    },
    SocialLink {
        platform: "GitHub",
        icon: "github",
        url: "https://github.com/sanjeevbhurtyal",
    },
    SocialLink {
        platform: "Tableau",
        icon: "tableau",
        url: "https://public.tableau.com/app/profile/sanjeev.bhurtyal2011/vizzes",
    },
];

/// Projects shown on the home page.
pub fn featured_projects() -> &'static [Project] {
    &PROJECTS[..3]
}

pub fn publications_of(kind: PublicationKind) -> impl Iterator<Item = &'static Publication> {
    PUBLICATIONS
        .iter()
        .filter(move |publication| publication.kind == kind)
}

/// Project whose article is mounted at `path`, aliases included.
pub fn project_for_route(routes: &RouteTable, path: &str) -> Option<&'static Project> {
    routes.page(path).project()
}

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |skill| skill.category == category)
}

impl Page {
    /// Project record for an article page.
    pub fn project(self) -> Option<&'static Project> {
        let routes = RouteTable::default();
        PROJECTS
            .iter()
            .find(|project| self.is_article() && routes.page(project.link) == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_are_first_three() {
        let ids: Vec<u32> = featured_projects().iter().map(|project| project.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn every_project_links_to_a_registered_route() {
        let routes = RouteTable::default();
        for project in &PROJECTS {
            assert!(routes.get(project.link).is_some(), "{}", project.link);
        }
    }

    #[test]
    fn aliases_resolve_to_the_same_project() {
        let routes = RouteTable::default();
        let canonical = project_for_route(&routes, "/projects/translink_od").unwrap();
        let alias = project_for_route(&routes, "/translink-od").unwrap();
        assert_eq!(canonical.id, alias.id);
        assert_eq!(project_for_route(&routes, "/publications"), None);
    }

    #[test]
    fn publications_filter_keeps_order() {
        let journals: Vec<u32> = publications_of(PublicationKind::Journal).map(|p| p.id).collect();
        assert_eq!(journals, [1, 2, 3, 4]);
        assert_eq!(publications_of(PublicationKind::Dissertation).count(), 1);
    }

    #[test]
    fn descriptions_are_clean_utf8_text() {
        assert!(PROJECTS[2].description.contains("TransLink's"));
    }

    #[test]
    fn nav_links_target_home_sections() {
        for link in &NAV_LINKS {
            let id = link.href.trim_start_matches('#');
            assert!(Page::Home.declares_section(id));
        }
    }

    #[test]
    fn article_page_knows_its_project() {
        assert_eq!(Page::TransitmateChatbot.project().map(|p| p.id), Some(1));
        assert_eq!(Page::Home.project(), None);
    }
}
