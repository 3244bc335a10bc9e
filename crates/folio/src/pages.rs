use serde::Serialize;

use crate::sections::SectionDescriptor;

/// Page components the router can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    AllProjects,
    Publications,
    BrisbaneConnectivity,
    TranslinkOd,
    TransitmateChatbot,
    FeatureEngineering,
    NotFound,
}

static HOME_SECTIONS: [SectionDescriptor; 4] = [
    SectionDescriptor::new("home", "Home"),
    SectionDescriptor::new("projects", "Projects"),
    SectionDescriptor::new("about", "About Me"),
    SectionDescriptor::new("contact", "Contact"),
];

static BRISBANE_CONNECTIVITY_SECTIONS: [SectionDescriptor; 9] = [
    SectionDescriptor::new("executive-summary", "Executive Summary"),
    SectionDescriptor::new("introduction", "1. Introduction"),
    SectionDescriptor::new("coverage", "2. Coverage by Mode"),
    SectionDescriptor::new("travel-time", "3. Travel Time Analysis"),
    SectionDescriptor::new("thirty-minute-city", "4. The 30-Minute City"),
    SectionDescriptor::new("weekday-weekend", "5. Weekday vs Weekend"),
    SectionDescriptor::new("accessibility", "6. Accessibility Classification"),
    SectionDescriptor::new("key-insights", "7. Key Insights & Limitations"),
    SectionDescriptor::new("notes", "Notes and References"),
];

static TRANSLINK_OD_SECTIONS: [SectionDescriptor; 9] = [
    SectionDescriptor::new("executive-summary", "Executive Summary"),
    SectionDescriptor::new("introduction", "1. Introduction"),
    SectionDescriptor::new("patronage-trends", "2. Patronage Trends"),
    SectionDescriptor::new("mode-split", "3. Mode Split"),
    SectionDescriptor::new("payment-method", "4. Payment Method"),
    SectionDescriptor::new("origin-destination", "5. Origin-Destination"),
    SectionDescriptor::new("growth-analysis", "6. Growth Analysis"),
    SectionDescriptor::new("key-insights", "7. Key Insights & Limitations"),
    SectionDescriptor::new("notes", "Notes and References"),
];

static TRANSITMATE_CHATBOT_SECTIONS: [SectionDescriptor; 5] = [
    SectionDescriptor::new("overview", "1. Overview"),
    SectionDescriptor::new("examples", "2. Examples in Action"),
    SectionDescriptor::new("how-it-works", "3. How it Works"),
    SectionDescriptor::new("technical", "4. Technical Implementation"),
    SectionDescriptor::new("notes", "Notes and References"),
];

static FEATURE_ENGINEERING_SECTIONS: [SectionDescriptor; 9] = [
    SectionDescriptor::new("executive-summary", "Executive Summary"),
    SectionDescriptor::new("introduction", "1. Introduction"),
    SectionDescriptor::new("dataset", "2. Dataset"),
    SectionDescriptor::new("feature-engineering", "3. Feature Engineering"),
    SectionDescriptor::new("models", "4. Model Architectures"),
    SectionDescriptor::new("results", "5. Results"),
    SectionDescriptor::new("discussion", "6. Discussion"),
    SectionDescriptor::new("conclusion", "7. Conclusion"),
    SectionDescriptor::new("notes", "Notes and References"),
];

impl Page {
    /// Named anchors rendered by the page, in document order.
    pub fn sections(self) -> &'static [SectionDescriptor] {
        match self {
            Page::Home => &HOME_SECTIONS,
            Page::BrisbaneConnectivity => &BRISBANE_CONNECTIVITY_SECTIONS,
            Page::TranslinkOd => &TRANSLINK_OD_SECTIONS,
            Page::TransitmateChatbot => &TRANSITMATE_CHATBOT_SECTIONS,
            Page::FeatureEngineering => &FEATURE_ENGINEERING_SECTIONS,
            Page::AllProjects | Page::Publications | Page::NotFound => &[],
        }
    }

    pub fn declares_section(self, id: &str) -> bool {
        self.sections().iter().any(|section| section.id == id)
    }

    /// Articles carry a table of contents and scroll the document smoothly
    /// while mounted.
    pub fn is_article(self) -> bool {
        matches!(
            self,
            Page::BrisbaneConnectivity
                | Page::TranslinkOd
                | Page::TransitmateChatbot
                | Page::FeatureEngineering
        )
    }

    pub fn heading(self) -> &'static str {
        match self {
            Page::Home => "Transport Analytics & Insights",
            Page::AllProjects => "All Projects",
            Page::Publications => "Publications",
            Page::BrisbaneConnectivity => "Mapping Connectivity Across Brisbane: What GTFS Reveals",
            Page::TranslinkOd => "Decoding Translink Origin Destination Patronage Data",
            Page::TransitmateChatbot => "TransitMate Chatbot",
            Page::FeatureEngineering => "Feature Engineering Impact Analysis",
            Page::NotFound => "Page not found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_owns_site_nav_anchors() {
        for id in ["home", "projects", "about", "contact"] {
            assert!(Page::Home.declares_section(id));
        }
        assert!(!Page::Home.is_article());
    }

    #[test]
    fn articles_have_tables_of_contents() {
        for page in [
            Page::BrisbaneConnectivity,
            Page::TranslinkOd,
            Page::TransitmateChatbot,
            Page::FeatureEngineering,
        ] {
            assert!(page.is_article());
            assert!(page.declares_section("notes"));
        }
        assert!(Page::Publications.sections().is_empty());
    }
}
