//! Project catalog
//!
//! Static data behind the project cards and the detail modal.

use serde::Serialize;

/// Technologies counted as frontend in the detail view
pub const FRONTEND_TECH: [&str; 3] = ["HTML", "CSS", "JavaScript"];

/// A portfolio project
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub challenges: &'static str,
}

/// All projects, in card order
pub static PROJECTS: [Project; 3] = [
    Project {
        id: "study-planner",
        title: "Smart Study Planner",
        description: "An AI-powered web application that generates personalized study schedules using Prolog reasoning, Flask backend, and MySQL database.",
        technologies: &["HTML", "CSS", "JavaScript", "Prolog", "Flask", "MySQL", "Bootstrap"],
        features: &[
            "AI-based schedule generation using Prolog rules",
            "Personalized study plans based on subjects and time available",
            "Interactive calendar view",
            "Progress tracking system",
            "Reminder notifications",
            "Responsive design for all devices",
        ],
        challenges: "Integrating Prolog reasoning engine with web interface, optimizing database queries for performance.",
    },
    Project {
        id: "portfolio",
        title: "Personal Portfolio Website",
        description: "A responsive portfolio website showcasing my projects and skills with interactive elements.",
        technologies: &["HTML", "CSS", "JavaScript", "Canvas API"],
        features: &[
            "Interactive particle background with Canvas API",
            "Responsive design for mobile, tablet, and desktop",
            "Animated skill progress bars",
            "Project filtering system",
            "Form validation with real-time feedback",
            "Smooth scrolling navigation",
            "Dark theme with neon accents",
        ],
        challenges: "Creating performant particle system, ensuring cross-browser compatibility, implementing smooth animations.",
    },
    Project {
        id: "weather",
        title: "Real-Time Weather App",
        description: "A weather application that fetches real-time data from API and displays forecasts.",
        technologies: &["HTML", "CSS", "JavaScript", "Weather API", "JSON"],
        features: &[
            "Real-time weather data from API",
            "5-day weather forecast",
            "Location-based weather detection",
            "Temperature unit conversion (C/F)",
            "Animated weather icons",
            "Search functionality for cities",
            "Responsive mobile-friendly design",
        ],
        challenges: "Handling API rate limits, displaying data in user-friendly format, error handling for invalid locations.",
    },
];

impl Project {
    /// Look up a project by card id
    pub fn get(id: &str) -> Option<&'static Project> {
        PROJECTS.iter().find(|p| p.id == id)
    }

    /// Technologies in the frontend set, in listed order
    pub fn frontend(&self) -> Vec<&'static str> {
        self.technologies
            .iter()
            .copied()
            .filter(|t| FRONTEND_TECH.contains(t))
            .collect()
    }

    /// Everything else
    pub fn backend(&self) -> Vec<&'static str> {
        self.technologies
            .iter()
            .copied()
            .filter(|t| !FRONTEND_TECH.contains(t))
            .collect()
    }

    /// Detail payload for the modal
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&ProjectDetail {
            project: self,
            frontend: self.frontend(),
            backend: self.backend(),
        })
    }
}

#[derive(Serialize)]
struct ProjectDetail<'a> {
    #[serde(flatten)]
    project: &'a Project,
    frontend: Vec<&'static str>,
    backend: Vec<&'static str>,
}

/// Whether a card with the given `data-category` value shows under `filter`.
///
/// `"all"` shows everything; any other filter is a substring match, so a
/// card tagged `"web ai"` shows under both `"web"` and `"ai"`.
pub fn filter_matches(filter: &str, categories: &str) -> bool {
    filter == "all" || categories.contains(filter)
}
