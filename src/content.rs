use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub owner: String,
    pub tagline: String,
    pub nav: Vec<NavLink>,
    pub about: String,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub slides: Vec<Slide>,
    pub motivation: Vec<MotivationCard>,
    pub contact: Vec<ContactLink>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavLink {
    pub label: String,
    /// Section id, without the leading `#`.
    pub target: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Slide {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MotivationCard {
    pub quote: String,
    pub author: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

pub const HOME_SECTION: &str = "home";
pub const ABOUT_SECTION: &str = "about";
pub const SKILLS_SECTION: &str = "skills";
pub const PROJECTS_SECTION: &str = "projects";
pub const PLATFORMS_SECTION: &str = "platforms";
pub const MOTIVATION_SECTION: &str = "motivation";
pub const CONTACT_SECTION: &str = "contact";

impl SiteContent {
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(SITE_JSON)
    }
}
