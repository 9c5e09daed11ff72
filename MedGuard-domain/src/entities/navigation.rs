use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Screens of the application, in menu order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Home,
    Authentication,
    PillIdentifier,
    DrugSearch,
    DiseaseSearch,
    PillReminder,
    HealthMetrics,
    BmiCalculator,
    MyMedicines,
}

impl Screen {
    pub const ALL: [Screen; 9] = [
        Screen::Home,
        Screen::Authentication,
        Screen::PillIdentifier,
        Screen::DrugSearch,
        Screen::DiseaseSearch,
        Screen::PillReminder,
        Screen::HealthMetrics,
        Screen::BmiCalculator,
        Screen::MyMedicines,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Authentication => "Authentication",
            Screen::PillIdentifier => "Pill Identifier",
            Screen::DrugSearch => "Drug Search",
            Screen::DiseaseSearch => "Disease Search",
            Screen::PillReminder => "Pill Reminder",
            Screen::HealthMetrics => "Health Metrics",
            Screen::BmiCalculator => "BMI Calculator",
            Screen::MyMedicines => "My Medicines",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::Authentication => "/login",
            Screen::PillIdentifier => "/pill-identifier",
            Screen::DrugSearch => "/drug-search",
            Screen::DiseaseSearch => "/disease-search",
            Screen::PillReminder => "/pill-reminder",
            Screen::HealthMetrics => "/health-metrics",
            Screen::BmiCalculator => "/bmi-calculator",
            Screen::MyMedicines => "/my-medicines",
        }
    }

    /// Screen mounted at `path`, if any
    pub fn from_path(path: &str) -> Option<Screen> {
        Screen::ALL.into_iter().find(|screen| screen.path() == path)
    }
}

/// Menu entry for one screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ScreenLink {
    pub screen: Screen,
    pub title: String,
    pub path: String,
}

impl From<Screen> for ScreenLink {
    fn from(screen: Screen) -> Self {
        Self {
            screen,
            title: screen.title().to_string(),
            path: screen.path().to_string(),
        }
    }
}

/// All screens in menu order
pub fn screen_links() -> Vec<ScreenLink> {
    Screen::ALL.into_iter().map(ScreenLink::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_screens_in_order() {
        let links = screen_links();
        assert_eq!(links.len(), 9);
        assert_eq!(links[0].path, "/");
        assert_eq!(links[8].title, "My Medicines");
    }

    #[test]
    fn test_path_lookup() {
        assert_eq!(Screen::from_path("/bmi-calculator"), Some(Screen::BmiCalculator));
        assert_eq!(Screen::from_path("/login"), Some(Screen::Authentication));
        assert_eq!(Screen::from_path("/nowhere"), None);
    }
}
