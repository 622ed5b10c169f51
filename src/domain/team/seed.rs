//! Fixed team reference catalog used for startup seeding

use super::entity::{TeamName, TeamReference};

/// Seed values for the team reference catalog: name, display color, logo URL.
const SEED_TEAMS: &[(&str, &str, &str)] = &[
    (
        "RCB",
        "#D21A28",
        "https://logowik.com/royal-challengers-bangalore-logo-vector-svg-pdf-ai-eps-cdr-free-download-13717.html",
    ),
    (
        "MI",
        "#045193",
        "https://logowik.com/content/uploads/images/mumbai-indians2544.jpg",
    ),
    (
        "CSK",
        "#F8CD33",
        "https://logowik.com/content/uploads/images/chennai-super-kings3461.jpg",
    ),
    (
        "KKR",
        "#3C0D6E",
        "https://logowik.com/content/uploads/images/kolkata-knight-riders6292.jpg",
    ),
    (
        "DC",
        "#0057B8",
        "https://logowik.com/content/uploads/images/delhi-capitals3041.jpg",
    ),
];

/// The immutable seed catalog, built once at startup and passed explicitly to
/// the team service.
pub fn seed_catalog() -> Vec<TeamReference> {
    SEED_TEAMS
        .iter()
        .map(|(name, color, logo_url)| {
            let name = TeamName::new(*name).expect("seed team names are non-empty");
            TeamReference::new(name, *color, *logo_url)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_has_five_teams() {
        let catalog = seed_catalog();
        assert_eq!(catalog.len(), 5);

        let names: Vec<&str> = catalog.iter().map(|t| t.name().as_str()).collect();
        assert_eq!(names, vec!["RCB", "MI", "CSK", "KKR", "DC"]);
    }

    #[test]
    fn test_seed_catalog_csk_color() {
        let catalog = seed_catalog();
        let csk = catalog.iter().find(|t| t.name().as_str() == "CSK").unwrap();
        assert_eq!(csk.color(), "#F8CD33");
    }
}
