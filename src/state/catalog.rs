//! Built-in project catalog.
//!
//! Three showcase entries always follow the fetched projects. The displayed
//! list is fetched items first, catalog second, with no deduplication; a
//! backend entry that reuses a catalog id simply appears twice.

use super::models::Project;

fn catalog_entry(
    id: &str,
    title: &str,
    description: &str,
    technologies: &[&str],
    status: &str,
    category: &str,
    impact: &str,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        status: status.to_string(),
        category: category.to_string(),
        github_url: None,
        demo_url: None,
        impact: Some(impact.to_string()),
    }
}

/// The fixed showcase entries appended after every fetch.
pub fn featured_projects() -> Vec<Project> {
    vec![
        catalog_entry(
            "1",
            "Smart India Hackathon Project",
            "Led a winning team in developing an innovative solution for a real-world \
             challenge. Showcased problem-solving abilities, teamwork, and technical \
             implementation under pressure.",
            &["Problem Solving", "Team Leadership", "Innovation", "Presentation"],
            "Winner",
            "Competition",
            "Successfully qualified for Smart India Hackathon finals",
        ),
        catalog_entry(
            "2",
            "IEEE Documentation System",
            "Contributed to technical documentation projects as part of the IEEE team. \
             Developed skills in technical writing, documentation standards, and \
             collaborative work processes.",
            &["Technical Writing", "Documentation", "Collaboration", "IEEE Standards"],
            "Ongoing",
            "Professional",
            "Improved documentation quality and team efficiency",
        ),
        catalog_entry(
            "3",
            "C Programming Portfolio",
            "Collection of C programming projects and assignments demonstrating \
             proficiency in systems programming, algorithms, and problem-solving \
             approaches.",
            &["C Programming", "Data Structures", "Algorithms", "System Programming"],
            "Completed",
            "Academic",
            "Strong foundation in programming fundamentals",
        ),
    ]
}

/// Displayed list: fetched projects first, catalog second. Both orders are
/// preserved and colliding ids are kept.
pub fn combined_projects(remote: &[Project]) -> Vec<Project> {
    let mut all = remote.to_vec();
    all.extend(featured_projects());
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_project(id: &str, title: &str) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            technologies: Vec::new(),
            status: String::new(),
            category: String::new(),
            github_url: None,
            demo_url: None,
            impact: None,
        }
    }

    #[test]
    fn test_catalog_contents() {
        let catalog = featured_projects();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].status, "Winner");
        assert_eq!(catalog[1].status, "Ongoing");
        assert_eq!(catalog[2].status, "Completed");
        assert!(catalog.iter().all(|project| project.impact.is_some()));
    }

    #[test]
    fn test_combined_appends_catalog_after_fetched() {
        let remote = vec![
            remote_project("a", "Campus App"),
            remote_project("b", "Weather Bot"),
        ];
        let combined = combined_projects(&remote);

        assert_eq!(combined.len(), 5);
        assert_eq!(combined[0].title, "Campus App");
        assert_eq!(combined[1].title, "Weather Bot");
        assert_eq!(combined[2].title, "Smart India Hackathon Project");
        assert_eq!(combined[4].title, "C Programming Portfolio");
    }

    #[test]
    fn test_combined_keeps_colliding_ids() {
        let remote = vec![remote_project("1", "Duplicate Id")];
        let combined = combined_projects(&remote);

        assert_eq!(combined.len(), 4);
        assert_eq!(combined[0].id, "1");
        assert_eq!(combined[1].id, "1");
    }

    #[test]
    fn test_combined_with_no_remote_is_catalog() {
        assert_eq!(combined_projects(&[]), featured_projects());
    }
}
