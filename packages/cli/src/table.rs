// ABOUTME: Terminal table rendering for project cards
// ABOUTME: Truncates long summaries to keep rows readable

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use folio_core::{truncate, ProjectCard};

const SUMMARY_WIDTH: usize = 80;

pub fn project_table(cards: &[ProjectCard]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["Project", "Summary", "Tech Stack", "Live"]);

    for card in cards {
        table.add_row(vec![
            card.project_id.clone(),
            truncate(&card.summary, SUMMARY_WIDTH).to_string(),
            card.technologies.join(", "),
            card.deployed_url.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_table_rows() {
        let cards = vec![ProjectCard {
            project_id: "octo/demo".to_string(),
            name: "demo".to_string(),
            summary: "A demo".to_string(),
            technologies: vec!["Rust".to_string(), "Axum".to_string()],
            deployed_url: None,
            github_url: "https://github.com/octo/demo".to_string(),
        }];

        let rendered = project_table(&cards).to_string();
        assert!(rendered.contains("octo/demo"));
        assert!(rendered.contains("Rust, Axum"));
        assert_eq!(project_table(&cards).row_iter().count(), 1);
    }
}
