// 🧑‍🤝‍🧑 Roster Builder - Year-Bucketed Board Roster
// Pure transform from the asset index to display-ready year groups

use crate::assets::{AssetIndex, ImageAsset, RoleDeclaration};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Display name used when a file name degenerates to nothing
const PLACEHOLDER_NAME: &str = "Board Member";

// ============================================================================
// RESOLVED TYPES
// ============================================================================

/// A display-ready board member, either matched from a role declaration or
/// synthesized from a leftover image
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    /// Unique within a year and stable across rebuilds for unchanged inputs
    pub id: String,
    pub file_name: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// None when a declaration references a photo that was never uploaded;
    /// pages render a placeholder in that case
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
}

/// One academic year's worth of resolved members
#[derive(Debug, Clone, Serialize)]
pub struct YearGroup {
    pub year: String,
    pub display_year: String,
    pub members: Vec<Member>,
}

// ============================================================================
// ROSTER BUILDER
// ============================================================================

/// Build the full roster: one group per year with at least one member,
/// ordered descending by year. Pure function of the index; cannot fail.
pub fn build_roster(index: &AssetIndex) -> Vec<YearGroup> {
    let mut years = index.board_years();
    years.sort_by(|a, b| compare_years_desc(a, b));

    years
        .into_iter()
        .map(|year| YearGroup {
            year: year.to_string(),
            display_year: display_year(year),
            members: resolve_members(year, index.board_images(year), index.roles_for(year)),
        })
        .filter(|group| !group.members.is_empty())
        .collect()
}

/// Resolve one year's members in two passes: declared roles first (in
/// declaration order), then leftover images sorted by file name. A declared
/// role never drops even when its file has no matching image, and a matched
/// image is consumed so it cannot reappear as a leftover.
fn resolve_members(
    year: &str,
    images: &[ImageAsset],
    roles: Option<&[RoleDeclaration]>,
) -> Vec<Member> {
    // Case-insensitive lookup from normalized file name to the image;
    // the first image to claim a normalized key keeps it
    let mut lookup: HashMap<String, &ImageAsset> = HashMap::new();
    for image in images {
        lookup
            .entry(normalize_file_name(&image.file_name))
            .or_insert(image);
    }

    let mut used: HashSet<&str> = HashSet::new();
    let mut members = Vec::new();

    if let Some(roles) = roles {
        for (i, role) in roles.iter().enumerate() {
            let matched = lookup.get(normalize_file_name(&role.file).as_str()).copied();
            if let Some(image) = matched {
                used.insert(image.file_name.as_str());
            }

            let file_name = matched
                .map(|image| image.file_name.clone())
                .unwrap_or_else(|| role.file.clone());
            let name = if role.name.is_empty() {
                display_name_from_file(&file_name)
            } else {
                role.name.clone()
            };

            members.push(Member {
                id: format!("{}-role-{}-{}", year, i, role.file),
                file_name,
                name,
                position: role.position.clone(),
                image_src: matched.map(|image| image.href.clone()),
            });
        }
    }

    let mut leftovers: Vec<&ImageAsset> = images
        .iter()
        .filter(|image| !used.contains(image.file_name.as_str()))
        .collect();
    // Ascending by file name, case-insensitive, raw name as tiebreak
    leftovers.sort_by(|a, b| {
        a.file_name
            .to_lowercase()
            .cmp(&b.file_name.to_lowercase())
            .then_with(|| a.file_name.cmp(&b.file_name))
    });

    for (i, image) in leftovers.into_iter().enumerate() {
        members.push(Member {
            id: format!("{}-extra-{}-{}", year, i, image.file_name),
            file_name: image.file_name.clone(),
            name: display_name_from_file(&image.file_name),
            position: None,
            image_src: Some(image.href.clone()),
        });
    }

    members
}

// ============================================================================
// FORMATTING RULES
// ============================================================================

/// Identity key for matching declarations to images
pub fn normalize_file_name(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Numeric year tokens become an academic-year span ("2023" -> "2023-2024");
/// everything else passes through unchanged, including a numeric token too
/// large to have a successor
pub fn display_year(year: &str) -> String {
    match year.trim().parse::<i64>().map(|start| (start, start.checked_add(1))) {
        Ok((start, Some(end))) => format!("{}-{}", start, end),
        _ => year.to_string(),
    }
}

/// Descending by numeric value when both tokens are numeric, otherwise
/// descending case-insensitive lexicographic with the raw token as
/// tiebreak
fn compare_years_desc(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(num_a), Ok(num_b)) => num_b.cmp(&num_a),
        _ => b
            .to_lowercase()
            .cmp(&a.to_lowercase())
            .then_with(|| b.cmp(a)),
    }
}

/// Derive a display name from an image file name: strip the extension,
/// split on `_`/`-` runs and lower-to-upper camel boundaries, then
/// title-case each word
pub fn display_name_from_file(file: &str) -> String {
    let without_ext = match file.rfind('.') {
        Some(pos) if pos + 1 < file.len() && !file[pos + 1..].contains('/') => &file[..pos],
        _ => file,
    };

    let mut spaced = String::with_capacity(without_ext.len() + 4);
    let mut prev: Option<char> = None;
    for ch in without_ext.chars() {
        if ch == '_' || ch == '-' {
            spaced.push(' ');
            prev = Some(' ');
            continue;
        }
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && ch.is_ascii_uppercase() {
                spaced.push(' ');
            }
        }
        spaced.push(ch);
        prev = Some(ch);
    }

    let title_cased: Vec<String> = spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect();

    if title_cased.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        title_cased.join(" ")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn image(file: &str) -> ImageAsset {
        ImageAsset {
            file_name: file.to_string(),
            href: format!("/photos/board/2023/{}?v=abc123abc123", file),
        }
    }

    fn role(file: &str, name: &str, position: Option<&str>) -> RoleDeclaration {
        RoleDeclaration {
            file: file.to_string(),
            name: name.to_string(),
            position: position.map(|p| p.to_string()),
        }
    }

    #[test]
    fn test_display_year_numeric_span() {
        assert_eq!(display_year("2023"), "2023-2024");
        assert_eq!(display_year("1999"), "1999-2000");
    }

    #[test]
    fn test_display_year_non_numeric_passthrough() {
        assert_eq!(display_year("Alumni"), "Alumni");
        assert_eq!(display_year("2023-archive"), "2023-archive");
    }

    #[test]
    fn test_display_year_without_successor_passes_through() {
        // A numeric token at the top of the range has no following year;
        // it must pass through rather than overflow
        let max = i64::MAX.to_string();
        assert_eq!(display_year(&max), max);
        assert_eq!(
            display_year(&i64::MIN.to_string()),
            format!("{}-{}", i64::MIN, i64::MIN + 1)
        );
    }

    #[test]
    fn test_name_from_separated_file() {
        assert_eq!(display_name_from_file("jane_doe-smith.jpg"), "Jane Doe Smith");
    }

    #[test]
    fn test_name_from_camel_case_file() {
        assert_eq!(display_name_from_file("janeDoe.png"), "Jane Doe");
    }

    #[test]
    fn test_name_collapses_separator_runs() {
        assert_eq!(display_name_from_file("jane__doe--2.jpg"), "Jane Doe 2");
    }

    #[test]
    fn test_name_uppercases_and_lowercases() {
        assert_eq!(display_name_from_file("JANE_DOE.jpg"), "Jane Doe");
    }

    #[test]
    fn test_degenerate_file_name_falls_back_to_placeholder() {
        assert_eq!(display_name_from_file(".jpg"), "Board Member");
        assert_eq!(display_name_from_file("___.png"), "Board Member");
        assert_eq!(display_name_from_file(""), "Board Member");
    }

    #[test]
    fn test_normalization_trims_and_case_folds() {
        assert_eq!(normalize_file_name(" Photo.JPG "), "photo.jpg");
    }

    #[test]
    fn test_role_match_is_case_insensitive() {
        let images = vec![image("photo.jpg")];
        let roles = vec![role(" Photo.JPG ", "Alice", Some("President"))];

        let members = resolve_members("2023", &images, Some(&roles));

        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Alice");
        assert_eq!(members[0].file_name, "photo.jpg");
        assert!(members[0].image_src.is_some());
    }

    #[test]
    fn test_unmatched_role_emits_placeholder_member() {
        let images = vec![image("present.jpg")];
        let roles = vec![
            role("present.jpg", "Alice", Some("President")),
            role("missing.jpg", "Bob", Some("Treasurer")),
        ];

        let members = resolve_members("2023", &images, Some(&roles));

        assert_eq!(members.len(), 2);
        assert_eq!(members[1].name, "Bob");
        assert_eq!(members[1].file_name, "missing.jpg");
        assert!(members[1].image_src.is_none());
    }

    #[test]
    fn test_unmatched_role_with_empty_name_derives_from_file() {
        let roles = vec![role("dana_lee.jpg", "", None)];
        let members = resolve_members("2023", &[], Some(&roles));

        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Dana Lee");
        assert!(members[0].image_src.is_none());
    }

    #[test]
    fn test_member_count_is_roles_plus_unmatched_images() {
        let images = vec![image("a.jpg"), image("b.jpg"), image("c.jpg")];
        let roles = vec![role("b.jpg", "Bea", None), role("ghost.jpg", "Gwen", None)];

        let members = resolve_members("2023", &images, Some(&roles));

        // 2 declarations + 2 images not claimed by any declaration
        assert_eq!(members.len(), 4);

        // No image is double-counted
        let with_images = members.iter().filter(|m| m.image_src.is_some()).count();
        assert_eq!(with_images, 3);
    }

    #[test]
    fn test_role_order_preserved_and_leftovers_sorted_after() {
        let images = vec![image("zara.jpg"), image("mid.jpg"), image("abby.jpg")];
        let roles = vec![role("mid.jpg", "Mia", Some("VP"))];

        let members = resolve_members("2023", &images, Some(&roles));

        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Mia", "Abby", "Zara"]);
    }

    #[test]
    fn test_member_ids_stable_and_unique() {
        let images = vec![image("a.jpg"), image("b.jpg")];
        let roles = vec![role("a.jpg", "Ada", None)];

        let first = resolve_members("2023", &images, Some(&roles));
        let second = resolve_members("2023", &images, Some(&roles));

        let ids: Vec<&str> = first.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2023-role-0-a.jpg", "2023-extra-0-b.jpg"]);
        let again: Vec<&str> = second.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn test_no_roles_synthesizes_all_members() {
        let images = vec![image("b.jpg"), image("a.jpg")];
        let members = resolve_members("2023", &images, None);

        assert_eq!(members.len(), 2);
        assert_eq!(members[0].file_name, "a.jpg");
        assert_eq!(members[1].file_name, "b.jpg");
        assert!(members.iter().all(|m| m.position.is_none()));
    }

    #[test]
    fn test_year_ordering_numeric_descending() {
        let mut years = vec!["2021", "2023", "2022"];
        years.sort_by(|a, b| compare_years_desc(a, b));
        assert_eq!(years, vec!["2023", "2022", "2021"]);
    }

    #[test]
    fn test_year_ordering_falls_back_to_lexicographic_descending() {
        let mut years = vec!["Alumni", "Founders", "2023"];
        years.sort_by(|a, b| compare_years_desc(a, b));
        assert_eq!(years, vec!["Founders", "Alumni", "2023"]);
    }

    #[test]
    fn test_year_ordering_fallback_ignores_case() {
        let mut years = vec!["alumni", "Founders"];
        years.sort_by(|a, b| compare_years_desc(a, b));
        assert_eq!(years, vec!["Founders", "alumni"]);
    }

    #[test]
    fn test_leftovers_sort_ignores_case() {
        let images = vec![image("Smith_John.jpg"), image("adams_jane.jpg")];
        let members = resolve_members("2023", &images, None);

        let files: Vec<&str> = members.iter().map(|m| m.file_name.as_str()).collect();
        assert_eq!(files, vec!["adams_jane.jpg", "Smith_John.jpg"]);
        assert_eq!(members[0].name, "Adams Jane");
    }

    #[test]
    fn test_build_roster_end_to_end() {
        use std::fs;
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let board = dir.path().join("board");
        fs::create_dir_all(board.join("2022")).unwrap();
        fs::create_dir_all(board.join("2023")).unwrap();
        fs::write(board.join("2022/solo_act.jpg"), b"s").unwrap();
        fs::write(board.join("2023/alice.jpg"), b"a").unwrap();
        fs::write(
            board.join("2023/members.json"),
            br#"{"roles":[{"file":"ALICE.JPG","name":"Alice","position":"President"}]}"#,
        )
        .unwrap();
        // Year with metadata but no images resolves to a one-member group
        fs::create_dir_all(board.join("2024")).unwrap();
        fs::write(
            board.join("2024/members.json"),
            br#"{"roles":[{"file":"pending.jpg","name":"Dana"}]}"#,
        )
        .unwrap();
        // Empty year directory drops out entirely
        fs::create_dir_all(board.join("2020")).unwrap();

        let index = AssetIndex::scan(dir.path()).unwrap();
        let roster = build_roster(&index);

        let years: Vec<&str> = roster.iter().map(|g| g.year.as_str()).collect();
        assert_eq!(years, vec!["2024", "2023", "2022"]);
        assert_eq!(roster[0].display_year, "2024-2025");
        assert_eq!(roster[0].members[0].name, "Dana");
        assert!(roster[0].members[0].image_src.is_none());
        assert_eq!(roster[1].members[0].name, "Alice");
        assert!(roster[1].members[0].image_src.is_some());
        assert_eq!(roster[2].members[0].name, "Solo Act");

        // No group ever resolves with zero members
        assert!(roster.iter().all(|g| !g.members.is_empty()));
    }
}
