use crate::schema::Author;

/// Substrings that mark an authorship string as a single organization
/// rather than a comma-separated list of people.
const ORGANIZATION_MARKERS: [&str; 4] = ["Consortium", "Initiative", "Group", "Project"];

/// Parses a free-text authorship string into Schema.org authors.
///
/// Truncation markers left over from "et al." style listings (`"..,"`,
/// `".."`) are stripped first. A string containing any organization
/// marker becomes exactly one `Organization`; anything else is treated
/// as a comma-separated list of people. Input order is preserved.
pub fn parse_authors(raw: &str) -> Vec<Author> {
    let cleaned = raw.replace("..,", "").replace("..", "");
    let cleaned = cleaned.trim();

    if ORGANIZATION_MARKERS
        .iter()
        .any(|marker| cleaned.contains(marker))
    {
        return vec![Author::Organization {
            name: cleaned.to_string(),
        }];
    }

    let mut authors = Vec::new();
    for fragment in cleaned.split(',') {
        let name = fragment.trim();
        if name.is_empty() {
            continue;
        }
        let mut tokens = name.split_whitespace();
        let Some(family) = tokens.next() else {
            continue;
        };
        let given: Vec<&str> = tokens.collect();
        authors.push(Author::Person {
            name: name.to_string(),
            family_name: family.to_string(),
            // Single-token names carry only a family name. The
            // first-token rule mis-splits particles and double
            // surnames; that limitation is accepted.
            given_name: if given.is_empty() {
                None
            } else {
                Some(given.join(" "))
            },
        });
    }
    authors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_truncation_markers() {
        let authors = parse_authors("Yu J, Hu S,..");
        assert_eq!(authors.len(), 2);
        assert_eq!(
            authors[1],
            Author::Person {
                name: "Hu S".to_string(),
                family_name: "Hu".to_string(),
                given_name: Some("S".to_string()),
            }
        );
    }

    #[test]
    fn multi_token_given_name_joined_by_single_space() {
        let authors = parse_authors("Van de Peer Y");
        assert_eq!(
            authors,
            vec![Author::Person {
                name: "Van de Peer Y".to_string(),
                family_name: "Van".to_string(),
                given_name: Some("de Peer Y".to_string()),
            }]
        );
    }
}
