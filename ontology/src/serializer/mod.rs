//! Graph serializers.
//!
//! Three formats are supported:
//! - **Turtle** ([`turtle`]): the persisted module graphs and the `.ttl` build artifacts
//! - **N-Triples** ([`ntriples`]): the reasoning-service wire format and the `.nt` artifacts
//! - **JSON-LD** ([`jsonld`]): the `.json` build artifacts
//!
//! All three walk the graph in its canonical order, so equal graphs always
//! produce byte-identical output.

pub mod jsonld;
pub mod ntriples;
pub mod turtle;

/// Compacts `iri` to `prefix:local` when a namespace matches and the local
/// part is a plain name. Returns `None` otherwise.
#[must_use]
pub fn compact(iri: &str, prefixes: &[(&str, &str)]) -> Option<String> {
    prefixes.iter().find_map(|(prefix, ns)| {
        let local = iri.strip_prefix(ns)?;
        is_plain_local(local).then(|| format!("{prefix}:{local}"))
    })
}

fn is_plain_local(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIXES: &[(&str, &str)] = &[("scim", "https://stratcomcoe.org/influence-mini/ontology#")];

    #[test]
    fn compacts_plain_names_only() {
        assert_eq!(
            compact("https://stratcomcoe.org/influence-mini/ontology#Motif", PREFIXES).as_deref(),
            Some("scim:Motif")
        );
        assert_eq!(
            compact("https://stratcomcoe.org/influence-mini/ontology#ex1_motif_0", PREFIXES).as_deref(),
            Some("scim:ex1_motif_0")
        );
        assert_eq!(
            compact("https://stratcomcoe.org/influence-mini/ontology#3f2a_motif_0", PREFIXES),
            None
        );
        assert_eq!(compact("https://elsewhere.org/x", PREFIXES), None);
    }
}
