//! Collapsing a walk of (k-1)-mer labels back into a flat sequence.

/// Converts a tour of overlapping (k-1)-mers into a DNA string.
///
/// The first label is emitted in full; every following label contributes only
/// its final character, since it overlaps its predecessor in all other
/// positions. An empty tour yields an empty string.
pub fn tour_to_sequence<S: AsRef<str>>(tour: &[S]) -> String {
    let Some((first, rest)) = tour.split_first() else {
        return String::new();
    };
    let first = first.as_ref();
    let mut sequence = String::with_capacity(first.len() + rest.len());
    sequence.push_str(first);
    for label in rest {
        if let Some(last) = label.as_ref().chars().last() {
            sequence.push(last);
        }
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_to_sequence() {
        let tour = ["ATG", "TGG", "GGC", "GCG"];
        assert_eq!(tour_to_sequence(&tour), "ATGGCG");
    }

    #[test]
    fn test_single_node_tour() {
        assert_eq!(tour_to_sequence(&["ACGT"]), "ACGT");
    }

    #[test]
    fn test_empty_tour() {
        let tour: Vec<String> = Vec::new();
        assert_eq!(tour_to_sequence(&tour), "");
    }

    #[test]
    fn test_owned_labels() {
        let tour = vec!["AA".to_string(), "AC".to_string(), "CG".to_string()];
        assert_eq!(tour_to_sequence(&tour), "AACG");
    }
}
