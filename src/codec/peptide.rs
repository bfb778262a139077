//! Peptide-level sequence operations
//!
//! Residue strings throughout this crate use uppercase 1-letter codes with
//! `*` for the stop marker and `X` for untranslatable codons.
//!
//! # Coordinate System
//!
//! | Parameter | Basis | Notes |
//! |-----------|-------|-------|
//! | `start` / `end` | 1-based | Inclusive protein positions |
//! | Rotation probe | 0-based | Internal index into the peptide |

use crate::codec::amino_acid::AminoAcid;

/// Translate a nucleotide sequence into 1-letter residues.
///
/// Translation is case-insensitive and reads complete triplets only; a
/// trailing partial codon is dropped. Stop codons become `*`, codons with
/// ambiguity codes become `X`.
pub fn translate(nucleotides: &str) -> String {
    let bytes = nucleotides.as_bytes();
    let mut residues = String::with_capacity(bytes.len() / 3);
    for chunk in bytes.chunks_exact(3) {
        let aa = AminoAcid::from_codon([chunk[0], chunk[1], chunk[2]]);
        residues.push(aa.to_one_letter());
    }
    residues
}

/// Expand a 1-letter residue string into 3-letter abbreviations.
///
/// Characters outside the residue alphabet expand to `Xaa`. An empty input
/// yields an empty string; the `del` sentinel for empty alternates is the
/// notation builder's concern, not this codec's.
pub fn to_three_letter(residues: &str) -> String {
    let mut out = String::with_capacity(residues.len() * 3);
    for c in residues.chars() {
        let aa = AminoAcid::from_one_letter(c).unwrap_or(AminoAcid::Xaa);
        out.push_str(aa.to_three_letter());
    }
    out
}

/// A changed residue window after shared-end trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedChange {
    /// Remaining reference residues
    pub reference: String,
    /// Remaining alternate residues
    pub alternate: String,
    /// New start position (1-based, inclusive)
    pub start: u64,
    /// New end position (1-based, inclusive)
    pub end: u64,
}

/// Trim the shared prefix and shared suffix between two residue strings.
///
/// `start` and `end` are the 1-based protein positions of the original
/// reference window; they are advanced/retracted by the trimmed counts.
/// When one string is a prefix of the other the result can carry a
/// transient `start > end`, which the notation builder resolves during
/// insertion handling.
pub fn trim_shared_ends(reference: &str, alternate: &str, start: u64, end: u64) -> TrimmedChange {
    let ref_bytes = reference.as_bytes();
    let alt_bytes = alternate.as_bytes();

    let mut lead = 0;
    while lead < ref_bytes.len() && lead < alt_bytes.len() && ref_bytes[lead] == alt_bytes[lead] {
        lead += 1;
    }

    let mut trail = 0;
    while trail < ref_bytes.len() - lead
        && trail < alt_bytes.len() - lead
        && ref_bytes[ref_bytes.len() - 1 - trail] == alt_bytes[alt_bytes.len() - 1 - trail]
    {
        trail += 1;
    }

    TrimmedChange {
        reference: reference[lead..reference.len() - trail].to_string(),
        alternate: alternate[lead..alternate.len() - trail].to_string(),
        start: start + lead as u64,
        end: end - trail as u64,
    }
}

/// Result of a 3'-direction rotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatedChange {
    /// New window position (1-based). For a deletion this is the first
    /// deleted residue; for an insertion, the residue the insertion
    /// precedes.
    pub start: u64,
    /// Rotated reference residues (deletions)
    pub reference: String,
    /// Rotated alternate residues (insertions)
    pub alternate: String,
    /// Whether any rotation took place
    pub shifted: bool,
}

/// Rotate an ambiguous indel window toward the 3' end of a peptide.
///
/// Applies only when exactly one of `reference`/`alternate` is empty (a
/// pure insertion or pure deletion); anything else is returned unchanged.
/// The window is shifted downstream one residue at a time for as long as an
/// equivalent placement exists, rotating the indel sequence with it. The
/// 3'-most placement is a fixed point: rotating it again changes nothing.
pub fn rotate_three_prime(
    reference: &str,
    alternate: &str,
    start: u64,
    peptide: &str,
) -> RotatedChange {
    if reference.is_empty() == alternate.is_empty() || start == 0 {
        return RotatedChange {
            start,
            reference: reference.to_string(),
            alternate: alternate.to_string(),
            shifted: false,
        };
    }

    let is_deletion = alternate.is_empty();
    let mut window: Vec<u8> = if is_deletion {
        reference.as_bytes().to_vec()
    } else {
        alternate.as_bytes().to_vec()
    };

    let peptide_bytes = peptide.as_bytes();
    let window_len = reference.len();
    let mut position = start as usize;

    loop {
        // 0-based index of the residue just past the current window
        let probe = position - 1 + window_len;
        if probe >= peptide_bytes.len() || window[0] != peptide_bytes[probe] {
            break;
        }
        window.rotate_left(1);
        position += 1;
    }

    let rotated = String::from_utf8(window).expect("residue strings are ASCII");
    let (new_ref, new_alt) = if is_deletion {
        (rotated, String::new())
    } else {
        (String::new(), rotated)
    };

    RotatedChange {
        start: position as u64,
        reference: new_ref,
        alternate: new_alt,
        shifted: position as u64 != start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_simple() {
        assert_eq!(translate("ATGAAACCC"), "MKP");
    }

    #[test]
    fn test_translate_stop_and_unknown() {
        assert_eq!(translate("TGA"), "*");
        assert_eq!(translate("ATGNNN"), "MX");
    }

    #[test]
    fn test_translate_drops_partial_codon() {
        assert_eq!(translate("ATGAA"), "M");
        assert_eq!(translate("AA"), "");
        assert_eq!(translate(""), "");
    }

    #[test]
    fn test_translate_mixed_case() {
        assert_eq!(translate("atgAaaCcc"), "MKP");
    }

    #[test]
    fn test_to_three_letter() {
        assert_eq!(to_three_letter("KV"), "LysVal");
        assert_eq!(to_three_letter("*"), "Ter");
        assert_eq!(to_three_letter(""), "");
        assert_eq!(to_three_letter("?"), "Xaa");
    }

    #[test]
    fn test_trim_no_overlap() {
        let t = trim_shared_ends("K", "E", 2, 2);
        assert_eq!(t.reference, "K");
        assert_eq!(t.alternate, "E");
        assert_eq!(t.start, 2);
        assert_eq!(t.end, 2);
    }

    #[test]
    fn test_trim_shared_prefix() {
        let t = trim_shared_ends("KV", "KA", 5, 6);
        assert_eq!(t.reference, "V");
        assert_eq!(t.alternate, "A");
        assert_eq!(t.start, 6);
        assert_eq!(t.end, 6);
    }

    #[test]
    fn test_trim_shared_suffix() {
        let t = trim_shared_ends("VK", "AK", 5, 6);
        assert_eq!(t.reference, "V");
        assert_eq!(t.alternate, "A");
        assert_eq!(t.start, 5);
        assert_eq!(t.end, 5);
    }

    #[test]
    fn test_trim_to_insertion_window() {
        // "K" -> "KA": the trailing insertion leaves a transient start > end
        let t = trim_shared_ends("K", "KA", 10, 10);
        assert_eq!(t.reference, "");
        assert_eq!(t.alternate, "A");
        assert_eq!(t.start, 11);
        assert_eq!(t.end, 10);
    }

    #[test]
    fn test_trim_identical_strings() {
        let t = trim_shared_ends("K", "K", 10, 10);
        assert_eq!(t.reference, "");
        assert_eq!(t.alternate, "");
    }

    #[test]
    fn test_rotate_insertion_through_repeat() {
        // MKPPPG: inserting P before position 3 is equivalent up to position 6
        let r = rotate_three_prime("", "P", 3, "MKPPPG");
        assert!(r.shifted);
        assert_eq!(r.start, 6);
        assert_eq!(r.alternate, "P");
    }

    #[test]
    fn test_rotate_deletion_through_repeat() {
        let r = rotate_three_prime("P", "", 3, "MKPPPG");
        assert!(r.shifted);
        assert_eq!(r.start, 5);
        assert_eq!(r.reference, "P");
    }

    #[test]
    fn test_rotate_multi_residue_window() {
        // Deleting KV at 2 in MKVKVW can shift to 4
        let r = rotate_three_prime("KV", "", 2, "MKVKVW");
        assert!(r.shifted);
        assert_eq!(r.start, 4);
        assert_eq!(r.reference, "KV");
    }

    #[test]
    fn test_rotate_is_idempotent_at_fixed_point() {
        let first = rotate_three_prime("", "P", 3, "MKPPPG");
        let again = rotate_three_prime("", &first.alternate, first.start, "MKPPPG");
        assert!(!again.shifted);
        assert_eq!(again.start, first.start);
        assert_eq!(again.alternate, first.alternate);
    }

    #[test]
    fn test_rotate_ignores_substitutions() {
        let r = rotate_three_prime("K", "E", 2, "MKKK");
        assert!(!r.shifted);
        assert_eq!(r.start, 2);
    }

    #[test]
    fn test_rotate_stops_at_peptide_end() {
        let r = rotate_three_prime("", "G", 6, "MKPPPG");
        assert!(r.shifted);
        assert_eq!(r.start, 7);
    }
}
