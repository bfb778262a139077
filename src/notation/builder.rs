//! HGVS protein notation builder
//!
//! Orchestrates codon assignment, residue trimming, change classification
//! and the per-kind special cases into a formatted `p.` notation string.
//!
//! Every non-fatal outcome is an absent notation: entry-guard rejections,
//! unrenderable coordinates and classification fallbacks all flow through
//! `Option`, never through errors.

use log::debug;

use crate::classify::protein::{classify_protein_change, ChangeKind};
use crate::codec;
use crate::codons;
use crate::notation::config::NotationConfig;
use crate::notation::context::{TranscriptChangeContext, VariantEffectFlags};
use crate::transcript::TranscriptSource;

/// Resolved protein change for one builder invocation.
///
/// Created fresh per call and never shared across variants. `notation`
/// holds the final formatted string; the remaining fields expose the
/// resolved working state for callers that want more than the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeNotation {
    /// Reference residues of the minimal changed window (1-letter codes)
    pub reference_residues: String,
    /// Alternate residues of the minimal changed window (1-letter codes)
    pub alternate_residues: String,
    /// Reference 3-letter abbreviation as rendered
    pub reference_abbreviation: String,
    /// Alternate 3-letter abbreviation as rendered (may carry `ext`/`del`)
    pub alternate_abbreviation: String,
    /// First affected protein position (1-based)
    pub start: u64,
    /// Last affected protein position (1-based)
    pub end: u64,
    /// Versioned protein accession
    pub protein_id: String,
    /// Resolved change kind
    pub kind: ChangeKind,
    /// Formatted notation string
    pub notation: String,
}

impl std::fmt::Display for ChangeNotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation)
    }
}

/// Count of residues gained before the first stop marker of a translated
/// alternate peptide.
///
/// In frameshift mode the count starts at the variant position (0-based);
/// otherwise it starts just past the reference peptide. Returns `None`
/// when no stop is found or when the stop marker is itself the first
/// affected residue (a non-positive count).
pub fn extra_residues(
    translated: &str,
    reference_peptide_len: usize,
    variant_pos: usize,
    is_frameshift: bool,
) -> Option<u64> {
    let stop = translated.find('*')?;
    let base = if is_frameshift {
        variant_pos
    } else {
        reference_peptide_len + 1
    };
    let extra = stop as i64 + 1 - base as i64;
    if extra <= 0 {
        None
    } else {
        Some(extra as u64)
    }
}

/// Outcome of walking a re-translated frameshift peptide against the
/// reference.
enum FrameshiftWalk {
    /// Both peptides reach their stop marker together with no mismatch
    SynonymousAtStop,
    /// First diverging residue pair
    Divergence {
        position: u64,
        reference: char,
        alternate: char,
    },
    /// One peptide ran out before any divergence was seen
    Exhausted,
}

/// Compare the alternate translation against the reference peptide
/// (extended with a synthetic stop), starting at `origin` (1-based).
fn walk_frameshift(peptide: &str, translated: &str, origin: u64) -> FrameshiftWalk {
    let reference: Vec<u8> = peptide.bytes().chain(std::iter::once(b'*')).collect();
    let alternate = translated.as_bytes();

    let mut i = origin.saturating_sub(1) as usize;
    loop {
        match (reference.get(i), alternate.get(i)) {
            (Some(&r), Some(&a)) if r == a && r == b'*' => return FrameshiftWalk::SynonymousAtStop,
            (Some(&r), Some(&a)) if r != a => {
                return FrameshiftWalk::Divergence {
                    position: (i + 1) as u64,
                    reference: r as char,
                    alternate: a as char,
                }
            }
            (Some(_), Some(_)) => i += 1,
            _ => return FrameshiftWalk::Exhausted,
        }
    }
}

fn residue_abbreviation(residue: char) -> String {
    codec::to_three_letter(&residue.to_string())
}

fn first_residue_abbreviation(residues: &str) -> String {
    residues
        .chars()
        .next()
        .map(residue_abbreviation)
        .unwrap_or_default()
}

fn last_residue_abbreviation(residues: &str) -> String {
    residues
        .chars()
        .last()
        .map(residue_abbreviation)
        .unwrap_or_default()
}

/// Builder for protein-level HGVS notation.
#[derive(Debug, Clone, Default)]
pub struct NotationBuilder {
    config: NotationConfig,
}

impl NotationBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with an explicit configuration.
    pub fn with_config(config: NotationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &NotationConfig {
        &self.config
    }

    /// Build the protein notation for one variant × transcript pair.
    ///
    /// `coding_notation` is the previously computed coding-level (`c.`)
    /// notation, used verbatim in silent (`(p.=)`) outputs.
    ///
    /// Returns `None` when an entry guard rejects the variant or the
    /// resolved change cannot be expressed within the peptide.
    pub fn build<T: TranscriptSource>(
        &self,
        transcript: &T,
        context: &TranscriptChangeContext,
        effects: &VariantEffectFlags,
        coding_notation: &str,
    ) -> Option<ChangeNotation> {
        // Entry guards: fail fast before any output is assembled.
        if context.is_reference_call() {
            debug!("skipping protein notation: reference call");
            return None;
        }
        if !context.has_valid_cds() {
            debug!("skipping protein notation: invalid CDS coordinates");
            return None;
        }
        if !context.alternate_is_canonical() {
            debug!(
                "skipping protein notation: non-canonical alternate allele {:?}",
                context.alternate_allele
            );
            return None;
        }

        if effects.stop_retained {
            return Some(self.silent(transcript, context, coding_notation));
        }

        let codons = codons::assign(context, transcript)?;
        let peptide = transcript.peptide();

        let ref_residues = codec::translate(&codons.ref_codon);
        let alt_residues = codec::translate(&codons.alt_codon);

        let trimmed = codec::trim_shared_ends(
            &ref_residues,
            &alt_residues,
            context.protein_begin,
            context.protein_end,
        );
        let frameshift = effects.frameshift || codons.frameshift;

        let mut kind = classify_protein_change(&trimmed.reference, &trimmed.alternate, frameshift);
        if kind == ChangeKind::None {
            return Some(self.silent(transcript, context, coding_notation));
        }

        let mut start = trimmed.start;
        let mut end = trimmed.end;
        let mut reference = trimmed.reference;
        let mut alternate = trimmed.alternate;

        let translate_alternate = || {
            codec::translate(&transcript.alternate_coding_sequence(
                context.coding_begin,
                context.coding_end,
                &context.alternate_allele,
            ))
        };
        let mut translated_alt: Option<String> = None;
        let mut fixed_abbreviations: Option<(String, String)> = None;

        match kind {
            ChangeKind::Frameshift => {
                let translated = translated_alt.get_or_insert_with(translate_alternate);
                let origin = context.protein_begin;
                if origin as usize > translated.len() {
                    // truncation past the end of the altered translation
                    fixed_abbreviations = Some(("del".to_string(), "del".to_string()));
                    start = origin;
                    end = origin;
                } else {
                    match walk_frameshift(peptide, translated, origin) {
                        FrameshiftWalk::SynonymousAtStop => {
                            return Some(self.silent(transcript, context, coding_notation));
                        }
                        FrameshiftWalk::Exhausted => {
                            debug!("frameshift translation exhausted without divergence");
                            return None;
                        }
                        FrameshiftWalk::Divergence {
                            position,
                            reference: r,
                            alternate: a,
                        } => {
                            start = position;
                            end = position;
                            reference = r.to_string();
                            alternate = a.to_string();
                        }
                    }
                }
            }
            ChangeKind::Insertion => {
                if self.config.rotate_indels {
                    let rotated = codec::rotate_three_prime(&reference, &alternate, start, peptide);
                    start = rotated.start;
                    alternate = rotated.alternate;
                }

                // The insertion precedes 1-based position `start`.
                let point = start as usize;
                let length = alternate.len();
                let pep = peptide.as_bytes();

                let duplicates_upstream = point > length
                    && point - 1 <= pep.len()
                    && &pep[point - 1 - length..point - 1] == alternate.as_bytes();

                if duplicates_upstream {
                    kind = ChangeKind::Duplication;
                    end = start - 1;
                    start -= length as u64;
                    reference = alternate.clone();
                } else {
                    if point < 2 {
                        debug!("insertion before the first residue is not expressible");
                        return None;
                    }
                    // Displayed reference context: the two residues
                    // flanking the insertion point.
                    let mut flanks = String::new();
                    match pep.get(point - 2) {
                        Some(&b) => flanks.push(b as char),
                        None => return None,
                    }
                    if let Some(&b) = pep.get(point - 1) {
                        flanks.push(b as char);
                    }
                    reference = flanks;
                    end = start;
                    start -= 1;
                }
            }
            ChangeKind::Deletion => {
                if self.config.rotate_indels {
                    let rotated = codec::rotate_three_prime(&reference, &alternate, start, peptide);
                    start = rotated.start;
                    reference = rotated.reference;
                    end = start + reference.len() as u64 - 1;
                }
            }
            // Every other kind reports the trimmed residues directly.
            _ => {}
        }

        let (mut ref_abbrev, mut alt_abbrev) = match fixed_abbreviations {
            Some(pair) => pair,
            None => {
                let mut r = codec::to_three_letter(&reference);
                if kind == ChangeKind::Frameshift {
                    // only the first reference residue is reported
                    r.truncate(3);
                }
                let a = if alternate.is_empty() {
                    "del".to_string()
                } else {
                    codec::to_three_letter(&alternate)
                };
                (r, a)
            }
        };

        // Effect overrides, highest precedence first.
        let mut stop_lost_body = false;
        if effects.start_lost {
            alt_abbrev = "?".to_string();
            kind = ChangeKind::Unknown;
        } else if effects.stop_lost {
            let translated = translated_alt.get_or_insert_with(translate_alternate);
            let mut abbrev = match alternate.chars().next() {
                Some(c) => residue_abbreviation(c),
                None => alt_abbrev.clone(),
            };
            match extra_residues(translated, peptide.len(), 0, false) {
                Some(n) => {
                    abbrev.push_str("extTer");
                    abbrev.push_str(&n.to_string());
                }
                None if kind == ChangeKind::Deletion => {}
                None => abbrev.push_str("extTer?"),
            }
            alt_abbrev = abbrev;
            stop_lost_body = true;
        } else if kind == ChangeKind::Deletion {
            alt_abbrev = "del".to_string();
        }

        let peptide_len = peptide.len() as u64;
        let body = if stop_lost_body {
            format!("{}{}{}", ref_abbrev, start, alt_abbrev)
        } else {
            match kind {
                ChangeKind::Duplication if start < end => format!(
                    "{}{}_{}{}dup",
                    first_residue_abbreviation(&reference),
                    start,
                    last_residue_abbreviation(&reference),
                    end
                ),
                ChangeKind::Duplication => format!("{}{}dup", ref_abbrev, start),
                ChangeKind::Substitution => format!("{}{}{}", ref_abbrev, start, alt_abbrev),
                ChangeKind::Insertion | ChangeKind::DeletionInsertion => {
                    if kind == ChangeKind::DeletionInsertion && start == end {
                        format!(
                            "{}{}delins{}",
                            first_residue_abbreviation(&reference),
                            start,
                            alt_abbrev
                        )
                    } else {
                        let (s, e) = if start > end { (end, start) } else { (start, end) };
                        // the stop marker sits one past the stored peptide
                        let limit = if reference.ends_with('*') {
                            peptide_len + 1
                        } else {
                            peptide_len
                        };
                        if e > limit {
                            debug!("resolved end {} exceeds peptide length {}", e, peptide_len);
                            return None;
                        }
                        let operation = if kind == ChangeKind::Insertion {
                            "ins"
                        } else {
                            "delins"
                        };
                        let mut body = format!(
                            "{}{}_{}{}{}{}",
                            first_residue_abbreviation(&reference),
                            s,
                            last_residue_abbreviation(&reference),
                            e,
                            operation,
                            alt_abbrev
                        );
                        if reference.ends_with('*') {
                            let translated = translated_alt.get_or_insert_with(translate_alternate);
                            if let Some(n) = extra_residues(translated, peptide.len(), 0, false) {
                                body.push_str("extTer");
                                body.push_str(&n.to_string());
                            }
                        }
                        body
                    }
                }
                ChangeKind::Frameshift => {
                    let mut body = format!("{}{}{}", ref_abbrev, start, alt_abbrev);
                    // a stop gained exactly at the variant position needs
                    // no fs suffix
                    if alt_abbrev != "Ter" {
                        let translated = translated_alt.get_or_insert_with(translate_alternate);
                        match extra_residues(
                            translated,
                            peptide.len(),
                            start.saturating_sub(1) as usize,
                            true,
                        ) {
                            Some(n) => {
                                body.push_str("fsTer");
                                body.push_str(&n.to_string());
                            }
                            None => body.push_str("fsTer?"),
                        }
                    }
                    body
                }
                ChangeKind::Deletion if reference.len() > 1 => format!(
                    "{}{}_{}{}del",
                    first_residue_abbreviation(&reference),
                    start,
                    last_residue_abbreviation(&reference),
                    end
                ),
                _ => format!("{}{}{}", ref_abbrev, start, alt_abbrev),
            }
        };

        let notation = if self.config.parenthesize_predictions {
            format!("{}:p.({})", transcript.protein_accession(), body)
        } else {
            format!("{}:p.{}", transcript.protein_accession(), body)
        };

        Some(ChangeNotation {
            reference_residues: reference,
            alternate_residues: alternate,
            reference_abbreviation: ref_abbrev,
            alternate_abbreviation: alt_abbrev,
            start,
            end,
            protein_id: transcript.protein_accession().to_string(),
            kind,
            notation,
        })
    }

    /// Silent output: the change has no protein-level consequence.
    fn silent<T: TranscriptSource>(
        &self,
        transcript: &T,
        context: &TranscriptChangeContext,
        coding_notation: &str,
    ) -> ChangeNotation {
        let start = context.protein_begin.min(context.protein_end);
        let end = context.protein_begin.max(context.protein_end);
        ChangeNotation {
            reference_residues: String::new(),
            alternate_residues: String::new(),
            reference_abbreviation: String::new(),
            alternate_abbreviation: String::new(),
            start,
            end,
            protein_id: transcript.protein_accession().to_string(),
            kind: ChangeKind::None,
            notation: format!("{}(p.=)", coding_notation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_residues_non_frameshift() {
        // reference peptide of 5 residues, stop at index 17 in the
        // alternate translation: 12 extra residues
        assert_eq!(extra_residues("MKPGFWAAAAAAAAAAA*", 5, 0, false), Some(12));
    }

    #[test]
    fn test_extra_residues_frameshift_counts_from_variant() {
        // variant residue at 0-based position 1, stop at index 6
        assert_eq!(extra_residues("MNPGFE*", 5, 1, true), Some(6));
    }

    #[test]
    fn test_extra_residues_no_stop_is_unknown() {
        assert_eq!(extra_residues("MNPGFE", 5, 1, true), None);
    }

    #[test]
    fn test_extra_residues_stop_at_variant_is_unknown() {
        // stop marker is itself the first affected residue
        assert_eq!(extra_residues("M*", 1, 1, true), None);
        assert_eq!(extra_residues("MK*", 2, 0, false), None);
    }

    #[test]
    fn test_walk_finds_first_divergence() {
        match walk_frameshift("MKPGF", "MNPGF", 2) {
            FrameshiftWalk::Divergence {
                position,
                reference,
                alternate,
            } => {
                assert_eq!(position, 2);
                assert_eq!(reference, 'K');
                assert_eq!(alternate, 'N');
            }
            _ => panic!("expected divergence"),
        }
    }

    #[test]
    fn test_walk_skips_matching_residues() {
        match walk_frameshift("MKPGF", "MKPGW", 2) {
            FrameshiftWalk::Divergence { position, .. } => assert_eq!(position, 5),
            _ => panic!("expected divergence"),
        }
    }

    #[test]
    fn test_walk_synonymous_at_stop() {
        // alternate matches the reference through the synthetic stop
        assert!(matches!(
            walk_frameshift("MKPGF", "MKPGF*", 2),
            FrameshiftWalk::SynonymousAtStop
        ));
    }

    #[test]
    fn test_walk_exhausted_translation() {
        assert!(matches!(
            walk_frameshift("MKPGF", "MKP", 2),
            FrameshiftWalk::Exhausted
        ));
    }
}
