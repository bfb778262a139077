//! Amino acid vocabulary and the standard genetic code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amino acid enumeration
///
/// Covers the 20 standard residues plus selenocysteine, pyrrolysine,
/// the stop marker (`Ter`, rendered `*` in one-letter form) and the
/// unknown residue (`Xaa`, rendered `X`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AminoAcid {
    Ala, // A
    Arg, // R
    Asn, // N
    Asp, // D
    Cys, // C
    Gln, // Q
    Glu, // E
    Gly, // G
    His, // H
    Ile, // I
    Leu, // L
    Lys, // K
    Met, // M
    Phe, // F
    Pro, // P
    Pyl, // O (pyrrolysine)
    Sec, // U (selenocysteine)
    Ser, // S
    Thr, // T
    Trp, // W
    Tyr, // Y
    Val, // V
    Ter, // * (stop codon)
    Xaa, // X (unknown)
}

impl AminoAcid {
    /// Get 3-letter code
    pub fn to_three_letter(&self) -> &'static str {
        match self {
            Self::Ala => "Ala",
            Self::Arg => "Arg",
            Self::Asn => "Asn",
            Self::Asp => "Asp",
            Self::Cys => "Cys",
            Self::Gln => "Gln",
            Self::Glu => "Glu",
            Self::Gly => "Gly",
            Self::His => "His",
            Self::Ile => "Ile",
            Self::Leu => "Leu",
            Self::Lys => "Lys",
            Self::Met => "Met",
            Self::Phe => "Phe",
            Self::Pro => "Pro",
            Self::Pyl => "Pyl",
            Self::Sec => "Sec",
            Self::Ser => "Ser",
            Self::Thr => "Thr",
            Self::Trp => "Trp",
            Self::Tyr => "Tyr",
            Self::Val => "Val",
            Self::Ter => "Ter",
            Self::Xaa => "Xaa",
        }
    }

    /// Get 1-letter code
    pub fn to_one_letter(&self) -> char {
        match self {
            Self::Ala => 'A',
            Self::Arg => 'R',
            Self::Asn => 'N',
            Self::Asp => 'D',
            Self::Cys => 'C',
            Self::Gln => 'Q',
            Self::Glu => 'E',
            Self::Gly => 'G',
            Self::His => 'H',
            Self::Ile => 'I',
            Self::Leu => 'L',
            Self::Lys => 'K',
            Self::Met => 'M',
            Self::Phe => 'F',
            Self::Pro => 'P',
            Self::Pyl => 'O',
            Self::Sec => 'U',
            Self::Ser => 'S',
            Self::Thr => 'T',
            Self::Trp => 'W',
            Self::Tyr => 'Y',
            Self::Val => 'V',
            Self::Ter => '*',
            Self::Xaa => 'X',
        }
    }

    /// Parse from 1-letter code (uppercase only)
    ///
    /// HGVS notation uses uppercase for 1-letter amino acid codes;
    /// lowercase letters are reserved for edit keywords like `fs` and `ext`.
    pub fn from_one_letter(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Ala),
            'R' => Some(Self::Arg),
            'N' => Some(Self::Asn),
            'D' => Some(Self::Asp),
            'C' => Some(Self::Cys),
            'Q' => Some(Self::Gln),
            'E' => Some(Self::Glu),
            'G' => Some(Self::Gly),
            'H' => Some(Self::His),
            'I' => Some(Self::Ile),
            'L' => Some(Self::Leu),
            'K' => Some(Self::Lys),
            'M' => Some(Self::Met),
            'F' => Some(Self::Phe),
            'O' => Some(Self::Pyl),
            'P' => Some(Self::Pro),
            'U' => Some(Self::Sec),
            'S' => Some(Self::Ser),
            'T' => Some(Self::Thr),
            'W' => Some(Self::Trp),
            'Y' => Some(Self::Tyr),
            'V' => Some(Self::Val),
            '*' => Some(Self::Ter),
            'X' => Some(Self::Xaa),
            _ => None,
        }
    }

    /// Translate a codon under the standard genetic code.
    ///
    /// Bases are matched case-insensitively and `U` is treated as `T`.
    /// Codons containing any other character (ambiguity codes included)
    /// translate to [`AminoAcid::Xaa`].
    pub fn from_codon(codon: [u8; 3]) -> Self {
        let mut c = [0u8; 3];
        for (i, b) in codon.iter().enumerate() {
            c[i] = match b.to_ascii_uppercase() {
                b'U' => b'T',
                other => other,
            };
        }
        match &c {
            b"TTT" | b"TTC" => Self::Phe,
            b"TTA" | b"TTG" | b"CTT" | b"CTC" | b"CTA" | b"CTG" => Self::Leu,
            b"ATT" | b"ATC" | b"ATA" => Self::Ile,
            b"ATG" => Self::Met,
            b"GTT" | b"GTC" | b"GTA" | b"GTG" => Self::Val,
            b"TCT" | b"TCC" | b"TCA" | b"TCG" | b"AGT" | b"AGC" => Self::Ser,
            b"CCT" | b"CCC" | b"CCA" | b"CCG" => Self::Pro,
            b"ACT" | b"ACC" | b"ACA" | b"ACG" => Self::Thr,
            b"GCT" | b"GCC" | b"GCA" | b"GCG" => Self::Ala,
            b"TAT" | b"TAC" => Self::Tyr,
            b"TAA" | b"TAG" | b"TGA" => Self::Ter,
            b"CAT" | b"CAC" => Self::His,
            b"CAA" | b"CAG" => Self::Gln,
            b"AAT" | b"AAC" => Self::Asn,
            b"AAA" | b"AAG" => Self::Lys,
            b"GAT" | b"GAC" => Self::Asp,
            b"GAA" | b"GAG" => Self::Glu,
            b"TGT" | b"TGC" => Self::Cys,
            b"TGG" => Self::Trp,
            b"CGT" | b"CGC" | b"CGA" | b"CGG" | b"AGA" | b"AGG" => Self::Arg,
            b"GGT" | b"GGC" | b"GGA" | b"GGG" => Self::Gly,
            _ => Self::Xaa,
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_three_letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amino_acid_codes() {
        let aa = AminoAcid::Met;
        assert_eq!(aa.to_three_letter(), "Met");
        assert_eq!(aa.to_one_letter(), 'M');
        assert_eq!(AminoAcid::from_one_letter('M'), Some(AminoAcid::Met));
    }

    #[test]
    fn test_one_letter_rejects_lowercase() {
        assert_eq!(AminoAcid::from_one_letter('v'), None);
        assert_eq!(AminoAcid::from_one_letter('*'), Some(AminoAcid::Ter));
    }

    #[test]
    fn test_from_codon_standard_code() {
        assert_eq!(AminoAcid::from_codon(*b"ATG"), AminoAcid::Met);
        assert_eq!(AminoAcid::from_codon(*b"TTT"), AminoAcid::Phe);
        assert_eq!(AminoAcid::from_codon(*b"GAG"), AminoAcid::Glu);
        assert_eq!(AminoAcid::from_codon(*b"TGG"), AminoAcid::Trp);
    }

    #[test]
    fn test_from_codon_stop_codons() {
        assert_eq!(AminoAcid::from_codon(*b"TAA"), AminoAcid::Ter);
        assert_eq!(AminoAcid::from_codon(*b"TAG"), AminoAcid::Ter);
        assert_eq!(AminoAcid::from_codon(*b"TGA"), AminoAcid::Ter);
    }

    #[test]
    fn test_from_codon_case_and_rna() {
        assert_eq!(AminoAcid::from_codon(*b"atg"), AminoAcid::Met);
        assert_eq!(AminoAcid::from_codon(*b"AUG"), AminoAcid::Met);
        assert_eq!(AminoAcid::from_codon(*b"aTg"), AminoAcid::Met);
    }

    #[test]
    fn test_from_codon_ambiguous_base() {
        assert_eq!(AminoAcid::from_codon(*b"ATN"), AminoAcid::Xaa);
        assert_eq!(AminoAcid::from_codon(*b"NNN"), AminoAcid::Xaa);
    }

    #[test]
    fn test_sixty_one_sense_codons() {
        let bases = [b'A', b'C', b'G', b'T'];
        let mut sense = 0;
        let mut stop = 0;
        for a in bases {
            for b in bases {
                for c in bases {
                    match AminoAcid::from_codon([a, b, c]) {
                        AminoAcid::Ter => stop += 1,
                        AminoAcid::Xaa => panic!("unassigned codon"),
                        _ => sense += 1,
                    }
                }
            }
        }
        assert_eq!(sense, 61);
        assert_eq!(stop, 3);
    }
}
