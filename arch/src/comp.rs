use bimap::BiMap;
use once_cell::sync::Lazy;
use std::fmt::Display;
use strum::EnumIter;

/// Computation field of a C-instruction.
///
/// Variants read as the mnemonic they stand for: `DPlusA` is `D+A`,
/// `NotM` is `!M`, `NegOne` is `-1`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, EnumIter)]
pub enum Comp {
    Zero,
    One,
    NegOne,
    D,
    A,
    NotD,
    NotA,
    NegD,
    NegA,
    DPlusOne,
    APlusOne,
    DMinusOne,
    AMinusOne,
    DPlusA,
    DMinusA,
    AMinusD,
    DAndA,
    DOrA,
    M,
    NotM,
    NegM,
    MPlusOne,
    MMinusOne,
    DPlusM,
    DMinusM,
    MMinusD,
    DAndM,
    DOrM,
}

static COMP_STR: Lazy<BiMap<Comp, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<Comp, &'static str> = BiMap::new();
    map.insert(Comp::Zero, "0");
    map.insert(Comp::One, "1");
    map.insert(Comp::NegOne, "-1");
    map.insert(Comp::D, "D");
    map.insert(Comp::A, "A");
    map.insert(Comp::NotD, "!D");
    map.insert(Comp::NotA, "!A");
    map.insert(Comp::NegD, "-D");
    map.insert(Comp::NegA, "-A");
    map.insert(Comp::DPlusOne, "D+1");
    map.insert(Comp::APlusOne, "A+1");
    map.insert(Comp::DMinusOne, "D-1");
    map.insert(Comp::AMinusOne, "A-1");
    map.insert(Comp::DPlusA, "D+A");
    map.insert(Comp::DMinusA, "D-A");
    map.insert(Comp::AMinusD, "A-D");
    map.insert(Comp::DAndA, "D&A");
    map.insert(Comp::DOrA, "D|A");
    map.insert(Comp::M, "M");
    map.insert(Comp::NotM, "!M");
    map.insert(Comp::NegM, "-M");
    map.insert(Comp::MPlusOne, "M+1");
    map.insert(Comp::MMinusOne, "M-1");
    map.insert(Comp::DPlusM, "D+M");
    map.insert(Comp::DMinusM, "D-M");
    map.insert(Comp::MMinusD, "M-D");
    map.insert(Comp::DAndM, "D&M");
    map.insert(Comp::DOrM, "D|M");
    map
});

// a c1 c2 c3 c4 c5 c6
static COMP_BIN: Lazy<BiMap<Comp, u8>> = Lazy::new(|| {
    let mut map: BiMap<Comp, u8> = BiMap::new();
    map.insert(Comp::Zero, 0b0_101010);
    map.insert(Comp::One, 0b0_111111);
    map.insert(Comp::NegOne, 0b0_111010);
    map.insert(Comp::D, 0b0_001100);
    map.insert(Comp::A, 0b0_110000);
    map.insert(Comp::NotD, 0b0_001101);
    map.insert(Comp::NotA, 0b0_110001);
    map.insert(Comp::NegD, 0b0_001111);
    map.insert(Comp::NegA, 0b0_110011);
    map.insert(Comp::DPlusOne, 0b0_011111);
    map.insert(Comp::APlusOne, 0b0_110111);
    map.insert(Comp::DMinusOne, 0b0_001110);
    map.insert(Comp::AMinusOne, 0b0_110010);
    map.insert(Comp::DPlusA, 0b0_000010);
    map.insert(Comp::DMinusA, 0b0_010011);
    map.insert(Comp::AMinusD, 0b0_000111);
    map.insert(Comp::DAndA, 0b0_000000);
    map.insert(Comp::DOrA, 0b0_010101);
    map.insert(Comp::M, 0b1_110000);
    map.insert(Comp::NotM, 0b1_110001);
    map.insert(Comp::NegM, 0b1_110011);
    map.insert(Comp::MPlusOne, 0b1_110111);
    map.insert(Comp::MMinusOne, 0b1_110010);
    map.insert(Comp::DPlusM, 0b1_000010);
    map.insert(Comp::DMinusM, 0b1_010011);
    map.insert(Comp::MMinusD, 0b1_000111);
    map.insert(Comp::DAndM, 0b1_000000);
    map.insert(Comp::DOrM, 0b1_010101);
    map
});

impl Comp {
    pub fn parse(s: &str) -> Option<Comp> {
        COMP_STR.get_by_right(s).copied()
    }

    pub fn format(&self) -> &'static str {
        COMP_STR.get_by_left(self).copied().unwrap_or("?")
    }

    /// 7-bit `a c1..c6` field.
    pub fn to_bits(&self) -> u8 {
        COMP_BIN.get_by_left(self).copied().unwrap_or(0)
    }

    pub fn from_bits(bits: u8) -> Option<Comp> {
        COMP_BIN.get_by_right(&bits).copied()
    }
}

impl Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
