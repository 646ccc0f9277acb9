use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Jump field of a C-instruction, bits `j1 j2 j3` = `<0 =0 >0`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Jump {
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Jump> {
        s.parse::<Self>().ok()
    }

    pub fn to_bits(jump: Option<Jump>) -> u8 {
        jump.map_or(0, u8::from)
    }

    pub fn from_bits(bits: u8) -> Option<Jump> {
        Jump::try_from(bits & 0b111).ok()
    }
}

#[test]
fn test() {
    assert_eq!(Jump::parse("JMP"), Some(Jump::JMP));
    assert_eq!(Jump::parse("jmp"), None);
    assert_eq!(Jump::parse("JZ"), None);
    assert_eq!(Jump::to_bits(None), 0);
    assert_eq!(Jump::to_bits(Some(Jump::JLE)), 0b110);
    assert_eq!(Jump::from_bits(0b011), Some(Jump::JGE));
    assert_eq!(Jump::from_bits(0), None);
}
