use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Destination field of a C-instruction, bits `d1 d2 d3` = `A D M`.
///
/// "No destination" is `None` wherever a `Dest` is optional.
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
pub enum Dest {
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    pub fn parse(s: &str) -> Option<Dest> {
        s.parse::<Self>().ok()
    }

    pub fn to_bits(dest: Option<Dest>) -> u8 {
        dest.map_or(0, u8::from)
    }

    pub fn from_bits(bits: u8) -> Option<Dest> {
        Dest::try_from(bits & 0b111).ok()
    }
}

#[test]
fn test() {
    assert_eq!(Dest::parse("AMD"), Some(Dest::AMD));
    assert_eq!(Dest::parse("DM"), None);
    assert_eq!(Dest::parse("amd"), None);
    assert_eq!(Dest::to_bits(None), 0);
    assert_eq!(Dest::to_bits(Some(Dest::D)), 0b010);
    assert_eq!(Dest::from_bits(0), None);
    assert_eq!(Dest::from_bits(0b101), Some(Dest::AM));
    assert_eq!(Dest::MD.to_string(), "MD");
}
