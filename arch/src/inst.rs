use crate::{comp::Comp, dest::Dest, jump::Jump, symbol::ADDR_MAX};

use color_print::cformat;
use std::fmt::Display;

const C_HEADER: u16 = 0b111 << 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@addr`, 15-bit address constant.
    A(u16),
    /// `dest=comp;jump`
    C {
        dest: Option<Dest>,
        comp: Comp,
        jump: Option<Jump>,
    },
}

impl Inst {
    pub fn to_bin(&self) -> u16 {
        match *self {
            Inst::A(addr) => addr & ADDR_MAX,
            Inst::C { dest, comp, jump } => {
                C_HEADER
                    | (comp.to_bits() as u16) << 6
                    | (Dest::to_bits(dest) as u16) << 3
                    | Jump::to_bits(jump) as u16
            }
        }
    }

    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin & 0x8000 == 0 {
            return Some(Inst::A(bin));
        }
        if bin & C_HEADER != C_HEADER {
            return None;
        }
        let comp = Comp::from_bits(((bin >> 6) & 0x7F) as u8)?;
        let dest = Dest::from_bits(((bin >> 3) & 0b111) as u8);
        let jump = Jump::from_bits((bin & 0b111) as u8);
        Some(Inst::C { dest, comp, jump })
    }

    pub fn cformat(&self) -> String {
        match self {
            Inst::A(addr) => cformat!("<y>@{}</>", addr),
            Inst::C { dest, comp, jump } => {
                let dest = dest
                    .map(|d| cformat!("<blue>{}</>=", d))
                    .unwrap_or_default();
                let jump = jump
                    .map(|j| cformat!(";<green>{}</>", j))
                    .unwrap_or_default();
                cformat!("{}<red>{}</>{}", dest, comp, jump)
            }
        }
    }
}

impl Display for Inst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inst::A(addr) => write!(f, "@{}", addr),
            Inst::C { dest, comp, jump } => {
                if let Some(dest) = dest {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if let Some(jump) = jump {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $bin:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    assert_eq!(inst.to_bin(), $bin);
                    assert_eq!(Inst::from_bin($bin), Some(inst));
                }
            )*
        }
    }

    test_inst! {
        test_a_zero: Inst::A(0) => 0b0000000000000000,
        test_a_two: Inst::A(2) => 0b0000000000000010,
        test_a_max: Inst::A(32767) => 0b0111111111111111,
        test_d_eq_a: Inst::C { dest: Some(Dest::D), comp: Comp::A, jump: None } => 0b1110110000010000,
        test_d_eq_d_plus_a: Inst::C { dest: Some(Dest::D), comp: Comp::DPlusA, jump: None } => 0b1110000010010000,
        test_m_eq_d: Inst::C { dest: Some(Dest::M), comp: Comp::D, jump: None } => 0b1110001100001000,
        test_jmp: Inst::C { dest: None, comp: Comp::Zero, jump: Some(Jump::JMP) } => 0b1110101010000111,
        test_d_jgt: Inst::C { dest: None, comp: Comp::D, jump: Some(Jump::JGT) } => 0b1110001100000001,
        test_am_eq_m_plus_one: Inst::C { dest: Some(Dest::AM), comp: Comp::MPlusOne, jump: None } => 0b1111110111101000,
    }

    #[test]
    fn test_c_roundtrip_all() {
        let dests = std::iter::once(None).chain(Dest::iter().map(Some));
        for dest in dests {
            for comp in Comp::iter() {
                let jumps = std::iter::once(None).chain(Jump::iter().map(Some));
                for jump in jumps {
                    let inst = Inst::C { dest, comp, jump };
                    let bin = inst.to_bin();
                    assert_eq!(bin >> 13, 0b111);
                    assert_eq!(Inst::from_bin(bin), Some(inst), "{}", inst);
                }
            }
        }
    }

    #[test]
    fn test_from_bin_invalid() {
        // bits 13-14 must be set for a C-instruction
        assert_eq!(Inst::from_bin(0b1000110000010000), None);
        // comp field outside the table
        assert_eq!(Inst::from_bin(0b1111111111000000), None);
    }

    #[test]
    fn test_display() {
        let inst = Inst::C {
            dest: Some(Dest::AM),
            comp: Comp::MMinusOne,
            jump: Some(Jump::JNE),
        };
        assert_eq!(inst.to_string(), "AM=M-1;JNE");
        assert_eq!(Inst::A(21).to_string(), "@21");
        let jmp = Inst::C {
            dest: None,
            comp: Comp::Zero,
            jump: Some(Jump::JMP),
        };
        assert_eq!(jmp.to_string(), "0;JMP");
    }
}
