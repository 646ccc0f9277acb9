/// Output framing for the encoded program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One line of sixteen `0`/`1` characters per instruction
    Text,
    /// Two bytes per instruction, big-endian
    Bin,
}

pub fn to_bin_str(word: u16) -> String {
    format!("{:016b}", word)
}

pub fn emit(words: &[u16], format: Format) -> Vec<u8> {
    match format {
        Format::Text => words
            .iter()
            .flat_map(|word| {
                let mut line = to_bin_str(*word).into_bytes();
                line.push(b'\n');
                line
            })
            .collect(),
        Format::Bin => words.iter().flat_map(|word| word.to_be_bytes()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_str() {
        assert_eq!(to_bin_str(0), "0000000000000000");
        assert_eq!(to_bin_str(2), "0000000000000010");
        assert_eq!(to_bin_str(0xFFFF), "1111111111111111");
        assert_eq!(to_bin_str(0b1110110000010000), "1110110000010000");
    }

    #[test]
    fn test_text() {
        let out = emit(&[2, 0b1110110000010000], Format::Text);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0000000000000010\n1110110000010000\n"
        );
        assert!(emit(&[], Format::Text).is_empty());
    }

    #[test]
    fn test_bin() {
        let out = emit(&[0x0002, 0xEC10], Format::Bin);
        assert_eq!(out, vec![0x00, 0x02, 0xEC, 0x10]);
    }
}
