use bimap::BiMap;
use color_print::cformat;
use num_enum::IntoPrimitive;
use once_cell::sync::Lazy;
use strum::{Display, EnumIter, EnumString};

/// Mnemonics known to the operation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum OpKind {
    LDA,
    LDX,
    LDS,
    LDT,
    STA,
    ADD,
    ADDR,
    COMPR,
    CLEAR,
    TIX,
    TIXR,
    J,
    JEQ,
    JLT,
    JSUB,
    RSUB,
}

// OPTAB: mnemonic <-> opcode byte
static OPTAB: Lazy<BiMap<OpKind, u8>> = Lazy::new(|| {
    let mut map: BiMap<OpKind, u8> = BiMap::new();
    map.insert(OpKind::LDA, 0x00);
    map.insert(OpKind::LDX, 0x04);
    map.insert(OpKind::LDS, 0x6C);
    map.insert(OpKind::LDT, 0x74);
    map.insert(OpKind::STA, 0x0C);
    map.insert(OpKind::ADD, 0x18);
    map.insert(OpKind::ADDR, 0x90);
    map.insert(OpKind::COMPR, 0xA0);
    map.insert(OpKind::CLEAR, 0xB4);
    map.insert(OpKind::TIX, 0x2C);
    map.insert(OpKind::TIXR, 0xB8);
    map.insert(OpKind::J, 0x3C);
    map.insert(OpKind::JEQ, 0x30);
    map.insert(OpKind::JLT, 0x38);
    map.insert(OpKind::JSUB, 0x48);
    map.insert(OpKind::RSUB, 0x4C);
    map
});

impl OpKind {
    /// Mnemonics are matched case-sensitively, the way they are written in
    /// the table.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Undefined Op: {s}")),
        }
    }

    pub fn opcode(&self) -> u8 {
        // every variant is inserted into OPTAB above
        OPTAB.get_by_left(self).copied().unwrap_or_default()
    }

    pub fn from_opcode(opcode: u8) -> Option<Self> {
        OPTAB.get_by_right(&opcode).copied()
    }
}

/// Instruction format. The primitive value is the size in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive)]
#[repr(u8)]
pub enum Format {
    #[default]
    Three = 3,
    Four = 4,
}

impl Format {
    /// Format implied by an opcode token: `+` marks the extended format.
    pub fn of(token: &str) -> Self {
        if token.starts_with('+') {
            Format::Four
        } else {
            Format::Three
        }
    }

    pub fn size(self) -> u32 {
        u8::from(self) as u32
    }

    pub fn flag(self) -> u32 {
        match self {
            Format::Three => 0,
            Format::Four => 1,
        }
    }
}

/// An opcode token resolved against OPTAB, e.g. `LDA` or `+LDA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mnemonic {
    pub kind: OpKind,
    pub format: Format,
}

impl Mnemonic {
    pub fn parse(token: &str) -> Result<Self, String> {
        let format = Format::of(token);
        let name = token.strip_prefix('+').unwrap_or(token);
        let kind = OpKind::parse(name)?;
        Ok(Mnemonic { kind, format })
    }

    pub fn opcode(&self) -> u8 {
        self.kind.opcode()
    }

    pub fn is_extended(&self) -> bool {
        self.format == Format::Four
    }

    pub fn cformat(&self) -> String {
        match self.format {
            Format::Three => cformat!("<r>{:<6}</>", self.kind),
            Format::Four => cformat!("<r>+{:<5}</>", self.kind),
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.format {
            Format::Three => write!(f, "{}", self.kind),
            Format::Four => write!(f, "+{}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    macro_rules! test_opcode {
        ($($name:ident: $kind:expr => $code:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!($kind.opcode(), $code);
                    assert_eq!(OpKind::from_opcode($code), Some($kind));
                }
            )*
        }
    }

    test_opcode! {
        test_lda: OpKind::LDA => 0x00,
        test_ldx: OpKind::LDX => 0x04,
        test_lds: OpKind::LDS => 0x6C,
        test_ldt: OpKind::LDT => 0x74,
        test_sta: OpKind::STA => 0x0C,
        test_add: OpKind::ADD => 0x18,
        test_addr: OpKind::ADDR => 0x90,
        test_compr: OpKind::COMPR => 0xA0,
        test_clear: OpKind::CLEAR => 0xB4,
        test_tix: OpKind::TIX => 0x2C,
        test_tixr: OpKind::TIXR => 0xB8,
        test_j: OpKind::J => 0x3C,
        test_jeq: OpKind::JEQ => 0x30,
        test_jlt: OpKind::JLT => 0x38,
        test_jsub: OpKind::JSUB => 0x48,
        test_rsub: OpKind::RSUB => 0x4C,
    }

    #[test]
    fn every_mnemonic_is_in_optab() {
        for kind in OpKind::iter() {
            assert_eq!(OpKind::from_opcode(kind.opcode()), Some(kind));
        }
        assert_eq!(OpKind::iter().count(), 16);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(OpKind::parse("LDA"), Ok(OpKind::LDA));
        assert!(OpKind::parse("lda").is_err());
        assert!(OpKind::parse("HOGE").is_err());
        assert_eq!(OpKind::from_opcode(0xFF), None);
    }

    #[test]
    fn mnemonic_extended() {
        let m = Mnemonic::parse("+LDA").unwrap();
        assert_eq!(m.kind, OpKind::LDA);
        assert!(m.is_extended());
        assert_eq!(m.to_string(), "+LDA");

        let m = Mnemonic::parse("STA").unwrap();
        assert_eq!(m.format, Format::Three);
        assert_eq!(m.opcode(), 0x0C);

        assert!(Mnemonic::parse("+RESW").is_err());
        assert!(Mnemonic::parse("+").is_err());
    }

    #[test]
    fn format_size() {
        assert_eq!(Format::of("LDA").size(), 3);
        assert_eq!(Format::of("+LDA").size(), 4);
        assert_eq!(Format::of("+WHATEVER").size(), 4);
        assert_eq!(Format::Four.flag(), 1);
        assert_eq!(Format::Three.flag(), 0);
    }
}
