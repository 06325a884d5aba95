//! Two-pass assembler for a SIC/XE subset.
//!
//! ```
//! use sicasm::{assemble, line::Source};
//!
//! let src = Source::parse("copy.asm", "COPY START 1000\n    LDA ALPHA\nALPHA RESW 1\n    END\n");
//! let asm = assemble(&src).unwrap();
//! assert_eq!(asm.resolution.symbols.get_val("ALPHA"), Some(0x1003));
//! assert_eq!(asm.generated.object_program(), "00000003\n");
//! ```

pub mod cursor;
pub mod error;
pub mod line;
pub mod msg;
pub mod objfile;
pub mod pass1;
pub mod pass2;
pub mod report;
pub mod table;

pub use error::{Error, UnitError};

use line::Source;
use msg::Warning;
use pass1::Resolution;
use pass2::Generated;

/// Result of running both passes over one source unit.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub resolution: Resolution,
    pub generated: Generated,
}

impl Assembly {
    pub fn warnings(&self) -> impl Iterator<Item = &Warning> {
        self.resolution
            .warnings
            .iter()
            .chain(self.generated.warnings.iter())
    }
}

/// Pass 1 then pass 2. Pass 2 does not run if pass 1 fails.
pub fn assemble(src: &Source) -> Result<Assembly, Error> {
    let resolution = pass1::resolve(src)?;
    let generated = pass2::generate(src, &resolution)?;
    Ok(Assembly {
        resolution,
        generated,
    })
}
