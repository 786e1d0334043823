use super::attrs::Attribute;
use super::error::ParseError;
use super::reader::Reader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionEntry {
    pub start_pc: u16,
    pub end_pc: u16,
    pub handler_pc: u16,
    pub catch_type: u16,
}

/// Structured form of a `Code` attribute payload.
#[derive(Debug)]
pub struct Code<'a> {
    pub max_stack: u16,
    pub max_locals: u16,
    pub code: &'a [u8],
    pub exceptions: Vec<ExceptionEntry>,
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> Code<'a> {
    /// Error offsets are relative to the payload, not the enclosing file.
    pub fn parse(info: &'a [u8]) -> Result<Self, ParseError> {
        let r = &mut Reader::new(info);
        let max_stack = r.u16()?;
        let max_locals = r.u16()?;
        let code_len = r.u32()?;
        let code = r.get(code_len as usize)?;

        // Exception tables are not implemented.
        let offset = r.pos();
        if r.u16()? != 0 {
            return Err(ParseError::UnsupportedFeature {
                feature: "exception_table",
                offset,
            });
        }
        let exceptions = Vec::new();

        let attributes = Attribute::read_list(r)?;
        Ok(Self {
            max_stack,
            max_locals,
            code,
            exceptions,
            attributes,
        })
    }
}
