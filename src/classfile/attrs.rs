use super::error::ParseError;
use super::reader::Reader;

/// A generic attribute: a name index and an opaque payload. Only `Code`
/// (see [`super::code`]) reinterprets the payload, on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name_index: u16,
    pub info: &'a [u8],
}

impl<'a> Attribute<'a> {
    pub(super) fn read(r: &mut Reader<'a>) -> Result<Self, ParseError> {
        let name_index = r.u16()?;
        let length = r.u32()?;
        let info = r.get(length as usize)?;
        Ok(Self { name_index, info })
    }

    pub(super) fn read_list(r: &mut Reader<'a>) -> Result<Vec<Self>, ParseError> {
        r.parse_list(Self::read)
    }
}
