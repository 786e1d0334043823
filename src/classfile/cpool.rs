use super::attrs::Attribute;
use super::error::ParseError;
use super::reader::Reader;
use crate::util::BStr;

/// A constant pool entry. MethodHandle, MethodType, and InvokeDynamic are
/// recognized tags without decode branches; the parser rejects them like
/// unknown tag values. Utf8 is raw modified UTF-8, never validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Const<'a> {
    Utf8(BStr<'a>),                // 1
    Integer(i32),                  // 3
    Float(u32),                    // 4, raw bits
    Long(u64),                     // 5, raw bits, occupies two slots
    Double(u64),                   // 6, raw bits, occupies two slots
    Class(u16),                    // 7
    String(u16),                   // 8
    Fieldref(u16, u16),            // 9
    Methodref(u16, u16),           // 10
    InterfaceMethodref(u16, u16),  // 11
    NameAndType(u16, u16),         // 12
    MethodHandle(u8, u16),         // 15
    MethodType(u16),               // 16
    InvokeDynamic(u16, u16),       // 18
    /// The second slot of a Long or Double entry. Never valid to resolve.
    Reserved,
}

impl<'a> Const<'a> {
    fn read(r: &mut Reader<'a>) -> Result<Self, ParseError> {
        use Const::*;
        let offset = r.pos();
        let tag = r.u8()?;
        Ok(match tag {
            1 => {
                let len = r.u16()?;
                Utf8(BStr(r.get(len as usize)?))
            }
            3 => Integer(r.u32()? as i32),
            4 => Float(r.u32()?),
            5 => Long(r.u64()?),
            6 => Double(r.u64()?),
            7 => Class(r.u16()?),
            8 => String(r.u16()?),
            9 => Fieldref(r.u16()?, r.u16()?),
            10 => Methodref(r.u16()?, r.u16()?),
            11 => InterfaceMethodref(r.u16()?, r.u16()?),
            12 => NameAndType(r.u16()?, r.u16()?),
            _ => return Err(ParseError::UnsupportedConstantTag { tag, offset }),
        })
    }

    fn is_wide(&self) -> bool {
        matches!(self, Const::Long(_) | Const::Double(_))
    }
}

/// The constant pool. Indices are 1-based: index `i` refers to slot
/// `i - 1` and index 0 is never valid.
#[derive(Debug)]
pub struct ConstPool<'a>(pub Vec<Const<'a>>);

impl<'a> ConstPool<'a> {
    pub(super) fn parse(r: &mut Reader<'a>) -> Result<Self, ParseError> {
        let count = r.u16()? as usize;
        let mut slots = Vec::with_capacity(count.saturating_sub(1));
        while slots.len() + 1 < count {
            let entry = Const::read(r)?;
            let wide = entry.is_wide();
            slots.push(entry);
            if wide {
                slots.push(Const::Reserved);
            }
        }
        Ok(Self(slots))
    }

    pub fn get(&self, i: u16) -> Result<&Const<'a>, ParseError> {
        match i.checked_sub(1).and_then(|i| self.0.get(i as usize)) {
            Some(Const::Reserved) | None => Err(ParseError::InvalidIndex {
                index: i,
                expected: "constant pool entry",
            }),
            Some(c) => Ok(c),
        }
    }

    pub fn utf8(&self, i: u16) -> Result<&'a [u8], ParseError> {
        match self.get(i)? {
            Const::Utf8(s) => Ok(s.0),
            _ => Err(ParseError::InvalidIndex { index: i, expected: "Utf8" }),
        }
    }

    /// Name of the Class entry at `i`, following its name index.
    pub fn class_name(&self, i: u16) -> Result<&'a [u8], ParseError> {
        match self.get(i)? {
            Const::Class(name) => self.utf8(*name),
            _ => Err(ParseError::InvalidIndex { index: i, expected: "Class" }),
        }
    }

    pub fn name_and_type(&self, i: u16) -> Result<(&'a [u8], &'a [u8]), ParseError> {
        match self.get(i)? {
            Const::NameAndType(name, desc) => Ok((self.utf8(*name)?, self.utf8(*desc)?)),
            _ => Err(ParseError::InvalidIndex {
                index: i,
                expected: "NameAndType",
            }),
        }
    }

    /// Attributes in `attrs` whose resolved name equals `name`, in order.
    pub fn attributes_named<'s>(
        &self,
        attrs: &'s [Attribute<'a>],
        name: &[u8],
    ) -> Result<Vec<&'s Attribute<'a>>, ParseError> {
        let mut found = Vec::new();
        for attr in attrs {
            if self.utf8(attr.name_index)? == name {
                found.push(attr);
            }
        }
        Ok(found)
    }
}
