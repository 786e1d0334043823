use std::fmt;

use super::cpool::Const;
use super::cpool::ConstPool;
use super::error::ParseError;
use super::reader::Reader;
use crate::util::BStr;

/// A member reference operand, resolved at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberRef<'a> {
    pub index: u16,
    pub class: BStr<'a>,
    pub name: BStr<'a>,
    pub descriptor: BStr<'a>,
}

impl<'a> MemberRef<'a> {
    fn resolve(
        cp: &ConstPool<'a>,
        index: u16,
        class_index: u16,
        nat_index: u16,
    ) -> Result<Self, ParseError> {
        let class = cp.class_name(class_index)?;
        let (name, descriptor) = cp.name_and_type(nat_index)?;
        Ok(Self {
            index,
            class: BStr(class),
            name: BStr(name),
            descriptor: BStr(descriptor),
        })
    }
}

/// A decoded instruction. Opcodes outside the table abort the decode,
/// since operand lengths are not self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr<'a> {
    Getstatic(MemberRef<'a>),
    Invokevirtual(MemberRef<'a>),
    Ldc(u8),
    Bipush(i8),
    Return,
}

impl fmt::Display for Instr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Instr::*;
        match self {
            Getstatic(m) => {
                write!(f, "getstatic #{} // {}.{} {}", m.index, m.class, m.name, m.descriptor)
            }
            Invokevirtual(m) => {
                write!(f, "invokevirtual #{} // {}.{} {}", m.index, m.class, m.name, m.descriptor)
            }
            Ldc(index) => write!(f, "ldc #{}", index),
            Bipush(value) => write!(f, "bipush {}", value),
            Return => f.write_str("return"),
        }
    }
}

/// Decode an instruction stream. `return` terminates the decode; bytes
/// after it are never read. Exhausting the buffer without a `return` is
/// a valid end state.
pub fn decode<'a>(code: &'a [u8], cp: &ConstPool<'a>) -> Result<Vec<Instr<'a>>, ParseError> {
    let r = &mut Reader::new(code);
    let mut instrs = Vec::new();
    while !r.is_empty() {
        let offset = r.pos();
        let opcode = r.u8()?;
        let instr = match opcode {
            0x10 => Instr::Bipush(r.i8()?),
            0x12 => Instr::Ldc(r.u8()?),
            0xB1 => {
                instrs.push(Instr::Return);
                return Ok(instrs);
            }
            0xB2 => {
                let index = r.u16()?;
                match cp.get(index)? {
                    Const::Fieldref(class, nat) => {
                        Instr::Getstatic(MemberRef::resolve(cp, index, *class, *nat)?)
                    }
                    _ => return Err(ParseError::InvalidIndex { index, expected: "Fieldref" }),
                }
            }
            0xB6 => {
                let index = r.u16()?;
                match cp.get(index)? {
                    Const::Methodref(class, nat) => {
                        Instr::Invokevirtual(MemberRef::resolve(cp, index, *class, *nat)?)
                    }
                    _ => return Err(ParseError::InvalidIndex { index, expected: "Methodref" }),
                }
            }
            _ => return Err(ParseError::UnsupportedOpcode { opcode, offset }),
        };
        instrs.push(instr);
    }
    Ok(instrs)
}
