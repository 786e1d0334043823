/// Errors produced while decoding a class file or an instruction stream.
/// Every failure is terminal for the parse that produced it. Offsets are
/// relative to the buffer being decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of input at offset {offset}")]
    TruncatedInput { offset: usize },
    #[error("bad magic 0x{magic:08x}, not a class file")]
    BadMagic { magic: u32 },
    #[error("unsupported constant pool tag {tag} at offset {offset}")]
    UnsupportedConstantTag { tag: u8, offset: usize },
    #[error("unsupported feature {feature:?} at offset {offset}")]
    UnsupportedFeature { feature: &'static str, offset: usize },
    #[error("unsupported opcode 0x{opcode:02x} at offset {offset}")]
    UnsupportedOpcode { opcode: u8, offset: usize },
    #[error("constant pool index {index} does not refer to a {expected}")]
    InvalidIndex { index: u16, expected: &'static str },
    #[error("malformed descriptor {0:?}")]
    MalformedDescriptor(String),
}
