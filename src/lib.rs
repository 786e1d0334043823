pub mod classfile;
pub mod display;
mod util;

pub use classfile::parse;
pub use classfile::ClassFile;
pub use classfile::ParseError;
pub use util::BStr;

/// Parse `data` and render it as a javap-style listing, returning the
/// class's binary name alongside the listing.
pub fn dump(data: &[u8]) -> Result<(String, String), ParseError> {
    let parsed = classfile::parse(data)?;

    let name = parsed.cp.class_name(parsed.this_class)?;
    let name = String::from_utf8_lossy(name).into_owned();

    let out = display::dump(&parsed)?;
    Ok((name, out))
}
