use anyhow::bail;
use anyhow::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// A named class-file buffer, read from disk or from inside an archive.
pub struct InputFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// Every class buffer reachable from `path`: the file itself for `.class`,
/// or all `.class` members for a `.jar`/`.zip` archive.
pub fn class_files(path: &Path) -> Result<Vec<InputFile>> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("class") => Ok(vec![InputFile {
            name: path.to_string_lossy().into_owned(),
            data: fs::read(path)?,
        }]),
        Some("jar" | "zip") => archive_members(path),
        Some(other) => bail!("Unsupported input extension {}", other),
        None => bail!("Missing input file extension for '{}'", path.display()),
    }
}

fn archive_members(path: &Path) -> Result<Vec<InputFile>> {
    let mut zip = zip::ZipArchive::new(fs::File::open(path)?)?;
    let mut files = Vec::new();
    for i in 0..zip.len() {
        let mut member = zip.by_index(i)?;
        if !member.name().ends_with(".class") {
            continue;
        }
        let mut data = Vec::with_capacity(member.size() as usize);
        member.read_to_end(&mut data)?;
        files.push(InputFile {
            name: member.name().to_owned(),
            data,
        });
    }
    Ok(files)
}
