use crate::classfile::bytecode;
use crate::classfile::code::Code;
use crate::classfile::ClassFile;
use crate::classfile::ParseError;
use crate::util::BStr;

/// Lowercased modifier words with a trailing space each, from a bitflags
/// `iter_names()` iterator.
fn push_flags<F>(out: &mut String, names: impl Iterator<Item = (&'static str, F)>) {
    for (name, _) in names {
        out.push_str(&name.to_ascii_lowercase());
        out.push(' ');
    }
}

/// Render a parsed class as a javap-style listing: header, fields with
/// their display types, then methods with any Code attribute decoded.
pub fn dump(class: &ClassFile) -> Result<String, ParseError> {
    let mut out = String::new();

    push_flags(&mut out, class.access.iter_names());
    out.push_str("class ");
    out.push_str(&BStr(class.cp.class_name(class.this_class)?).to_string());
    if class.super_class != 0 {
        let superclass = class.cp.class_name(class.super_class)?;
        out.push_str(&format!(" extends {}", BStr(superclass)));
    }
    out.push_str(&format!(" // version {}.{}\n", class.major, class.minor));

    for field in &class.fields {
        let mut line = String::from("    ");
        push_flags(&mut line, field.access.iter_names());
        line.push_str(&class.display_type(field.descriptor_index)?);
        line.push(' ');
        line.push_str(&BStr(class.cp.utf8(field.name_index)?).to_string());
        out.push_str(&line);
        out.push_str(";\n");
    }

    for method in &class.methods {
        let mut line = String::from("\n    ");
        push_flags(&mut line, method.access.iter_names());
        line.push_str(&format!(
            "{} {}\n",
            BStr(class.cp.utf8(method.name_index)?),
            BStr(class.cp.utf8(method.descriptor_index)?),
        ));
        out.push_str(&line);

        for attr in class.cp.attributes_named(&method.attributes, b"Code")? {
            let code = Code::parse(attr.info)?;
            out.push_str(&format!(
                "      stack={}, locals={}\n",
                code.max_stack, code.max_locals,
            ));
            for instr in bytecode::decode(code.code, &class.cp)? {
                out.push_str(&format!("        {}\n", instr));
            }
        }
    }

    Ok(out)
}
