use super::error::ParseError;

/// Render a field descriptor as a Java-style type name: `I` becomes `int`,
/// `[Ljava/lang/String;` becomes `java.lang.String[]`. Anything that does
/// not match a recognized shape is `MalformedDescriptor`.
pub fn display_name(descriptor: &[u8]) -> Result<String, ParseError> {
    convert(descriptor, descriptor)
}

fn convert(t: &[u8], full: &[u8]) -> Result<String, ParseError> {
    let malformed = || ParseError::MalformedDescriptor(String::from_utf8_lossy(full).into_owned());
    match t.split_first() {
        Some((&b'[', element)) if !element.is_empty() => Ok(convert(element, full)? + "[]"),
        Some((&b'L', rest)) => match rest.split_last() {
            Some((&b';', name)) if !name.is_empty() => {
                let name = std::str::from_utf8(name).map_err(|_| malformed())?;
                Ok(name.replace('/', "."))
            }
            _ => Err(malformed()),
        },
        Some((&b'Z', [])) => Ok("boolean".to_owned()),
        Some((&b'C', [])) => Ok("char".to_owned()),
        Some((&b'B', [])) => Ok("byte".to_owned()),
        Some((&b'S', [])) => Ok("short".to_owned()),
        Some((&b'I', [])) => Ok("int".to_owned()),
        Some((&b'J', [])) => Ok("long".to_owned()),
        Some((&b'F', [])) => Ok("float".to_owned()),
        Some((&b'D', [])) => Ok("double".to_owned()),
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_types() {
        let cases: [(&[u8], &str); 8] = [
            (b"Z", "boolean"),
            (b"C", "char"),
            (b"B", "byte"),
            (b"S", "short"),
            (b"I", "int"),
            (b"J", "long"),
            (b"F", "float"),
            (b"D", "double"),
        ];
        for (descriptor, expected) in cases {
            assert_eq!(display_name(descriptor).unwrap(), expected);
        }
    }

    #[test]
    fn object_types_strip_and_dot() {
        assert_eq!(display_name(b"Ljava/lang/String;").unwrap(), "java.lang.String");
        assert_eq!(display_name(b"LMain;").unwrap(), "Main");
    }

    #[test]
    fn arrays_render_as_trailing_brackets() {
        assert_eq!(display_name(b"[I").unwrap(), "int[]");
        assert_eq!(display_name(b"[[I").unwrap(), "int[][]");
        assert_eq!(
            display_name(b"[Ljava/lang/String;").unwrap(),
            "java.lang.String[]",
        );
    }

    #[test]
    fn unrecognized_shapes_are_malformed() {
        for descriptor in [&b""[..], b"Q", b"II", b"[", b"L;", b"Lfoo", b"I;"] {
            let err = display_name(descriptor).unwrap_err();
            assert!(
                matches!(err, ParseError::MalformedDescriptor(_)),
                "{:?} gave {:?}",
                descriptor,
                err,
            );
        }
    }

    #[test]
    fn malformed_error_carries_the_full_descriptor() {
        assert_eq!(
            display_name(b"[Q").unwrap_err(),
            ParseError::MalformedDescriptor("[Q".to_owned()),
        );
    }
}
