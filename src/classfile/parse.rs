use super::attrs::Attribute;
use super::cpool::ConstPool;
use super::descriptor;
use super::error::ParseError;
use super::flags::ClassFlags;
use super::flags::FieldFlags;
use super::flags::MethodFlags;
use super::reader::Reader;

#[derive(Debug)]
pub struct FieldInfo<'a> {
    pub access: FieldFlags,
    pub name_index: u16,
    pub descriptor_index: u16,
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> FieldInfo<'a> {
    fn read(r: &mut Reader<'a>) -> Result<Self, ParseError> {
        Ok(Self {
            access: FieldFlags::from_bits_truncate(r.u16()?),
            name_index: r.u16()?,
            descriptor_index: r.u16()?,
            attributes: Attribute::read_list(r)?,
        })
    }
}

/// Same shape as [`FieldInfo`] but a different flag universe.
#[derive(Debug)]
pub struct MethodInfo<'a> {
    pub access: MethodFlags,
    pub name_index: u16,
    pub descriptor_index: u16,
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> MethodInfo<'a> {
    fn read(r: &mut Reader<'a>) -> Result<Self, ParseError> {
        Ok(Self {
            access: MethodFlags::from_bits_truncate(r.u16()?),
            name_index: r.u16()?,
            descriptor_index: r.u16()?,
            attributes: Attribute::read_list(r)?,
        })
    }
}

/// Everything decoded from one class file, borrowing the input buffer.
#[derive(Debug)]
pub struct ClassFile<'a> {
    pub minor: u16,
    pub major: u16,
    pub cp: ConstPool<'a>,
    pub access: ClassFlags,
    pub this_class: u16,
    pub super_class: u16,
    pub interfaces: Vec<u16>,
    pub fields: Vec<FieldInfo<'a>>,
    pub methods: Vec<MethodInfo<'a>>,
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> ClassFile<'a> {
    fn read(r: &mut Reader<'a>) -> Result<Self, ParseError> {
        let magic = r.u32()?;
        if magic != 0xCAFEBABE {
            return Err(ParseError::BadMagic { magic });
        }

        let minor = r.u16()?;
        let major = r.u16()?;
        let cp = ConstPool::parse(r)?;

        let access = ClassFlags::from_bits_truncate(r.u16()?);
        let this_class = r.u16()?;
        let super_class = r.u16()?;

        // Interface lists are not implemented.
        let offset = r.pos();
        if r.u16()? != 0 {
            return Err(ParseError::UnsupportedFeature { feature: "interfaces", offset });
        }
        let interfaces = Vec::new();

        let fields = r.parse_list(FieldInfo::read)?;
        let methods = r.parse_list(MethodInfo::read)?;
        let attributes = Attribute::read_list(r)?;

        Ok(Self {
            minor,
            major,
            cp,
            access,
            this_class,
            super_class,
            interfaces,
            fields,
            methods,
            attributes,
        })
    }

    /// Methods whose resolved name equals `name`, in declaration order.
    pub fn methods_named(&self, name: &[u8]) -> Result<Vec<&MethodInfo<'a>>, ParseError> {
        let mut found = Vec::new();
        for method in &self.methods {
            if self.cp.utf8(method.name_index)? == name {
                found.push(method);
            }
        }
        Ok(found)
    }

    /// Human-readable form of the descriptor at `descriptor_index`.
    pub fn display_type(&self, descriptor_index: u16) -> Result<String, ParseError> {
        descriptor::display_name(self.cp.utf8(descriptor_index)?)
    }
}

/// Parse a complete class file. All-or-nothing.
pub fn parse(data: &[u8]) -> Result<ClassFile, ParseError> {
    ClassFile::read(&mut Reader::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8_entry(s: &[u8]) -> Vec<u8> {
        let mut b = vec![1];
        b.extend((s.len() as u16).to_be_bytes());
        b.extend_from_slice(s);
        b
    }

    /// Header through super_class with the given single-slot pool entries,
    /// followed by `body` (interfaces count onward).
    fn class_bytes(pool: &[Vec<u8>], body: &[u8]) -> Vec<u8> {
        let mut b = vec![0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x3D];
        b.extend((pool.len() as u16 + 1).to_be_bytes());
        for entry in pool {
            b.extend_from_slice(entry);
        }
        b.extend([0x00, 0x21]); // public super
        b.extend([0x00, 0x00, 0x00, 0x00]); // this, super
        b.extend_from_slice(body);
        b
    }

    #[test]
    fn minimal_class_parses_to_empty_lists() {
        let data = class_bytes(&[], &[0, 0, 0, 0, 0, 0, 0, 0]);
        let class = parse(&data).unwrap();
        assert_eq!((class.major, class.minor), (61, 0));
        assert_eq!(class.access, ClassFlags::PUBLIC | ClassFlags::SUPER);
        assert!(class.cp.0.is_empty());
        assert!(class.interfaces.is_empty());
        assert!(class.fields.is_empty());
        assert!(class.methods.is_empty());
        assert!(class.attributes.is_empty());
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let data = [0xCA, 0xFE, 0xD0, 0x0D, 0, 0, 0, 0x3D];
        assert_eq!(
            parse(&data).unwrap_err(),
            ParseError::BadMagic { magic: 0xCAFED00D },
        );
    }

    #[test]
    fn empty_input_is_truncation_at_zero() {
        assert_eq!(parse(&[]).unwrap_err(), ParseError::TruncatedInput { offset: 0 });
    }

    #[test]
    fn nonzero_interface_count_is_unsupported() {
        // count = 1, nothing after it; the count alone must trigger the error
        let data = class_bytes(&[], &[0, 1]);
        let err = parse(&data).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnsupportedFeature { feature: "interfaces", .. },
        ));
    }

    #[test]
    fn field_flags_keep_only_known_bits() {
        let pool = vec![utf8_entry(b"count"), utf8_entry(b"I")];
        let mut body = vec![0, 0]; // interfaces
        body.extend([0, 1]); // one field
        body.extend([0x80, 0x19, 0, 1, 0, 2, 0, 0]); // flags | unknown 0x8000
        body.extend([0, 0, 0, 0]); // methods, attributes
        let data = class_bytes(&pool, &body);

        let class = parse(&data).unwrap();
        let field = &class.fields[0];
        assert_eq!(
            field.access,
            FieldFlags::PUBLIC | FieldFlags::STATIC | FieldFlags::FINAL,
        );
        assert_eq!(class.cp.utf8(field.name_index).unwrap(), b"count");
        assert_eq!(class.display_type(field.descriptor_index).unwrap(), "int");
    }

    #[test]
    fn methods_named_scans_in_declaration_order() {
        let pool = vec![utf8_entry(b"foo"), utf8_entry(b"bar"), utf8_entry(b"()V")];
        let mut body = vec![0, 0, 0, 0]; // interfaces, fields
        body.extend([0, 3]); // three methods: foo, foo, bar
        for name_index in [1u16, 1, 2] {
            body.extend([0, 1]);
            body.extend(name_index.to_be_bytes());
            body.extend([0, 3, 0, 0]);
        }
        body.extend([0, 0]); // attributes
        let data = class_bytes(&pool, &body);

        let class = parse(&data).unwrap();
        let foos = class.methods_named(b"foo").unwrap();
        assert_eq!(foos.len(), 2);
        assert!(std::ptr::eq(foos[0], &class.methods[0]));
        assert!(std::ptr::eq(foos[1], &class.methods[1]));
        assert!(class.methods_named(b"baz").unwrap().is_empty());
    }

    #[test]
    fn pool_count_past_available_bytes_is_truncation() {
        let mut data = vec![0xCA, 0xFE, 0xBA, 0xBE, 0, 0, 0, 0x3D];
        data.extend([0x00, 0x30]); // claims 47 entries, none present
        assert_eq!(
            parse(&data).unwrap_err(),
            ParseError::TruncatedInput { offset: 10 },
        );
    }
}
