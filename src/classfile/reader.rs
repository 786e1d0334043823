use super::error::ParseError;

#[derive(Debug, Clone)]
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }

    pub(crate) fn get(&mut self, n: usize) -> Result<&'a [u8], ParseError> {
        let data = self
            .pos
            .checked_add(n)
            .and_then(|end| self.buf.get(self.pos..end));
        match data {
            Some(data) => {
                self.pos += n;
                Ok(data)
            }
            None => Err(ParseError::TruncatedInput { offset: self.pos }),
        }
    }

    pub(crate) fn u8(&mut self) -> Result<u8, ParseError> {
        Ok(self.get(1)?[0])
    }
    pub(crate) fn u16(&mut self) -> Result<u16, ParseError> {
        Ok(u16::from_be_bytes(self.get(2)?.try_into().unwrap()))
    }
    pub(crate) fn u32(&mut self) -> Result<u32, ParseError> {
        Ok(u32::from_be_bytes(self.get(4)?.try_into().unwrap()))
    }
    pub(crate) fn u64(&mut self) -> Result<u64, ParseError> {
        Ok(u64::from_be_bytes(self.get(8)?.try_into().unwrap()))
    }

    pub(crate) fn i8(&mut self) -> Result<i8, ParseError> {
        Ok(self.u8()? as i8)
    }

    pub(crate) fn parse_list<T>(
        &mut self,
        mut cb: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let count = self.u16()? as usize;
        let mut vals = Vec::with_capacity(count);
        for _ in 0..count {
            vals.push(cb(self)?);
        }
        Ok(vals)
    }
}
