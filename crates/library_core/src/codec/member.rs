//! Member line layout: id(5) name(30) email(30) phone(15) date(8, YYYYMMDD) active(1).

use super::{CodecResult, FixedWidthRecord, RecordReader, RecordWriter};
use crate::model::member::Member;
use crate::model::EntityId;

pub(crate) const ID_LEN: usize = 5;
pub(crate) const FULL_NAME_LEN: usize = 30;
pub(crate) const EMAIL_LEN: usize = 30;
pub(crate) const PHONE_LEN: usize = 15;
const DATE_LEN: usize = 8;
const ACTIVE_LEN: usize = 1;

pub const MEMBER_RECORD_WIDTH: usize =
    ID_LEN + FULL_NAME_LEN + EMAIL_LEN + PHONE_LEN + DATE_LEN + ACTIVE_LEN;

impl FixedWidthRecord for Member {
    const KIND: &'static str = "member";
    const WIDTH: usize = MEMBER_RECORD_WIDTH;

    fn id(&self) -> EntityId {
        self.id
    }

    fn encode(&self) -> CodecResult<String> {
        Ok(RecordWriter::new(Self::KIND, Self::WIDTH)
            .number("id", self.id, ID_LEN)?
            .text("full_name", &self.full_name, FULL_NAME_LEN)?
            .text("email", &self.email, EMAIL_LEN)?
            .text("phone_number", &self.phone_number, PHONE_LEN)?
            .date("membership_date", self.membership_date)?
            .flag(self.is_active)
            .finish())
    }

    fn decode_fields(reader: &mut RecordReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            id: reader.number("id", ID_LEN)?,
            full_name: reader.text(FULL_NAME_LEN),
            email: reader.text(EMAIL_LEN),
            phone_number: reader.text(PHONE_LEN),
            membership_date: Some(reader.date("membership_date")?),
            is_active: reader.flag(),
        })
    }
}
