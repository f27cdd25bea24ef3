//! Category line layout: id(5) name(25) description(40).

use super::{CodecResult, FixedWidthRecord, RecordReader, RecordWriter};
use crate::model::category::Category;
use crate::model::EntityId;

pub(crate) const ID_LEN: usize = 5;
pub(crate) const NAME_LEN: usize = 25;
pub(crate) const DESCRIPTION_LEN: usize = 40;

pub const CATEGORY_RECORD_WIDTH: usize = ID_LEN + NAME_LEN + DESCRIPTION_LEN;

impl FixedWidthRecord for Category {
    const KIND: &'static str = "category";
    const WIDTH: usize = CATEGORY_RECORD_WIDTH;

    fn id(&self) -> EntityId {
        self.id
    }

    fn encode(&self) -> CodecResult<String> {
        Ok(RecordWriter::new(Self::KIND, Self::WIDTH)
            .number("id", self.id, ID_LEN)?
            .text("name", &self.name, NAME_LEN)?
            .text("description", &self.description, DESCRIPTION_LEN)?
            .finish())
    }

    fn decode_fields(reader: &mut RecordReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            id: reader.number("id", ID_LEN)?,
            name: reader.text(NAME_LEN),
            description: reader.text(DESCRIPTION_LEN),
        })
    }
}
