//! Book line layout: id(5) title(30) author(25) isbn(13) year(4) category(5) available(1).

use super::{CodecResult, FixedWidthRecord, RecordReader, RecordWriter};
use crate::model::book::Book;
use crate::model::EntityId;

pub(crate) const ID_LEN: usize = 5;
pub(crate) const TITLE_LEN: usize = 30;
pub(crate) const AUTHOR_LEN: usize = 25;
pub(crate) const ISBN_LEN: usize = 13;
pub(crate) const YEAR_LEN: usize = 4;
pub(crate) const CATEGORY_ID_LEN: usize = 5;
const AVAILABLE_LEN: usize = 1;

pub const BOOK_RECORD_WIDTH: usize =
    ID_LEN + TITLE_LEN + AUTHOR_LEN + ISBN_LEN + YEAR_LEN + CATEGORY_ID_LEN + AVAILABLE_LEN;

impl FixedWidthRecord for Book {
    const KIND: &'static str = "book";
    const WIDTH: usize = BOOK_RECORD_WIDTH;

    fn id(&self) -> EntityId {
        self.id
    }

    fn encode(&self) -> CodecResult<String> {
        Ok(RecordWriter::new(Self::KIND, Self::WIDTH)
            .number("id", self.id, ID_LEN)?
            .text("title", &self.title, TITLE_LEN)?
            .text("author", &self.author, AUTHOR_LEN)?
            .text("isbn", &self.isbn, ISBN_LEN)?
            .number("published_year", self.published_year, YEAR_LEN)?
            .number("category_id", self.category_id, CATEGORY_ID_LEN)?
            .flag(self.is_available)
            .finish())
    }

    fn decode_fields(reader: &mut RecordReader<'_>) -> CodecResult<Self> {
        Ok(Self {
            id: reader.number("id", ID_LEN)?,
            title: reader.text(TITLE_LEN),
            author: reader.text(AUTHOR_LEN),
            isbn: reader.text(ISBN_LEN),
            published_year: reader.number("published_year", YEAR_LEN)?,
            category_id: reader.number("category_id", CATEGORY_ID_LEN)?,
            is_available: reader.flag(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::BOOK_RECORD_WIDTH;
    use crate::codec::{CodecError, FixedWidthRecord};
    use crate::model::book::Book;

    fn dune() -> Book {
        Book::new(10, "Dune", 1)
            .with_author("Frank Herbert")
            .with_isbn("9780441013593")
            .with_published_year(1965)
    }

    #[test]
    fn record_width_is_83() {
        assert_eq!(BOOK_RECORD_WIDTH, 83);
    }

    #[test]
    fn encode_matches_byte_layout() {
        let line = dune().encode().expect("book should encode");
        let expected = format!(
            "00010{:<30}{:<25}{:<13}{}{}{}",
            "Dune", "Frank Herbert", "9780441013593", "1965", "00001", "1"
        );
        assert_eq!(line, expected);
        assert_eq!(line.len(), BOOK_RECORD_WIDTH);
    }

    #[test]
    fn decode_restores_encoded_book() {
        let mut book = dune();
        book.is_available = false;
        let line = book.encode().expect("book should encode");
        let decoded = Book::decode(&line).expect("decode should succeed");
        assert_eq!(decoded, Some(book));
    }

    #[test]
    fn decode_skips_blank_and_short_lines() {
        assert_eq!(Book::decode("").expect("blank is skipped"), None);
        assert_eq!(Book::decode("     ").expect("spaces are skipped"), None);
        let short = "x".repeat(BOOK_RECORD_WIDTH - 1);
        assert_eq!(Book::decode(&short).expect("short is skipped"), None);
    }

    #[test]
    fn decode_fails_on_non_numeric_year() {
        let line = dune().encode().expect("book should encode");
        let corrupted = line.replacen("1965", "19x5", 1);
        let err = Book::decode(&corrupted).expect_err("year must be numeric");
        assert!(matches!(
            err,
            CodecError::Malformed {
                field: "published_year",
                ..
            }
        ));
    }

    #[test]
    fn encode_rejects_long_title() {
        let book = Book::new(1, "t".repeat(31), 1);
        assert!(matches!(
            book.encode(),
            Err(CodecError::FieldOverflow { field: "title", .. })
        ));
    }
}
