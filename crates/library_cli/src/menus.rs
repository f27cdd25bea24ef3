//! Per-entity submenus. Each command returns to its menu on error.

use crate::console::{truncate, CommandError, CommandResult, Console};
use library_core::{Book, Category, Library, Member};
use log::warn;
use std::io::{self, BufRead, Write};

const CRUD_ITEMS: [(&str, &str); 7] = [
    ("1", "Add"),
    ("2", "List all"),
    ("3", "Get by Id"),
    ("4", "Update"),
    ("5", "Delete"),
    ("6", "Search"),
    ("0", "Back"),
];

#[derive(Debug, Clone, Copy)]
pub enum Section {
    Books,
    Categories,
    Members,
}

impl Section {
    fn title(self) -> &'static str {
        match self {
            Self::Books => "Books",
            Self::Categories => "Categories",
            Self::Members => "Members",
        }
    }
}

/// Runs one section's submenu until the user goes back.
///
/// Returns `Err` only when terminal I/O fails.
pub fn run_section<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    library: &Library,
    section: Section,
) -> io::Result<()> {
    loop {
        console.header(section.title(), &format!("{} management", section.title()))?;
        let choice = console.menu(&CRUD_ITEMS)?;
        if choice == "0" {
            return Ok(());
        }

        let outcome = match section {
            Section::Books => books(console, library, &choice),
            Section::Categories => categories(console, library, &choice),
            Section::Members => members(console, library, &choice),
        };
        report(console, outcome)?;
    }
}

/// Prints a command failure and keeps the session alive, unless the
/// terminal itself failed.
pub fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    outcome: CommandResult,
) -> io::Result<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(CommandError::Io(err)) => Err(err),
        Err(err) => {
            warn!("event=command module=cli status=error error={}", err);
            console.error(&format!("ERROR: {err}"))
        }
    }
}

fn books<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    library: &Library,
    choice: &str,
) -> CommandResult {
    match choice {
        "1" => {
            show_categories(console, library)?;
            let book = Book {
                id: console.read_int("Id")?,
                title: console.read_str("Title")?,
                author: console.read_str("Author")?,
                isbn: console.read_str("ISBN")?,
                published_year: console.read_int("PublishedYear")?,
                category_id: console.read_int("CategoryId")?,
                is_available: true,
            };
            library.books.add(&book)?;
            console.ok("Book added.")?;
        }
        "2" => {
            let all = library.books.get_all()?;
            if all.is_empty() {
                console.info("List is empty.")?;
                return Ok(());
            }
            console.table_header(&["Id", "Title", "Author", "ISBN", "Year", "CatId", "Avail"])?;
            for b in all {
                console.table_row(&[
                    b.id.to_string(),
                    truncate(&b.title, 22),
                    truncate(&b.author, 18),
                    truncate(&b.isbn, 13),
                    b.published_year.to_string(),
                    b.category_id.to_string(),
                    yes_no(b.is_available).to_string(),
                ])?;
            }
        }
        "3" => {
            let b = library.books.get_by_id(console.read_int("Id")?)?;
            console.box_info(&[
                b.title.clone(),
                format!("Author: {}", b.author),
                format!("ISBN: {}", b.isbn),
                format!("Year: {}", b.published_year),
                format!("CategoryId: {}", b.category_id),
                format!("Available: {}", yes_no(b.is_available)),
            ])?;
        }
        "4" => {
            show_categories(console, library)?;
            let book = Book {
                id: console.read_int("Id (existing)")?,
                title: console.read_str("Title")?,
                author: console.read_str("Author")?,
                isbn: console.read_str("ISBN")?,
                published_year: console.read_int("PublishedYear")?,
                category_id: console.read_int("CategoryId")?,
                is_available: console.read_bool("IsAvailable (1/0)")?,
            };
            library.books.update(&book)?;
            console.ok("Book updated.")?;
        }
        "5" => {
            let id = console.read_int("Id")?;
            if !console.confirm(&format!("Delete book with Id={id}?"))? {
                console.info("Canceled.")?;
                return Ok(());
            }
            library.books.delete(id)?;
            console.ok("Book deleted.")?;
        }
        "6" => {
            let keyword = console.read_str("Keyword (title/author/category)")?;
            let found = library.books.search(&keyword)?;
            if found.is_empty() {
                console.info("No matches found.")?;
                return Ok(());
            }
            console.table_header(&["Id", "Title", "Author", "CatId"])?;
            for b in found {
                console.table_row(&[
                    b.id.to_string(),
                    truncate(&b.title, 28),
                    truncate(&b.author, 22),
                    b.category_id.to_string(),
                ])?;
            }
        }
        _ => console.error("Invalid choice.")?,
    }
    Ok(())
}

fn categories<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    library: &Library,
    choice: &str,
) -> CommandResult {
    match choice {
        "1" | "4" => {
            let id_label = if choice == "1" { "Id" } else { "Id (existing)" };
            let category = Category {
                id: console.read_int(id_label)?,
                name: console.read_str("Name")?,
                description: console.read_str("Description")?,
            };
            if choice == "1" {
                library.categories.add(&category)?;
                console.ok("Category added.")?;
            } else {
                library.categories.update(&category)?;
                console.ok("Category updated.")?;
            }
        }
        "2" => {
            let all = library.categories.get_all()?;
            if all.is_empty() {
                console.info("List is empty.")?;
                return Ok(());
            }
            console.table_header(&["Id", "Name", "Description"])?;
            for c in all {
                console.table_row(&[
                    c.id.to_string(),
                    truncate(&c.name, 25),
                    truncate(&c.description, 35),
                ])?;
            }
        }
        "3" => {
            let c = library.categories.get_by_id(console.read_int("Id")?)?;
            console.box_info(&[c.name, c.description])?;
        }
        "5" => {
            let id = console.read_int("Id")?;
            if !console.confirm(&format!("Delete category with Id={id}?"))? {
                console.info("Canceled.")?;
                return Ok(());
            }
            library.categories.delete(id)?;
            console.ok("Category deleted.")?;
        }
        "6" => {
            let keyword = console.read_str("Keyword")?;
            let found = library.categories.search(&keyword)?;
            if found.is_empty() {
                console.info("No matches found.")?;
                return Ok(());
            }
            console.table_header(&["Id", "Name"])?;
            for c in found {
                console.table_row(&[c.id.to_string(), truncate(&c.name, 35)])?;
            }
        }
        _ => console.error("Invalid choice.")?,
    }
    Ok(())
}

fn members<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    library: &Library,
    choice: &str,
) -> CommandResult {
    match choice {
        "1" => {
            let member = Member {
                id: console.read_int("Id")?,
                full_name: console.read_str("FullName")?,
                email: console.read_str("Email")?,
                phone_number: console.read_str("PhoneNumber")?,
                membership_date: None,
                is_active: true,
            };
            library.members.add(&member)?;
            console.ok("Member added.")?;
        }
        "2" => {
            let all = library.members.get_all()?;
            if all.is_empty() {
                console.info("List is empty.")?;
                return Ok(());
            }
            console.table_header(&["Id", "FullName", "Email", "Phone", "Date", "Active"])?;
            for m in all {
                console.table_row(&[
                    m.id.to_string(),
                    truncate(&m.full_name, 22),
                    truncate(&m.email, 24),
                    truncate(&m.phone_number, 15),
                    format_date(&m),
                    yes_no(m.is_active).to_string(),
                ])?;
            }
        }
        "3" => {
            let m = library.members.get_by_id(console.read_int("Id")?)?;
            console.box_info(&[
                m.full_name.clone(),
                format!("Email: {}", m.email),
                format!("Phone: {}", m.phone_number),
                format!("Member since: {}", format_date(&m)),
                format!("Active: {}", yes_no(m.is_active)),
            ])?;
        }
        "4" => {
            let member = Member {
                id: console.read_int("Id (existing)")?,
                full_name: console.read_str("FullName")?,
                email: console.read_str("Email")?,
                phone_number: console.read_str("PhoneNumber")?,
                membership_date: None,
                is_active: console.read_bool("IsActive (1/0)")?,
            };
            library.members.update(&member)?;
            console.ok("Member updated.")?;
        }
        "5" => {
            let id = console.read_int("Id")?;
            if !console.confirm(&format!("Delete member with Id={id}?"))? {
                console.info("Canceled.")?;
                return Ok(());
            }
            library.members.delete(id)?;
            console.ok("Member deleted.")?;
        }
        "6" => {
            let keyword = console.read_str("Keyword")?;
            let found = library.members.search(&keyword)?;
            if found.is_empty() {
                console.info("No matches found.")?;
                return Ok(());
            }
            console.table_header(&["Id", "FullName", "Email"])?;
            for m in found {
                console.table_row(&[
                    m.id.to_string(),
                    truncate(&m.full_name, 26),
                    truncate(&m.email, 30),
                ])?;
            }
        }
        _ => console.error("Invalid choice.")?,
    }
    Ok(())
}

fn show_categories<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    library: &Library,
) -> CommandResult {
    let categories = library.categories.get_all()?;
    if categories.is_empty() {
        console.note("No categories yet. Add a category first, then create a book.")?;
        return Ok(());
    }
    console.note("Available categories:")?;
    for c in categories {
        console.note(&format!("  {} - {}", c.id, c.name))?;
    }
    Ok(())
}

fn format_date(member: &Member) -> String {
    member
        .membership_date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
