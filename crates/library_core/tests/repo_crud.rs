use chrono::NaiveDate;
use library_core::{
    Book, BookRepository, Category, CategoryRepository, Member, MemberRepository, RepoError,
    Repository,
};
use std::fs;
use tempfile::TempDir;

fn book(id: u32, title: &str) -> Book {
    Book::new(id, title, 1)
        .with_author("Author")
        .with_isbn("isbn")
        .with_published_year(2001)
}

#[test]
fn get_all_returns_adds_in_insertion_order() {
    let dir = TempDir::new().unwrap();
    let repo = BookRepository::in_dir(dir.path());

    for (id, title) in [(3, "Gamma"), (1, "Alpha"), (2, "Beta")] {
        repo.add(&book(id, title)).unwrap();
    }

    let ids: Vec<u32> = repo.get_all().unwrap().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn get_by_id_returns_none_for_absent_id() {
    let dir = TempDir::new().unwrap();
    let repo = CategoryRepository::in_dir(dir.path());
    repo.add(&Category::new(1, "Fiction", "")).unwrap();

    assert_eq!(repo.get_by_id(1).unwrap().unwrap().name, "Fiction");
    assert!(repo.get_by_id(2).unwrap().is_none());
}

#[test]
fn add_does_not_check_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let repo = CategoryRepository::in_dir(dir.path());
    repo.add(&Category::new(1, "First", "")).unwrap();
    repo.add(&Category::new(1, "Second", "")).unwrap();

    assert_eq!(repo.get_all().unwrap().len(), 2);
    assert_eq!(repo.get_by_id(1).unwrap().unwrap().name, "First");
}

#[test]
fn update_replaces_record_in_place() {
    let dir = TempDir::new().unwrap();
    let repo = BookRepository::in_dir(dir.path());
    repo.add(&book(1, "One")).unwrap();
    repo.add(&book(2, "Two")).unwrap();
    repo.add(&book(3, "Three")).unwrap();

    let mut changed = book(2, "Two, revised");
    changed.is_available = false;
    repo.update(&changed).unwrap();

    let all = repo.get_all().unwrap();
    assert_eq!(all, vec![book(1, "One"), changed, book(3, "Three")]);
}

#[test]
fn update_absent_id_fails_and_leaves_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let repo = BookRepository::in_dir(dir.path());
    repo.add(&book(1, "One")).unwrap();
    let before = fs::read_to_string(repo.path()).unwrap();

    let err = repo.update(&book(9, "Missing")).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { kind: "book", id: 9 }));
    assert_eq!(fs::read_to_string(repo.path()).unwrap(), before);
}

#[test]
fn delete_removes_exactly_the_matching_record() {
    let dir = TempDir::new().unwrap();
    let repo = BookRepository::in_dir(dir.path());
    repo.add(&book(1, "One")).unwrap();
    repo.add(&book(2, "Two")).unwrap();
    repo.add(&book(3, "Three")).unwrap();

    repo.delete(2).unwrap();

    let ids: Vec<u32> = repo.get_all().unwrap().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn delete_absent_id_is_a_silent_no_op() {
    let dir = TempDir::new().unwrap();
    let repo = BookRepository::in_dir(dir.path());
    repo.add(&book(1, "One")).unwrap();
    let before = fs::read_to_string(repo.path()).unwrap();

    repo.delete(42).unwrap();
    assert_eq!(fs::read_to_string(repo.path()).unwrap(), before);
}

#[test]
fn search_is_case_insensitive_over_fixed_fields() {
    let dir = TempDir::new().unwrap();
    let repo = BookRepository::in_dir(dir.path());
    repo.add(&book(1, "alice in wonderland")).unwrap();
    repo.add(&Book::new(2, "Other", 1).with_isbn("978ALICE")).unwrap();
    repo.add(&book(3, "Unrelated")).unwrap();

    let ids: Vec<u32> = repo.search("ALICE").unwrap().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn blank_keyword_matches_everything() {
    let dir = TempDir::new().unwrap();
    let repo = MemberRepository::in_dir(dir.path());
    let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
    repo.add(&Member::new(1, "Ann", "ann@example.com").with_membership_date(date))
        .unwrap();
    repo.add(&Member::new(2, "Ben", "ben@example.com").with_membership_date(date))
        .unwrap();

    assert_eq!(repo.search("").unwrap().len(), 2);
    assert_eq!(repo.search("   ").unwrap().len(), 2);
}

#[test]
fn member_search_matches_email_but_not_phone() {
    let dir = TempDir::new().unwrap();
    let repo = MemberRepository::in_dir(dir.path());
    let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
    repo.add(
        &Member::new(1, "Ann", "ann@library.org")
            .with_phone_number("555-0100")
            .with_membership_date(date),
    )
    .unwrap();

    assert_eq!(repo.search("LIBRARY.ORG").unwrap().len(), 1);
    assert!(repo.search("555").unwrap().is_empty());
}

#[test]
fn repository_creates_missing_file_on_first_read() {
    let dir = TempDir::new().unwrap();
    let repo = CategoryRepository::new(dir.path().join("Data").join("categories.txt"));

    assert!(repo.get_all().unwrap().is_empty());
    assert!(repo.path().is_file());
}
