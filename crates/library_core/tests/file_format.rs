use chrono::NaiveDate;
use library_core::{
    Book, BookRepository, Category, CategoryRepository, CodecError, Member, MemberRepository,
    RepoError, Repository,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn files_hold_one_fixed_width_line_per_record() {
    let dir = TempDir::new().unwrap();
    let repo = CategoryRepository::in_dir(dir.path());
    repo.add(&Category::new(1, "Fiction", "Stories")).unwrap();
    repo.add(&Category::new(12, "Science", "")).unwrap();

    let raw = fs::read_to_string(dir.path().join("categories.txt")).unwrap();
    let expected = format!(
        "00001{:<25}{:<40}\n00012{:<25}{:<40}\n",
        "Fiction", "Stories", "Science", ""
    );
    assert_eq!(raw, expected);
}

#[test]
fn member_line_stores_date_as_yyyymmdd() {
    let dir = TempDir::new().unwrap();
    let repo = MemberRepository::in_dir(dir.path());
    let member = Member::new(7, "Grace Hopper", "grace@navy.mil")
        .with_membership_date(NaiveDate::from_ymd_opt(1952, 3, 9).unwrap());
    repo.add(&member).unwrap();

    let raw = fs::read_to_string(dir.path().join("members.txt")).unwrap();
    let line = raw.lines().next().unwrap();
    assert_eq!(line.len(), 89);
    assert_eq!(&line[80..88], "19520309");
    assert_eq!(&line[88..], "1");
}

#[test]
fn blank_and_short_lines_are_skipped() {
    let dir = TempDir::new().unwrap();
    let repo = CategoryRepository::in_dir(dir.path());
    let good = format!("00001{:<25}{:<40}", "Fiction", "");
    fs::write(repo.path(), format!("\n   \n00002short\n{good}\n")).unwrap();

    let all = repo.get_all().unwrap();
    assert_eq!(all, vec![Category::new(1, "Fiction", "")]);
}

#[test]
fn corrupt_numeric_field_aborts_the_whole_read() {
    let dir = TempDir::new().unwrap();
    let repo = BookRepository::in_dir(dir.path());
    repo.add(&Book::new(1, "Good", 1)).unwrap();
    let bad = format!("0000X{:<30}{:<25}{:<13}000000001{}", "Bad", "", "", "1");
    let mut raw = fs::read_to_string(repo.path()).unwrap();
    raw.push_str(&bad);
    raw.push('\n');
    fs::write(repo.path(), raw).unwrap();

    let err = repo.get_all().unwrap_err();
    match err {
        RepoError::CorruptLine { line, source, .. } => {
            assert_eq!(line, 2);
            assert!(matches!(source, CodecError::Malformed { field: "id", .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(repo.get_by_id(1).is_err());
    assert!(repo.search("").is_err());
}

#[test]
fn rewrite_drops_skipped_lines() {
    let dir = TempDir::new().unwrap();
    let repo = CategoryRepository::in_dir(dir.path());
    let line = |id: u32, name: &str| format!("{id:05}{name:<25}{:<40}", "");
    fs::write(
        repo.path(),
        format!("{}\n\ngarbage\n{}\n", line(1, "A"), line(2, "B")),
    )
    .unwrap();

    repo.update(&Category::new(2, "B2", "")).unwrap();

    assert_eq!(
        fs::read_to_string(repo.path()).unwrap(),
        format!("{}\n{}\n", line(1, "A"), line(2, "B2"))
    );
}

#[test]
fn oversized_value_is_rejected_without_touching_the_file() {
    let dir = TempDir::new().unwrap();
    let repo = CategoryRepository::in_dir(dir.path());
    repo.add(&Category::new(1, "Fiction", "")).unwrap();
    let before = fs::read_to_string(repo.path()).unwrap();

    let err = repo
        .add(&Category::new(2, "x".repeat(26), ""))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Codec(CodecError::FieldOverflow { field: "name", .. })
    ));

    let err = repo
        .update(&Category::new(1, "Fiction", "d".repeat(41)))
        .unwrap_err();
    assert!(matches!(err, RepoError::Codec(_)));
    assert_eq!(fs::read_to_string(repo.path()).unwrap(), before);
}
