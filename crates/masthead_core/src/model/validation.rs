//! Field rules shared by entity constructors and setters.
//!
//! # Responsibility
//! - Define the single domain error kind, `ValidationError`.
//! - Keep every length/emptiness rule in one place so constructors and
//!   setters cannot drift apart.
//!
//! # Invariants
//! - Lengths are counted in characters, not UTF-8 bytes.
//! - Rule functions are pure: they never mutate or log.

use crate::model::magazine::MagazineId;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Inclusive character bounds for `Magazine::name`.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Inclusive character bounds for `Article::title`.
pub const ARTICLE_TITLE_MIN_CHARS: usize = 5;
pub const ARTICLE_TITLE_MAX_CHARS: usize = 50;

/// Constraint violation raised by constructors and validated setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name was empty.
    EmptyAuthorName,
    /// Magazine name length (in chars) fell outside `2..=16`.
    MagazineNameLength { length: usize },
    /// Magazine category was empty.
    EmptyCategory,
    /// Article title length (in chars) fell outside `5..=50`.
    TitleLength { length: usize },
    /// Article referenced a magazine that the catalog does not hold.
    UnknownMagazine(MagazineId),
    /// Decoded entity carried the nil UUID as its id.
    NilId,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "name must be a non-empty string"),
            Self::MagazineNameLength { length } => {
                let (min, max) = (MAGAZINE_NAME_MIN_CHARS, MAGAZINE_NAME_MAX_CHARS);
                write!(
                    f,
                    "magazine name must be {min} to {max} characters, got {length}"
                )
            }
            Self::EmptyCategory => write!(f, "category must be a non-empty string"),
            Self::TitleLength { length } => {
                let (min, max) = (ARTICLE_TITLE_MIN_CHARS, ARTICLE_TITLE_MAX_CHARS);
                write!(f, "title must be {min} to {max} characters, got {length}")
            }
            Self::UnknownMagazine(id) => write!(
                f,
                "magazine must be a registered Magazine, got unknown id {id}"
            ),
            Self::NilId => write!(f, "id must not be the nil uuid"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn check_id(id: Uuid) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::NilId);
    }
    Ok(())
}

pub(crate) fn check_author_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn check_magazine_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&length) {
        return Err(ValidationError::MagazineNameLength { length });
    }
    Ok(())
}

pub(crate) fn check_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn check_title(title: &str) -> Result<(), ValidationError> {
    let length = title.chars().count();
    if !(ARTICLE_TITLE_MIN_CHARS..=ARTICLE_TITLE_MAX_CHARS).contains(&length) {
        return Err(ValidationError::TitleLength { length });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_category, check_id, check_magazine_name, check_title, ValidationError};
    use uuid::Uuid;

    #[test]
    fn magazine_name_bounds_are_inclusive() {
        assert!(check_magazine_name("ab").is_ok());
        assert!(check_magazine_name("abcdefghijklmnop").is_ok());
        assert_eq!(
            check_magazine_name("a").unwrap_err(),
            ValidationError::MagazineNameLength { length: 1 }
        );
        assert_eq!(
            check_magazine_name("abcdefghijklmnopq").unwrap_err(),
            ValidationError::MagazineNameLength { length: 17 }
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 2 chars, 4 bytes.
        assert!(check_magazine_name("éé").is_ok());
        // 50 chars, 100 bytes.
        assert!(check_title(&"ü".repeat(50)).is_ok());
    }

    #[test]
    fn title_bounds_are_inclusive() {
        assert!(check_title("Hello").is_ok());
        assert!(check_title(&"x".repeat(50)).is_ok());
        assert_eq!(
            check_title("Hey!").unwrap_err(),
            ValidationError::TitleLength { length: 4 }
        );
        assert_eq!(
            check_title(&"x".repeat(51)).unwrap_err(),
            ValidationError::TitleLength { length: 51 }
        );
    }

    #[test]
    fn whitespace_only_category_is_accepted() {
        assert!(check_category(" ").is_ok());
        assert_eq!(
            check_category("").unwrap_err(),
            ValidationError::EmptyCategory
        );
    }

    #[test]
    fn nil_id_is_rejected() {
        assert_eq!(check_id(Uuid::nil()).unwrap_err(), ValidationError::NilId);
        assert!(check_id(Uuid::new_v4()).is_ok());
    }
}
