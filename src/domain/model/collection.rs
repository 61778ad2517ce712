use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::book::{Book, BookPatch, ReadStatus};
use super::stats::ReadingStats;
use crate::domain::error::DomainError;

/// 検索対象フィールド。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl SearchField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
        }
    }

    fn value_of<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            Self::Title => book.title(),
            Self::Author => book.author(),
            Self::Genre => book.genre(),
        }
    }
}

/// メニュー番号（"1"〜"3"）またはフィールド名を受け付ける。
impl FromStr for SearchField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "title" => Ok(Self::Title),
            "2" | "author" => Ok(Self::Author),
            "3" | "genre" => Ok(Self::Genre),
            _ => Err(DomainError::InvalidSearchField(s.to_string())),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 一覧・検索結果の1行。番号は結果内で1始まり。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing<'a> {
    pub number: usize,
    pub book: &'a Book,
    pub status: ReadStatus,
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} by {} ({}) - {} - {}",
            self.number,
            self.book.title(),
            self.book.author(),
            self.book.year(),
            self.book.genre(),
            self.status
        )
    }
}

/// 蔵書コレクション — 集約ルート。挿入順を保持し、全操作はここを経由する。
/// 永続化形式はBookのJSON配列そのもの。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    books: Vec<Book>,
}

impl From<Vec<Book>> for Collection {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// 末尾に追加する。内容の検証はしない。
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// titleに最初に一致したBookを返す。
    pub fn find(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.title_matches(title))
    }

    /// titleに最初に一致したBookを削除して返す。
    pub fn remove(&mut self, title: &str) -> Result<Book, DomainError> {
        let pos = self.position_of(title)?;
        Ok(self.books.remove(pos))
    }

    /// titleに最初に一致したBookへpatchを適用する。
    pub fn update(&mut self, title: &str, patch: BookPatch) -> Result<&Book, DomainError> {
        let pos = self.position_of(title)?;
        let book = &mut self.books[pos];
        book.apply(patch);
        Ok(book)
    }

    /// 指定フィールドの部分一致（大文字小文字無視）。空文字は全件一致。
    pub fn search(&self, field: SearchField, text: &str) -> Vec<Listing<'_>> {
        let needle = text.to_lowercase();
        let matches = self
            .books
            .iter()
            .filter(|b| field.value_of(b).to_lowercase().contains(&needle));
        number(matches)
    }

    /// 全件を保存順で返す。
    pub fn listings(&self) -> Vec<Listing<'_>> {
        number(self.books.iter())
    }

    pub fn reading_stats(&self) -> ReadingStats {
        ReadingStats {
            total: self.books.len(),
            read: self.books.iter().filter(|b| b.is_read()).count(),
        }
    }

    // --- Private helpers ---

    fn position_of(&self, title: &str) -> Result<usize, DomainError> {
        self.books
            .iter()
            .position(|b| b.title_matches(title))
            .ok_or_else(|| DomainError::BookNotFound(title.to_string()))
    }
}

fn number<'a>(books: impl Iterator<Item = &'a Book>) -> Vec<Listing<'a>> {
    books
        .enumerate()
        .map(|(i, book)| Listing {
            number: i + 1,
            book,
            status: book.status(),
        })
        .collect()
}
