use std::fmt;

use serde::{Deserialize, Serialize};

/// 蔵書1冊分のレコード。titleが自然キー（大文字小文字を区別しない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    /// 出版年。数値検証はしない（自由記述のまま保持する）
    year: String,
    genre: String,
    read: bool,
}

/// 部分更新リクエスト（None・空文字のフィールドは変更しない）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub read: Option<bool>,
}

/// 表示用の既読ステータス。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadStatus {
    Read,
    Unread,
}

impl From<bool> for ReadStatus {
    fn from(read: bool) -> Self {
        if read {
            Self::Read
        } else {
            Self::Unread
        }
    }
}

impl fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("Read"),
            Self::Unread => f.write_str("Unread"),
        }
    }
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn status(&self) -> ReadStatus {
        ReadStatus::from(self.read)
    }

    /// titleの大文字小文字を無視した完全一致。
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    // --- 内部操作（Collection経由でのみ呼ばれる） ---

    pub(crate) fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = non_empty(patch.title) {
            self.title = title;
        }
        if let Some(author) = non_empty(patch.author) {
            self.author = author;
        }
        if let Some(year) = non_empty(patch.year) {
            self.year = year;
        }
        if let Some(genre) = non_empty(patch.genre) {
            self.genre = genre;
        }
        if let Some(read) = patch.read {
            self.read = read;
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
