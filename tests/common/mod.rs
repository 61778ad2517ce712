//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use library_manager::application::service::BookStore;
use library_manager::domain::model::book::Book;
use library_manager::domain::model::collection::Collection;
use library_manager::domain::repository::CollectionRepository;

// =============================================================================
// InMemoryRepo — テスト用リポジトリ
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("in-memory store error")]
pub struct InMemoryError;

/// ファイルI/O不要のインメモリリポジトリ。
/// 中身はJSON文字列で保持し、clone同士で共有する（保存内容を外から覗ける）。
#[derive(Clone, Default)]
pub struct InMemoryRepo {
    store: Rc<RefCell<Option<String>>>,
    save_count: Rc<RefCell<usize>>,
    fail_saves: bool,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生の内容で初期化する（壊れたJSONも可）。
    pub fn with_raw(raw: &str) -> Self {
        let repo = Self::new();
        *repo.store.borrow_mut() = Some(raw.to_string());
        repo
    }

    /// saveが常に失敗するリポジトリ。
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.store.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.save_count.borrow()
    }
}

impl CollectionRepository for InMemoryRepo {
    type Error = InMemoryError;

    fn load(&self) -> Result<Option<Collection>, Self::Error> {
        match self.store.borrow().as_deref() {
            Some(json) => serde_json::from_str(json).map(Some).map_err(|_| InMemoryError),
            None => Ok(None),
        }
    }

    fn save(&self, collection: &Collection) -> Result<(), Self::Error> {
        if self.fail_saves {
            return Err(InMemoryError);
        }
        let json = serde_json::to_string(collection).unwrap();
        *self.store.borrow_mut() = Some(json);
        *self.save_count.borrow_mut() += 1;
        Ok(())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn dune() -> Book {
    Book::new("Dune", "Herbert", "1965", "SciFi", false)
}

/// 標準的なテスト用蔵書:
/// ```text
/// 1. Dune by Frank Herbert (1965) - SciFi - Read
/// 2. Emma by Jane Austen (1815) - Classic - Unread
/// 3. Neuromancer by William Gibson (1984) - SciFi - Unread
/// 4. Persuasion by Jane Austen (1817) - Classic - Read
/// ```
pub fn standard_books() -> Vec<Book> {
    vec![
        Book::new("Dune", "Frank Herbert", "1965", "SciFi", true),
        Book::new("Emma", "Jane Austen", "1815", "Classic", false),
        Book::new("Neuromancer", "William Gibson", "1984", "SciFi", false),
        Book::new("Persuasion", "Jane Austen", "1817", "Classic", true),
    ]
}

/// InMemoryRepoに蔵書を保存してBookStoreを開く。
pub fn store_with(books: Vec<Book>) -> (BookStore<InMemoryRepo>, InMemoryRepo) {
    let repo = InMemoryRepo::new();
    repo.save(&Collection::from(books)).unwrap();
    (BookStore::open(repo.clone()), repo)
}

pub fn empty_store() -> (BookStore<InMemoryRepo>, InMemoryRepo) {
    let repo = InMemoryRepo::new();
    (BookStore::open(repo.clone()), repo)
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
