//! Interactive text menu for library-manager
//!
//! stdin/stdout (any BufRead / Write) <-> application::BookStore
//!
//! 7 actions: add, delete, search, update, list, stats, exit

use std::io::{BufRead, Write};

use crossterm::style::Stylize;

use crate::application::error::AppError;
use crate::application::service::BookStore;
use crate::domain::model::book::{Book, BookPatch};
use crate::domain::model::collection::{Listing, SearchField};
use crate::domain::model::stats::ReadingStats;
use crate::domain::repository::CollectionRepository;

// =============================================================================
// Input parsing
// =============================================================================

/// "yes" / "no" の回答を既読フラグに変換する。それ以外はNone。
pub fn parse_read_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Plain rendering (色なし、テストでも使う)
// =============================================================================

/// 一覧の各行。
pub fn render_listings(listings: &[Listing<'_>]) -> String {
    listings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// 読書進捗の表示。蔵書0冊ならその旨のみ。
pub fn render_stats(stats: &ReadingStats) -> String {
    match stats.percentage_label() {
        None => "No books in the collection.".to_string(),
        Some(pct) => format!(
            "Total books: {}\nBooks read: {}\nReading progress: {}",
            stats.total, stats.read, pct
        ),
    }
}

// =============================================================================
// Menu
// =============================================================================

enum Flow {
    Continue,
    Exit,
}

/// BookStoreの薄いアダプタ。EOFはExitと同じ扱い。
pub struct Menu<'a, R: CollectionRepository, I: BufRead, W: Write> {
    store: &'a mut BookStore<R>,
    input: I,
    output: W,
}

impl<'a, R: CollectionRepository, I: BufRead, W: Write> Menu<'a, R, I, W> {
    pub fn new(store: &'a mut BookStore<R>, input: I, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Exitが選ばれるまでループする。
    pub fn run(mut self) -> anyhow::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice (1-7): ")? else {
                return self.exit();
            };
            let flow = match choice.trim() {
                "1" => self.add_book()?,
                "2" => self.delete_book()?,
                "3" => self.search_books()?,
                "4" => self.update_book()?,
                "5" => self.display_books()?,
                "6" => self.show_reading_progress()?,
                "7" => return self.exit(),
                _ => {
                    writeln!(
                        self.output,
                        "{}",
                        "Invalid choice. Please enter a number from 1 to 7.".red()
                    )?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                return self.exit();
            }
        }
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "\n{}", "=== Personal Library Manager ===".blue())?;
        writeln!(self.output, "1. Add a new book")?;
        writeln!(self.output, "2. Delete a book")?;
        writeln!(self.output, "3. Search for books")?;
        writeln!(self.output, "4. Update a book")?;
        writeln!(self.output, "5. Display all books")?;
        writeln!(self.output, "6. Show reading progress")?;
        writeln!(self.output, "7. Exit")?;
        Ok(())
    }

    fn add_book(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "{}", "\n--- Add New Book ---".cyan())?;
        let Some(title) = self.prompt("Enter the book title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Enter the book author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt("Enter the year of publication: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(genre) = self.prompt("Enter the genre of the book: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(answer) = self.prompt("Have you read this book? (yes/no): ")? else {
            return Ok(Flow::Exit);
        };
        let read = parse_read_answer(&answer).unwrap_or(false);

        match self.store.add(Book::new(title.as_str(), author, year, genre, read)) {
            Ok(()) => writeln!(
                self.output,
                "{}",
                format!("Book '{title}' added to the collection.").green()
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_book(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "{}", "\n--- Delete Book ---".cyan())?;
        let Some(title) = self.prompt("Enter the title of the book to delete: ")? else {
            return Ok(Flow::Exit);
        };
        match self.store.delete(&title) {
            Ok(_) => writeln!(
                self.output,
                "{}",
                format!("Book '{title}' removed from the collection.").green()
            )?,
            Err(e) if e.is_not_found() => writeln!(
                self.output,
                "{}",
                format!("Book '{title}' not found in the collection.").red()
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "{}", "\n--- Search Books ---".cyan())?;
        writeln!(self.output, "Search by:\n1. Title\n2. Author\n3. Genre")?;
        let Some(choice) = self.prompt("Enter your choice (1-3): ")? else {
            return Ok(Flow::Exit);
        };
        // 番号のみ受け付ける
        let field = match choice.trim() {
            "1" | "2" | "3" => choice.parse::<SearchField>().ok(),
            _ => None,
        };
        let Some(field) = field else {
            writeln!(self.output, "{}", "Invalid choice.".red())?;
            return Ok(Flow::Continue);
        };
        let Some(text) = self.prompt(&format!("Enter the {field} to search: "))? else {
            return Ok(Flow::Exit);
        };

        let found = self.store.search(field, &text);
        if found.is_empty() {
            writeln!(self.output, "{}", "No matching books found.".red())?;
        } else {
            writeln!(self.output, "{}", "Matching books:".green())?;
            for listing in &found {
                writeln!(self.output, "{}", colored_row(listing))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn update_book(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "{}", "\n--- Update Book ---".cyan())?;
        let Some(title) = self.prompt("Enter the title of the book to update: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(current) = self.store.collection().find(&title).cloned() else {
            writeln!(self.output, "{}", "Book not found.".red())?;
            return Ok(Flow::Continue);
        };

        writeln!(
            self.output,
            "{}",
            "Leave input blank to keep the current value.".yellow()
        )?;
        let Some(new_title) = self.prompt(&format!("New title (current: {}): ", current.title()))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(new_author) =
            self.prompt(&format!("New author (current: {}): ", current.author()))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(new_year) = self.prompt(&format!("New year (current: {}): ", current.year()))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(new_genre) = self.prompt(&format!("New genre (current: {}): ", current.genre()))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(new_read) = self.prompt("Have you read this book? (yes/no): ")? else {
            return Ok(Flow::Exit);
        };

        let patch = BookPatch {
            title: Some(new_title),
            author: Some(new_author),
            year: Some(new_year),
            genre: Some(new_genre),
            read: parse_read_answer(&new_read),
        };
        match self.store.update(&title, patch) {
            Ok(_) => writeln!(self.output, "{}", "Book updated successfully.".green())?,
            Err(e) if e.is_not_found() => writeln!(self.output, "{}", "Book not found.".red())?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn display_books(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "{}", "\n--- Book Collection ---".cyan())?;
        let listings = self.store.list();
        if listings.is_empty() {
            writeln!(self.output, "{}", "No books in the collection.".yellow())?;
            return Ok(Flow::Continue);
        }
        for listing in &listings {
            writeln!(self.output, "{}", colored_row(listing))?;
        }
        Ok(Flow::Continue)
    }

    fn show_reading_progress(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "{}", "\n--- Reading Progress ---".cyan())?;
        let stats = self.store.reading_stats();
        let Some(pct) = stats.percentage_label() else {
            writeln!(self.output, "{}", render_stats(&stats).yellow())?;
            return Ok(Flow::Continue);
        };
        writeln!(self.output, "Total books: {}", stats.total)?;
        writeln!(self.output, "{}", format!("Books read: {}", stats.read).green())?;
        writeln!(self.output, "{}", format!("Reading progress: {pct}").blue())?;
        Ok(Flow::Continue)
    }

    fn exit(mut self) -> anyhow::Result<()> {
        match self.store.save() {
            Ok(()) => writeln!(self.output, "{}", "Library saved. Goodbye!".cyan())?,
            Err(e) => self.report(&e)?,
        }
        self.output.flush()?;
        Ok(())
    }

    // --- private ---

    /// プロンプトを表示して1行読む。EOFならNone。末尾の改行のみ除去する。
    fn prompt(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn report(&mut self, err: &AppError) -> anyhow::Result<()> {
        writeln!(self.output, "{}", format!("Error: {err}").red())?;
        Ok(())
    }
}

fn colored_row(listing: &Listing<'_>) -> String {
    let book = listing.book;
    let status = if book.is_read() {
        listing.status.to_string().green()
    } else {
        listing.status.to_string().magenta()
    };
    format!(
        "{}. {} by {} ({}) - {} - {}",
        listing.number,
        book.title(),
        book.author(),
        book.year(),
        book.genre(),
        status
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_answer_tokens() {
        assert_eq!(parse_read_answer("yes"), Some(true));
        assert_eq!(parse_read_answer(" YES "), Some(true));
        assert_eq!(parse_read_answer("No"), Some(false));
        assert_eq!(parse_read_answer(""), None);
        assert_eq!(parse_read_answer("y"), None);
        assert_eq!(parse_read_answer("true"), None);
    }

    #[test]
    fn stats_render_without_books() {
        let stats = ReadingStats { total: 0, read: 0 };
        assert_eq!(render_stats(&stats), "No books in the collection.");
    }
}
