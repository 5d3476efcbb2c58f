use bookshelf_library::api::{Book, BookId};

pub const DEFAULT_COLUMNS: usize = 8;

/// Character budgets for the title line. A cell without a cover shows the
/// title in the cover slot, so it gets a shorter budget.
pub const TITLE_BUDGET_WITH_COVER: usize = 40;
pub const TITLE_BUDGET_NO_COVER: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum GridCell {
    /// Cover thumbnail plus title. The painting layer falls back to a
    /// placeholder glyph if the image fails to load.
    Cover {
        book_id: BookId,
        title: String,
        cover_image: String,
    },
    TitleOnly {
        book_id: BookId,
        title: String,
    },
    /// Entry with a missing title. Painted as a distinct error-styled cell
    /// so data corruption is visible instead of silently dropped.
    Malformed {
        book_id: BookId,
    },
}

impl GridCell {
    /// Click target of the cell; navigation is keyed by book id, never by
    /// the position inside a filtered view.
    pub fn book_id(&self) -> BookId {
        match self {
            GridCell::Cover { book_id, .. }
            | GridCell::TitleOnly { book_id, .. }
            | GridCell::Malformed { book_id } => *book_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridModel {
    /// Painted as a single full-width "no books" placeholder cell.
    Empty,
    Rows(Vec<Vec<GridCell>>),
}

/// Lays out books into rows of `columns` cells in input order; the final
/// row may be short. Pure function, no display surface involved.
pub fn layout(books: &[Book], columns: usize) -> GridModel {
    if books.is_empty() {
        return GridModel::Empty;
    }
    let columns = columns.max(1);
    let cells: Vec<GridCell> = books.iter().map(cell_for_book).collect();
    GridModel::Rows(cells.chunks(columns).map(|row| row.to_vec()).collect())
}

fn cell_for_book(book: &Book) -> GridCell {
    if !book.is_displayable() {
        return GridCell::Malformed { book_id: book.id };
    }
    match book
        .cover_image
        .as_deref()
        .filter(|url| !url.trim().is_empty())
    {
        Some(url) => GridCell::Cover {
            book_id: book.id,
            title: truncate_title(book.title.trim(), TITLE_BUDGET_WITH_COVER),
            cover_image: url.to_string(),
        },
        None => GridCell::TitleOnly {
            book_id: book.id,
            title: truncate_title(book.title.trim(), TITLE_BUDGET_NO_COVER),
        },
    }
}

/// Truncates by characters, appending an ellipsis when anything was cut.
pub fn truncate_title(title: &str, budget: usize) -> String {
    if title.chars().count() <= budget {
        return title.to_string();
    }
    let mut truncated: String = title.chars().take(budget).collect();
    truncated.push('…');
    truncated
}
