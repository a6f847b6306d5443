//! Renderer module
//!
//! Builds the markdown of a directory index page: heading, folder blocks and
//! the image table.

/// Icon shown on every folder link
pub const FOLDER_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/64/148/148947.png";

const IMG_STYLE: &str = "max-width: 180; max-height: 180;";

/// Blank table cell used for the header row and row padding
const BLANK_CELL: &str = " ";

/// Markdown block linking to a subfolder's own index page
pub fn folder_block(name: &str, view_url: &str) -> String {
    format!(
        "[<img src=\"{FOLDER_ICON_URL}\" alt=\"Folder Icon\" style=\"{IMG_STYLE}\">]({view_url}/README.md)<br>**{name}**\n\n"
    )
}

/// Table cell rendering an image with its name and formatted size
pub fn image_tile(name: &str, raw_url: &str, size: &str) -> String {
    format!(
        "[<img src=\"{raw_url}\" alt=\"{name}\" style=\"{IMG_STYLE}\">]({raw_url})<br>**{name}**<br>{size}"
    )
}

/// Lay out pre-rendered cells in a markdown table with `columns` columns.
///
/// The header row is blank, and the last row is padded with blank cells.
pub fn create_table(cells: &[String], columns: usize) -> String {
    let columns = columns.max(1);
    let mut table = String::new();

    table.push_str(&table_row(vec![BLANK_CELL; columns]));
    table.push_str(&table_row(vec!["---"; columns]));

    for chunk in cells.chunks(columns) {
        let mut row: Vec<&str> = chunk.iter().map(String::as_str).collect();
        row.resize(columns, BLANK_CELL);
        table.push_str(&table_row(row));
    }

    table
}

fn table_row(cells: Vec<&str>) -> String {
    format!("| {} |\n", cells.join(" | "))
}

/// Incrementally assembled index page
#[derive(Debug, Default)]
pub struct Page {
    output: String,
}

impl Page {
    /// Start a page with a level-1 heading
    pub fn new(title: &str) -> Self {
        Self {
            output: format!("# {}\n\n", title),
        }
    }

    pub fn push_folder(&mut self, name: &str, view_url: &str) {
        self.output.push_str(&folder_block(name, view_url));
    }

    /// Append the image table; nothing is added when there are no tiles
    pub fn push_tiles(&mut self, tiles: &[String], columns: usize) {
        if !tiles.is_empty() {
            self.output.push_str(&create_table(tiles, columns));
        }
    }

    pub fn into_string(self) -> String {
        self.output
    }
}
