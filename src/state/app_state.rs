//! Central `AppState` container.

use ratatui::widgets::TableState;

use crate::logic::filter::FilterController;
use crate::logic::menu::{NavLink, NavMenuController};
use crate::logic::search::SearchController;
use crate::logic::sort::TableSortController;
use crate::sources::{SearchIndex, Snapshot};
use crate::state::rows::RowSet;
use crate::state::types::{ColumnHeader, FilterCategory};
use crate::theme::{PreferenceStore, ThemeController};

/// Rectangle in terminal cells: `(x, y, width, height)`.
pub type CellRect = (u16, u16, u16, u16);

/// Theme controller over a type-erased preference store.
pub type AppTheme = ThemeController<Box<dyn PreferenceStore + Send>>;

/// Global application state shared by the event and UI layers.
///
/// Controllers own their own state; the fields below only add what the
/// terminal shell needs on top: selection, cursors and the hit-test
/// rectangles recorded by the last render.
#[derive(Debug)]
pub struct AppState {
    /// Table rows with their visibility.
    pub rows: RowSet,
    /// Theme preference and applied palette.
    pub theme: AppTheme,
    /// Navigation menu.
    pub menu: NavMenuController,
    /// Search bar.
    pub search: SearchController,
    /// Filter buttons.
    pub filter: FilterController,
    /// Column sorting.
    pub sorter: TableSortController,
    /// Loaded snapshot metadata and raw records.
    pub snapshot: Snapshot,
    /// Optional search index shown in the details line.
    pub search_index: SearchIndex,
    /// Ticker of the highlighted row.
    pub selected: Option<String>,
    /// Scroll state of the table widget.
    pub table_state: TableState,
    /// Column the keyboard header cursor points at.
    pub header_cursor: usize,
    /// Highlighted link while the menu panel is open.
    pub menu_cursor: usize,
    /// Whether the help overlay is shown.
    pub help_visible: bool,
    /// One-line status message shown in the footer.
    pub status: Option<String>,
    /// Where the rows came from, for the header.
    pub data_label: String,

    /// Menu trigger button.
    pub menu_button_rect: Option<CellRect>,
    /// Open menu panel.
    pub menu_panel_rect: Option<CellRect>,
    /// Links inside the open menu panel.
    pub menu_link_rects: Vec<(NavLink, CellRect)>,
    /// Theme toggle button.
    pub theme_button_rect: Option<CellRect>,
    /// Search trigger button.
    pub search_button_rect: Option<CellRect>,
    /// Filter buttons.
    pub filter_rects: Vec<(FilterCategory, CellRect)>,
    /// Column headers by column index.
    pub header_rects: Vec<(usize, CellRect)>,
    /// Table body (rows only, without the header line).
    pub table_body_rect: Option<CellRect>,
}

impl AppState {
    /// What: Build the state for a loaded snapshot.
    ///
    /// Inputs:
    /// - `snapshot`: Rows and records to show
    /// - `headers`: Column headers for the sorter
    /// - `theme`: Theme controller, already resolved
    /// - `search_index`: Optional search index (may be empty)
    ///
    /// Output:
    /// - State with every row visible and the first row selected.
    #[must_use]
    pub fn new(
        snapshot: Snapshot,
        headers: Vec<ColumnHeader>,
        theme: AppTheme,
        search_index: SearchIndex,
    ) -> Self {
        let rows = RowSet::new(snapshot.rows.clone());
        let selected = rows.rows().first().map(|r| r.row.ticker().to_string());
        let data_label = snapshot
            .date
            .as_ref()
            .map_or_else(|| "geen datum".to_string(), Clone::clone);
        let mut table_state = TableState::default();
        table_state.select(selected.as_ref().map(|_| 0));
        Self {
            rows,
            theme,
            menu: NavMenuController::new(),
            search: SearchController::new(),
            filter: FilterController::new(),
            sorter: TableSortController::new(headers),
            snapshot,
            search_index,
            selected,
            table_state,
            header_cursor: 0,
            menu_cursor: 0,
            help_visible: false,
            status: None,
            data_label,
            menu_button_rect: None,
            menu_panel_rect: None,
            menu_link_rects: Vec::new(),
            theme_button_rect: None,
            search_button_rect: None,
            filter_rects: Vec::new(),
            header_rects: Vec::new(),
            table_body_rect: None,
        }
    }

    /// Set the footer status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    /// Whether `(x, y)` lies inside `rect`.
    #[must_use]
    pub const fn hit(rect: Option<CellRect>, x: u16, y: u16) -> bool {
        match rect {
            Some((rx, ry, rw, rh)) => {
                x >= rx
                    && x < rx.saturating_add(rw)
                    && y >= ry
                    && y < ry.saturating_add(rh)
            }
            None => false,
        }
    }
}
