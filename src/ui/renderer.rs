//! Plain-text rendering of a view model.
//!
//! Used by the bundled binary. Layout, top to bottom:
//!
//! ```text
//! header      collection, query, sort, stats
//! body        one line per card | empty state | loading | error
//! footer      load-more hint
//! ```

use super::helpers::truncate;
use super::viewmodel::{DisplayEntry, ViewModel};
use crate::app::modes::{Phase, SortKey, SortOrder, ViewMode};
use std::fmt::Write as _;

const TITLE_WIDTH: usize = 40;

/// Renders `vm` as a block of text lines.
#[must_use]
pub fn render_text(vm: &ViewModel) -> String {
    let mut out = String::new();

    render_header(&mut out, vm);

    match vm.phase {
        Phase::Idle => out.push_str("  (nothing loaded yet)\n"),
        Phase::Loading if vm.visible_entries.is_empty() => out.push_str("  Loading...\n"),
        Phase::Error => {
            let message = vm.error_message.as_deref().unwrap_or("Something went wrong");
            let _ = writeln!(out, "  ! {message}  (type 'retry')");
        }
        _ => {}
    }

    if let Some(empty) = &vm.empty_state {
        let _ = writeln!(out, "  {}", empty.message);
        let _ = writeln!(out, "  {}", empty.subtitle);
    }

    for card in &vm.visible_entries {
        render_card(&mut out, card);
    }

    if vm.is_loading() && !vm.visible_entries.is_empty() {
        out.push_str("  Loading more...\n");
    }
    if vm.can_load_more {
        out.push_str("  -- type 'next' to load more --\n");
    }

    out
}

fn render_header(out: &mut String, vm: &ViewModel) {
    let view = match vm.view_mode {
        ViewMode::All => "all",
        ViewMode::FavoritesOnly => "favorites",
    };
    let key = match vm.sort.key {
        SortKey::Title => "title",
        SortKey::Rating => "rating",
        SortKey::ReleaseDate => "date",
    };
    let order = match vm.sort.order {
        SortOrder::Ascending => "asc",
        SortOrder::Descending => "desc",
    };

    let _ = write!(out, "== {} [{view}] sort: {key} {order}", vm.collection.label());
    if let Some(query) = &vm.query {
        let _ = write!(out, " search: \"{query}\"");
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "   shown: {}  favorites: {}  average: {:.1}",
        vm.stats.displayed, vm.stats.favorites, vm.stats.average_rating
    );
}

fn render_card(out: &mut String, card: &DisplayEntry) {
    let marker = if card.is_favorite { '*' } else { ' ' };
    let _ = writeln!(
        out,
        "{marker} {:<5} {:>8} {:<width$} {:>4}  {}",
        card.entry.kind.as_str(),
        card.entry.id,
        truncate(&card.entry.title, TITLE_WIDTH),
        card.rating_label,
        card.release_label,
        width = TITLE_WIDTH,
    );
}
