//! Display container holding the rendered project cards.
//!
//! # Invariants
//! - `redraw` replaces every card; previous visibility state is discarded.
//! - Filtering only flips visibility; it never adds or removes cards.

use crate::model::project::{Project, ProjectId};
use crate::render::card::render_card;
use crate::viewport::Viewport;

/// Filter token that shows every card.
pub const FILTER_ALL: &str = "all";

/// One card as currently present in the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub project_id: ProjectId,
    pub html: String,
    /// Lowercased technology text matched by `apply_filter`.
    pub technology_text: String,
    pub visible: bool,
}

/// Render target for project cards.
#[derive(Debug, Clone, Default)]
pub struct CardContainer {
    cards: Vec<RenderedCard>,
    active_filter: Option<String>,
    layout_refreshes: u64,
}

impl CardContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the container and renders every project in order.
    ///
    /// All cards start visible, matching a freshly populated page.
    pub fn redraw(&mut self, projects: &[Project], viewport: Viewport) {
        self.cards = projects
            .iter()
            .enumerate()
            .map(|(index, project)| RenderedCard {
                project_id: project.id,
                html: render_card(project, index, viewport),
                technology_text: project.technology_text(),
                visible: true,
            })
            .collect();
        self.active_filter = None;
        self.signal_layout_refresh();
    }

    /// Shows cards whose technology text contains `token` (case-insensitive).
    ///
    /// `"all"` shows every card. Returns the number of visible cards.
    pub fn apply_filter(&mut self, token: &str) -> usize {
        let needle = token.trim().to_lowercase();
        let show_all = needle == FILTER_ALL;
        for card in &mut self.cards {
            card.visible = show_all || card.technology_text.contains(needle.as_str());
        }
        self.active_filter = if show_all { None } else { Some(needle) };
        self.visible_count()
    }

    /// Records a re-layout request for the scroll-animation collaborator.
    pub fn signal_layout_refresh(&mut self) {
        self.layout_refreshes += 1;
    }

    pub fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &RenderedCard> {
        self.cards.iter().filter(|card| card.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_cards().count()
    }

    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    pub fn layout_refreshes(&self) -> u64 {
        self.layout_refreshes
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Markup of the visible cards, in order.
    pub fn to_html(&self) -> String {
        self.visible_cards()
            .map(|card| card.html.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
