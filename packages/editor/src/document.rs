//! # Site Document
//!
//! The normalized document model: an ordered collection of named pages, each
//! owning an ordered list of content blocks. Block-list order is the sole
//! source of document/render order — there is no z-index or priority field.
//!
//! A block is owned by exactly one page at a time and carries a free-form
//! nested override tree (`serde_json::Value`); the tree has no fixed schema
//! because each block type defines its own data. All override edits go
//! through the path-mutation engine (see `mutations`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Every document starts with this page
pub const DEFAULT_PAGE: &str = "home";

/// One block instance on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: Uuid,

    /// Block-type tag (e.g. `B0201` for a hero, `B0901` for a spacer)
    #[serde(rename = "type")]
    pub block_type: String,

    /// Consumer-defined nested data overriding inherited DNA defaults
    #[serde(rename = "localOverrides")]
    pub local_overrides: Value,

    /// Display toggle; hidden blocks keep their position and data
    #[serde(rename = "isVisible")]
    pub is_visible: bool,
}

impl ContentBlock {
    /// New visible block with a fresh id
    pub fn new(block_type: impl Into<String>, local_overrides: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            block_type: block_type.into(),
            local_overrides,
            is_visible: true,
        }
    }
}

/// Direction for single-step block reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Pages and the current-page pointer.
///
/// Page order is insertion order (user-visible in page listings); exactly one
/// page is current at a time. The pointer may dangle after a history restore
/// removes its page — reads then see an empty block list, and the next
/// block insertion recreates the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDocument {
    pub pages: IndexMap<String, Vec<ContentBlock>>,
    pub current_page: String,
}

impl Default for SiteDocument {
    fn default() -> Self {
        let mut pages = IndexMap::new();
        pages.insert(DEFAULT_PAGE.to_string(), Vec::new());
        Self { pages, current_page: DEFAULT_PAGE.to_string() }
    }
}

impl SiteDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_page(&self, name: &str) -> bool {
        self.pages.contains_key(name)
    }

    /// Blocks on the current page, in document order
    pub fn current_blocks(&self) -> &[ContentBlock] {
        self.pages.get(&self.current_page).map_or(&[], Vec::as_slice)
    }

    /// Mutable block list for the current page, creating the page entry if
    /// the pointer dangles
    pub fn current_blocks_mut(&mut self) -> &mut Vec<ContentBlock> {
        self.pages.entry(self.current_page.clone()).or_default()
    }

    pub fn find_block(&self, id: Uuid) -> Option<&ContentBlock> {
        self.current_blocks().iter().find(|b| b.id == id)
    }

    pub fn find_block_mut(&mut self, id: Uuid) -> Option<&mut ContentBlock> {
        self.pages.get_mut(&self.current_page)?.iter_mut().find(|b| b.id == id)
    }

    /// Switch the current page; unknown names are a no-op.
    /// Returns whether the pointer moved.
    pub fn set_current_page(&mut self, name: &str) -> bool {
        if !self.has_page(name) {
            return false;
        }
        self.current_page = name.to_string();
        true
    }

    /// Insert an empty page; idempotent. Returns whether a page was created.
    pub fn add_page(&mut self, name: &str) -> bool {
        if self.has_page(name) {
            return false;
        }
        self.pages.insert(name.to_string(), Vec::new());
        true
    }

    /// Remove a block from the current page. Returns whether it was present.
    pub fn remove_block(&mut self, id: Uuid) -> bool {
        let Some(blocks) = self.pages.get_mut(&self.current_page) else {
            return false;
        };
        let before = blocks.len();
        blocks.retain(|b| b.id != id);
        blocks.len() != before
    }

    /// Swap a block with its neighbor in the given direction. Boundary moves
    /// leave the order unchanged. Returns whether the order changed.
    pub fn move_block(&mut self, id: Uuid, direction: MoveDirection) -> bool {
        let Some(blocks) = self.pages.get_mut(&self.current_page) else {
            return false;
        };
        let Some(index) = blocks.iter().position(|b| b.id == id) else {
            return false;
        };

        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => (index + 1 < blocks.len()).then_some(index + 1),
        };

        match target {
            Some(target) => {
                blocks.swap(index, target);
                true
            }
            None => false,
        }
    }
}
