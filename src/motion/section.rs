use serde::{Deserialize, Serialize};

/// Portion of the viewport a section has to travel into before it reveals.
pub const REVEAL_FRACTION: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Hero,
    Stats,
    Skills,
    Experience,
    Projects,
    Contact,
    Footer,
}

impl SectionKey {
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Hero,
        SectionKey::Stats,
        SectionKey::Skills,
        SectionKey::Experience,
        SectionKey::Projects,
        SectionKey::Contact,
        SectionKey::Footer,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Page position as a multiple of the viewport height, `None` for the
    /// hero which is on screen from the start.
    const fn viewport_fraction(self) -> Option<f64> {
        match self {
            SectionKey::Hero => None,
            SectionKey::Stats => Some(0.6),
            SectionKey::Skills => Some(1.0),
            SectionKey::Experience => Some(1.8),
            SectionKey::Projects => Some(2.8),
            SectionKey::Contact => Some(4.2),
            SectionKey::Footer => Some(5.2),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::Stats => "stats",
            SectionKey::Skills => "skills",
            SectionKey::Experience => "experience",
            SectionKey::Projects => "projects",
            SectionKey::Contact => "contact",
            SectionKey::Footer => "footer",
        }
    }
}

/// Pixel offsets of each section, sized from the viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionOffsetTable {
    viewport_height: f64,
    offsets: [Option<f64>; 7],
}

impl SectionOffsetTable {
    pub fn new(viewport_height: f64) -> Self {
        let viewport_height = if viewport_height.is_finite() {
            viewport_height.max(0.0)
        } else {
            0.0
        };
        let mut offsets = [None; 7];
        for key in SectionKey::ALL {
            offsets[key.index()] = key.viewport_fraction().map(|f| f * viewport_height);
        }
        Self {
            viewport_height,
            offsets,
        }
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn offset(&self, key: SectionKey) -> Option<f64> {
        self.offsets[key.index()]
    }

    /// Scroll offset at which `key` reveals.
    pub fn threshold(&self, key: SectionKey) -> Option<f64> {
        self.offset(key)
            .map(|offset| offset - REVEAL_FRACTION * self.viewport_height)
    }
}

/// Snapshot of which sections have been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityMap {
    flags: [bool; 7],
}

impl Default for VisibilityMap {
    fn default() -> Self {
        let mut flags = [false; 7];
        flags[SectionKey::Hero.index()] = true;
        Self { flags }
    }
}

impl VisibilityMap {
    pub fn is_visible(&self, key: SectionKey) -> bool {
        self.flags[key.index()]
    }

    /// Flag a section's presenter should follow. Stats ride along with the
    /// hero and the footer reveals together with the contact section.
    pub fn presenter_flag(&self, key: SectionKey) -> bool {
        match key {
            SectionKey::Stats => self.is_visible(SectionKey::Stats) || self.is_visible(SectionKey::Hero),
            SectionKey::Footer => {
                self.is_visible(SectionKey::Footer) || self.is_visible(SectionKey::Contact)
            }
            key => self.is_visible(key),
        }
    }

    /// Map after scrolling to `offset`, or `None` when nothing new reveals.
    /// Flags are only ever raised.
    pub fn advance(&self, table: &SectionOffsetTable, offset: f64) -> Option<Self> {
        if !offset.is_finite() {
            return None;
        }
        let offset = offset.max(0.0);
        let mut next = *self;
        for key in SectionKey::ALL {
            if let Some(threshold) = table.threshold(key) {
                if offset >= threshold {
                    next.flags[key.index()] = true;
                }
            }
        }
        (next != *self).then_some(next)
    }
}

pub struct VisibilityTracker {
    table: SectionOffsetTable,
    current: VisibilityMap,
}

impl VisibilityTracker {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            table: SectionOffsetTable::new(viewport_height),
            current: VisibilityMap::default(),
        }
    }

    pub fn current(&self) -> VisibilityMap {
        self.current
    }

    pub fn table(&self) -> &SectionOffsetTable {
        &self.table
    }

    /// Returns the new map only when at least one section changed.
    pub fn update(&mut self, scroll_offset: f64) -> Option<VisibilityMap> {
        let next = self.current.advance(&self.table, scroll_offset)?;
        for key in SectionKey::ALL {
            if next.is_visible(key) && !self.current.is_visible(key) {
                log::debug!("section {} revealed at offset {scroll_offset}", key.id());
            }
        }
        self.current = next;
        Some(next)
    }

    /// Rebuild the offset table for a new viewport height. Revealed
    /// sections stay revealed.
    pub fn resize(&mut self, viewport_height: f64) {
        self.table = SectionOffsetTable::new(viewport_height);
    }
}
