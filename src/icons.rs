//! Icon loading and terminal rendering.
//!
//! Icons come from the render service as PNGs. They are decoded with the
//! `image` crate, scaled down to a small pixel grid and drawn with upper
//! half-block characters: each terminal cell shows two vertically stacked
//! pixels, the top one as foreground and the bottom one as background.

use image::imageops::FilterType;
use image::ImageFormat;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::error::NetworkError;
use crate::traits::{Headers, HttpClient};

/// Width of a rendered icon in cells (and pixels).
pub const ICON_COLUMNS: u32 = 8;

/// Height of a rendered icon in pixels; two pixels per text line.
pub const ICON_PIXEL_ROWS: u32 = 8;

/// Alpha below which a pixel is treated as transparent.
const ALPHA_THRESHOLD: u8 = 64;

const HALF_BLOCK: &str = "\u{2580}";

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Icon download failed: {0}")]
    Network(#[from] NetworkError),

    #[error("Icon could not be decoded: {0}")]
    Decode(String),
}

/// A decoded, downscaled RGBA icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Icon {
    /// Decode a PNG and scale it to the icon grid.
    pub fn from_png(bytes: &[u8]) -> Result<Self, IconError> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|e| IconError::Decode(e.to_string()))?;
        let scaled = image
            .resize_exact(ICON_COLUMNS, ICON_PIXEL_ROWS, FilterType::Triangle)
            .to_rgba8();

        Ok(Self {
            width: scaled.width(),
            height: scaled.height(),
            pixels: scaled.pixels().map(|p| p.0).collect(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes held by the pixel buffer; what the cache budgets against.
    pub fn byte_size(&self) -> usize {
        self.pixels.len() * 4
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        if y >= self.height {
            return Color::Reset;
        }
        let [r, g, b, a] = self.pixels[(y * self.width + x) as usize];
        if a < ALPHA_THRESHOLD {
            Color::Reset
        } else {
            Color::Rgb(r, g, b)
        }
    }

    /// Render as `ceil(height / 2)` lines of `width` half-block cells.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.height)
            .step_by(2)
            .map(|y| {
                let spans: Vec<Span<'static>> = (0..self.width)
                    .map(|x| {
                        let style = Style::default()
                            .fg(self.color_at(x, y))
                            .bg(self.color_at(x, y + 1));
                        Span::styled(HALF_BLOCK, style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

/// Download and decode an icon.
pub async fn fetch_icon(http: &dyn HttpClient, url: &str) -> Result<Icon, IconError> {
    let response = http.get(url, &Headers::new()).await?.error_for_status()?;
    let icon = Icon::from_png(&response.body)?;
    tracing::debug!("Loaded icon {} ({} bytes)", url, response.body.len());
    Ok(icon)
}

struct CacheEntry {
    icon: Arc<Icon>,
    last_used: u64,
}

/// Decoded icons keyed by URL, bounded by total pixel bytes.
///
/// When an insert would exceed the budget the least recently used entries are
/// evicted first. An icon larger than the whole budget is not cached.
pub struct IconCache {
    entries: HashMap<String, CacheEntry>,
    budget: usize,
    used: usize,
    tick: u64,
}

impl IconCache {
    pub fn new(budget: usize) -> Self {
        Self {
            entries: HashMap::new(),
            budget,
            used: 0,
            tick: 0,
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Look up an icon, marking it as recently used.
    pub fn get(&mut self, url: &str) -> Option<Arc<Icon>> {
        let tick = self.next_tick();
        self.entries.get_mut(url).map(|entry| {
            entry.last_used = tick;
            Arc::clone(&entry.icon)
        })
    }

    /// Look up an icon without touching its recency.
    pub fn peek(&self, url: &str) -> Option<Arc<Icon>> {
        self.entries.get(url).map(|entry| Arc::clone(&entry.icon))
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Insert an icon and return the shared handle.
    pub fn insert(&mut self, url: &str, icon: Icon) -> Arc<Icon> {
        let icon = Arc::new(icon);
        let size = icon.byte_size();
        if size > self.budget {
            tracing::debug!("Icon {} exceeds cache budget, not cached", url);
            return icon;
        }

        if let Some(old) = self.entries.remove(url) {
            self.used -= old.icon.byte_size();
        }
        while self.used + size > self.budget {
            if !self.evict_oldest() {
                break;
            }
        }

        let tick = self.next_tick();
        self.entries.insert(
            url.to_string(),
            CacheEntry {
                icon: Arc::clone(&icon),
                last_used: tick,
            },
        );
        self.used += size;
        icon
    }

    fn evict_oldest(&mut self) -> bool {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(url, _)| url.clone());

        match oldest {
            Some(url) => {
                if let Some(entry) = self.entries.remove(&url) {
                    self.used -= entry.icon.byte_size();
                    tracing::trace!("Evicted icon {}", url);
                }
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bytes currently held.
    pub fn used_bytes(&self) -> usize {
        self.used
    }
}

impl std::fmt::Debug for IconCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconCache")
            .field("entries", &self.entries.len())
            .field("used", &self.used)
            .field("budget", &self.budget)
            .finish()
    }
}
