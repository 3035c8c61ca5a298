//! Hand-tuned entrance sequences for every section of the page.

use super::transition::{Pulse, Track, Transition};

const FADE_FAST: Transition = Transition::timing(250.0);
const FADE: Transition = Transition::timing(300.0);
const SLIDE: Transition = Transition::spring(20.0, 200.0);
const GROW: Transition = Transition::spring(18.0, 200.0);
const POP: Transition = Transition::spring(15.0, 200.0);

/// Sampled visual state of one animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
        }
    }
}

impl ElementStyle {
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.2}px, {:.2}px) scale({:.4});",
            self.opacity, self.translate_x, self.translate_y, self.scale
        )
    }
}

/// Tracks for one element plus the delay before they start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementMotion {
    pub delay_ms: f64,
    pub opacity: Option<Track>,
    pub translate_x: Option<Track>,
    pub translate_y: Option<Track>,
    pub scale: Option<Track>,
}

impl ElementMotion {
    pub const fn new() -> Self {
        Self {
            delay_ms: 0.0,
            opacity: None,
            translate_x: None,
            translate_y: None,
            scale: None,
        }
    }

    pub const fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn fade(mut self, transition: Transition) -> Self {
        self.opacity = Some(Track::new(0.0, 1.0, transition));
        self
    }

    pub const fn slide_x(mut self, distance: f64, transition: Transition) -> Self {
        self.translate_x = Some(Track::new(distance, 0.0, transition));
        self
    }

    pub const fn slide_y(mut self, distance: f64, transition: Transition) -> Self {
        self.translate_y = Some(Track::new(distance, 0.0, transition));
        self
    }

    pub const fn grow(mut self, from: f64, transition: Transition) -> Self {
        self.scale = Some(Track::new(from, 1.0, transition));
        self
    }

    fn tracks(&self) -> [(Option<&Track>, f64); 4] {
        [
            (self.opacity.as_ref(), 1.0),
            (self.translate_x.as_ref(), 0.0),
            (self.translate_y.as_ref(), 0.0),
            (self.scale.as_ref(), 1.0),
        ]
    }

    /// Style before the animation has been triggered.
    pub fn hidden(&self) -> ElementStyle {
        self.at(0.0)
    }

    /// Style `since_trigger_ms` after the owning section fired. Negative
    /// values (or anything inside the delay) give the hidden style.
    pub fn at(&self, since_trigger_ms: f64) -> ElementStyle {
        let elapsed = since_trigger_ms - self.delay_ms;
        let sample = |track: Option<&Track>, rest: f64| track.map_or(rest, |t| t.sample(elapsed));
        let [opacity, translate_x, translate_y, scale] = self.tracks().map(|(t, rest)| sample(t, rest));
        ElementStyle {
            opacity: opacity.clamp(0.0, 1.0),
            translate_x,
            translate_y,
            scale,
        }
    }

    /// Whole run length including the delay.
    pub fn total_ms(&self) -> f64 {
        self.tracks()
            .into_iter()
            .filter_map(|(t, _)| t.map(|t| t.transition.duration_ms()))
            .fold(0.0, f64::max)
            + self.delay_ms
    }
}

impl Default for ElementMotion {
    fn default() -> Self {
        Self::new()
    }
}

/// How start times spread over a group of siblings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stagger {
    List { base_ms: f64, per_item_ms: f64 },
    Grid { columns: usize, row_ms: f64, col_ms: f64 },
}

impl Stagger {
    pub fn delay_ms(&self, index: usize) -> f64 {
        match *self {
            Stagger::List {
                base_ms,
                per_item_ms,
            } => base_ms + index as f64 * per_item_ms,
            Stagger::Grid {
                columns,
                row_ms,
                col_ms,
            } => {
                let columns = columns.max(1);
                let (row, col) = (index / columns, index % columns);
                row as f64 * row_ms + col as f64 * col_ms
            }
        }
    }
}

/// Tailwind's `md` and `xl` min-widths, where the project grid gains a column.
pub const MD_MIN_WIDTH: f64 = 768.0;
pub const XL_MIN_WIDTH: f64 = 1280.0;

/// Columns of the project grid at a given viewport width. Must agree with
/// [`projects::GRID_CLASS`].
pub fn grid_columns(viewport_width: f64) -> usize {
    if viewport_width >= XL_MIN_WIDTH {
        3
    } else if viewport_width >= MD_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Title block shared by the skills, experience, projects and contact sections.
pub const SECTION_HEADER: ElementMotion = ElementMotion::new().fade(FADE).slide_y(20.0, SLIDE);

pub mod hero {
    use super::*;

    pub const BADGE: ElementMotion = ElementMotion::new().fade(FADE_FAST).grow(0.8, POP);
    pub const PROFILE: ElementMotion = ElementMotion::new().delay(50.0).fade(FADE).grow(0.8, POP);
    pub const TITLE: ElementMotion = ElementMotion::new().delay(100.0).fade(FADE).slide_y(20.0, SLIDE);
    pub const ROLE: ElementMotion = ElementMotion::new().delay(200.0).fade(FADE_FAST).grow(0.9, GROW);
    pub const DESCRIPTION: ElementMotion = ElementMotion::new().delay(300.0).fade(FADE);
    pub const BUTTONS: ElementMotion = ElementMotion::new()
        .delay(400.0)
        .fade(FADE_FAST)
        .slide_y(15.0, SLIDE);
    /// "Available" dot; runs from mount, ungated by visibility.
    pub const PULSE: Pulse = Pulse::new(1.0, 1.3, 800.0);
}

pub mod stats {
    use super::*;

    pub const CARDS: Stagger = Stagger::List {
        base_ms: 0.0,
        per_item_ms: 100.0,
    };

    pub fn card(index: usize) -> ElementMotion {
        ElementMotion::new()
            .delay(CARDS.delay_ms(index))
            .fade(FADE_FAST)
            .slide_y(30.0, SLIDE)
            .grow(0.9, GROW)
    }
}

pub mod skills {
    use super::*;

    pub const CATEGORIES: Stagger = Stagger::List {
        base_ms: 0.0,
        per_item_ms: 100.0,
    };
    const TAG_FADE: Transition = Transition::timing(200.0);
    const TAG_GROW: Transition = Transition::spring(18.0, 250.0);
    const TAG_SLIDE: Transition = Transition::spring(20.0, 250.0);

    pub fn category(index: usize) -> ElementMotion {
        ElementMotion::new()
            .delay(CATEGORIES.delay_ms(index))
            .fade(FADE)
            .slide_y(25.0, SLIDE)
            .grow(0.95, GROW)
    }

    pub fn tag(category_index: usize, index: usize) -> ElementMotion {
        let stagger = Stagger::List {
            base_ms: category_index as f64 * 80.0,
            per_item_ms: 25.0,
        };
        ElementMotion::new()
            .delay(stagger.delay_ms(index))
            .fade(TAG_FADE)
            .grow(0.7, TAG_GROW)
            .slide_x(-10.0, TAG_SLIDE)
    }
}

pub mod experience {
    use super::*;

    pub const CARDS: Stagger = Stagger::List {
        base_ms: 0.0,
        per_item_ms: 150.0,
    };

    pub fn card(index: usize) -> ElementMotion {
        ElementMotion::new()
            .delay(CARDS.delay_ms(index))
            .fade(FADE)
            .slide_x(-30.0, SLIDE)
            .grow(0.95, GROW)
    }
}

pub mod projects {
    use super::*;

    pub const GRID_CLASS: &str = "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3";

    pub fn cards(columns: usize) -> Stagger {
        Stagger::Grid {
            columns,
            row_ms: 80.0,
            col_ms: 60.0,
        }
    }

    pub fn card(index: usize, columns: usize) -> ElementMotion {
        ElementMotion::new()
            .delay(cards(columns).delay_ms(index))
            .fade(FADE_FAST)
            .slide_y(30.0, SLIDE)
            .grow(0.9, GROW)
    }
}

pub mod contact {
    use super::*;

    pub const ITEMS: Stagger = Stagger::List {
        base_ms: 0.0,
        per_item_ms: 80.0,
    };
    pub const FORM: ElementMotion = ElementMotion::new().delay(150.0).fade(FADE).grow(0.95, GROW);

    pub fn item(index: usize) -> ElementMotion {
        ElementMotion::new()
            .delay(ITEMS.delay_ms(index))
            .fade(FADE_FAST)
            .slide_x(-20.0, SLIDE)
            .grow(0.95, GROW)
    }
}

pub mod footer {
    use super::*;

    pub const BODY: ElementMotion = ElementMotion::new().delay(100.0).fade(FADE).slide_y(15.0, SLIDE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_style() {
        let style = stats::card(0).hidden();
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.translate_y, 30.0);
        assert_eq!(style.scale, 0.9);
        assert_eq!(style.translate_x, 0.0);

        let style = skills::tag(0, 0).hidden();
        assert_eq!(style.translate_x, -10.0);
        assert_eq!(style.scale, 0.7);
    }

    #[test]
    fn test_delay_holds_hidden_style() {
        let motion = experience::card(2);
        assert_eq!(motion.delay_ms, 300.0);
        assert_eq!(motion.at(299.0), motion.hidden());
        assert_ne!(motion.at(350.0), motion.hidden());
        // before the trigger as well
        assert_eq!(motion.at(-1000.0), motion.hidden());
    }

    #[test]
    fn test_settled_style() {
        for motion in [hero::BADGE, hero::BUTTONS, contact::FORM, footer::BODY, projects::card(4, 3)] {
            let style = motion.at(motion.total_ms() + 1.0);
            assert_eq!(style, ElementStyle::default());
            assert_eq!(motion.at(motion.total_ms() + 60_000.0), ElementStyle::default());
        }
    }

    #[test]
    fn test_description_only_fades() {
        let style = hero::DESCRIPTION.hidden();
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.scale, 1.0);
        assert_eq!(style.translate_y, 0.0);
        assert!(hero::DESCRIPTION.total_ms() == 600.0);
    }

    #[test]
    fn test_list_stagger() {
        assert_eq!(stats::card(0).delay_ms, 0.0);
        assert_eq!(stats::card(2).delay_ms, 200.0);
        assert_eq!(skills::category(3).delay_ms, 300.0);
        assert_eq!(skills::tag(2, 4).delay_ms, 260.0);
        assert_eq!(contact::item(3).delay_ms, 240.0);
    }

    #[test]
    fn test_grid_stagger_follows_column_count() {
        // three columns: index 4 is row 1, col 1
        assert_eq!(projects::card(4, 3).delay_ms, 140.0);
        // two columns: index 4 is row 2, col 0
        assert_eq!(projects::card(4, 2).delay_ms, 160.0);
        // one column degrades to a plain list of rows
        assert_eq!(projects::card(4, 1).delay_ms, 320.0);
        // zero columns is treated as one
        assert_eq!(projects::cards(0).delay_ms(4), 320.0);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(1440.0), 3);
        assert_eq!(grid_columns(1280.0), 3);
        assert_eq!(grid_columns(1250.0), 2);
        assert_eq!(grid_columns(1024.0), 2);
        assert_eq!(grid_columns(780.0), 2);
        assert_eq!(grid_columns(767.0), 1);
        assert_eq!(grid_columns(375.0), 1);
    }

    /// Column count the project grid's CSS lays out at `width`.
    fn css_columns(width: f64) -> usize {
        projects::GRID_CLASS
            .split_whitespace()
            .filter_map(|class| {
                let (min_width, cols) = match class.split_once(':') {
                    Some(("md", cols)) => (MD_MIN_WIDTH, cols),
                    Some(("xl", cols)) => (XL_MIN_WIDTH, cols),
                    Some(_) => return None,
                    None => (0.0, class),
                };
                let cols = cols.strip_prefix("grid-cols-")?.parse::<usize>().ok()?;
                (width >= min_width).then_some((min_width, cols))
            })
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map_or(1, |(_, cols)| cols)
    }

    #[test]
    fn test_grid_columns_match_css() {
        for width in [320.0, 767.0, 768.0, 780.0, 800.0, 1200.0, 1250.0, 1279.0, 1280.0, 1920.0] {
            assert_eq!(grid_columns(width), css_columns(width), "width {width}");
        }
        // card 3 sits at row 1, col 1 on two columns and opens row 1 on three
        assert_eq!(projects::card(3, grid_columns(780.0)).delay_ms, 140.0);
        assert_eq!(projects::card(3, grid_columns(1250.0)).delay_ms, 140.0);
        assert_eq!(projects::card(3, grid_columns(1300.0)).delay_ms, 80.0);
    }

    #[test]
    fn test_css() {
        let css = ElementStyle::default().to_css();
        assert_eq!(
            css,
            "opacity: 1.000; transform: translate(0.00px, 0.00px) scale(1.0000);"
        );
    }
}
